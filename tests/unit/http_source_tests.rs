/*!
 * Tests for the reqwest page source against a local listener
 */

use anglicize::errors::ProviderError;
use anglicize::providers::{HttpSource, PageSource};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve one canned response, returning the base URL and the received request head
async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let response = format!(
        "{}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
        String::from_utf8_lossy(&request).to_string()
    });

    (base_url, handle)
}

fn source() -> HttpSource {
    HttpSource::new(5, "anglicize-test")
}

#[tokio::test]
async fn test_fetch_notFound_shouldCarryStatusReasonAndBody() {
    let (base_url, server) = serve_once("HTTP/1.1 404 Not Found", "<p>no such word</p>").await;

    let err = source()
        .fetch(&format!("{}/word/zzz", base_url), &[])
        .await
        .unwrap_err();
    server.await.unwrap();

    match err {
        ProviderError::ApiError { url, status_code, reason, body } => {
            assert!(url.ends_with("/word/zzz"));
            assert_eq!(status_code, 404);
            assert_eq!(reason, "Not Found");
            assert_eq!(body, "<p>no such word</p>");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_serverError_shouldUseCanonicalReason() {
    let (base_url, server) = serve_once("HTTP/1.1 503 Service Unavailable", "busy").await;

    let err = source().fetch(&format!("{}/search", base_url), &[]).await.unwrap_err();
    server.await.unwrap();

    assert_eq!(err.status_code(), Some(503));
    assert!(err.to_string().contains("503 : Service Unavailable\nbusy"));
}

#[tokio::test]
async fn test_fetch_withQuery_shouldAppendPairsAndReturnBody() {
    let (base_url, server) = serve_once("HTTP/1.1 200 OK", "<section>results</section>").await;

    let body = source()
        .fetch(&format!("{}/search", base_url), &[("q", "nation")])
        .await
        .unwrap();
    let request = server.await.unwrap();

    assert_eq!(body, "<section>results</section>");
    assert!(request.starts_with("GET /search?q=nation HTTP/1.1"));
    assert!(request.to_lowercase().contains("user-agent: anglicize-test"));
}

#[tokio::test]
async fn test_fetch_queryNeedingEscapes_shouldEncodeValue() {
    let (base_url, server) = serve_once("HTTP/1.1 200 OK", "ok").await;

    source()
        .fetch(&format!("{}/search", base_url), &[("q", "anglo french")])
        .await
        .unwrap();
    let request = server.await.unwrap();

    assert!(request.starts_with("GET /search?q=anglo+french HTTP/1.1"));
}

#[tokio::test]
async fn test_fetch_closedPort_shouldBeConnectionError() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = source().fetch(&format!("http://{}/word/nation", addr), &[]).await.unwrap_err();

    assert!(matches!(err, ProviderError::ConnectionError(_)));
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn test_fetch_invalidUrl_shouldFailBeforeSending() {
    let err = source().fetch("not a url", &[]).await.unwrap_err();

    assert!(matches!(err, ProviderError::RequestFailed(_)));
}
