/*!
 * Tests for error display and conversions
 */

use anglicize::errors::{AppError, DecisionError, ProviderError, TranslationError};
use std::io;

#[test]
fn test_apiError_display_shouldCarryStatusReasonAndBody() {
    let err = ProviderError::ApiError {
        url: "https://etym.test/word/zzz".to_string(),
        status_code: 404,
        reason: "Not Found".to_string(),
        body: "<h1>gone</h1>".to_string(),
    };

    assert_eq!(
        err.to_string(),
        "Failed to reach https://etym.test/word/zzz, received 404 : Not Found\n<h1>gone</h1>"
    );
    assert_eq!(err.status_code(), Some(404));
}

#[test]
fn test_statusCode_transportErrors_shouldBeNone() {
    assert_eq!(ProviderError::ConnectionError("refused".to_string()).status_code(), None);
    assert_eq!(ProviderError::ParseError("no section".to_string()).status_code(), None);
}

#[test]
fn test_decisionError_fromIo_shouldBecomeInputError() {
    let err: DecisionError = io::Error::new(io::ErrorKind::UnexpectedEof, "closed").into();

    assert!(matches!(err, DecisionError::Input(ref msg) if msg.contains("closed")));
}

#[test]
fn test_choiceOutOfRange_display_shouldNameBounds() {
    let err = DecisionError::ChoiceOutOfRange { index: 5, available: 2 };
    assert_eq!(err.to_string(), "Choice 5 is out of range (2 candidates)");
}

#[test]
fn test_appError_conversions_shouldWrapSources() {
    let provider = ProviderError::RequestFailed("timeout".to_string());
    let translation: TranslationError = provider.into();
    let app: AppError = translation.into();
    assert!(matches!(app, AppError::Translation(TranslationError::Provider(_))));

    let app: AppError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
    assert!(matches!(app, AppError::File(_)));

    let app: AppError = anyhow::anyhow!("boom").into();
    assert_eq!(app.to_string(), "Unknown error: boom");
}
