/*!
 * Tests for wordbook scraping
 */

use anglicize::providers::MockSource;
use anglicize::wordbook::{parse_wordbook_rows, Wordbook, WordbookBuilder};
use crate::common::{self, wordbook_config, wordbook_page, wordbook_url};

/// A source serving an empty table for every letter except the given pages
fn wordbook_source(pages: &[(char, String)]) -> MockSource {
    let mut source = MockSource::new();
    for letter in 'A'..='Z' {
        let body = pages
            .iter()
            .find(|(l, _)| *l == letter)
            .map(|(_, body)| body.clone())
            .unwrap_or_else(|| wordbook_page(&[]));
        source = source.with_page(wordbook_url(letter), body);
    }
    source
}

#[test]
fn test_parseRows_shouldSkipHeaderAndSplitCandidates() {
    let html = wordbook_page(&[
        ("Liberty", "n", "freedom; freedom-right, unbinding"),
        ("Nation", "n", "folk: theed"),
    ]);

    let rows = parse_wordbook_rows(&html, &wordbook_config());

    assert_eq!(
        rows,
        vec![
            (
                "liberty".to_string(),
                vec!["freedom".to_string(), "freedom-right".to_string(), "unbinding".to_string()]
            ),
            ("nation".to_string(), vec!["folk".to_string(), "theed".to_string()]),
        ]
    );
}

#[test]
fn test_parseRows_sentinelCandidate_shouldOmitRow() {
    let html = wordbook_page(&[("abbey", "n", "-"), ("able", "adj", "handy")]);

    let rows = parse_wordbook_rows(&html, &wordbook_config());

    assert_eq!(rows, vec![("able".to_string(), vec!["handy".to_string()])]);
}

#[test]
fn test_parseRows_shortRows_shouldBeSkipped() {
    let html = "<table>\
        <tr><th>English</th><th>Kind</th><th>Anglish</th></tr>\
        <tr><td><b>abbey</b></td><td>minster</td></tr>\
        <tr><td>able</td><td>adj</td><td>handy, deft</td></tr>\
        </table>";

    let rows = parse_wordbook_rows(html, &wordbook_config());

    assert_eq!(rows, vec![("able".to_string(), vec!["handy".to_string(), "deft".to_string()])]);
}

#[test]
fn test_parseRows_boldHeadword_shouldIgnoreAnnotations() {
    let html = "<table>\
        <tr><th>English</th><th>Kind</th><th>Anglish</th></tr>\
        <tr><td><b>Abandon</b> (to give up)</td><td>v</td><td>forsake</td></tr>\
        </table>";

    let rows = parse_wordbook_rows(html, &wordbook_config());

    assert_eq!(rows, vec![("abandon".to_string(), vec!["forsake".to_string()])]);
}

#[tokio::test]
async fn test_build_shouldMergeEveryLetterPage() {
    common::init_logging();
    let source = wordbook_source(&[
        ('L', wordbook_page(&[("liberty", "n", "freedom")])),
        ('N', wordbook_page(&[("nation", "n", "folk; theed"), ("nature", "n", "-")])),
    ]);

    let wordbook = WordbookBuilder::new(source.clone(), wordbook_config()).build().await.unwrap();

    assert_eq!(source.request_count(), 26);
    assert_eq!(source.requests()[0], wordbook_url('A'));
    assert_eq!(wordbook.len(), 2);
    assert_eq!(wordbook.candidates("Liberty"), Some(&["freedom".to_string()][..]));
    assert!(wordbook.contains("nation"));
    assert!(!wordbook.contains("nature"));
}

#[tokio::test]
async fn test_build_duplicateHeadword_laterPageShouldWin() {
    let source = wordbook_source(&[
        ('C', wordbook_page(&[("colour", "n", "hue")])),
        ('K', wordbook_page(&[("colour", "n", "blee")])),
    ]);

    let wordbook = WordbookBuilder::new(source, wordbook_config()).build().await.unwrap();

    assert_eq!(wordbook.candidates("colour"), Some(&["blee".to_string()][..]));
}

#[tokio::test]
async fn test_build_missingPage_shouldFail() {
    let source = MockSource::new().with_page(wordbook_url('A'), wordbook_page(&[]));

    let result = WordbookBuilder::new(source.clone(), wordbook_config()).build().await;

    assert!(result.is_err());
    assert_eq!(source.request_count(), 2);
}

#[test]
fn test_saveThenLoad_shouldRestoreEntries() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = temp_dir.path().join("wordbook.json");
    let wordbook: Wordbook = vec![
        ("Liberty", vec!["freedom".to_string()]),
        ("nation", vec!["folk".to_string(), "theed".to_string()]),
    ]
    .into_iter()
    .collect();

    wordbook.save(&path)?;
    let loaded = Wordbook::load(&path)?;

    assert_eq!(loaded, wordbook);
    assert_eq!(loaded.candidates("LIBERTY"), Some(&["freedom".to_string()][..]));
    Ok(())
}
