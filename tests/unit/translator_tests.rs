/*!
 * Tests for whole-text translation
 */

use anglicize::errors::TranslationError;
use anglicize::translation::{BatchDecisions, TextTranslator, TranslationStats};
use anglicize::wordbook::Wordbook;
use crate::common::{ScriptedDecisions, StubLookup};

fn wordbook() -> Wordbook {
    vec![
        ("liberty", vec!["freedom".to_string()]),
        ("nation", vec!["folk".to_string(), "theed".to_string()]),
    ]
    .into_iter()
    .collect()
}

fn lookup() -> StubLookup {
    StubLookup::new()
        .with("Four", "english")
        .with("nation", "anglo-french")
        .with("Liberty", "french")
        .with_index("conceived", "conceive", "latin")
        .with("brought", "german")
}

#[tokio::test]
async fn test_translate_shouldSubstituteForeignWordsOnly() {
    let mut translator = TextTranslator::default();
    let mut lookup = lookup();

    let output = translator
        .translate("Four score, a new nation; conceived in Liberty.", &wordbook(), &mut lookup, &mut BatchDecisions)
        .await
        .unwrap();

    assert_eq!(output, "Four score a new folk **conceived** in freedom");
    assert_eq!(
        *translator.stats(),
        TranslationStats {
            tokens: 8,
            foreign: 3,
            substituted: 2,
            untranslated: 1,
            failed: 0,
        }
    );
}

#[tokio::test]
async fn test_translate_nonForeignOrigins_shouldPassThrough() {
    let mut translator = TextTranslator::default();
    let mut lookup = lookup();
    let mut decisions = ScriptedDecisions::default();

    let output = translator
        .translate("brought forth upon", &wordbook(), &mut lookup, &mut decisions)
        .await
        .unwrap();

    assert_eq!(output, "brought forth upon");
    assert!(decisions.asked.is_empty());
    assert_eq!(lookup.calls, vec!["brought", "forth", "upon"]);
}

#[tokio::test]
async fn test_translate_repeatedWord_shouldDecideOnce() {
    let mut translator = TextTranslator::default();
    let mut lookup = lookup();
    let mut decisions = ScriptedDecisions::choosing(&[1]);

    let output = translator
        .translate("nation nation", &wordbook(), &mut lookup, &mut decisions)
        .await
        .unwrap();

    assert_eq!(output, "theed theed");
    assert_eq!(decisions.asked, vec!["nation"]);
}

#[tokio::test]
async fn test_translate_failedDecision_shouldContinueWithPlaceholder() {
    let mut translator = TextTranslator::default();
    let mut lookup = lookup();
    let mut decisions = ScriptedDecisions::choosing(&[9]);

    let output = translator
        .translate("a new nation", &wordbook(), &mut lookup, &mut decisions)
        .await
        .unwrap();

    assert_eq!(output, "a new ****");
    assert_eq!(translator.stats().failed, 1);
}

#[tokio::test]
async fn test_translate_lookupFailure_shouldAbort() {
    let mut translator = TextTranslator::default();
    let mut lookup = lookup().failing_on("score");

    let result = translator
        .translate("Four score", &wordbook(), &mut lookup, &mut BatchDecisions)
        .await;

    assert!(matches!(result, Err(TranslationError::Provider(_))));
}

#[tokio::test]
async fn test_translate_customMarkers_shouldRetarget() {
    let mut translator = TextTranslator::new(vec!["german".to_string()]);
    let mut lookup = lookup();

    let output = translator
        .translate("brought Liberty", &wordbook(), &mut lookup, &mut BatchDecisions)
        .await
        .unwrap();

    assert_eq!(output, "**brought** Liberty");
}

#[tokio::test]
async fn test_translate_emptyText_shouldBeEmpty() {
    let mut translator = TextTranslator::default();
    let mut lookup = lookup();

    let output = translator
        .translate(" ... ", &wordbook(), &mut lookup, &mut BatchDecisions)
        .await
        .unwrap();

    assert_eq!(output, "");
    assert!(lookup.calls.is_empty());
}
