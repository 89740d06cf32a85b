/*!
 * Tests for per-word substitute decisions
 */

use anglicize::errors::DecisionError;
use anglicize::prompt::Prompter;
use anglicize::translation::{
    BatchDecisions, DecisionSource, TerminalDecisions, TranslationDecider, ERROR_PLACEHOLDER,
};
use anglicize::wordbook::Wordbook;
use std::io::{self, Cursor};
use crate::common::ScriptedDecisions;

fn wordbook() -> Wordbook {
    vec![
        ("liberty", vec!["freedom".to_string(), "unbinding".to_string()]),
        ("nation", vec!["folk".to_string()]),
    ]
    .into_iter()
    .collect()
}

fn terminal(input: &str) -> TerminalDecisions {
    TerminalDecisions::new(Prompter::new(
        Box::new(Cursor::new(input.to_string().into_bytes())),
        Box::new(io::sink()),
    ))
}

#[test]
fn test_decide_wordbookEntry_batchShouldTakeFirstCandidate() {
    let mut decider = TranslationDecider::new();

    let substitute = decider.decide("liberty", &wordbook(), &mut BatchDecisions).unwrap();

    assert_eq!(substitute, "freedom");
}

#[test]
fn test_decide_wordbookLookup_shouldIgnoreCase() {
    let mut decider = TranslationDecider::new();

    let substitute = decider.decide("Liberty", &wordbook(), &mut BatchDecisions).unwrap();

    assert_eq!(substitute, "freedom");
}

#[test]
fn test_decide_memoized_shouldNotConsultWordbookAgain() {
    let mut decider = TranslationDecider::new();
    decider.decide("Liberty", &wordbook(), &mut BatchDecisions).unwrap();

    let mut decisions = ScriptedDecisions::default();
    let substitute = decider.decide("Liberty", &Wordbook::new(), &mut decisions).unwrap();

    assert_eq!(substitute, "freedom");
    assert!(decisions.asked.is_empty());
    assert_eq!(decider.cache().stats().0, 1);
}

#[test]
fn test_decide_unknownWordInBatch_shouldUsePlaceholder() {
    let mut decider = TranslationDecider::new();

    let substitute = decider.decide("conceived", &wordbook(), &mut BatchDecisions).unwrap();

    assert_eq!(substitute, "**conceived**");
    assert_eq!(decider.cache().len(), 1);
}

#[test]
fn test_decide_scriptedChoice_shouldPickIndexedCandidate() {
    let mut decider = TranslationDecider::new();
    let mut decisions = ScriptedDecisions::choosing(&[1]);

    let substitute = decider.decide("liberty", &wordbook(), &mut decisions).unwrap();

    assert_eq!(substitute, "unbinding");
    assert_eq!(decisions.asked, vec!["liberty"]);
}

#[test]
fn test_decide_choiceOutOfRange_shouldFailWithoutMemoizing() {
    let mut decider = TranslationDecider::new();
    let mut decisions = ScriptedDecisions::choosing(&[3]);

    let err = decider.decide("nation", &wordbook(), &mut decisions).unwrap_err();

    assert!(matches!(err, DecisionError::ChoiceOutOfRange { index: 3, available: 1 }));
    assert!(decider.cache().is_empty());
}

#[test]
fn test_translateWord_failedDecision_shouldYieldErrorPlaceholder() {
    let mut decider = TranslationDecider::new();
    let mut decisions = ScriptedDecisions::choosing(&[7, 0]);

    let first = decider.translate_word("nation", &wordbook(), &mut decisions);
    let second = decider.translate_word("nation", &wordbook(), &mut decisions);

    assert_eq!(first, ERROR_PLACEHOLDER);
    assert_eq!(second, "folk");
}

#[test]
fn test_decide_suppliedSubstitute_shouldBeRemembered() {
    let mut decider = TranslationDecider::new();
    let mut decisions = ScriptedDecisions::supplying(&[Some("thought up")]);

    let first = decider.decide("conceived", &wordbook(), &mut decisions).unwrap();
    let second = decider.decide("conceived", &wordbook(), &mut decisions).unwrap();

    assert_eq!(first, "thought up");
    assert_eq!(second, "thought up");
    assert_eq!(decisions.asked.len(), 1);
}

#[test]
fn test_terminalDecisions_shouldParseTypedAnswers() {
    let mut decisions = terminal("1\n\n  folkdom \n");
    let candidates = vec!["freedom".to_string(), "unbinding".to_string()];

    assert_eq!(decisions.choose("liberty", &candidates).unwrap(), 1);
    assert_eq!(decisions.supply("conceived").unwrap(), None);
    assert_eq!(decisions.supply("nation").unwrap(), Some("folkdom".to_string()));
}

#[test]
fn test_terminalDecisions_nonNumericChoice_shouldBeInvalidInput() {
    let mut decisions = terminal("first\n");

    let err = decisions.choose("liberty", &["freedom".to_string()]).unwrap_err();

    assert!(matches!(err, DecisionError::InvalidInput(_)));
}

#[test]
fn test_terminalDecisions_closedInput_shouldBeInputError() {
    let mut decisions = terminal("");

    let err = decisions.supply("liberty").unwrap_err();

    assert!(matches!(err, DecisionError::Input(_)));
}
