/*!
 * Sources of substitute decisions.
 *
 * Batch mode always takes the top-ranked candidate and never invents a
 * substitute. Terminal mode asks a human.
 */

use crate::errors::DecisionError;
use crate::prompt::Prompter;

/// Supplies the choices the decider cannot make on its own
pub trait DecisionSource: Send {
    /// Index of the chosen candidate for `word`
    fn choose(&mut self, word: &str, candidates: &[String]) -> Result<usize, DecisionError>;

    /// Free-text substitute for a word without candidates, `None` to leave it untranslated
    fn supply(&mut self, word: &str) -> Result<Option<String>, DecisionError>;
}

/// Non-interactive decisions
#[derive(Debug, Default, Clone, Copy)]
pub struct BatchDecisions;

impl DecisionSource for BatchDecisions {
    fn choose(&mut self, _word: &str, _candidates: &[String]) -> Result<usize, DecisionError> {
        Ok(0)
    }

    fn supply(&mut self, _word: &str) -> Result<Option<String>, DecisionError> {
        Ok(None)
    }
}

/// Decisions typed by a human
#[derive(Debug)]
pub struct TerminalDecisions {
    prompter: Prompter,
}

impl TerminalDecisions {
    pub fn new(prompter: Prompter) -> Self {
        Self { prompter }
    }

    /// Decisions read from stdin
    pub fn stdio() -> Self {
        Self::new(Prompter::stdio())
    }
}

impl DecisionSource for TerminalDecisions {
    fn choose(&mut self, word: &str, candidates: &[String]) -> Result<usize, DecisionError> {
        self.prompter.say(&format!("\nSubstitutes for '{}':", word))?;
        for (i, candidate) in candidates.iter().enumerate() {
            self.prompter.say(&format!("  {}: {}", i, candidate))?;
        }

        let answer = self.prompter.ask("Choose a substitute by index: ")?;
        answer
            .trim()
            .parse::<usize>()
            .map_err(|_| DecisionError::InvalidInput(format!("'{}' is not an index", answer.trim())))
    }

    fn supply(&mut self, word: &str) -> Result<Option<String>, DecisionError> {
        let answer = self
            .prompter
            .ask(&format!("\nNo wordbook entry for '{}'. Type a substitute (empty to skip): ", word))?;

        let answer = answer.trim();
        if answer.is_empty() {
            Ok(None)
        } else {
            Ok(Some(answer.to_string()))
        }
    }
}
