/*!
 * Error types for the anglicize application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors that can occur when fetching pages from a remote site
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The request could not be sent or its body could not be read
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The page did not have the structure we extract from
    #[error("Failed to parse page: {0}")]
    ParseError(String),

    /// The site answered with a non-success status
    #[error("Failed to reach {url}, received {status_code} : {reason}\n{body}")]
    ApiError {
        /// Requested URL
        url: String,
        /// HTTP status code
        status_code: u16,
        /// Canonical reason phrase for the status
        reason: String,
        /// Response body as returned by the site
        body: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),
}

impl ProviderError {
    /// Status code carried by the error, if the site answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// Errors raised while choosing a substitute for a single word
#[derive(Error, Debug)]
pub enum DecisionError {
    /// Human input could not be interpreted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A candidate index outside the offered list was chosen
    #[error("Choice {index} is out of range ({available} candidates)")]
    ChoiceOutOfRange {
        /// Chosen index
        index: usize,
        /// Number of offered candidates
        available: usize,
    },

    /// Reading input failed
    #[error("Input error: {0}")]
    Input(String),
}

impl From<std::io::Error> for DecisionError {
    fn from(error: std::io::Error) -> Self {
        Self::Input(error.to_string())
    }
}

/// Errors that abort a whole-text translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Origin resolution failed on both the direct and the search path
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error while deciding on a substitute
    #[error("Decision error: {0}")]
    Decision(#[from] DecisionError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
