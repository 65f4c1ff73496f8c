//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// `OpenAI` API error with status context
    #[error("OpenAI API error: {message}")]
    OpenAi {
        /// Human-readable error description.
        message: String,
        /// HTTP status code, if from an HTTP response.
        status: Option<u16>,
        /// Actionable suggestion for resolving the error.
        hint: Option<&'static str>,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Parsing error (PRD input or model response)
    #[error("Parse error in {file:?}: {message}")]
    Parse {
        /// File that failed to parse, if known.
        file: Option<std::path::PathBuf>,
        /// Description of the parse failure.
        message: String,
    },

    /// Presentation store error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create an `OpenAI` error without status context
    pub fn openai(message: impl Into<String>) -> Self {
        Self::OpenAi {
            message: message.into(),
            status: None,
            hint: None,
        }
    }

    /// Create an `OpenAI` error with HTTP status
    pub fn openai_status(message: impl Into<String>, status: u16) -> Self {
        let hint = match status {
            401 => Some("Check the OPENAI_API_KEY environment variable"),
            403 => Some("Your API key may lack access to the requested model"),
            404 => Some("The requested model or endpoint was not found"),
            429 => Some("Rate limited - wait a moment and try again"),
            500..=599 => Some("OpenAI server error - try again later"),
            _ => None,
        };
        Self::OpenAi {
            message: message.into(),
            status: Some(status),
            hint,
        }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with file context
    pub fn parse(message: impl Into<String>, file: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse { file: None, message: e.to_string() }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn openai_status_provides_hints() {
        let err = Error::openai_status("Unauthorized", 401);
        match err {
            Error::OpenAi { hint: Some(h), .. } => {
                assert!(h.contains("OPENAI_API_KEY"));
            }
            _ => panic!("Expected OpenAi error with hint"),
        }
    }

    #[test]
    fn openai_status_without_hint() {
        let err = Error::openai_status("Teapot", 418);
        match err {
            Error::OpenAi { hint: None, status: Some(418), .. } => {}
            _ => panic!("Expected OpenAi error without hint"),
        }
    }
}
