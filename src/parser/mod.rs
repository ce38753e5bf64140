//! External log parser boundary.
//!
//! The parse endpoint delegates all log parsing to an independently-maintained
//! command-line tool. This module defines the narrow interface to that tool
//! ([`LogParser`]), the process-invocation implementation ([`CommandParser`]),
//! and the classification of its stdout into success or failure.
//!
//! The tool signals failure by convention: stdout beginning with the literal
//! `Error`. Exit status is not part of the contract and is never consulted.

mod command;

pub use command::CommandParser;

use async_trait::async_trait;

use crate::config::PARSER_ERROR_PREFIX;

/// Failure to run the external parser at all.
///
/// Distinct from a parse failure reported by the tool itself: those arrive as
/// `Error`-prefixed stdout and are classified by [`ParseOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Failed to run log parser: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Log parser did not finish within {secs}s")]
    Timeout { secs: u64 },
}

/// Interface to the external log parser.
///
/// Implemented by [`CommandParser`] for production and by fakes in tests so
/// that classification and response formatting can be exercised without
/// spawning a real process.
#[async_trait]
pub trait LogParser: Send + Sync {
    /// Parse the log identified by `id` and return the tool's raw stdout.
    async fn parse_log(&self, id: i64) -> Result<String, ParserError>;
}

/// Classified parser output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Stdout is taken to be an already-serialized JSON document.
    /// Forwarded to the caller byte-for-byte, never re-parsed.
    Parsed(String),
    /// Stdout began with the `Error` prefix; holds the raw text verbatim.
    Failed(String),
}

impl ParseOutcome {
    /// Classify raw parser stdout by its leading `Error` prefix.
    ///
    /// Everything else is a success, including empty output, malformed JSON,
    /// and lowercase `error` text.
    pub fn classify(output: String) -> Self {
        if output.starts_with(PARSER_ERROR_PREFIX) {
            ParseOutcome::Failed(output)
        } else {
            ParseOutcome::Parsed(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_prefix_is_a_failure() {
        let outcome = ParseOutcome::classify("Error: data too short".to_string());
        assert_eq!(
            outcome,
            ParseOutcome::Failed("Error: data too short".to_string())
        );
    }

    #[test]
    fn bare_prefix_with_suffix_is_a_failure() {
        assert_eq!(
            ParseOutcome::classify("Errorxyz".to_string()),
            ParseOutcome::Failed("Errorxyz".to_string())
        );
    }

    #[test]
    fn json_document_is_a_success() {
        assert_eq!(
            ParseOutcome::classify(r#"{"a":1}"#.to_string()),
            ParseOutcome::Parsed(r#"{"a":1}"#.to_string())
        );
    }

    #[test]
    fn empty_output_is_a_success() {
        assert_eq!(
            ParseOutcome::classify(String::new()),
            ParseOutcome::Parsed(String::new())
        );
    }

    #[test]
    fn prefix_check_is_case_sensitive_and_exact() {
        // Only the first five characters matter, and only exactly `Error`.
        assert_eq!(
            ParseOutcome::classify("error: lowercase".to_string()),
            ParseOutcome::Parsed("error: lowercase".to_string())
        );
        assert_eq!(
            ParseOutcome::classify("Erro".to_string()),
            ParseOutcome::Parsed("Erro".to_string())
        );
        assert_eq!(
            ParseOutcome::classify(" Error: padded".to_string()),
            ParseOutcome::Parsed(" Error: padded".to_string())
        );
    }
}
