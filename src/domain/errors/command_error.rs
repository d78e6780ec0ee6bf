//! Command-line quoting grammar errors.

use thiserror::Error;

/// Parse error variants for the command-line quoting grammar.
#[derive(Debug, Error, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum CommandParseError {
    #[error("unbalanced double quotes in command text")]
    UnbalancedQuotes,

    #[error("empty quoted segment in command text")]
    EmptyQuotedSegment,

    #[error("free text is not allowed after a quoted segment")]
    UnexpectedTrailingText,

    #[error("at most two quoted segments (keywords and caption) are allowed")]
    TooManyQuotedSegments,
}

impl CommandParseError {
    /// Stable tag for log correlation.
    #[must_use]
    pub const fn source_tag(&self) -> &'static str {
        "parser"
    }
}
