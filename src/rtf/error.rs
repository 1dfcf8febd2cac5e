//! Error types for RTF parsing.

use super::token::TokenSnapshot;
use thiserror::Error;

/// Result type for RTF operations.
pub type RtfResult<T> = Result<T, RtfError>;

/// RTF parsing errors.
#[derive(Error, Debug)]
pub enum RtfError {
    /// The underlying byte source failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed structure (missing brace, missing required field, misuse of
    /// the token pushback slot)
    #[error(transparent)]
    Structural(Box<StructuralError>),
}

impl RtfError {
    /// Structural error details, if this is one.
    pub fn as_structural(&self) -> Option<&StructuralError> {
        match self {
            RtfError::Structural(err) => Some(err),
            RtfError::Io(_) => None,
        }
    }
}

/// Position and lexical context of a structural failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("RTF error at line {line}, column {column}: {message} (last token: {token})")]
pub struct StructuralError {
    pub line: usize,
    pub column: usize,
    /// The token being processed when the failure was detected
    pub token: TokenSnapshot,
    pub message: String,
}

impl From<StructuralError> for RtfError {
    fn from(err: StructuralError) -> Self {
        RtfError::Structural(Box::new(err))
    }
}
