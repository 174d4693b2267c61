use thiserror::Error;

/// Classifies batch input errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputErrorKind {
    /// A count line is not a non-negative integer
    BadCount,
    /// The input ended before the declared number of lines was read
    Truncated,
}

/// Domain checker error types
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Invalid input at line {line}: {message}")]
    InvalidInput {
        kind: InputErrorKind,
        line: usize,
        message: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CheckerError {
    pub(crate) fn bad_count(line: usize, message: impl Into<String>) -> Self {
        CheckerError::InvalidInput {
            kind: InputErrorKind::BadCount,
            line,
            message: message.into(),
        }
    }

    pub(crate) fn truncated(line: usize, message: impl Into<String>) -> Self {
        CheckerError::InvalidInput {
            kind: InputErrorKind::Truncated,
            line,
            message: message.into(),
        }
    }

    /// Input error kind, if this is an input error.
    pub fn input_kind(&self) -> Option<InputErrorKind> {
        match self {
            CheckerError::InvalidInput { kind, .. } => Some(*kind),
            CheckerError::IoError(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckerError>;
