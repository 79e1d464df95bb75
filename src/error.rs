//! Error types for sqlfrag.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SqlfragError {
    /// The requested operation has no template for this dialect.
    #[error(
        "Unsupported dialect '{dialect}' for operation '{operation}'. Expected: postgres, snowflake, or bigquery"
    )]
    UnsupportedDialect { dialect: String, operation: String },

    /// Data-quality check requested with an unrecognized mode.
    #[error("Unsupported validation type: '{0}'. Expected: not_null, unique, or accepted_values")]
    UnsupportedValidationType(String),

    /// Operation name outside the supported set.
    #[error("Unknown operation: '{}'{}", .operation, fmt_suggestion(.suggestion))]
    UnknownOperation {
        operation: String,
        suggestion: Option<String>,
    },

    /// Too few positional arguments for the operation.
    #[error("Operation '{operation}' expects {expected} argument(s), got {got}")]
    MissingArgument {
        operation: String,
        expected: usize,
        got: usize,
    },

    /// The accepted_values validation has no default allow-list.
    #[error("Validation 'accepted_values' requires a caller-supplied allow-list of values")]
    MissingAcceptedValues,
}

fn fmt_suggestion(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(". Did you mean '{}'?", s),
        None => String::new(),
    }
}

impl SqlfragError {
    /// Create an unsupported-dialect error naming both halves of the request.
    pub fn unsupported_dialect(dialect: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::UnsupportedDialect {
            dialect: dialect.into(),
            operation: operation.into(),
        }
    }

    /// Create an unknown-operation error with an optional fuzzy-match suggestion.
    pub fn unknown_operation(operation: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::UnknownOperation {
            operation: operation.into(),
            suggestion,
        }
    }
}

/// Result type alias for sqlfrag operations.
pub type SqlfragResult<T> = Result<T, SqlfragError>;
