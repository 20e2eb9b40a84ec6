/// Error types for the select widget
use thiserror::Error;

/// Main error type for select operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectError {
    /// No container element with the given id exists in the document
    #[error("No container element with id '{0}' in the document")]
    MissingContainer(String),

    /// The requested value is not in the configured option set
    #[error("No option with value '{0}'")]
    UnknownOption(String),

    /// Two configured options share the same value
    #[error("Duplicate option value '{0}'")]
    DuplicateValue(String),

    /// A configured option has an empty value (reserved for the placeholder)
    #[error("Empty option value is reserved for the placeholder")]
    ReservedValue,

    /// A DOM operation failed
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Type alias for Results using SelectError
pub type Result<T> = std::result::Result<T, SelectError>;
