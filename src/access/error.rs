//! Error types for snapshot and registry validation.

/// Result alias for fallible access-layer operations.
pub type AccessResult<T> = Result<T, AccessError>;

/// Caller contract violations detected by the validation surface.
///
/// Evaluation itself is total; these errors only come out of the explicit
/// `validate` entry points so callers can reject malformed input before it
/// reaches the matcher or resolver.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AccessError {
    /// An allow/deny list or a visibility rule contains an empty pattern.
    EmptyPattern { list: String },
    /// Two registry items share the same id.
    DuplicateItemId { id: String },
    /// A registry item has an empty id.
    EmptyItemId,
}

impl std::fmt::Display for AccessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessError::EmptyPattern { list } => {
                write!(f, "empty permission pattern in {list}")
            }
            AccessError::DuplicateItemId { id } => {
                write!(f, "duplicate sidebar item id: {id}")
            }
            AccessError::EmptyItemId => write!(f, "sidebar item with empty id"),
        }
    }
}

impl std::error::Error for AccessError {}
