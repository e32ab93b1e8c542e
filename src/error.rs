//! Error types for registry and maximizer operations.

use thiserror::Error;

/// Errors surfaced by [`MaxRegistry`](crate::MaxRegistry).
///
/// Every failure is reported before the registry is touched, so a failed call
/// leaves all trackers as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A required argument was missing.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Which argument was missing.
        name: &'static str,
        /// Why it was needed.
        reason: String,
    },

    /// A value or stored tracker did not have the descriptor's type.
    #[error("type mismatch: expected a value of type `{expected}`")]
    TypeMismatch {
        /// Name of the type the descriptor denotes.
        expected: &'static str,
    },
}

impl RegistryError {
    pub(crate) fn type_mismatch<T: ?Sized>() -> Self {
        Self::TypeMismatch {
            expected: std::any::type_name::<T>(),
        }
    }
}

/// Errors surfaced by [`require_max_by`](crate::find_max::require_max_by).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MaxError {
    #[error("cannot take the maximum of an empty sequence")]
    EmptySequence,
}

pub type Result<T, E = RegistryError> = std::result::Result<T, E>;
