//! Errors surfaced by registry operations.

use thiserror::Error;

/// Failures the menu reports back to the operator. Lookups that come up empty
/// are recoverable and leave every collection untouched; storage failures carry
/// the `anyhow` chain from the store so the innermost cause can be shown.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Student {0} not found.")]
    StudentNotFound(String),

    #[error("Student {email} or course {course_name} not found.")]
    StudentOrCourseNotFound { email: String, course_name: String },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl RegistryError {
    /// Returns `true` for lookups that failed, as opposed to I/O problems.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::StudentNotFound(_) | RegistryError::StudentOrCourseNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
