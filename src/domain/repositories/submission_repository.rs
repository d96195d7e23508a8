//! Repository trait for submission intake records.

use crate::domain::entities::{NewSubmission, Submission};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for stored submissions.
///
/// Submissions are append-only flat records: created once from validated
/// intake data, read wholesale by the calendar generator, never updated.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::FileSubmissionRepository`] - flat JSON file
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Appends a new submission and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store cannot be read or written.
    async fn append(&self, submission: NewSubmission) -> Result<Submission, AppError>;

    /// Returns all stored submissions in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store cannot be read.
    async fn list(&self) -> Result<Vec<Submission>, AppError>;

    /// Counts stored submissions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store cannot be read.
    async fn count(&self) -> Result<usize, AppError>;
}
