//! Submission intake service.

use std::sync::Arc;

use serde_json::json;
use url::Url;

use crate::domain::entities::{NewSubmission, Submission};
use crate::domain::repositories::SubmissionRepository;
use crate::error::AppError;

/// Service for validating and storing participant submissions.
///
/// Owns the intake cleanup: names and links are trimmed, empty links are
/// dropped, and every remaining link must parse as an http(s) URL. The
/// allocator downstream deliberately re-checks none of this.
pub struct SubmissionService<S: SubmissionRepository> {
    repository: Arc<S>,
}

impl<S: SubmissionRepository> SubmissionService<S> {
    /// Creates a new submission service.
    pub fn new(repository: Arc<S>) -> Self {
        Self { repository }
    }

    /// Validates and stores one submission.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - The trimmed name is empty
    /// - No non-empty links remain after trimming
    /// - Any link is not a valid http(s) URL
    ///
    /// Returns [`AppError::Internal`] when the store cannot be written.
    pub async fn submit(&self, name: String, links: Vec<String>) -> Result<Submission, AppError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::bad_request(
                "Submitter name must not be empty",
                json!({}),
            ));
        }

        let links: Vec<String> = links
            .into_iter()
            .map(|link| link.trim().to_string())
            .filter(|link| !link.is_empty())
            .collect();

        if links.is_empty() {
            return Err(AppError::bad_request(
                "At least one link is required",
                json!({}),
            ));
        }

        for link in &links {
            validate_link(link)?;
        }

        self.repository.append(NewSubmission { name, links }).await
    }

    /// Returns all stored submissions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store cannot be read.
    pub async fn list(&self) -> Result<Vec<Submission>, AppError> {
        self.repository.list().await
    }

    /// Counts stored submissions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store cannot be read.
    pub async fn count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}

/// Longest accepted link, matching common browser URL limits.
const MAX_LINK_LENGTH: usize = 2048;

/// Checks that a link is a well-formed http(s) URL of reasonable length.
fn validate_link(link: &str) -> Result<(), AppError> {
    if link.len() > MAX_LINK_LENGTH {
        return Err(AppError::bad_request(
            "Link is too long",
            json!({ "max_length": MAX_LINK_LENGTH, "provided_length": link.len() }),
        ));
    }

    let parsed = Url::parse(link).map_err(|e| {
        AppError::bad_request(
            "Invalid link",
            json!({ "link": link, "reason": e.to_string() }),
        )
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::bad_request(
            "Links must use http or https",
            json!({ "link": link, "scheme": scheme }),
        )),
    }
}
