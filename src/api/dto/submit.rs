//! DTOs for the submission intake endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to submit a name plus a list of media links.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    /// Display name of the participant.
    #[validate(length(min = 1, max = 60, message = "Name must be 1-60 characters"))]
    pub name: String,

    /// Candidate links for the calendar. Whether a link is a well-formed
    /// http(s) URL is checked by the service layer after trimming.
    #[validate(length(min = 1, max = 50, message = "Provide 1-50 links"))]
    pub links: Vec<String>,
}

/// Response confirming a stored submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub name: String,
    pub accepted_links: usize,
    pub submitted_at: DateTime<Utc>,
}
