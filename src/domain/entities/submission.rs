//! Submission entity representing one participant's contributed links.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored submission: a participant name plus the media links they handed in.
///
/// Created once from validated intake data and immutable thereafter. The
/// allocator consumes submissions wholesale when the calendar is generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub links: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    /// Creates a new Submission instance.
    pub fn new(name: String, links: Vec<String>, submitted_at: DateTime<Utc>) -> Self {
        Self {
            name,
            links,
            submitted_at,
        }
    }

    /// Number of candidate links this submitter contributed.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}

/// Input data for storing a new submission.
///
/// Fields are already trimmed and non-empty by the time this is constructed;
/// the service layer owns that cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub name: String,
    pub links: Vec<String>,
}
