//! Flat-file implementation of the submission repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::domain::entities::{NewSubmission, Submission};
use crate::domain::repositories::SubmissionRepository;
use crate::error::AppError;

/// Stores submissions as a JSON array in a single flat file.
///
/// Appends are read-modify-write under an internal lock; the file is swapped
/// in via a temp-file rename so a crashed write never leaves a truncated
/// store behind. A missing file reads as an empty store.
pub struct FileSubmissionRepository {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileSubmissionRepository {
    /// Creates a repository backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn read_all(&self) -> Result<Vec<Submission>, AppError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(store_error("read", &self.path, &e)),
        };

        serde_json::from_slice(&bytes)
            .map_err(|e| store_error("parse", &self.path, &e))
    }

    async fn write_all(&self, submissions: &[Submission]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| store_error("prepare", &self.path, &e))?;
        }

        let bytes = serde_json::to_vec_pretty(submissions)
            .map_err(|e| store_error("serialize", &self.path, &e))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|e| store_error("write", &tmp, &e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| store_error("rename", &self.path, &e))
    }
}

#[async_trait]
impl SubmissionRepository for FileSubmissionRepository {
    async fn append(&self, submission: NewSubmission) -> Result<Submission, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut submissions = self.read_all().await?;
        let stored = Submission::new(submission.name, submission.links, Utc::now());
        submissions.push(stored.clone());

        self.write_all(&submissions).await?;

        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Submission>, AppError> {
        self.read_all().await
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.read_all().await?.len())
    }
}

fn store_error(action: &str, path: &Path, e: &dyn std::fmt::Display) -> AppError {
    AppError::internal(
        format!("Failed to {action} submission store"),
        json!({ "path": path.display().to_string(), "reason": e.to_string() }),
    )
}
