//! Flat-file implementation of the schedule repository.

use async_trait::async_trait;
use serde_json::json;
use std::path::{Path, PathBuf};

use crate::domain::entities::Schedule;
use crate::domain::repositories::ScheduleRepository;
use crate::error::AppError;

/// Stores the generated schedule as a single JSON file.
///
/// `replace` writes to a temp file and renames it over the store, so readers
/// only ever observe a complete schedule. There is no partial update path.
pub struct FileScheduleRepository {
    path: PathBuf,
}

impl FileScheduleRepository {
    /// Creates a repository backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ScheduleRepository for FileScheduleRepository {
    async fn load(&self) -> Result<Option<Schedule>, AppError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(store_error("read", &self.path, &e)),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| store_error("parse", &self.path, &e))
    }

    async fn replace(&self, schedule: &Schedule) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| store_error("prepare", &self.path, &e))?;
        }

        let bytes = serde_json::to_vec_pretty(schedule)
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

fn store_error(action: &str, path: &Path, e: &dyn std::fmt::Display) -> AppError {
    AppError::internal(
        format!("Failed to {action} schedule store"),
        json!({ "path": path.display().to_string(), "reason": e.to_string() }),
    )
}
