//! Repository trait for the generated calendar schedule.

use crate::domain::entities::Schedule;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the persisted schedule.
///
/// The schedule is immutable once written: readers see either the previous
/// complete schedule or the next one, never a partially updated state. There
/// is intentionally no per-day update operation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Loads the current schedule, or `None` when none has been generated yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store exists but cannot be
    /// read or parsed.
    async fn load(&self) -> Result<Option<Schedule>, AppError>;

    /// Replaces the stored schedule with a new complete one.
    ///
    /// The swap is atomic: a concurrent [`Self::load`] never observes a
    /// half-written schedule.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store cannot be written.
    async fn replace(&self, schedule: &Schedule) -> Result<(), AppError>;
}
