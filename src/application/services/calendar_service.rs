//! Calendar read service applying the date gate.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::gate::{self, GatedView};
use crate::domain::repositories::ScheduleRepository;

/// Service producing the client-visible, date-gated calendar.
///
/// The caller supplies "today"; this service never reads the clock itself.
/// Any failure to load the schedule degrades to a fully locked view rather
/// than an error, so unrevealed content cannot leak through a broken store.
pub struct CalendarService<R: ScheduleRepository> {
    repository: Arc<R>,
    target_month0: u32,
    calendar_days: u32,
}

impl<R: ScheduleRepository> CalendarService<R> {
    /// Creates a calendar service gating on the given 0-indexed month.
    pub fn new(repository: Arc<R>, target_month0: u32, calendar_days: u32) -> Self {
        Self {
            repository,
            target_month0,
            calendar_days,
        }
    }

    /// Returns the gated view of the current schedule as of `today`.
    pub async fn gated_view(&self, today: NaiveDate) -> GatedView {
        let schedule = match self.repository.load().await {
            Ok(Some(schedule)) => schedule,
            Ok(None) => Default::default(),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load schedule, serving locked calendar");
                Default::default()
            }
        };

        gate::project(&schedule, today, self.target_month0, self.calendar_days)
    }

    /// Probes the schedule store and returns the number of days present,
    /// or `None` when no schedule has been generated yet.
    ///
    /// Unlike [`Self::gated_view`], store errors propagate here; the health
    /// endpoint wants to see them.
    pub async fn schedule_days(&self) -> Result<Option<usize>, crate::error::AppError> {
        Ok(self.repository.load().await?.map(|schedule| schedule.len()))
    }

}
