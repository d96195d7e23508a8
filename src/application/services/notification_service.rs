//! Daily SMS notification service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::DaySlot;
use crate::domain::repositories::ScheduleRepository;
use crate::error::AppError;
use crate::infrastructure::sms::SmsSender;

/// Outcome of one notification run.
#[derive(Debug, PartialEq, Eq)]
pub struct NotificationReport {
    pub day: u32,
    pub delivered: usize,
    pub failed: usize,
}

/// Service composing and fanning out the daily calendar SMS.
///
/// One message per recipient; a failed delivery is logged and counted but
/// does not abort the remaining recipients.
pub struct NotificationService<R: ScheduleRepository> {
    schedule: Arc<R>,
    sender: Arc<dyn SmsSender>,
    recipients: Vec<String>,
}

impl<R: ScheduleRepository> NotificationService<R> {
    /// Creates a new notification service.
    pub fn new(schedule: Arc<R>, sender: Arc<dyn SmsSender>, recipients: Vec<String>) -> Self {
        Self {
            schedule,
            sender,
            recipients,
        }
    }

    /// Sends the notification for one calendar day to every recipient.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no schedule exists or the day is
    /// absent from it, and [`AppError::Internal`] when the store cannot be
    /// read. Per-recipient delivery failures are reported in the
    /// [`NotificationReport`], not as errors.
    pub async fn notify_day(&self, day: u32) -> Result<NotificationReport, AppError> {
        let schedule = self.schedule.load().await?.ok_or_else(|| {
            AppError::not_found("No schedule has been generated yet", json!({}))
        })?;

        let slots = schedule
            .day(day)
            .filter(|slots| !slots.is_empty())
            .ok_or_else(|| {
                AppError::not_found("Day is not present in the schedule", json!({ "day": day }))
            })?;

        let message = compose_message(day, slots);

        let mut delivered = 0;
        let mut failed = 0;
        for recipient in &self.recipients {
            match self.sender.send(recipient, &message).await {
                Ok(()) => delivered += 1,
                Err(e) => {
                    failed += 1;
                    tracing::warn!(recipient, error = %e, "SMS delivery failed");
                }
            }
        }

        tracing::info!(day, delivered, failed, "Notification run finished");

        Ok(NotificationReport {
            day,
            delivered,
            failed,
        })
    }

}

/// Builds the notification text for one day.
fn compose_message(day: u32, slots: &[DaySlot]) -> String {
    let mut message = format!("Door {day} is open! Today's links:");
    for slot in slots {
        message.push_str(&format!("\n{} (from {})", slot.url, slot.submitter));
    }
    message
}
