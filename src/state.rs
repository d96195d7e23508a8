//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{CalendarService, SubmissionService};
use crate::infrastructure::persistence::{FileScheduleRepository, FileSubmissionRepository};

/// Shared state for the HTTP server.
///
/// Services are `Arc`'d so the state stays cheap to clone per request. The
/// generator and notification services are deliberately absent: they belong
/// to the offline admin CLI, not to the web surface.
#[derive(Clone)]
pub struct AppState {
    pub submission_service: Arc<SubmissionService<FileSubmissionRepository>>,
    pub calendar_service: Arc<CalendarService<FileScheduleRepository>>,
    /// Whether an SMS gateway is configured, for the health endpoint.
    pub sms_enabled: bool,
}
