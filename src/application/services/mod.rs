//! Business logic services for the application layer.

pub mod calendar_service;
pub mod generator_service;
pub mod notification_service;
pub mod submission_service;

pub use calendar_service::CalendarService;
pub use generator_service::GeneratorService;
pub use notification_service::{NotificationReport, NotificationService};
pub use submission_service::SubmissionService;
