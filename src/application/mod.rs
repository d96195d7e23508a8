//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and
//! provide a clean API for HTTP handlers and the operator CLI.
//!
//! # Available Services
//!
//! - [`services::submission_service::SubmissionService`] - Intake validation and storage
//! - [`services::calendar_service::CalendarService`] - Date-gated calendar reads
//! - [`services::generator_service::GeneratorService`] - Offline schedule generation
//! - [`services::notification_service::NotificationService`] - Daily SMS fan-out

pub mod services;
