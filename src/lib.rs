//! # Advent Calendar
//!
//! An advent calendar service for sharing daily media links, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits, and the two
//!   core algorithms: the fair-distribution allocator and the date gate
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Flat-file storage and SMS delivery
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Submission intake with validation and flat-file storage
//! - Offline schedule generation balancing links fairly across submitters
//! - Date-gated calendar endpoint that redacts future days
//! - Optional daily SMS notification through an HTTP gateway
//! - Rate limiting and observability
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the service (stores live under ./data by default)
//! cargo run
//!
//! # Collect submissions, then generate the calendar
//! cargo run --bin admin -- generate
//!
//! # Send today's SMS (wire this to cron during the calendar month)
//! cargo run --bin admin -- notify
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        CalendarService, GeneratorService, NotificationService, SubmissionService,
    };
    pub use crate::domain::allocator::{AllocationError, SLOTS_PER_DAY, allocate};
    pub use crate::domain::entities::{DaySlot, NewSubmission, Schedule, Submission};
    pub use crate::domain::gate::{GatedView, REDACTED, project};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
