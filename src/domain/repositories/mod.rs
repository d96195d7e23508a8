//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data
//! access operations following the Repository pattern. These traits are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`SubmissionRepository`] - Append-only submission intake records
//! - [`ScheduleRepository`] - The generated calendar, replaced wholesale
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod schedule_repository;
pub mod submission_repository;

pub use schedule_repository::ScheduleRepository;
pub use submission_repository::SubmissionRepository;

#[cfg(test)]
pub use schedule_repository::MockScheduleRepository;
#[cfg(test)]
pub use submission_repository::MockSubmissionRepository;
