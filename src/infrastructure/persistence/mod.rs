//! Flat-file repository implementations.
//!
//! Concrete implementations of the domain repository traits on top of plain
//! JSON files. The calendar's data volume is tiny (one submission list, one
//! schedule), so flat records with atomic whole-file replacement cover the
//! persistence needs without a database.
//!
//! # Repositories
//!
//! - [`FileSubmissionRepository`] - Append-only submission storage
//! - [`FileScheduleRepository`] - Whole-schedule load and replace

pub mod file_schedule_repository;
pub mod file_submission_repository;

pub use file_schedule_repository::FileScheduleRepository;
pub use file_submission_repository::FileSubmissionRepository;
