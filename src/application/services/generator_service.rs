//! Schedule generation service.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::domain::allocator::{self, SLOTS_PER_DAY};
use crate::domain::entities::Schedule;
use crate::domain::repositories::{ScheduleRepository, SubmissionRepository};
use crate::error::AppError;

/// Service running the offline allocation step.
///
/// A run either persists a complete schedule or persists nothing: allocation
/// failures surface before the store is touched, and the store itself swaps
/// schedules atomically.
pub struct GeneratorService<S: SubmissionRepository, R: ScheduleRepository> {
    submissions: Arc<S>,
    schedule: Arc<R>,
}

impl<S: SubmissionRepository, R: ScheduleRepository> GeneratorService<S, R> {
    /// Creates a new generator service.
    pub fn new(submissions: Arc<S>, schedule: Arc<R>) -> Self {
        Self {
            submissions,
            schedule,
        }
    }

    /// Allocates a schedule from the stored submissions without persisting it.
    ///
    /// Passing a `seed` makes the run reproducible; otherwise OS entropy is
    /// used.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] when the submissions cannot cover the
    /// requested days (see [`allocator::AllocationError`]) and
    /// [`AppError::Internal`] when the submission store cannot be read.
    pub async fn plan(&self, days: u32, seed: Option<u64>) -> Result<Schedule, AppError> {
        let submissions = self.submissions.list().await?;

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let schedule = allocator::allocate(&submissions, days, SLOTS_PER_DAY, &mut rng)?;

        tracing::info!(
            days,
            submitters = submissions.len(),
            "Allocated calendar schedule"
        );

        Ok(schedule)
    }

    /// Allocates a schedule and replaces the persisted one.
    ///
    /// # Errors
    ///
    /// Same as [`Self::plan`], plus [`AppError::Internal`] when the schedule
    /// store cannot be written. Nothing is written unless allocation fully
    /// succeeded.
    pub async fn generate(&self, days: u32, seed: Option<u64>) -> Result<Schedule, AppError> {
        let schedule = self.plan(days, seed).await?;

        self.schedule.replace(&schedule).await?;

        tracing::info!(days = schedule.len(), "Persisted new calendar schedule");

        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Submission;
    use crate::domain::repositories::{MockScheduleRepository, MockSubmissionRepository};
    use chrono::Utc;

    fn ample_submissions() -> Vec<Submission> {
        ["alice", "bob", "carol"]
            .iter()
            .map(|name| {
                Submission::new(
                    name.to_string(),
                    (0..4).map(|i| format!("https://{name}.test/{i}")).collect(),
                    Utc::now(),
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn test_generate_persists_complete_schedule() {
        let mut mock_submissions = MockSubmissionRepository::new();
        mock_submissions
            .expect_list()
            .times(1)
            .returning(|| Ok(ample_submissions()));

        let mut mock_schedule = MockScheduleRepository::new();
        mock_schedule
            .expect_replace()
            .withf(|schedule| schedule.len() == 4)
            .times(1)
            .returning(|_| Ok(()));

        let service = GeneratorService::new(Arc::new(mock_submissions), Arc::new(mock_schedule));

        let schedule = service.generate(4, Some(1)).await.unwrap();
        assert_eq!(schedule.len(), 4);
    }

    #[tokio::test]
    async fn test_failed_allocation_persists_nothing() {
        let mut mock_submissions = MockSubmissionRepository::new();
        mock_submissions.expect_list().times(1).returning(|| {
            Ok(vec![Submission::new(
                "alice".to_string(),
                vec!["https://a.test/1".to_string()],
                Utc::now(),
            )])
        });

        let mut mock_schedule = MockScheduleRepository::new();
        mock_schedule.expect_replace().times(0);

        let service = GeneratorService::new(Arc::new(mock_submissions), Arc::new(mock_schedule));

        let result = service.generate(24, Some(1)).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_same_seed_plans_identical_schedules() {
        let mut mock_submissions = MockSubmissionRepository::new();
        mock_submissions
            .expect_list()
            .times(2)
            .returning(|| Ok(ample_submissions()));

        let mock_schedule = MockScheduleRepository::new();
        let service = GeneratorService::new(Arc::new(mock_submissions), Arc::new(mock_schedule));

        let first = service.plan(4, Some(99)).await.unwrap();
        let second = service.plan(4, Some(99)).await.unwrap();

        assert_eq!(first, second);
    }
}
