//! End-to-end flow: submissions -> generator -> date-gated calendar.

mod common;

use std::collections::HashSet;

use advent_calendar::application::services::{CalendarService, GeneratorService};
use advent_calendar::domain::entities::NewSubmission;
use advent_calendar::domain::gate::REDACTED;
use advent_calendar::domain::repositories::{ScheduleRepository, SubmissionRepository};
use advent_calendar::error::AppError;
use chrono::NaiveDate;

async fn seed_submissions(ctx: &common::TestContext, names: &[&str], links_each: usize) {
    for name in names {
        ctx.submission_repository
            .append(NewSubmission {
                name: name.to_string(),
                links: (0..links_each)
                    .map(|i| format!("https://{name}.test/{i}"))
                    .collect(),
            })
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn test_generate_then_gate() {
    let ctx = common::create_test_state(11, 6);
    seed_submissions(&ctx, &["alice", "bob", "carol", "dave"], 6).await;

    let generator = GeneratorService::new(
        ctx.submission_repository.clone(),
        ctx.schedule_repository.clone(),
    );
    let schedule = generator.generate(6, Some(7)).await.unwrap();
    assert_eq!(schedule.len(), 6);

    // The persisted schedule is what the calendar serves.
    let calendar = CalendarService::new(ctx.schedule_repository.clone(), 11, 6);
    let view = calendar
        .gated_view(NaiveDate::from_ymd_opt(2024, 12, 3).unwrap())
        .await;

    assert_eq!(view.len(), 6);
    for day in 1..=3u32 {
        let slots = &view[&day];
        assert_eq!(slots.len(), 3);

        let submitters: HashSet<&str> = slots.iter().map(|s| s.submitter.as_str()).collect();
        assert_eq!(submitters.len(), 3, "day {day} has repeated submitters");
    }
    for day in 4..=6u32 {
        let slots = &view[&day];
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].url, REDACTED);
    }
}

#[tokio::test]
async fn test_failed_generation_leaves_no_schedule_behind() {
    let ctx = common::create_test_state(11, 24);
    seed_submissions(&ctx, &["alice", "bob"], 40).await;

    let generator = GeneratorService::new(
        ctx.submission_repository.clone(),
        ctx.schedule_repository.clone(),
    );

    let err = generator.generate(24, Some(7)).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict { .. }));

    assert!(
        ctx.schedule_repository.load().await.unwrap().is_none(),
        "a failed run must not persist a partial schedule"
    );
}

#[tokio::test]
async fn test_regeneration_replaces_previous_schedule() {
    let ctx = common::create_test_state(11, 4);
    seed_submissions(&ctx, &["alice", "bob", "carol"], 8).await;

    let generator = GeneratorService::new(
        ctx.submission_repository.clone(),
        ctx.schedule_repository.clone(),
    );

    generator.generate(4, Some(1)).await.unwrap();
    generator.generate(2, Some(2)).await.unwrap();

    let loaded = ctx.schedule_repository.load().await.unwrap().unwrap();
    assert_eq!(loaded.len(), 2, "regeneration must fully replace the schedule");
}
