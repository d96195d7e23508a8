#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use advent_calendar::application::services::{CalendarService, SubmissionService};
use advent_calendar::domain::entities::{DaySlot, Schedule};
use advent_calendar::infrastructure::persistence::{
    FileScheduleRepository, FileSubmissionRepository,
};
use advent_calendar::state::AppState;
use tempfile::TempDir;

/// App state over a throwaway data directory, plus direct repository handles
/// for seeding and inspecting the stores.
pub struct TestContext {
    pub state: AppState,
    pub submission_repository: Arc<FileSubmissionRepository>,
    pub schedule_repository: Arc<FileScheduleRepository>,
    _data_dir: TempDir,
}

pub fn create_test_state(target_month: u32, calendar_days: u32) -> TestContext {
    let data_dir = tempfile::tempdir().unwrap();

    let submission_repository = Arc::new(FileSubmissionRepository::new(
        data_dir.path().join("submissions.json"),
    ));
    let schedule_repository = Arc::new(FileScheduleRepository::new(
        data_dir.path().join("schedule.json"),
    ));

    let state = AppState {
        submission_service: Arc::new(SubmissionService::new(submission_repository.clone())),
        calendar_service: Arc::new(CalendarService::new(
            schedule_repository.clone(),
            target_month,
            calendar_days,
        )),
        sms_enabled: false,
    };

    TestContext {
        state,
        submission_repository,
        schedule_repository,
        _data_dir: data_dir,
    }
}

/// A complete schedule of `days` days with three distinct submitters per day.
pub fn sample_schedule(days: u32) -> Schedule {
    let map: BTreeMap<u32, Vec<DaySlot>> = (1..=days)
        .map(|day| {
            (
                day,
                vec![
                    DaySlot::new(format!("https://clip.test/{day}/a"), "alice"),
                    DaySlot::new(format!("https://clip.test/{day}/b"), "bob"),
                    DaySlot::new(format!("https://clip.test/{day}/c"), "carol"),
                ],
            )
        })
        .collect();

    Schedule::new(map)
}
