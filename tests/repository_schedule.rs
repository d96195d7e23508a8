mod common;

use advent_calendar::domain::repositories::ScheduleRepository;
use advent_calendar::infrastructure::persistence::FileScheduleRepository;

#[tokio::test]
async fn test_load_without_schedule_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileScheduleRepository::new(dir.path().join("schedule.json"));

    assert!(repo.load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_replace_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileScheduleRepository::new(dir.path().join("schedule.json"));

    let schedule = common::sample_schedule(24);
    repo.replace(&schedule).await.unwrap();

    let loaded = repo.load().await.unwrap().unwrap();
    assert_eq!(loaded, schedule);
}

#[tokio::test]
async fn test_replace_swaps_the_whole_schedule() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileScheduleRepository::new(dir.path().join("schedule.json"));

    repo.replace(&common::sample_schedule(24)).await.unwrap();
    repo.replace(&common::sample_schedule(2)).await.unwrap();

    let loaded = repo.load().await.unwrap().unwrap();
    assert_eq!(loaded.len(), 2);
    assert!(loaded.day(3).is_none(), "old days must not survive a replace");
}

#[tokio::test]
async fn test_corrupted_store_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    tokio::fs::write(&path, b"[1, 2, 3").await.unwrap();

    let repo = FileScheduleRepository::new(path);

    assert!(repo.load().await.is_err());
}
