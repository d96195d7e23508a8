//! HTTP server initialization and runtime setup.
//!
//! Wires the flat-file repositories into services and runs the Axum server.

use crate::application::services::{CalendarService, SubmissionService};
use crate::config::Config;
use crate::infrastructure::persistence::{FileScheduleRepository, FileSubmissionRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Flat-file submission and schedule repositories
/// - Submission and calendar services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or a
/// server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let submission_repository = Arc::new(FileSubmissionRepository::new(
        config.submissions_path.clone(),
    ));
    let schedule_repository = Arc::new(FileScheduleRepository::new(config.schedule_path.clone()));

    let submission_service = Arc::new(SubmissionService::new(submission_repository));
    let calendar_service = Arc::new(CalendarService::new(
        schedule_repository,
        config.target_month,
        config.calendar_days,
    ));

    let state = AppState {
        submission_service,
        calendar_service,
        sms_enabled: config.is_sms_enabled(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
