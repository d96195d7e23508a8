//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Submissions store**: Counts stored submissions
/// 2. **Schedule**: Reports whether a schedule exists and its length
/// 3. **SMS**: Reports whether a gateway is configured
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_submissions_store(&state).await;

    let schedule_check = check_schedule(&state).await;

    let sms_check = check_sms(&state);

    let all_healthy = store_check.status == "ok"
        && schedule_check.status == "ok"
        && sms_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            submissions_store: store_check,
            schedule: schedule_check,
            sms: sms_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks the submission store by counting stored records.
async fn check_submissions_store(state: &AppState) -> CheckStatus {
    match state.submission_service.count().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{count} submissions stored")),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Store error: {e}")),
        },
    }
}

/// Checks the schedule store. A not-yet-generated schedule is healthy.
async fn check_schedule(state: &AppState) -> CheckStatus {
    match state.calendar_service.schedule_days().await {
        Ok(Some(days)) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Schedule present: {days} days")),
        },
        Ok(None) => CheckStatus {
            status: "ok".to_string(),
            message: Some("No schedule generated yet".to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Store error: {e}")),
        },
    }
}

/// Reports SMS gateway configuration.
fn check_sms(state: &AppState) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(if state.sms_enabled {
            "Gateway configured".to_string()
        } else {
            "Delivery disabled".to_string()
        }),
    }
}
