//! Handler for the submission intake endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::submit::{SubmitRequest, SubmitResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a participant's name and candidate links.
///
/// # Endpoint
///
/// `POST /api/submissions`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "alice",
///   "links": ["https://example.com/clip1", "https://example.com/clip2"]
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the stored record summary:
///
/// ```json
/// {
///   "name": "alice",
///   "accepted_links": 2,
///   "submitted_at": "2025-11-30T18:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when validation fails (empty name, no usable
/// links, or a link that is not an http(s) URL).
pub async fn submit_handler(
    State(state): State<AppState>,
    Json(payload): Json<SubmitRequest>,
) -> Result<(StatusCode, Json<SubmitResponse>), AppError> {
    payload.validate()?;

    let submission = state
        .submission_service
        .submit(payload.name, payload.links)
        .await?;

    tracing::info!(
        name = %submission.name,
        links = submission.link_count(),
        "Stored submission"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            accepted_links: submission.link_count(),
            name: submission.name,
            submitted_at: submission.submitted_at,
        }),
    ))
}
