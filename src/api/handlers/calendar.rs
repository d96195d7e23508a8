//! Handler for the gated calendar endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::domain::gate::GatedView;
use crate::state::AppState;

/// Returns the calendar with future days redacted.
///
/// # Endpoint
///
/// `GET /api/calendar`
///
/// # Response
///
/// A JSON object keyed by stringified day number. Revealed days carry their
/// real slots; locked days carry a single sentinel entry:
///
/// ```json
/// {
///   "1": [
///     {"url": "https://example.com/clip", "submitter": "alice"},
///     {"url": "https://example.com/song", "submitter": "bob"},
///     {"url": "https://example.com/video", "submitter": "carol"}
///   ],
///   "2": [{"url": "REDACTED", "submitter": "REDACTED"}]
/// }
/// ```
///
/// The clock is read once here and injected into the pure projection; there
/// is no error path, and a missing or unreadable schedule serves a fully
/// locked calendar.
pub async fn calendar_handler(State(state): State<AppState>) -> Json<GatedView> {
    let today = Utc::now().date_naive();

    Json(state.calendar_service.gated_view(today).await)
}
