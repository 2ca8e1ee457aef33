//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{extract::State, Json};

use super::dto::{
    BaseResponse, HealthResponse, SchedulePresentationsRequest, TrackDto,
};
use super::error::AppError;
use super::state::AppState;
use crate::services::{self, PresentationInput};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    })
}

/// POST /api/v1/schedule
///
/// Schedule the submitted presentations into parallel tracks. Returns the
/// full track list on success; validation failures map to a 400 response
/// carrying the first violated rule.
pub async fn schedule_presentations(
    State(state): State<AppState>,
    Json(request): Json<SchedulePresentationsRequest>,
) -> HandlerResult<BaseResponse<Vec<TrackDto>>> {
    tracing::debug!(
        presentations = request.presentations.len(),
        "Received schedule presentations request"
    );

    let inputs: Vec<PresentationInput> = request
        .presentations
        .into_iter()
        .map(|p| PresentationInput::new(p.subject, p.duration))
        .collect();

    let schedule = services::schedule_presentations(&inputs, &state.formatter)?;

    let message = format!(
        "Successfully scheduled events under {} tracks.",
        schedule.track_count()
    );
    let tracks: Vec<TrackDto> = schedule.tracks.into_iter().map(Into::into).collect();

    Ok(Json(BaseResponse::success(message, tracks)))
}
