//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Every response is wrapped in the [`BaseResponse`] envelope (status,
//! message, timestamp, data).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::api::{ScheduledEvent, Track};

/// Request body for scheduling presentations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulePresentationsRequest {
    /// List of presentations to be scheduled
    pub presentations: Vec<PresentationDto>,
}

/// One presentation in a scheduling request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresentationDto {
    /// The subject of the presentation
    pub subject: String,
    /// The duration in minutes, or "lightning" for 5-minute presentations
    pub duration: String,
}

/// Common response envelope: status string, human-readable message,
/// timestamp, optional payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseResponse<T> {
    /// "Success" or "Error"
    pub status: String,
    /// Message detailing the response
    pub message: String,
    /// Timestamp of the response
    pub timestamp: NaiveDateTime,
    /// Response data (absent on errors)
    pub data: Option<T>,
}

impl<T> BaseResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "Success".to_string(),
            message: message.into(),
            timestamp: chrono::Utc::now().naive_utc(),
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "Error".to_string(),
            message: message.into(),
            timestamp: chrono::Utc::now().naive_utc(),
            data: None,
        }
    }
}

/// One track in a scheduling response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackDto {
    /// Number of the track
    pub track_no: u32,
    /// List of events in the track
    pub track: Vec<EventWrapper>,
}

/// Wrapper object around one scheduled event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventWrapper {
    pub event: ScheduledEvent,
}

impl From<Track> for TrackDto {
    fn from(track: Track) -> Self {
        Self {
            track_no: track.track_no,
            track: track
                .events
                .into_iter()
                .map(|event| EventWrapper { event })
                .collect(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}
