//! Public API surface for the scheduling engine.
//!
//! This file consolidates the result types produced by one scheduling run.
//! All types derive Serialize/Deserialize for JSON serialization.

use serde::{Deserialize, Serialize};

/// Kind of event placed on a track.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Presentation,
    Lunch,
    Networking,
}

/// One timed entry on a track: a presentation, the lunch break, or the
/// networking slot. Start and end times are pre-formatted with the
/// configured time pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub event_type: EventKind,
    pub subject: String,
    pub duration_in_minutes: u32,
    pub starts_at: String,
    pub ends_at: String,
}

/// One parallel schedule line: a full day template in allocation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// 1-based track number, assigned in creation order.
    pub track_no: u32,
    pub events: Vec<ScheduledEvent>,
}

/// The full result of one scheduling request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConferenceSchedule {
    pub tracks: Vec<Track>,
}

impl ConferenceSchedule {
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Total number of presentation events across all tracks, excluding
    /// lunch and networking fillers.
    pub fn presentation_count(&self) -> usize {
        self.tracks
            .iter()
            .flat_map(|t| t.events.iter())
            .filter(|e| e.event_type == EventKind::Presentation)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> ScheduledEvent {
        ScheduledEvent {
            event_type: EventKind::Presentation,
            subject: "Rust Ownership in Practice".to_string(),
            duration_in_minutes: 60,
            starts_at: "09:00AM".to_string(),
            ends_at: "10:00AM".to_string(),
        }
    }

    #[test]
    fn test_event_kind_serialization() {
        let json = serde_json::to_string(&EventKind::Presentation).unwrap();
        assert_eq!(json, "\"PRESENTATION\"");
        let json = serde_json::to_string(&EventKind::Networking).unwrap();
        assert_eq!(json, "\"NETWORKING\"");
    }

    #[test]
    fn test_scheduled_event_roundtrip() {
        let event = sample_event();
        let json = serde_json::to_string(&event).unwrap();
        let back: ScheduledEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_presentation_count_skips_fillers() {
        let lunch = ScheduledEvent {
            event_type: EventKind::Lunch,
            subject: "Lunch".to_string(),
            duration_in_minutes: 60,
            starts_at: "12:00PM".to_string(),
            ends_at: "01:00PM".to_string(),
        };
        let schedule = ConferenceSchedule {
            tracks: vec![Track {
                track_no: 1,
                events: vec![sample_event(), lunch],
            }],
        };
        assert_eq!(schedule.track_count(), 1);
        assert_eq!(schedule.presentation_count(), 1);
    }
}
