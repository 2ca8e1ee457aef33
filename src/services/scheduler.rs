//! Greedy track allocation.
//!
//! Presentations are sorted by duration (longest first, stable) and packed
//! into one track per day template until none remain. Each session is
//! filled by repeatedly taking the longest presentation that still fits
//! the remaining budget, falling back to a first-fit combination scan when
//! no single presentation fits. The result is a reproducible heuristic,
//! not an optimal bin packing; callers depend on the exact tie-break and
//! scan order.

use chrono::NaiveTime;
use log::{debug, info};

use crate::api::{ConferenceSchedule, EventKind, ScheduledEvent, Track};
use crate::models::time::{add_minutes, clock, minutes_between, TimeFormatter};

use super::validation::{self, PresentationInput, ValidationError};

/// Morning session budget in minutes (09:00 to 12:00).
const MORNING_SESSION_MINUTES: i64 = 180;

/// Afternoon session budget in minutes (13:00 to 17:00).
const AFTERNOON_SESSION_MINUTES: i64 = 240;

/// Fixed lunch duration in minutes.
const LUNCH_MINUTES: u32 = 60;

/// A validated presentation waiting for a time slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub subject: String,
    pub duration_minutes: u32,
}

/// Validate, normalize, and pack a scheduling request into tracks.
///
/// This is the single entry point of the scheduling core. Validation
/// failures abort with the first violated rule; once validation passes,
/// packing cannot fail (every duration fits the afternoon budget, so every
/// presentation eventually lands in some track).
pub fn schedule_presentations(
    presentations: &[PresentationInput],
    formatter: &TimeFormatter,
) -> Result<ConferenceSchedule, ValidationError> {
    info!(
        "Received schedule request with {} presentations",
        presentations.len()
    );

    debug!("Validating presentations...");
    validation::validate_presentations(presentations)?;
    debug!("Validation completed successfully");

    // Remainder pool: subjects trimmed, durations normalized, sorted by
    // duration longest -> shortest. The sort is stable, so presentations
    // of equal duration keep their input order.
    let mut pool = presentations
        .iter()
        .map(|p| {
            Ok(Presentation {
                subject: p.subject.trim().to_string(),
                duration_minutes: validation::normalize_duration(&p.duration)?,
            })
        })
        .collect::<Result<Vec<_>, ValidationError>>()?;
    pool.sort_by(|a, b| b.duration_minutes.cmp(&a.duration_minutes));

    let mut tracks = Vec::new();
    let mut track_no: u32 = 1;
    while !pool.is_empty() {
        info!("Allocating presentations for track {}", track_no);
        let events = build_track(&mut pool, formatter);
        info!("Track {} allocated with {} events", track_no, events.len());
        tracks.push(Track { track_no, events });
        track_no += 1;
    }

    info!("Schedule processing completed successfully");
    Ok(ConferenceSchedule { tracks })
}

/// Run one full day template against the pool, returning the track's
/// events. The pool is left holding whatever did not fit in either
/// session.
fn build_track(pool: &mut Vec<Presentation>, formatter: &TimeFormatter) -> Vec<ScheduledEvent> {
    let mut events = Vec::new();

    debug!("Allocating morning session presentations");
    fill_session(
        &mut events,
        pool,
        clock(9, 0),
        MORNING_SESSION_MINUTES,
        formatter,
    );

    // Lunch is fixed at 12:00-13:00 and the afternoon clock resets to
    // 13:00 regardless of morning underrun.
    events.push(lunch_event(formatter));

    debug!("Allocating afternoon session presentations");
    let session_end = fill_session(
        &mut events,
        pool,
        clock(13, 0),
        AFTERNOON_SESSION_MINUTES,
        formatter,
    );

    if let Some(networking) = networking_event(session_end, formatter) {
        debug!(
            "Added networking event from {} to {}",
            networking.starts_at, networking.ends_at
        );
        events.push(networking);
    }

    events
}

/// Fill one session budget starting at `start`, consuming presentations
/// from the pool. Returns the clock time after the last committed
/// presentation.
pub(crate) fn fill_session(
    events: &mut Vec<ScheduledEvent>,
    pool: &mut Vec<Presentation>,
    start: NaiveTime,
    budget_minutes: i64,
    formatter: &TimeFormatter,
) -> NaiveTime {
    let mut remaining = budget_minutes;
    let mut current = start;

    while remaining > 0 && !pool.is_empty() {
        if let Some(idx) = longest_fitting(pool, remaining) {
            let presentation = pool.remove(idx);
            remaining -= i64::from(presentation.duration_minutes);
            current = commit_presentation(events, presentation, current, formatter);
        } else {
            // No single presentation fits; try to exhaust the leftover
            // budget with several smaller ones, committed in scan order.
            let chosen = fitting_combination(pool, remaining);
            if chosen.is_empty() {
                break;
            }
            for (already_removed, idx) in chosen.into_iter().enumerate() {
                let presentation = pool.remove(idx - already_removed);
                remaining -= i64::from(presentation.duration_minutes);
                current = commit_presentation(events, presentation, current, formatter);
            }
        }
    }

    current
}

/// Index of the longest presentation with duration <= `remaining`. Ties
/// are broken by first occurrence in pool order.
pub(crate) fn longest_fitting(pool: &[Presentation], remaining: i64) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (idx, presentation) in pool.iter().enumerate() {
        if i64::from(presentation.duration_minutes) > remaining {
            continue;
        }
        match best {
            Some(b) if pool[b].duration_minutes >= presentation.duration_minutes => {}
            _ => best = Some(idx),
        }
    }
    best
}

/// First-fit combination scan: walk the pool in order, accumulating
/// presentations whose running total stays within `remaining`, stopping
/// early on an exact fill. Returns the chosen indices in ascending order.
pub(crate) fn fitting_combination(pool: &[Presentation], remaining: i64) -> Vec<usize> {
    let mut chosen = Vec::new();
    let mut accumulated: i64 = 0;

    for (idx, presentation) in pool.iter().enumerate() {
        let duration = i64::from(presentation.duration_minutes);
        if accumulated + duration <= remaining {
            accumulated += duration;
            chosen.push(idx);
            if accumulated == remaining {
                break;
            }
        }
    }

    chosen
}

/// Time a presentation at `start`, append it to the session events, and
/// return its end time.
fn commit_presentation(
    events: &mut Vec<ScheduledEvent>,
    presentation: Presentation,
    start: NaiveTime,
    formatter: &TimeFormatter,
) -> NaiveTime {
    let end = add_minutes(start, i64::from(presentation.duration_minutes));
    debug!(
        "Added presentation: {} from {} to {}",
        presentation.subject,
        formatter.format(start),
        formatter.format(end)
    );
    events.push(ScheduledEvent {
        event_type: EventKind::Presentation,
        subject: presentation.subject,
        duration_in_minutes: presentation.duration_minutes,
        starts_at: formatter.format(start),
        ends_at: formatter.format(end),
    });
    end
}

fn lunch_event(formatter: &TimeFormatter) -> ScheduledEvent {
    ScheduledEvent {
        event_type: EventKind::Lunch,
        subject: "Lunch".to_string(),
        duration_in_minutes: LUNCH_MINUTES,
        starts_at: formatter.format(clock(12, 0)),
        ends_at: formatter.format(clock(13, 0)),
    }
}

/// Networking slot, present only when the afternoon session ends strictly
/// after 16:00 and strictly before 17:00. Exact 16:00 or 17:00 boundaries
/// produce nothing.
fn networking_event(session_end: NaiveTime, formatter: &TimeFormatter) -> Option<ScheduledEvent> {
    let day_end = clock(17, 0);
    if session_end > clock(16, 0) && session_end < day_end {
        let duration = minutes_between(session_end, day_end);
        Some(ScheduledEvent {
            event_type: EventKind::Networking,
            subject: "Networking Event".to_string(),
            duration_in_minutes: duration as u32,
            starts_at: formatter.format(session_end),
            ends_at: formatter.format(day_end),
        })
    } else {
        None
    }
}
