//! Request validation and duration normalization.
//!
//! Validation is all-or-nothing: the first rule violated, in input order,
//! aborts the request. Rule order per presentation: subject shape, empty
//! duration, duration lexical shape, duplicate subject, duration range.

use std::collections::HashSet;

use thiserror::Error;

/// Minutes assigned to a lightning talk.
pub const LIGHTNING_MINUTES: u32 = 5;

/// Upper bound for a single presentation, inclusive.
pub const MAX_DURATION_MINUTES: u32 = 240;

/// A raw (subject, duration token) pair as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentationInput {
    pub subject: String,
    pub duration: String,
}

impl PresentationInput {
    pub fn new(subject: impl Into<String>, duration: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            duration: duration.into(),
        }
    }
}

/// First validation rule violated by a scheduling request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("The subject must contain at least two non-whitespace characters")]
    SubjectTooShort,
    #[error("Duration cannot be empty")]
    EmptyDuration,
    #[error("Duration must be a positive integer or 'lightning', 'LIGHTNING', or 'Lightning'")]
    MalformedDuration,
    #[error("Duplicate presentation subject: {0}")]
    DuplicateSubject(String),
    #[error("Duration must be between 1 and {MAX_DURATION_MINUTES} minutes")]
    DurationOutOfRange,
}

/// Check every presentation against the validation rules, stopping at the
/// first violation in input order.
pub fn validate_presentations(presentations: &[PresentationInput]) -> Result<(), ValidationError> {
    let mut subjects = HashSet::new();
    for presentation in presentations {
        if presentation
            .subject
            .chars()
            .filter(|c| !c.is_whitespace())
            .count()
            < 2
        {
            return Err(ValidationError::SubjectTooShort);
        }
        if presentation.duration.trim().is_empty() {
            return Err(ValidationError::EmptyDuration);
        }
        if !has_valid_duration_shape(&presentation.duration) {
            return Err(ValidationError::MalformedDuration);
        }
        let trimmed = presentation.subject.trim();
        if !subjects.insert(trimmed.to_string()) {
            return Err(ValidationError::DuplicateSubject(trimmed.to_string()));
        }
        let duration = normalize_duration(&presentation.duration)?;
        if duration < 1 || duration > MAX_DURATION_MINUTES {
            return Err(ValidationError::DurationOutOfRange);
        }
    }
    Ok(())
}

/// Lexical shape check on the raw token: all decimal digits, or the
/// case-insensitive word "lightning". Surrounding whitespace fails.
fn has_valid_duration_shape(token: &str) -> bool {
    token.eq_ignore_ascii_case("lightning")
        || (!token.is_empty() && token.chars().all(|c| c.is_ascii_digit()))
}

/// Map a duration token to a minute count: "lightning" (case-insensitive,
/// trimmed) becomes [`LIGHTNING_MINUTES`], anything else is parsed as a
/// base-10 integer.
pub fn normalize_duration(token: &str) -> Result<u32, ValidationError> {
    let token = token.trim();
    if token.eq_ignore_ascii_case("lightning") {
        return Ok(LIGHTNING_MINUTES);
    }
    token
        .parse::<u32>()
        .map_err(|_| ValidationError::MalformedDuration)
}
