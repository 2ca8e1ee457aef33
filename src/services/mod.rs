//! Service layer for validation and track allocation.
//!
//! This module contains the scheduling core: fail-fast request validation,
//! duration normalization, and the greedy allocation algorithm that packs
//! presentations into parallel tracks.

pub mod scheduler;
pub mod validation;

pub use scheduler::{schedule_presentations, Presentation};
pub use validation::{normalize_duration, validate_presentations, PresentationInput, ValidationError};

#[cfg(test)]
mod validation_tests;
