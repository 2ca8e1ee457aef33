//! # Schedulify Backend
//!
//! Conference presentation scheduling engine.
//!
//! This crate takes a list of presentations (subject + duration) and packs
//! them into parallel tracks, each following a fixed daily template: a
//! 3-hour morning session starting at 09:00, lunch from 12:00 to 13:00, a
//! 4-hour afternoon session, and an optional networking slot ending at
//! 17:00. Packing uses a greedy longest-fit-first heuristic with a
//! first-fit combination fallback. The backend exposes a REST API via Axum.
//!
//! ## Features
//!
//! - **Validation**: fail-fast request validation (subject shape, duration
//!   token shape, duplicate subjects, duration range)
//! - **Allocation**: deterministic greedy packing against session budgets,
//!   carrying unallocated remainders across sessions and tracks
//! - **Time Handling**: clock arithmetic and configurable time formatting
//! - **HTTP API**: RESTful endpoint for scheduling requests
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: result types (events, tracks, schedules) serialized to callers
//! - [`models`]: clock-time helpers and the configurable time formatter
//! - [`services`]: validation and the allocation algorithm
//! - [`config`]: process configuration from environment variables
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod config;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
