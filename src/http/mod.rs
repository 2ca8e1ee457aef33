//! HTTP server module for the schedulify backend.
//!
//! This module exposes the scheduling core as a REST API via axum. The
//! handlers parse and bind requests, delegate to the service layer, and
//! wrap results in the response envelope; the core algorithm stays free of
//! HTTP concerns.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing and response envelopes                 │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services::validation, services::scheduler)│
//! │  - Fail-fast validation                                   │
//! │  - Greedy track allocation                                │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
