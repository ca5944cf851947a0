//! HTTP middleware.
//!
//! - [`tracing`] - Per-request spans with status and latency

pub mod tracing;
