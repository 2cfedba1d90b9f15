//! # habitat-observability
//!
//! Structured tracing setup, span definitions for the engine's operations,
//! and a bounded request log for latency and fallback analysis.

pub mod request_log;
pub mod tracing_setup;

pub use request_log::{RequestLog, RequestLogEntry};
pub use tracing_setup::{init_tracing, init_tracing_with_config};
