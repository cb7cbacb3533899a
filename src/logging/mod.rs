//! Structured logging with session context.
//!
//! Provides logging utilities that include session_id and app_id
//! in every log message for easy correlation.

pub mod structured;

pub use structured::*;
