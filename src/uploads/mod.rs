//! Upload screening module.
//!
//! Validates selected files (MIME type, size, filename) before their
//! metadata enters the application state.

pub mod screening;

pub use screening::*;
