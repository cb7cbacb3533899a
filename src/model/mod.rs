//! Core data model.
//!
//! Records held by the application state machine and exchanged with
//! external collaborators:
//! - Trip selections and the explicit trip update struct
//! - Checklist items and live completion state
//! - Application summaries
//! - Uploaded-file metadata
//! - Country entries from the country-list provider

pub mod application;
pub mod checklist;
pub mod country;
pub mod trip;
pub mod upload;

pub use application::*;
pub use checklist::*;
pub use country::*;
pub use trip::*;
pub use upload::*;
