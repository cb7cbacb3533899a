//! VisaPrep Core - visa application wizard core
//!
//! This crate provides the domain core behind the multi-step visa
//! application wizard: a pure rule engine and an application state
//! machine. The implementation prioritizes:
//!
//! 1. **Determinism** - checklist derivation is a pure function of its inputs
//! 2. **Logging** - every state transition logged with session context
//! 3. **Explicit errors** - no silent no-ops on missing applications or ids
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `rules` - Visa area/label mapping and checklist generation (rule catalog)
//! - `store` - Application state machine with the derived-state cascade
//! - `model` - Trip, checklist, application, upload, and country records
//! - `uploads` - Upload screening (MIME type, size, filename)
//! - `extraction` - Mock extraction fixtures and field-mapping merge/export
//! - `storage` - Key-value persistence collaborator and key layout
//! - `wizard` - Step progression, trip form validation, navigation guard
//! - `logging` - Structured logging with session context
//!
//! The UI, the country-list provider, the trip persistence backend, and
//! the document-processing pipeline are external collaborators: they call
//! the operations exposed here and render the resulting snapshots.

pub mod extraction;
pub mod logging;
pub mod model;
pub mod rules;
pub mod storage;
pub mod store;
pub mod uploads;
pub mod wizard;

pub use model::{
    ApplicationId, ApplicationMeta, ChecklistCategory, ChecklistItem, ChecklistState, Country,
    DateRange, Purpose, TripPatch, TripSelections, UploadMeta, UploadStatus,
};
pub use rules::{
    generate_checklist, visa_area_for_destination, visa_label_for, RuleCatalog, VisaArea,
    VisaTypeLabel,
};
pub use store::{calc_progress, AppState, ApplicationStore, StoreError};

/// Initialize the module-level logger
pub fn init_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .try_init();
}
