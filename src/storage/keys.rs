//! Key layout for persisted substate.
//!
//! Session-wide keys hold the application list and the current id;
//! per-application keys hold each application's working substate so it
//! can be restored on load.

const ROOT: &str = "visaprep";

pub fn applications_key() -> String {
    format!("{}.applications", ROOT)
}

pub fn current_app_key() -> String {
    format!("{}.currentAppId", ROOT)
}

pub fn trip_key(app_id: &str) -> String {
    format!("{}.{}.trip.selections", ROOT, app_id)
}

pub fn checklist_state_key(app_id: &str) -> String {
    format!("{}.{}.checklist.state", ROOT, app_id)
}

pub fn uploads_key(app_id: &str) -> String {
    format!("{}.{}.uploads.meta", ROOT, app_id)
}

pub fn mapping_overrides_key(app_id: &str) -> String {
    format!("{}.{}.mapping.overrides", ROOT, app_id)
}

/// Every per-application key, for deletion when the application goes away.
pub fn app_keys(app_id: &str) -> [String; 4] {
    [
        trip_key(app_id),
        checklist_state_key(app_id),
        uploads_key(app_id),
        mapping_overrides_key(app_id),
    ]
}
