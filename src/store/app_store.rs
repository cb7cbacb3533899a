//! Application state machine.
//!
//! One `ApplicationStore` holds the application list, the current
//! application id, and the full working substate of the current
//! application. Every mutation runs the derived-state cascade
//! (trip -> visa label -> checklist -> progress -> summary) under a single
//! write lock, so no intermediate state is observable.
//!
//! Substate is persisted through the key-value collaborator as a
//! best-effort side effect and restored when an application is loaded;
//! the store works unchanged when persistence is absent.

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use crate::extraction::{ExtractionResult, MappingItem, MappingOverrides};
use crate::model::{
    ApplicationId, ApplicationMeta, ChecklistItem, ChecklistState, TripPatch, TripSelections,
    UploadMeta,
};
use crate::rules::{generate_checklist, visa_area_for_destination, visa_label_for, RuleCatalog};
use crate::storage::{keys, KeyValueStore, MemoryStore};
use crate::store::session::SessionContext;

/// Error taxonomy for state machine operations. All variants are local
/// and recoverable; none are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A mutation was called while no application is current.
    #[error("no active application")]
    NoActiveApplication,
    /// The referenced application id is not in the application list.
    #[error("application not found: {0}")]
    NotFound(ApplicationId),
    /// A deferred processing outcome arrived for an application that is
    /// no longer current.
    #[error("stale update for application: {0}")]
    StaleUpdate(ApplicationId),
}

/// Full state snapshot: application list, current id, and the working
/// substate of the current application.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub applications: Vec<ApplicationMeta>,
    pub current_app_id: Option<ApplicationId>,
    pub trip: Option<TripSelections>,
    pub checklist: Vec<ChecklistItem>,
    pub checklist_state: ChecklistState,
    pub uploads: Vec<UploadMeta>,
    pub extraction: ExtractionResult,
    pub mapping: Vec<MappingItem>,
    pub mapping_overrides: MappingOverrides,
}

/// Completion percentage for a checklist: round(100 * done / total).
///
/// An item counts as done when the live state marks it done or its own
/// `done` flag is set. An empty checklist yields 0.
pub fn calc_progress(checklist: &[ChecklistItem], state: &ChecklistState) -> u8 {
    if checklist.is_empty() {
        return 0;
    }
    let done = checklist
        .iter()
        .filter(|item| *state.get(&item.id).unwrap_or(&false) || item.done)
        .count();
    ((done as f64 / checklist.len() as f64) * 100.0).round() as u8
}

/// The application state machine.
pub struct ApplicationStore<S: KeyValueStore = MemoryStore> {
    state: RwLock<AppState>,
    kv: S,
    catalog: RuleCatalog,
    session: SessionContext,
}

impl ApplicationStore<MemoryStore> {
    /// Store backed by a fresh in-memory key-value store.
    pub fn in_memory() -> Self {
        Self::open(MemoryStore::new())
    }
}

impl<S: KeyValueStore> ApplicationStore<S> {
    /// Open a store over `kv` with the built-in rule catalog, restoring
    /// any persisted session (application list, current id, and the
    /// current application's substate).
    pub fn open(kv: S) -> Self {
        Self::with_catalog(kv, RuleCatalog::builtin())
    }

    pub fn with_catalog(kv: S, catalog: RuleCatalog) -> Self {
        let store = Self {
            state: RwLock::new(AppState::default()),
            kv,
            catalog,
            session: SessionContext::new(),
        };

        {
            let mut state = store.state.write();
            if let Some(apps) = store.read_json::<Vec<ApplicationMeta>>(&keys::applications_key())
            {
                state.applications = apps;
            }
            if let Some(id) = store.read_json::<ApplicationId>(&keys::current_app_key()) {
                if state.applications.iter().any(|a| a.id == id) {
                    state.current_app_id = Some(id.clone());
                    store.restore_substate(&mut state, &id);
                }
            }
            log::info!(
                "{} SESSION_OPENED applications={} current={:?}",
                store.session.log_context(),
                state.applications.len(),
                state.current_app_id
            );
        }

        store
    }

    /// The rule catalog this store derives checklists from.
    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Cloned snapshot of the full state.
    pub fn snapshot(&self) -> AppState {
        self.state.read().clone()
    }

    pub fn applications(&self) -> Vec<ApplicationMeta> {
        self.state.read().applications.clone()
    }

    pub fn current_app_id(&self) -> Option<ApplicationId> {
        self.state.read().current_app_id.clone()
    }

    /// Create a fresh application, make it current, and return its id.
    pub fn create_application(&self) -> ApplicationId {
        let id = format!("app-{}", &Uuid::new_v4().to_string()[..8]);
        let trip = TripSelections::new_default();

        let mut state = self.state.write();
        state.applications.push(ApplicationMeta::empty(&id));
        state.current_app_id = Some(id.clone());
        clear_working_substate(&mut state);
        self.write_json(&keys::trip_key(&id), &trip);
        state.trip = Some(trip);
        self.persist_session(&state);

        log::info!(
            "{} APP_CREATED applications={}",
            self.session.app_context(&id),
            state.applications.len()
        );
        id
    }

    /// Make `id` the current application and restore its persisted
    /// substate. Idempotent: loading the same id twice with no
    /// intervening mutation yields the same substate.
    pub fn load_application(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.state.write();
        if !state.applications.iter().any(|a| a.id == id) {
            log::warn!(
                "{} APP_NOT_FOUND op=load app_id={}",
                self.session.log_context(),
                id
            );
            return Err(StoreError::NotFound(id.to_string()));
        }

        state.current_app_id = Some(id.to_string());
        self.restore_substate(&mut state, id);
        let progress = calc_progress(&state.checklist, &state.checklist_state);
        sync_meta(&mut state, progress);
        self.persist_session(&state);

        log::info!(
            "{} APP_LOADED checklist_items={} progress={}",
            self.session.app_context(id),
            state.checklist.len(),
            progress
        );
        Ok(())
    }

    /// Remove an application. If it was current, the first remaining
    /// application (if any) becomes current and is restored.
    pub fn delete_application(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let before = state.applications.len();
        state.applications.retain(|a| a.id != id);
        if state.applications.len() == before {
            log::warn!(
                "{} APP_NOT_FOUND op=delete app_id={}",
                self.session.log_context(),
                id
            );
            return Err(StoreError::NotFound(id.to_string()));
        }

        for key in keys::app_keys(id) {
            self.remove_key(&key);
        }

        if state.current_app_id.as_deref() == Some(id) {
            match state.applications.first().map(|a| a.id.clone()) {
                Some(next) => {
                    state.current_app_id = Some(next.clone());
                    self.restore_substate(&mut state, &next);
                }
                None => {
                    state.current_app_id = None;
                    clear_working_substate(&mut state);
                }
            }
        }
        self.persist_session(&state);

        log::info!(
            "{} APP_DELETED app_id={} remaining={}",
            self.session.log_context(),
            id,
            state.applications.len()
        );
        Ok(())
    }

    /// Clone an application's summary under a new id with progress reset
    /// to 0. The copy does not become current.
    pub fn duplicate_application(&self, id: &str) -> Result<ApplicationId, StoreError> {
        let mut state = self.state.write();
        let source = match state.applications.iter().find(|a| a.id == id) {
            Some(meta) => meta.clone(),
            None => {
                log::warn!(
                    "{} APP_NOT_FOUND op=duplicate app_id={}",
                    self.session.log_context(),
                    id
                );
                return Err(StoreError::NotFound(id.to_string()));
            }
        };

        let new_id = format!("app-{}", &Uuid::new_v4().to_string()[..8]);
        let mut copy = source;
        copy.id = new_id.clone();
        copy.progress_pct = 0;
        state.applications.push(copy);
        self.persist_session(&state);

        log::info!(
            "{} APP_DUPLICATED source={} new={}",
            self.session.log_context(),
            id,
            new_id
        );
        Ok(new_id)
    }

    /// Store teardown: reset the entire state machine to its initial
    /// empty state and clear all persisted session data. Heavier than a
    /// per-application clear on purpose.
    pub fn clear_current_application(&self) {
        let mut state = self.state.write();
        log::info!(
            "{} STORE_CLEARED discarded_app={:?}",
            self.session.log_context(),
            state.current_app_id
        );
        *state = AppState::default();
        if let Err(e) = self.kv.clear() {
            log::warn!(
                "{} STORAGE_CLEAR_FAILED error={:#}",
                self.session.log_context(),
                e
            );
        }
    }

    /// Merge a trip patch and run the full cascade: recompute the visa
    /// area and label from the merged selections, regenerate the
    /// checklist, recompute progress against the existing completion
    /// state, and refresh the summary entry.
    pub fn update_trip(&self, patch: TripPatch) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let id = current_id(&state)?;

        let mut merged = state.trip.clone().unwrap_or_default();
        patch.apply_to(&mut merged);
        merged.destination = visa_area_for_destination(merged.destination_country_alpha2.as_deref());
        merged.visa_type_label = visa_label_for(merged.destination);

        let checklist = generate_checklist(&self.catalog, merged.visa_type_label, &merged.dates);
        let progress = calc_progress(&checklist, &state.checklist_state);

        log::info!(
            "{} TRIP_UPDATED destination={:?} visa_label={:?} checklist_items={} progress={}",
            self.session.app_context(&id),
            merged.destination.as_ref().map(|d| d.as_str()),
            merged.visa_type_label.as_ref().map(|l| l.as_str()),
            checklist.len(),
            progress
        );

        self.write_json(&keys::trip_key(&id), &merged);
        state.trip = Some(merged);
        state.checklist = checklist;
        sync_meta(&mut state, progress);
        self.persist_session(&state);
        Ok(())
    }

    /// Flip a checklist item's completion flag. A missing key counts as
    /// not-done before the flip; toggling twice restores the prior state.
    pub fn toggle_checklist_item(&self, item_id: &str) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let id = current_id(&state)?;

        let done = {
            let entry = state
                .checklist_state
                .entry(item_id.to_string())
                .or_insert(false);
            *entry = !*entry;
            *entry
        };
        let progress = calc_progress(&state.checklist, &state.checklist_state);
        sync_meta(&mut state, progress);
        self.write_json(&keys::checklist_state_key(&id), &state.checklist_state);
        self.persist_session(&state);

        log::debug!(
            "{} CHECKLIST_TOGGLED item={} done={} progress={}",
            self.session.app_context(&id),
            item_id,
            done,
            progress
        );
        Ok(())
    }

    /// Replace the uploads list wholesale.
    pub fn set_uploads(&self, uploads: Vec<UploadMeta>) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let id = current_id(&state)?;
        self.write_json(&keys::uploads_key(&id), &uploads);
        log::info!(
            "{} UPLOADS_SET count={}",
            self.session.app_context(&id),
            uploads.len()
        );
        state.uploads = uploads;
        Ok(())
    }

    /// Replace the extraction record wholesale.
    pub fn set_extraction(&self, extraction: ExtractionResult) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let id = current_id(&state)?;
        log::info!(
            "{} EXTRACTION_SET populated={}",
            self.session.app_context(&id),
            !extraction.is_empty()
        );
        state.extraction = extraction;
        Ok(())
    }

    /// Replace the field mapping wholesale.
    pub fn set_mapping(&self, mapping: Vec<MappingItem>) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let id = current_id(&state)?;
        log::info!(
            "{} MAPPING_SET count={}",
            self.session.app_context(&id),
            mapping.len()
        );
        state.mapping = mapping;
        Ok(())
    }

    /// Set or overwrite the user-edited value for a form field. Merged
    /// views and the export payload prefer this value over the mapping
    /// item's baked-in one.
    pub fn update_mapping_value(&self, form_field: &str, value: Value) -> Result<(), StoreError> {
        let mut state = self.state.write();
        let id = current_id(&state)?;
        state
            .mapping_overrides
            .insert(form_field.to_string(), value);
        self.write_json(&keys::mapping_overrides_key(&id), &state.mapping_overrides);
        log::debug!(
            "{} MAPPING_OVERRIDE field={}",
            self.session.app_context(&id),
            form_field
        );
        Ok(())
    }

    /// Apply a deferred processing outcome (extraction + mapping) for
    /// `app_id`. Dropped with `StaleUpdate` when that application is no
    /// longer current, so a late callback cannot corrupt another
    /// application's state.
    pub fn apply_processing_outcome(
        &self,
        app_id: &str,
        extraction: ExtractionResult,
        mapping: Vec<MappingItem>,
    ) -> Result<(), StoreError> {
        let mut state = self.state.write();
        if state.current_app_id.as_deref() != Some(app_id) {
            log::warn!(
                "{} STALE_OUTCOME_DROPPED app_id={} current={:?}",
                self.session.log_context(),
                app_id,
                state.current_app_id
            );
            return Err(StoreError::StaleUpdate(app_id.to_string()));
        }

        log::info!(
            "{} PROCESSING_APPLIED mappings={}",
            self.session.app_context(app_id),
            mapping.len()
        );
        state.extraction = extraction;
        state.mapping = mapping;
        Ok(())
    }

    /// Restore an application's persisted substate and re-derive the
    /// dependent fields (area, label, checklist) from the restored trip.
    fn restore_substate(&self, state: &mut AppState, id: &str) {
        state.trip = self.read_json(&keys::trip_key(id));
        state.checklist_state = self
            .read_json(&keys::checklist_state_key(id))
            .unwrap_or_default();
        state.uploads = self.read_json(&keys::uploads_key(id)).unwrap_or_default();
        state.mapping_overrides = self
            .read_json(&keys::mapping_overrides_key(id))
            .unwrap_or_default();
        state.extraction = ExtractionResult::empty();
        state.mapping = Vec::new();

        match state.trip.as_mut() {
            Some(trip) => {
                trip.destination =
                    visa_area_for_destination(trip.destination_country_alpha2.as_deref());
                trip.visa_type_label = visa_label_for(trip.destination);
                state.checklist =
                    generate_checklist(&self.catalog, trip.visa_type_label, &trip.dates);
            }
            None => state.checklist = Vec::new(),
        }
    }

    /// Persist the session-wide keys (application list + current id).
    fn persist_session(&self, state: &AppState) {
        self.write_json(&keys::applications_key(), &state.applications);
        match &state.current_app_id {
            Some(id) => self.write_json(&keys::current_app_key(), id),
            None => self.remove_key(&keys::current_app_key()),
        }
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.kv.get(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    log::warn!(
                        "{} STORAGE_DECODE_FAILED key={} error={}",
                        self.session.log_context(),
                        key,
                        e
                    );
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                log::warn!(
                    "{} STORAGE_READ_FAILED key={} error={:#}",
                    self.session.log_context(),
                    key,
                    e
                );
                None
            }
        }
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => {
                if let Err(e) = self.kv.set(key, &raw) {
                    log::warn!(
                        "{} STORAGE_WRITE_FAILED key={} error={:#}",
                        self.session.log_context(),
                        key,
                        e
                    );
                }
            }
            Err(e) => log::warn!(
                "{} STORAGE_ENCODE_FAILED key={} error={}",
                self.session.log_context(),
                key,
                e
            ),
        }
    }

    fn remove_key(&self, key: &str) {
        if let Err(e) = self.kv.remove(key) {
            log::warn!(
                "{} STORAGE_REMOVE_FAILED key={} error={:#}",
                self.session.log_context(),
                key,
                e
            );
        }
    }
}

fn current_id(state: &AppState) -> Result<ApplicationId, StoreError> {
    state
        .current_app_id
        .clone()
        .ok_or(StoreError::NoActiveApplication)
}

/// Reset the working substate to its fresh-application shape. The
/// application list and current id are left untouched.
fn clear_working_substate(state: &mut AppState) {
    state.trip = None;
    state.checklist = Vec::new();
    state.checklist_state = ChecklistState::new();
    state.uploads = Vec::new();
    state.extraction = ExtractionResult::empty();
    state.mapping = Vec::new();
    state.mapping_overrides = MappingOverrides::new();
}

/// Mirror the current trip and progress into the summary entry for the
/// current application.
fn sync_meta(state: &mut AppState, progress: u8) {
    let current = match &state.current_app_id {
        Some(id) => id.clone(),
        None => return,
    };
    let trip = state.trip.clone();
    if let Some(meta) = state.applications.iter_mut().find(|a| a.id == current) {
        if let Some(trip) = trip {
            meta.destination = trip.destination;
            meta.visa_type_label = trip.visa_type_label;
            meta.purpose = trip.purpose;
            meta.dates = trip.dates;
        }
        meta.progress_pct = progress;
    }
}
