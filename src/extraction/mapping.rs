//! Extracted-field to form-field mapping.
//!
//! Associates extracted identity fields with destination form fields.
//! User edits live in a separate override map; merged views and the export
//! payload always prefer the override over the baked-in value.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::rules::VisaTypeLabel;

/// Confidence tag attached by the processing collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// One extracted-key -> form-field association.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingItem {
    /// Field of `ExtractionResult` the value came from (camelCase key).
    pub extracted_key: String,
    /// Destination form field name.
    pub form_field: String,
    /// String or number.
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
}

/// User-edited replacement values, form field -> value.
pub type MappingOverrides = HashMap<String, Value>;

/// Mapping items with any overrides applied.
pub fn merged_mapping(mapping: &[MappingItem], overrides: &MappingOverrides) -> Vec<MappingItem> {
    mapping
        .iter()
        .map(|item| {
            let mut merged = item.clone();
            if let Some(value) = overrides.get(&item.form_field) {
                merged.value = value.clone();
            }
            merged
        })
        .collect()
}

/// The JSON payload exported for form filling:
/// `{ "visaType": .., "mappings": [..] }` with overrides applied.
pub fn export_payload(
    visa_label: Option<VisaTypeLabel>,
    mapping: &[MappingItem],
    overrides: &MappingOverrides,
) -> Value {
    json!({
        "visaType": visa_label.map(|l| l.as_str().to_string()),
        "mappings": merged_mapping(mapping, overrides),
    })
}
