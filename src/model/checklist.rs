//! Checklist records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Document/task requirement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChecklistCategory {
    Required,
    Recommended,
}

impl ChecklistCategory {
    pub fn as_str(&self) -> &str {
        match self {
            ChecklistCategory::Required => "Required",
            ChecklistCategory::Recommended => "Recommended",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Required" => Some(ChecklistCategory::Required),
            "Recommended" => Some(ChecklistCategory::Recommended),
            _ => None,
        }
    }
}

/// One document/task requirement on the checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Stable identifier, unique within the checklist for a visa type.
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ChecklistCategory,
    /// ISO calendar date (YYYY-MM-DD), trip end minus the rule's lead time.
    pub due_date: String,
    /// Default completion flag at generation time; live completion is
    /// tracked separately in `ChecklistState`.
    pub done: bool,
}

/// Live completion state, item id -> done. Overlays the `done` flag baked
/// into freshly generated items.
pub type ChecklistState = HashMap<String, bool>;
