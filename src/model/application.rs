//! Application summary records.

use serde::{Deserialize, Serialize};

use crate::model::trip::{DateRange, Purpose};
use crate::rules::{VisaArea, VisaTypeLabel};

/// Opaque application identifier. Generated locally for new applications;
/// a trip id assigned by the persistence backend fits the same slot.
pub type ApplicationId = String;

/// Summary record per application, mirrored from the working substate on
/// every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationMeta {
    pub id: ApplicationId,
    pub destination: Option<VisaArea>,
    pub visa_type_label: Option<VisaTypeLabel>,
    pub purpose: Option<Purpose>,
    pub dates: DateRange,
    /// 0-100, rounded to the nearest integer percent.
    pub progress_pct: u8,
}

impl ApplicationMeta {
    /// Empty summary for a newly created application.
    pub fn empty(id: &str) -> Self {
        Self {
            id: id.to_string(),
            destination: None,
            visa_type_label: None,
            purpose: None,
            dates: DateRange::empty(),
            progress_pct: 0,
        }
    }
}
