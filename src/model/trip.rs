//! Trip selection records.
//!
//! One traveler's trip intent for a single application. The derived fields
//! (`destination`, `visa_type_label`) are recomputed by the rule engine on
//! every trip mutation and are never set independently.

use serde::{Deserialize, Serialize};

use crate::rules::{VisaArea, VisaTypeLabel};

/// Purpose of the trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purpose {
    Tourist,
    Business,
}

impl Purpose {
    pub fn as_str(&self) -> &str {
        match self {
            Purpose::Tourist => "Tourist",
            Purpose::Business => "Business",
        }
    }
}

/// A calendar date range, each bound an ISO date string (YYYY-MM-DD).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl DateRange {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: Some(from.to_string()),
            to: Some(to.to_string()),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }
}

/// Default nationality preselected for a fresh application (ISO alpha-3).
pub const DEFAULT_NATIONALITY: &str = "CHN";

/// One traveler's trip intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripSelections {
    /// ISO alpha-3 nationality code, e.g. "CHN".
    pub nationality_code: String,
    /// Chosen destination country by ISO alpha-2 code.
    pub destination_country_alpha2: Option<String>,
    /// Derived visa area; always the rule-engine output of
    /// `destination_country_alpha2`.
    pub destination: Option<VisaArea>,
    pub purpose: Option<Purpose>,
    pub dates: DateRange,
    /// Derived visa-type label; always the rule-engine output of `destination`.
    pub visa_type_label: Option<VisaTypeLabel>,
}

impl TripSelections {
    /// Fresh selections for a newly created application.
    pub fn new_default() -> Self {
        Self {
            nationality_code: DEFAULT_NATIONALITY.to_string(),
            destination_country_alpha2: None,
            destination: None,
            purpose: Some(Purpose::Tourist),
            dates: DateRange::empty(),
            visa_type_label: None,
        }
    }
}

impl Default for TripSelections {
    fn default() -> Self {
        Self::new_default()
    }
}

/// Explicit update struct for trip mutations.
///
/// One named optional slot per mutable field; `None` leaves the field
/// unchanged, `Some(None)` clears a clearable field. The derived fields
/// (`destination`, `visa_type_label`) are deliberately absent: the store
/// recomputes them from the merged selections.
#[derive(Debug, Clone, Default)]
pub struct TripPatch {
    pub nationality_code: Option<String>,
    pub destination_country_alpha2: Option<Option<String>>,
    pub purpose: Option<Option<Purpose>>,
    pub dates: Option<DateRange>,
}

impl TripPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn nationality(mut self, code: &str) -> Self {
        self.nationality_code = Some(code.to_string());
        self
    }

    pub fn destination_country(mut self, alpha2: &str) -> Self {
        self.destination_country_alpha2 = Some(Some(alpha2.to_string()));
        self
    }

    pub fn clear_destination_country(mut self) -> Self {
        self.destination_country_alpha2 = Some(None);
        self
    }

    pub fn purpose(mut self, purpose: Purpose) -> Self {
        self.purpose = Some(Some(purpose));
        self
    }

    pub fn dates(mut self, dates: DateRange) -> Self {
        self.dates = Some(dates);
        self
    }

    /// Merge the patched fields into `trip`. Derived fields are left for the
    /// caller to recompute.
    pub fn apply_to(&self, trip: &mut TripSelections) {
        if let Some(code) = &self.nationality_code {
            trip.nationality_code = code.clone();
        }
        if let Some(alpha2) = &self.destination_country_alpha2 {
            trip.destination_country_alpha2 = alpha2.clone();
        }
        if let Some(purpose) = &self.purpose {
            trip.purpose = *purpose;
        }
        if let Some(dates) = &self.dates {
            trip.dates = dates.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_merges_only_named_fields() {
        let mut trip = TripSelections::new_default();
        trip.dates = DateRange::new("2025-06-01", "2025-06-30");

        let patch = TripPatch::new().destination_country("FR");
        patch.apply_to(&mut trip);

        assert_eq!(trip.destination_country_alpha2.as_deref(), Some("FR"));
        assert_eq!(trip.nationality_code, DEFAULT_NATIONALITY);
        assert_eq!(trip.dates, DateRange::new("2025-06-01", "2025-06-30"));
    }

    #[test]
    fn test_patch_can_clear_destination() {
        let mut trip = TripSelections::new_default();
        trip.destination_country_alpha2 = Some("US".to_string());

        let patch = TripPatch::new().clear_destination_country();
        patch.apply_to(&mut trip);

        assert_eq!(trip.destination_country_alpha2, None);
    }
}
