//! Wizard step progression.
//!
//! View-state bookkeeping for the four-step flow: step ordering, the trip
//! form validation that gates the first step, and the navigation-guard
//! predicate for warning about unsaved work.

use crate::model::TripSelections;
use crate::store::AppState;

/// The wizard's four steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    TripSetup,
    Checklist,
    UploadAndFill,
    Launch,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::TripSetup,
        WizardStep::Checklist,
        WizardStep::UploadAndFill,
        WizardStep::Launch,
    ];

    /// 1-based position shown in the step indicator.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::TripSetup => 1,
            WizardStep::Checklist => 2,
            WizardStep::UploadAndFill => 3,
            WizardStep::Launch => 4,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            WizardStep::TripSetup => "Trip setup",
            WizardStep::Checklist => "Checklist",
            WizardStep::UploadAndFill => "Upload & fill",
            WizardStep::Launch => "Launch",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::TripSetup => Some(WizardStep::Checklist),
            WizardStep::Checklist => Some(WizardStep::UploadAndFill),
            WizardStep::UploadAndFill => Some(WizardStep::Launch),
            WizardStep::Launch => None,
        }
    }

    pub fn back(&self) -> Option<WizardStep> {
        match self {
            WizardStep::TripSetup => None,
            WizardStep::Checklist => Some(WizardStep::TripSetup),
            WizardStep::UploadAndFill => Some(WizardStep::Checklist),
            WizardStep::Launch => Some(WizardStep::UploadAndFill),
        }
    }
}

/// One failed trip form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Validate the trip selections against the trip form rules. An empty
/// result means the form is complete.
pub fn validate_trip_form(trip: &TripSelections) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if trip.nationality_code.trim().is_empty() {
        errors.push(FieldError {
            field: "nationality_code",
            message: "Select nationality",
        });
    }
    if trip
        .destination_country_alpha2
        .as_deref()
        .map(|c| c.trim().is_empty())
        .unwrap_or(true)
    {
        errors.push(FieldError {
            field: "destination_country_alpha2",
            message: "Select destination",
        });
    }
    if trip.purpose.is_none() {
        errors.push(FieldError {
            field: "purpose",
            message: "Select purpose",
        });
    }
    if trip.dates.from.is_none() {
        errors.push(FieldError {
            field: "from",
            message: "Select start date",
        });
    }
    if trip.dates.to.is_none() {
        errors.push(FieldError {
            field: "to",
            message: "Select end date",
        });
    }

    errors
}

/// Whether the wizard may advance past `step`. Only the trip-setup step
/// is gated; later steps always allow forward navigation.
pub fn can_advance(step: WizardStep, trip: Option<&TripSelections>) -> bool {
    match step {
        WizardStep::TripSetup => trip.map(|t| validate_trip_form(t).is_empty()).unwrap_or(false),
        WizardStep::Checklist | WizardStep::UploadAndFill => true,
        WizardStep::Launch => false,
    }
}

/// Navigation guard: whether leaving the wizard would discard progress.
pub fn has_unsaved_changes(step: WizardStep, state: &AppState) -> bool {
    if step != WizardStep::TripSetup {
        return true;
    }
    let any_checked = state
        .checklist
        .iter()
        .any(|item| *state.checklist_state.get(&item.id).unwrap_or(&false));
    any_checked || !state.uploads.is_empty()
}
