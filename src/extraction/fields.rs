//! Extracted identity fields.
//!
//! Fixed-shape record of the fields the document-processing collaborator
//! extracts from an uploaded passport or supporting document. Serialized
//! field names match the processing payload (camelCase).

use serde::{Deserialize, Serialize};

/// Identity fields extracted from an uploaded document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub full_name: String,
    pub date_of_birth: String,
    pub passport_number: String,
    pub nationality: String,
    pub expiry: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
    pub purpose_of_trip: String,
    pub intended_arrival_date: String,
    pub intended_departure_date: String,
    #[serde(rename = "bankBalanceHKD")]
    pub bank_balance_hkd: i64,
}

impl ExtractionResult {
    /// All-empty placeholder shown before any document is processed.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::empty()
    }
}

/// Human-readable label for an extracted field key.
pub fn display_name(key: &str) -> &str {
    match key {
        "fullName" => "Full Name",
        "dateOfBirth" => "Date of Birth",
        "passportNumber" => "Passport Number",
        "nationality" => "Nationality",
        "expiry" => "Expiry Date",
        "address" => "Address",
        "phoneNumber" => "Phone Number",
        "email" => "Email",
        "purposeOfTrip" => "Purpose of Trip",
        "intendedArrivalDate" => "Intended Arrival Date",
        "intendedDepartureDate" => "Intended Departure Date",
        "bankBalanceHKD" => "Bank Balance (HKD)",
        other => other,
    }
}
