//! Demo extraction fixtures.
//!
//! The processing collaborator is mocked in this build: after a simulated
//! delay it hands back this fixed record and mapping instead of real OCR
//! output. Demo data only; carries no correctness guarantees.

use serde_json::json;

use crate::extraction::fields::ExtractionResult;
use crate::extraction::mapping::{Confidence, MappingItem};

/// The hardcoded identity record substituted after the processing delay.
pub fn demo_extraction() -> ExtractionResult {
    ExtractionResult {
        full_name: "WONG Ka Ming".to_string(),
        date_of_birth: "1992-05-15".to_string(),
        passport_number: "G12345678".to_string(),
        nationality: "China".to_string(),
        expiry: "2031-12-29".to_string(),
        address: "Room 1203, Tower 2, Jianguo Garden, Chaoyang, Beijing, China".to_string(),
        phone_number: "+852 9237 4207".to_string(),
        email: "kmwong@gmail.com".to_string(),
        purpose_of_trip: "Tourism".to_string(),
        intended_arrival_date: "2025-12-15".to_string(),
        intended_departure_date: "2026-01-05".to_string(),
        bank_balance_hkd: 285_000,
    }
}

/// Form-field mapping for the demo record.
///
/// Confidence reflects how the value was obtained: copied straight from an
/// extracted field (high), lightly normalized (medium), or guessed from an
/// unrelated field (low).
pub fn demo_mapping() -> Vec<MappingItem> {
    fn item(
        extracted_key: &str,
        form_field: &str,
        value: serde_json::Value,
        confidence: Confidence,
    ) -> MappingItem {
        MappingItem {
            extracted_key: extracted_key.to_string(),
            form_field: form_field.to_string(),
            value,
            confidence: Some(confidence),
        }
    }

    vec![
        item(
            "fullName",
            "applicant_name",
            json!("WONG Ka Ming"),
            Confidence::High,
        ),
        item(
            "dateOfBirth",
            "date_of_birth",
            json!("1992-05-15"),
            Confidence::High,
        ),
        item(
            "passportNumber",
            "passport_number",
            json!("H9876543"),
            Confidence::Medium,
        ),
        item(
            "nationality",
            "passport_nationality",
            json!("China"),
            Confidence::High,
        ),
        item(
            "expiry",
            "passport_expiry",
            json!("2031-12-29"),
            Confidence::High,
        ),
        item(
            "address",
            "residential_address",
            json!("Room 1203, Tower 2, Jianguo Garden, Chaoyang, Beijing, China"),
            Confidence::High,
        ),
        item(
            "phoneNumber",
            "phone_number",
            json!("+852 92374207"),
            Confidence::Medium,
        ),
        item(
            "fullName",
            "email_address",
            json!("kmwong@gmail.com"),
            Confidence::Low,
        ),
        item(
            "nationality",
            "purpose_of_trip",
            json!("Tourism"),
            Confidence::Low,
        ),
        item(
            "expiry",
            "arrival_date",
            json!("2025-12-15"),
            Confidence::Low,
        ),
        item(
            "expiry",
            "departure_date",
            json!("2026-01-05"),
            Confidence::Low,
        ),
        item(
            "bankBalanceHKD",
            "financial_proof_amount",
            json!("285000"),
            Confidence::Medium,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_extraction_is_populated() {
        let extraction = demo_extraction();
        assert!(!extraction.is_empty());
        assert_eq!(extraction.passport_number, "G12345678");
        assert_eq!(extraction.bank_balance_hkd, 285_000);
    }

    #[test]
    fn test_demo_mapping_form_fields_unique() {
        let mapping = demo_mapping();
        let mut fields: Vec<&str> = mapping.iter().map(|m| m.form_field.as_str()).collect();
        fields.sort_unstable();
        fields.dedup();
        assert_eq!(fields.len(), mapping.len());
    }

    #[test]
    fn test_demo_mapping_keys_are_extraction_fields() {
        let extraction_json = serde_json::to_value(demo_extraction()).unwrap();
        for item in demo_mapping() {
            assert!(
                extraction_json.get(&item.extracted_key).is_some(),
                "unknown extracted key {}",
                item.extracted_key
            );
        }
    }
}
