//! Checklist rule catalog.
//!
//! The per-visa-label rule tables are configuration data, not code: the
//! built-in catalog carries demo rules, and `load_from_rows` replaces them
//! wholesale (e.g. from a rules table) without touching the engine.

use std::collections::HashMap;

use crate::model::ChecklistCategory;
use crate::rules::VisaTypeLabel;

/// One checklist rule: a document/task requirement with its lead time
/// before the trip end date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistRule {
    pub id: String,
    pub title: String,
    pub category: ChecklistCategory,
    pub lead_days: u32,
    pub description: Option<String>,
}

/// Ordered rule tables keyed by visa-type label.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    rules: HashMap<VisaTypeLabel, Vec<ChecklistRule>>,
}

impl RuleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules for a visa label, in declared order.
    ///
    /// A label missing from the catalog (possible when the enumeration is
    /// extended without updating the table) yields an empty slice and a
    /// configuration warning rather than a panic.
    pub fn rules_for(&self, label: VisaTypeLabel) -> &[ChecklistRule] {
        match self.rules.get(&label) {
            Some(rules) => rules,
            None => {
                log::warn!("RULES_MISSING visa_label={:?}", label.as_str());
                &[]
            }
        }
    }

    pub fn labels(&self) -> Vec<VisaTypeLabel> {
        self.rules.keys().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Replace the catalog from flat rows.
    ///
    /// # Arguments
    /// * `rows` - (visa_label, rule_id, title, category, lead_days, description)
    ///
    /// Row order within each label is preserved. Rows with an unknown label
    /// or category are skipped with a warning.
    pub fn load_from_rows(
        &mut self,
        rows: Vec<(String, String, String, String, u32, Option<String>)>,
    ) {
        let mut tables: HashMap<VisaTypeLabel, Vec<ChecklistRule>> = HashMap::new();
        let mut skipped = 0;

        for (label_str, id, title, category_str, lead_days, description) in rows {
            let label = VisaTypeLabel::parse(&label_str);
            let category = ChecklistCategory::parse(&category_str);

            match (label, category) {
                (Some(label), Some(category)) => {
                    tables.entry(label).or_default().push(ChecklistRule {
                        id,
                        title,
                        category,
                        lead_days,
                        description,
                    });
                }
                _ => {
                    log::warn!(
                        "RULES_ROW_SKIPPED visa_label={:?} rule_id={:?} category={:?}",
                        label_str,
                        id,
                        category_str
                    );
                    skipped += 1;
                }
            }
        }

        self.rules = tables;

        log::info!(
            "RULES_LOADED labels={:?} rule_counts={:?} skipped={}",
            self.rules.keys().map(|l| l.as_str()).collect::<Vec<_>>(),
            self.rules
                .iter()
                .map(|(l, r)| (l.as_str(), r.len()))
                .collect::<Vec<_>>(),
            skipped
        );
    }

    /// The built-in demo catalog.
    pub fn builtin() -> Self {
        let mut rules = HashMap::new();

        rules.insert(
            VisaTypeLabel::UsB1B2,
            vec![
                rule_desc(
                    "ds160",
                    "Complete DS-160",
                    ChecklistCategory::Required,
                    30,
                    "Fill the DS-160 online application form.",
                ),
                rule("photo", "US visa photo (2x2)", ChecklistCategory::Required, 25),
                rule(
                    "proof_funds",
                    "Proof of funds",
                    ChecklistCategory::Recommended,
                    20,
                ),
                rule(
                    "schedule",
                    "Schedule consular interview",
                    ChecklistCategory::Required,
                    15,
                ),
            ],
        );

        rules.insert(
            VisaTypeLabel::SchengenCShortStay,
            vec![
                rule(
                    "form_c",
                    "Complete Schengen form",
                    ChecklistCategory::Required,
                    28,
                ),
                rule("photo", "Schengen visa photo", ChecklistCategory::Required, 22),
                rule(
                    "insurance",
                    "Travel insurance (EUR 30k)",
                    ChecklistCategory::Required,
                    18,
                ),
                rule(
                    "proof_funds",
                    "Proof of funds",
                    ChecklistCategory::Recommended,
                    20,
                ),
            ],
        );

        rules.insert(
            VisaTypeLabel::UkStandardVisitor,
            vec![
                rule_desc(
                    "passport_bio_scan",
                    "Passport biodata page scan",
                    ChecklistCategory::Required,
                    28,
                    "Clear color scan of the passport biodata page (valid 6+ months, 1+ blank page)",
                ),
                rule_desc(
                    "hkid_copy",
                    "HKID copy",
                    ChecklistCategory::Required,
                    25,
                    "Copy of Hong Kong Identity Card (for HK SAR applicants)",
                ),
                rule_desc(
                    "application_payment",
                    "Visa application payment/booking confirmation",
                    ChecklistCategory::Required,
                    28,
                    "PDF receipt or booking confirmation from UKVI",
                ),
                rule_desc(
                    "accommodation",
                    "Accommodation booking or host address",
                    ChecklistCategory::Required,
                    21,
                    "Hotel booking OR full UK host address and dates",
                ),
                rule_desc(
                    "flight_reservation",
                    "Flight reservation / draft itinerary",
                    ChecklistCategory::Recommended,
                    14,
                    "No purchase required; provide a reservation or proposed itinerary",
                ),
                rule_desc(
                    "trip_plan",
                    "Short trip plan/itinerary",
                    ChecklistCategory::Recommended,
                    14,
                    "Outline where you will visit and on which dates",
                ),
                rule_desc(
                    "bank_statements",
                    "Bank statements (last 6 months)",
                    ChecklistCategory::Required,
                    20,
                    "Download official e-statements or stamped statements",
                ),
                rule_desc(
                    "payslips",
                    "Payslips (3\u{2013}6 months) or business proofs",
                    ChecklistCategory::Required,
                    20,
                    "If self-employed: BR cert, tax returns, invoices, bank in/out",
                ),
                rule_desc(
                    "employer_letter",
                    "Employer letter (role, salary, approved leave)",
                    ChecklistCategory::Required,
                    18,
                    "On company letterhead with contact details and signature",
                ),
                rule_desc(
                    "sponsor_docs",
                    "Sponsorship documents (if sponsored)",
                    ChecklistCategory::Recommended,
                    18,
                    "Sponsor letter, bank statements, and ID/status copy",
                ),
                rule(
                    "ties_employment",
                    "Employment contract / confirmation of employment",
                    ChecklistCategory::Recommended,
                    16,
                ),
                rule(
                    "ties_property",
                    "Property deed / tenancy / business ownership proof",
                    ChecklistCategory::Recommended,
                    16,
                ),
                rule_desc(
                    "previous_visas",
                    "Previous visas and travel history",
                    ChecklistCategory::Recommended,
                    12,
                    "Scans of visas/stamps, especially UK/Schengen/US if any",
                ),
                rule(
                    "travel_insurance",
                    "Travel insurance (recommended)",
                    ChecklistCategory::Recommended,
                    10,
                ),
                rule(
                    "cover_letter",
                    "Cover letter (purpose, dates, funding, ties)",
                    ChecklistCategory::Recommended,
                    12,
                ),
                rule_desc(
                    "invitation_letter",
                    "Invitation letter + host's UK status + relationship proof",
                    ChecklistCategory::Recommended,
                    21,
                    "Only if visiting friends/family",
                ),
                rule_desc(
                    "minors_documents",
                    "Minors: birth certificate and parental consent",
                    ChecklistCategory::Recommended,
                    25,
                    "If the applicant is under 18 or travelling with one parent/guardian",
                ),
            ],
        );

        Self { rules }
    }
}

fn rule(id: &str, title: &str, category: ChecklistCategory, lead_days: u32) -> ChecklistRule {
    ChecklistRule {
        id: id.to_string(),
        title: title.to_string(),
        category,
        lead_days,
        description: None,
    }
}

fn rule_desc(
    id: &str,
    title: &str,
    category: ChecklistCategory,
    lead_days: u32,
    description: &str,
) -> ChecklistRule {
    ChecklistRule {
        id: id.to_string(),
        title: title.to_string(),
        category,
        lead_days,
        description: Some(description.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_label() {
        let catalog = RuleCatalog::builtin();
        for label in [
            VisaTypeLabel::UsB1B2,
            VisaTypeLabel::SchengenCShortStay,
            VisaTypeLabel::UkStandardVisitor,
        ] {
            assert!(
                !catalog.rules_for(label).is_empty(),
                "no rules for {}",
                label
            );
        }
    }

    #[test]
    fn test_builtin_ids_unique_per_label() {
        let catalog = RuleCatalog::builtin();
        for label in catalog.labels() {
            let rules = catalog.rules_for(label);
            let mut ids: Vec<&str> = rules.iter().map(|r| r.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), rules.len(), "duplicate rule id under {}", label);
        }
    }

    #[test]
    fn test_load_from_rows_preserves_order() {
        let mut catalog = RuleCatalog::new();
        catalog.load_from_rows(vec![
            (
                "US B1/B2".to_string(),
                "second".to_string(),
                "Second".to_string(),
                "Recommended".to_string(),
                5,
                None,
            ),
            (
                "US B1/B2".to_string(),
                "first".to_string(),
                "First".to_string(),
                "Required".to_string(),
                10,
                Some("desc".to_string()),
            ),
        ]);

        let rules = catalog.rules_for(VisaTypeLabel::UsB1B2);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].id, "second");
        assert_eq!(rules[1].id, "first");
    }

    #[test]
    fn test_load_from_rows_skips_unknown_rows() {
        let mut catalog = RuleCatalog::new();
        catalog.load_from_rows(vec![
            (
                "Moon Tourist".to_string(),
                "x".to_string(),
                "X".to_string(),
                "Required".to_string(),
                1,
                None,
            ),
            (
                "UK Standard Visitor".to_string(),
                "y".to_string(),
                "Y".to_string(),
                "Optional".to_string(),
                1,
                None,
            ),
        ]);

        assert!(catalog.is_empty());
    }

    #[test]
    fn test_missing_label_yields_empty() {
        let catalog = RuleCatalog::new();
        assert!(catalog.rules_for(VisaTypeLabel::UsB1B2).is_empty());
    }
}
