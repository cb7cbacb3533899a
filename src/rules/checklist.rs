//! Checklist generation.
//!
//! Turns a visa-type label and a trip date range into an ordered list of
//! checklist items with computed due dates.

use chrono::{Duration, NaiveDate, Utc};

use crate::model::{ChecklistItem, DateRange};
use crate::rules::{RuleCatalog, VisaTypeLabel};

const ISO_DATE: &str = "%Y-%m-%d";

/// Generate the checklist for a visa label and trip dates.
///
/// Rules are emitted in catalog order, each with
/// `due_date = anchor - lead_days` where the anchor is `dates.to` when it
/// parses as an ISO date and today (UTC) otherwise. Every item starts with
/// `done = false` regardless of prior completion state.
///
/// Deterministic for a fixed `dates.to`; callers that need reproducible
/// output (tests, snapshots) must supply an explicit end date.
pub fn generate_checklist(
    catalog: &RuleCatalog,
    visa_label: Option<VisaTypeLabel>,
    dates: &DateRange,
) -> Vec<ChecklistItem> {
    let label = match visa_label {
        Some(label) => label,
        None => return Vec::new(),
    };

    let anchor = due_date_anchor(dates);

    catalog
        .rules_for(label)
        .iter()
        .map(|rule| ChecklistItem {
            id: rule.id.clone(),
            title: rule.title.clone(),
            description: rule.description.clone().unwrap_or_default(),
            category: rule.category,
            due_date: (anchor - Duration::days(i64::from(rule.lead_days)))
                .format(ISO_DATE)
                .to_string(),
            done: false,
        })
        .collect()
}

/// The date due dates count back from: the trip end when set and
/// parseable, today (UTC) otherwise.
fn due_date_anchor(dates: &DateRange) -> NaiveDate {
    dates
        .to
        .as_deref()
        .and_then(|to| NaiveDate::parse_from_str(to, ISO_DATE).ok())
        .unwrap_or_else(|| Utc::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChecklistCategory;

    fn catalog() -> RuleCatalog {
        RuleCatalog::builtin()
    }

    #[test]
    fn test_no_label_yields_empty_checklist() {
        let items = generate_checklist(&catalog(), None, &DateRange::empty());
        assert!(items.is_empty());
    }

    #[test]
    fn test_due_date_law() {
        // ds160 has a 30 day lead; 2025-06-30 - 30d = 2025-05-31.
        let range = DateRange::new("2025-06-01", "2025-06-30");
        let items = generate_checklist(&catalog(), Some(VisaTypeLabel::UsB1B2), &range);

        assert_eq!(items[0].id, "ds160");
        assert_eq!(items[0].due_date, "2025-05-31");
        assert_eq!(items[0].category, ChecklistCategory::Required);
        assert!(!items[0].done);
    }

    #[test]
    fn test_due_date_rolls_over_month_and_year() {
        let range = DateRange::new("2024-12-20", "2025-01-05");
        let items = generate_checklist(&catalog(), Some(VisaTypeLabel::UsB1B2), &range);

        // schedule: 15 day lead -> 2024-12-21; ds160: 30 day lead -> 2024-12-06.
        let schedule = items.iter().find(|i| i.id == "schedule").unwrap();
        assert_eq!(schedule.due_date, "2024-12-21");
        let ds160 = items.iter().find(|i| i.id == "ds160").unwrap();
        assert_eq!(ds160.due_date, "2024-12-06");
    }

    #[test]
    fn test_output_preserves_catalog_order() {
        let range = DateRange::new("2025-06-01", "2025-06-30");
        let items = generate_checklist(
            &catalog(),
            Some(VisaTypeLabel::SchengenCShortStay),
            &range,
        );

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["form_c", "photo", "insurance", "proof_funds"]);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let range = DateRange::new("2025-06-01", "2025-06-30");
        let first = generate_checklist(&catalog(), Some(VisaTypeLabel::UkStandardVisitor), &range);
        let second = generate_checklist(&catalog(), Some(VisaTypeLabel::UkStandardVisitor), &range);
        assert_eq!(first, second);
    }

    proptest::proptest! {
        #[test]
        fn prop_due_date_counts_back_exactly_lead_days(
            offset in 0i64..3650,
            lead in 0u32..365,
        ) {
            let to = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset);
            let mut catalog = RuleCatalog::new();
            catalog.load_from_rows(vec![(
                "US B1/B2".to_string(),
                "r1".to_string(),
                "Rule".to_string(),
                "Required".to_string(),
                lead,
                None,
            )]);
            let range = DateRange {
                from: None,
                to: Some(to.format(ISO_DATE).to_string()),
            };

            let items = generate_checklist(&catalog, Some(VisaTypeLabel::UsB1B2), &range);
            let due = NaiveDate::parse_from_str(&items[0].due_date, ISO_DATE).unwrap();
            proptest::prop_assert_eq!(due + Duration::days(i64::from(lead)), to);
        }
    }

    #[test]
    fn test_unparseable_end_date_falls_back_to_today() {
        let range = DateRange {
            from: None,
            to: Some("not-a-date".to_string()),
        };
        let items = generate_checklist(&catalog(), Some(VisaTypeLabel::UsB1B2), &range);

        let today = Utc::now().date_naive();
        let expected = (today - Duration::days(30)).format(ISO_DATE).to_string();
        assert_eq!(items[0].due_date, expected);
    }
}
