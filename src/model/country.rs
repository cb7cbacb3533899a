//! Country records from the country-list provider.
//!
//! The provider returns the raw REST Countries payload; `parse_countries`
//! normalizes it to the fields the trip-setup UI needs (display name plus
//! alpha-2/alpha-3 codes). The rule engine itself consumes raw alpha-2
//! codes and never touches this type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Normalized country entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub official_name: Option<String>,
    pub alpha2: String,
    pub alpha3: String,
    pub flag_url: String,
    pub demonym: Option<String>,
}

/// Normalize the provider payload into an ordered-by-name country list.
///
/// Rows missing a common name or either ISO code are dropped. A missing
/// flag URL falls back to the flagcdn pattern for the alpha-2 code.
pub fn parse_countries(data: &Value) -> Vec<Country> {
    let rows = match data.as_array() {
        Some(rows) => rows,
        None => return Vec::new(),
    };

    let mut countries: Vec<Country> = rows
        .iter()
        .filter_map(|row| {
            let name = row
                .get("name")
                .and_then(|n| n.get("common"))
                .and_then(|v| v.as_str())?;
            let alpha2 = row.get("cca2").and_then(|v| v.as_str())?.to_uppercase();
            let alpha3 = row.get("cca3").and_then(|v| v.as_str())?.to_uppercase();
            if alpha2.is_empty() || alpha3.is_empty() {
                return None;
            }

            let official_name = row
                .get("name")
                .and_then(|n| n.get("official"))
                .and_then(|v| v.as_str())
                .map(|s| s.to_string());

            let flag_url = row
                .get("flags")
                .and_then(|f| f.get("svg"))
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
                .unwrap_or_else(|| {
                    format!("https://flagcdn.com/{}.svg", alpha2.to_lowercase())
                });

            let demonym = row
                .get("demonyms")
                .and_then(|d| d.get("eng"))
                .and_then(|e| e.get("m").or_else(|| e.get("f")))
                .and_then(|v| v.as_str())
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string());

            Some(Country {
                name: name.to_string(),
                official_name,
                alpha2,
                alpha3,
                flag_url,
                demonym,
            })
        })
        .collect();

    countries.sort_by(|a, b| a.name.cmp(&b.name));
    countries
}
