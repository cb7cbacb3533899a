//! Visa area mapping.
//!
//! Maps a destination country to its visa area and a visa area to the
//! visa-type label shown to the user.

use std::collections::HashSet;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Schengen-area member states by ISO alpha-2 code.
    static ref SCHENGEN_ALPHA2: HashSet<&'static str> = [
        "AT", "BE", "CZ", "DK", "EE", "FI", "FR", "DE", "GR", "HU", "IS",
        "IT", "LV", "LI", "LT", "LU", "MT", "NL", "NO", "PL", "PT", "SK",
        "SI", "ES", "SE", "CH",
    ]
    .iter()
    .copied()
    .collect();
}

/// Visa area a destination country falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisaArea {
    #[serde(rename = "US")]
    Us,
    Schengen,
    #[serde(rename = "UK")]
    Uk,
}

impl VisaArea {
    pub fn as_str(&self) -> &str {
        match self {
            VisaArea::Us => "US",
            VisaArea::Schengen => "Schengen",
            VisaArea::Uk => "UK",
        }
    }
}

/// Visa-type display label for a visa area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisaTypeLabel {
    #[serde(rename = "US B1/B2")]
    UsB1B2,
    #[serde(rename = "Schengen C Short-Stay")]
    SchengenCShortStay,
    #[serde(rename = "UK Standard Visitor")]
    UkStandardVisitor,
}

impl VisaTypeLabel {
    pub fn as_str(&self) -> &str {
        match self {
            VisaTypeLabel::UsB1B2 => "US B1/B2",
            VisaTypeLabel::SchengenCShortStay => "Schengen C Short-Stay",
            VisaTypeLabel::UkStandardVisitor => "UK Standard Visitor",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "US B1/B2" => Some(VisaTypeLabel::UsB1B2),
            "Schengen C Short-Stay" => Some(VisaTypeLabel::SchengenCShortStay),
            "UK Standard Visitor" => Some(VisaTypeLabel::UkStandardVisitor),
            _ => None,
        }
    }
}

impl std::fmt::Display for VisaTypeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Determine the visa area for a destination country.
///
/// Case-insensitive on the alpha-2 code. Countries outside the supported
/// areas (and empty/absent input) map to `None`; never panics.
pub fn visa_area_for_destination(alpha2: Option<&str>) -> Option<VisaArea> {
    let code = alpha2?.trim().to_uppercase();
    if code.is_empty() {
        return None;
    }
    if code == "US" {
        return Some(VisaArea::Us);
    }
    if code == "GB" {
        return Some(VisaArea::Uk);
    }
    if SCHENGEN_ALPHA2.contains(code.as_str()) {
        return Some(VisaArea::Schengen);
    }
    None
}

/// Total mapping from visa area to visa-type label, `None` in and out.
pub fn visa_label_for(area: Option<VisaArea>) -> Option<VisaTypeLabel> {
    area.map(|a| match a {
        VisaArea::Us => VisaTypeLabel::UsB1B2,
        VisaArea::Schengen => VisaTypeLabel::SchengenCShortStay,
        VisaArea::Uk => VisaTypeLabel::UkStandardVisitor,
    })
}
