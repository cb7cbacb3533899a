//! Visa rule engine.
//!
//! Pure derivation logic for the wizard:
//! - Destination country -> visa area -> visa-type label
//! - (visa label, date range) -> ordered checklist with due dates
//!
//! Rule tables live in a swappable `RuleCatalog`; the built-in catalog
//! carries demo data only.

pub mod area;
pub mod catalog;
pub mod checklist;

pub use area::*;
pub use catalog::*;
pub use checklist::*;
