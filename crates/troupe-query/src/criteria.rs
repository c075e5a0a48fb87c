use serde::{Deserialize, Serialize};

use troupe_core::selector::{RangeField, Selector};

/// An inclusive numeric range, `min ..= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: u32,
    pub max: u32,
}

/// Caller-supplied search criteria.
///
/// Absent fields leave the matching dimension unconstrained; a default
/// criteria matches the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
    /// Keyword search over the text-indexed artist name.
    pub name: Option<String>,
    /// Inclusive age range.
    pub age: Option<NumericRange>,
    /// Inclusive range on years active.
    #[serde(rename = "yearsActive")]
    pub years_active: Option<NumericRange>,
}

/// Translate criteria into a store selector.
///
/// Pure; issues no queries. An empty name string is treated like an absent
/// name.
pub fn build_selector(criteria: &Criteria) -> Selector {
    let mut selector = Selector::new();

    if let Some(name) = criteria.name.as_deref() {
        if !name.is_empty() {
            selector = selector.text(name);
        }
    }

    if let Some(age) = criteria.age {
        selector = selector.range(RangeField::Age, age.min, age.max);
    }

    if let Some(years) = criteria.years_active {
        selector = selector.range(RangeField::YearsActive, years.min, years.max);
    }

    selector
}
