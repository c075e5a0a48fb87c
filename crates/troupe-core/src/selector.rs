//! Typed filter predicates over the artist collection.
//!
//! A [`Selector`] starts empty (matching every record) and is built clause
//! by clause. [`Selector::to_json`] renders the store-native query syntax:
//! `$text`/`$search` for keyword search and `$gte`/`$lte` for inclusive
//! numeric ranges.
//!
//! Text clauses assume the store maintains a text index on the `name`
//! field. Stores allow a single text index per collection, which is why
//! `name` is the only text-searchable field; creating that index is a
//! manual operational step, not something this crate automates.

use serde_json::{json, Map, Value};

/// Numeric fields a range clause can constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeField {
    Age,
    YearsActive,
}

impl RangeField {
    /// The store-side spelling of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            RangeField::Age => "age",
            RangeField::YearsActive => "yearsActive",
        }
    }
}

/// One clause of a selector. All clauses must hold for a record to match.
#[derive(Debug, Clone, PartialEq)]
pub enum Clause {
    /// Keyword search against the text-indexed `name` field.
    Text { search: String },
    /// Inclusive numeric range on a single field.
    Range { field: RangeField, min: u32, max: u32 },
}

/// A filter predicate over the artist collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selector {
    clauses: Vec<Clause>,
}

impl Selector {
    /// An empty selector, matching every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when no clauses are attached.
    pub fn is_match_all(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Attach a keyword-search clause.
    ///
    /// Stores accept one text clause per predicate; when several are
    /// attached, the rendered predicate keeps the last.
    pub fn text(mut self, search: impl Into<String>) -> Self {
        self.clauses.push(Clause::Text {
            search: search.into(),
        });
        self
    }

    /// Attach an inclusive range clause on a numeric field.
    pub fn range(mut self, field: RangeField, min: u32, max: u32) -> Self {
        self.clauses.push(Clause::Range { field, min, max });
        self
    }

    /// Render the store-native predicate.
    ///
    /// An empty selector renders as `{}`, which the store treats as an
    /// unfiltered match.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();

        for clause in &self.clauses {
            match clause {
                Clause::Text { search } => {
                    map.insert("$text".to_string(), json!({ "$search": search }));
                }
                Clause::Range { field, min, max } => {
                    // Repeated clauses on one field intersect, matching
                    // the clause-by-clause AND evaluation backends apply.
                    let (mut lo, mut hi) = (*min, *max);
                    if let Some(existing) = map.get(field.as_str()) {
                        if let (Some(a), Some(b)) =
                            (existing["$gte"].as_u64(), existing["$lte"].as_u64())
                        {
                            lo = lo.max(a as u32);
                            hi = hi.min(b as u32);
                        }
                    }
                    map.insert(
                        field.as_str().to_string(),
                        json!({ "$gte": lo, "$lte": hi }),
                    );
                }
            }
        }

        Value::Object(map)
    }
}
