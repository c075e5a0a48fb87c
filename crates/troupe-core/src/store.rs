use async_trait::async_trait;

use crate::artist::Artist;
use crate::error::Result;
use crate::selector::Selector;

/// Sort direction for a find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Single-field sort specification.
#[derive(Debug, Clone, PartialEq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Options for a find against the artist collection.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// The predicate to match records against.
    pub selector: Selector,
    /// Sort specification. `None` leaves the order up to the store.
    pub sort: Option<Sort>,
    /// Number of matching records to skip.
    pub skip: Option<u64>,
    /// Maximum number of records to return.
    pub limit: Option<u64>,
}

/// The trait all store backends implement.
///
/// The artist collection is externally owned; backends expose read-only
/// query access and nothing else. Consistency and isolation between the
/// two round-trips an operation issues are entirely the store's concern.
///
/// Every error a backend raises passes through to the caller unmodified.
#[async_trait]
pub trait Store: Send + Sync {
    /// Fetch artists matching the selector, optionally sorted, skipped,
    /// and limited.
    async fn find(&self, opts: FindOptions) -> Result<Vec<Artist>>;

    /// Count every artist matching the selector, ignoring pagination.
    async fn count(&self, selector: &Selector) -> Result<u64>;
}
