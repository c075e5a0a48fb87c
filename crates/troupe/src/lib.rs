//! # Troupe
//!
//! Typed query helpers over an externally-owned artist collection.
//!
//! Troupe does not own any data. It translates application-level criteria
//! into store-native predicates and delegates matching, sorting,
//! pagination, and counting to whichever [`Store`] backend it is handed —
//! an in-memory collection for tests or a remote store over HTTP.
//!
//! ## Quick start
//!
//! ```no_run
//! use troupe::{Criteria, Directory, NumericRange, Page};
//!
//! # async fn example() -> troupe::Result<()> {
//! // Remote collection behind a Mango-style HTTP endpoint
//! let directory = Directory::http("http://localhost:5984/artists");
//!
//! // Youngest and oldest artist on file
//! let ages = directory.age_range().await?;
//!
//! // Filtered, sorted, paginated search with a total match count
//! let criteria = Criteria {
//!     age: Some(NumericRange { min: 22, max: 30 }),
//!     ..Criteria::default()
//! };
//! let result = directory.search(&criteria, "age", Page::default()).await?;
//! println!("{} of {} artists", result.all.len(), result.count);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

// Re-export core types
pub use troupe_core::artist::Artist;
pub use troupe_core::error::{Result, TroupeError};
pub use troupe_core::selector::{Clause, RangeField, Selector};
pub use troupe_core::store::{FindOptions, Sort, SortDirection, Store};

// Re-export store backends
pub use troupe_adapter_http::HttpStore;
pub use troupe_adapter_memory::MemoryStore;

// Re-export query operations
pub use troupe_query::{
    age_range, build_selector, search, AgeRange, Criteria, NumericRange, Page, SearchResult,
};

/// A handle to the artist collection through any store backend.
pub struct Directory {
    store: Arc<dyn Store>,
}

impl Directory {
    /// An empty in-memory collection (for tests).
    pub fn memory() -> Self {
        Self {
            store: Arc::new(MemoryStore::new()),
        }
    }

    /// A remote collection over HTTP.
    pub fn http(url: &str) -> Self {
        Self {
            store: Arc::new(HttpStore::new(url)),
        }
    }

    /// Wrap any store implementation.
    pub fn from_store(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Reference to the underlying store.
    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }

    /// Lowest and highest artist age on file.
    ///
    /// Errors with [`TroupeError::EmptyCollection`] when there are no
    /// artists.
    pub async fn age_range(&self) -> Result<AgeRange> {
        age_range(self.store.as_ref()).await
    }

    /// Filtered, sorted, paginated search with a total match count.
    pub async fn search(
        &self,
        criteria: &Criteria,
        sort_property: &str,
        page: Page,
    ) -> Result<SearchResult> {
        search(self.store.as_ref(), criteria, sort_property, page).await
    }
}
