use serde::Serialize;
use tracing::debug;

use troupe_core::artist::Artist;
use troupe_core::error::Result;
use troupe_core::store::{FindOptions, Sort, Store};

use crate::criteria::{build_selector, Criteria};

/// Pagination window. The default is the first 20 records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u64,
    pub limit: u64,
}

impl Default for Page {
    fn default() -> Self {
        Page {
            offset: 0,
            limit: 20,
        }
    }
}

impl Page {
    pub fn new(offset: u64, limit: u64) -> Self {
        Page { offset, limit }
    }
}

/// One page of matching artists plus the unpaginated match count.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    /// At most `limit` artists starting at `offset` in sort order.
    pub all: Vec<Artist>,
    /// Total records matching the criteria, independent of the window.
    pub count: u64,
    pub offset: u64,
    pub limit: u64,
}

/// Search the artist collection.
///
/// Translates `criteria` into a selector, then concurrently fetches one
/// page (sorted ascending by `sort_property`, skipping `page.offset`,
/// limited to `page.limit`) and counts every match. Store errors such as
/// an invalid sort field propagate unmodified.
pub async fn search(
    store: &dyn Store,
    criteria: &Criteria,
    sort_property: &str,
    page: Page,
) -> Result<SearchResult> {
    let selector = build_selector(criteria);
    debug!(
        selector = %selector.to_json(),
        sort_property,
        offset = page.offset,
        limit = page.limit,
        "searching artists"
    );

    let matches = store.find(FindOptions {
        selector: selector.clone(),
        sort: Some(Sort::asc(sort_property)),
        skip: Some(page.offset),
        limit: Some(page.limit),
    });
    let total = store.count(&selector);

    let (all, count) = tokio::try_join!(matches, total)?;

    Ok(SearchResult {
        all,
        count,
        offset: page.offset,
        limit: page.limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::NumericRange;
    use troupe_adapter_memory::MemoryStore;
    use troupe_core::error::TroupeError;

    async fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .insert_all([
                Artist::new("a", "Nora Vale", 20, 2),
                Artist::new("b", "Miles Arden", 25, 5),
                Artist::new("c", "June Calloway", 30, 11),
            ])
            .await;
        store
    }

    #[tokio::test]
    async fn age_filter_returns_sorted_page_and_count() {
        let store = seeded().await;
        let criteria = Criteria {
            age: Some(NumericRange { min: 22, max: 30 }),
            ..Criteria::default()
        };

        let result = search(&store, &criteria, "age", Page::default())
            .await
            .unwrap();

        let ages: Vec<u32> = result.all.iter().map(|a| a.age).collect();
        assert_eq!(ages, vec![25, 30]);
        assert_eq!(result.count, 2);
        assert_eq!(result.offset, 0);
        assert_eq!(result.limit, 20);
    }

    #[tokio::test]
    async fn count_ignores_the_pagination_window() {
        let store = seeded().await;
        let criteria = Criteria::default();

        let first = search(&store, &criteria, "name", Page::new(0, 1))
            .await
            .unwrap();
        let second = search(&store, &criteria, "name", Page::new(2, 1))
            .await
            .unwrap();

        assert_eq!(first.count, 3);
        assert_eq!(second.count, 3);
        assert_eq!(first.all.len(), 1);
        assert_eq!(second.all.len(), 1);
    }

    #[tokio::test]
    async fn invalid_sort_field_propagates() {
        let store = seeded().await;

        let err = search(&store, &Criteria::default(), "hairstyle", Page::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TroupeError::BadRequest(_)));
    }
}
