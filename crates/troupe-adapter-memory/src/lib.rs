//! In-memory store backend for Troupe. All data is held in RAM.
//!
//! Used in tests and as the reference implementation of the selector
//! semantics: range clauses are inclusive on both ends, and text clauses
//! apply keyword matching against the artist name the way a store-side
//! text index would.

use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use troupe_core::artist::Artist;
use troupe_core::error::{Result, TroupeError};
use troupe_core::selector::{Clause, RangeField, Selector};
use troupe_core::store::{FindOptions, SortDirection, Store};

/// In-memory artist store. Cloning shares the underlying collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Vec<Artist>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the collection with one artist.
    pub async fn insert(&self, artist: Artist) {
        self.inner.write().await.push(artist);
    }

    /// Seed the collection with many artists.
    pub async fn insert_all(&self, artists: impl IntoIterator<Item = Artist>) {
        self.inner.write().await.extend(artists);
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Selector evaluation
// ---------------------------------------------------------------------------

fn range_value(artist: &Artist, field: RangeField) -> u32 {
    match field {
        RangeField::Age => artist.age,
        RangeField::YearsActive => artist.years_active,
    }
}

/// Keyword match with text-index OR semantics: any whitespace-separated
/// term of the search string equal to a word of `name`, case-insensitively.
fn text_matches(name: &str, search: &str) -> bool {
    let name_words: Vec<String> = name
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .collect();

    search
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .any(|term| name_words.iter().any(|w| *w == term))
}

fn matches(artist: &Artist, selector: &Selector) -> bool {
    selector.clauses().iter().all(|clause| match clause {
        Clause::Text { search } => text_matches(&artist.name, search),
        Clause::Range { field, min, max } => {
            let value = range_value(artist, *field);
            *min <= value && value <= *max
        }
    })
}

/// Field comparator for sorting. `None` for fields the collection does not
/// have, which surfaces as the store-native invalid-sort error.
fn field_cmp(field: &str) -> Option<fn(&Artist, &Artist) -> Ordering> {
    match field {
        "_id" => Some(|a, b| a.id.cmp(&b.id)),
        "name" => Some(|a, b| a.name.cmp(&b.name)),
        "age" => Some(|a, b| a.age.cmp(&b.age)),
        "yearsActive" => Some(|a, b| a.years_active.cmp(&b.years_active)),
        _ => None,
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn find(&self, opts: FindOptions) -> Result<Vec<Artist>> {
        let artists = self.inner.read().await;

        let mut matched: Vec<Artist> = artists
            .iter()
            .filter(|a| matches(a, &opts.selector))
            .cloned()
            .collect();

        if let Some(ref sort) = opts.sort {
            let cmp = field_cmp(&sort.field).ok_or_else(|| {
                TroupeError::BadRequest(format!("cannot sort on unknown field '{}'", sort.field))
            })?;
            matched.sort_by(|a, b| {
                // Ties broken by id so results are deterministic
                let ord = cmp(a, b).then_with(|| a.id.cmp(&b.id));
                match sort.direction {
                    SortDirection::Asc => ord,
                    SortDirection::Desc => ord.reverse(),
                }
            });
        }

        if let Some(skip) = opts.skip {
            matched = matched.into_iter().skip(skip as usize).collect();
        }

        if let Some(limit) = opts.limit {
            matched.truncate(limit as usize);
        }

        Ok(matched)
    }

    async fn count(&self, selector: &Selector) -> Result<u64> {
        let artists = self.inner.read().await;
        Ok(artists.iter().filter(|a| matches(a, selector)).count() as u64)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
