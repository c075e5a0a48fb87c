use serde::Serialize;
use tracing::debug;

use troupe_core::error::{Result, TroupeError};
use troupe_core::store::{FindOptions, Sort, Store};

/// The youngest and oldest ages currently on file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

/// Find the lowest and highest artist age in the collection.
///
/// Issues two sorted limit-1 lookups concurrently and joins them, then
/// reads the `age` field of each single-record result. Fails with
/// [`TroupeError::EmptyCollection`] when there are no artists to take
/// extrema of.
pub async fn age_range(store: &dyn Store) -> Result<AgeRange> {
    debug!("querying age extrema");

    let youngest = store.find(FindOptions {
        sort: Some(Sort::asc("age")),
        limit: Some(1),
        ..FindOptions::default()
    });
    let oldest = store.find(FindOptions {
        sort: Some(Sort::desc("age")),
        limit: Some(1),
        ..FindOptions::default()
    });

    let (youngest, oldest) = tokio::try_join!(youngest, oldest)?;

    match (youngest.first(), oldest.first()) {
        (Some(min), Some(max)) => Ok(AgeRange {
            min: min.age,
            max: max.age,
        }),
        _ => Err(TroupeError::EmptyCollection),
    }
}
