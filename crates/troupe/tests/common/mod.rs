use std::sync::Arc;

use troupe::{Artist, Directory, MemoryStore};

/// Build a directory backed by a memory store seeded with the given
/// `(id, name, age, yearsActive)` rows.
pub async fn seeded_directory(artists: &[(&str, &str, u32, u32)]) -> Directory {
    let store = MemoryStore::new();
    for (id, name, age, years) in artists {
        store.insert(Artist::new(id, name, *age, *years)).await;
    }
    Directory::from_store(Arc::new(store))
}

/// The three-artist collection most scenarios start from.
pub async fn trio() -> Directory {
    seeded_directory(&[
        ("a", "Nora Vale", 20, 2),
        ("b", "Miles Arden", 25, 5),
        ("c", "June Calloway", 30, 11),
    ])
    .await
}
