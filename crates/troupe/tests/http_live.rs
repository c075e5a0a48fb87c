//! Tests against a live query endpoint.
//!
//! These need a running server exposing `_find`/`_count` over a seeded
//! artist collection (with the text index on `name` already created).
//! Point `TROUPE_TEST_URL` at the collection and run with `--ignored`.

use troupe::{Criteria, Directory, NumericRange, Page};

fn live_url() -> String {
    std::env::var("TROUPE_TEST_URL").expect("set TROUPE_TEST_URL to run live tests")
}

#[tokio::test]
#[ignore]
async fn live_age_range_brackets_every_artist() {
    let directory = Directory::http(&live_url());

    let range = directory.age_range().await.unwrap();
    assert!(range.min <= range.max);

    let everyone = directory
        .search(&Criteria::default(), "age", Page::default())
        .await
        .unwrap();
    for artist in &everyone.all {
        assert!(range.min <= artist.age);
        assert!(artist.age <= range.max);
    }
}

#[tokio::test]
#[ignore]
async fn live_filtered_search_respects_the_range() {
    let directory = Directory::http(&live_url());
    let criteria = Criteria {
        age: Some(NumericRange { min: 20, max: 40 }),
        ..Criteria::default()
    };

    let result = directory.search(&criteria, "age", Page::default()).await.unwrap();

    assert!(result.all.len() as u64 <= result.limit);
    for artist in &result.all {
        assert!((20..=40).contains(&artist.age));
    }
}
