//! Age extrema over the artist collection.

mod common;

use common::{seeded_directory, trio};
use troupe::{AgeRange, TroupeError};

#[tokio::test]
async fn extrema_of_three_ages() {
    let directory = trio().await;

    let range = directory.age_range().await.unwrap();
    assert_eq!(range, AgeRange { min: 20, max: 30 });
}

#[tokio::test]
async fn extrema_bracket_every_artist() {
    let directory = seeded_directory(&[
        ("a", "Nora Vale", 64, 40),
        ("b", "Miles Arden", 17, 1),
        ("c", "June Calloway", 30, 11),
        ("d", "Ray Okafor", 52, 33),
    ])
    .await;

    let range = directory.age_range().await.unwrap();
    let everyone = directory
        .search(&troupe::Criteria::default(), "age", troupe::Page::default())
        .await
        .unwrap();

    for artist in &everyone.all {
        assert!(range.min <= artist.age);
        assert!(artist.age <= range.max);
    }
}

#[tokio::test]
async fn repeated_calls_agree() {
    let directory = trio().await;

    let first = directory.age_range().await.unwrap();
    let second = directory.age_range().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn empty_collection_reports_empty_collection() {
    let directory = troupe::Directory::memory();

    let err = directory.age_range().await.unwrap_err();
    assert!(matches!(err, TroupeError::EmptyCollection));
}
