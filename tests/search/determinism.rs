//! Queries are pure: identical inputs give identical ordered results, and
//! the store is never disturbed by running them.

use super::common::{sample_catalog, sample_store, synthetic_store};
use cutaway::{query, query_scored, SeasonFilter};

#[test]
fn identical_queries_give_identical_results() {
    let store = sample_store();
    for text in ["", "chicken", "chiken", "peter griffin", "zzz"] {
        let first: Vec<(String, u32)> = query(&store, text, SeasonFilter::All)
            .iter()
            .map(|g| (g.title.clone(), g.season))
            .collect();
        let second: Vec<(String, u32)> = query(&store, text, SeasonFilter::All)
            .iter()
            .map(|g| (g.title.clone(), g.season))
            .collect();
        assert_eq!(first, second, "query '{}' was not deterministic", text);
    }
}

#[test]
fn scores_are_reproducible() {
    let store = synthetic_store(100);
    let first: Vec<f64> = query_scored(&store, "cutaway gag", SeasonFilter::All)
        .iter()
        .map(|s| s.score)
        .collect();
    let second: Vec<f64> = query_scored(&store, "cutaway gag", SeasonFilter::All)
        .iter()
        .map(|s| s.score)
        .collect();
    assert_eq!(first, second);
}

#[test]
fn interleaved_queries_do_not_interfere() {
    let store = sample_store();
    let before = query(&store, "monkey", SeasonFilter::All).len();
    // Run a pile of unrelated queries between the two measurements.
    for text in ["chicken", "", "peter", "conway", "kool"] {
        let _ = query(&store, text, SeasonFilter::Season(3));
    }
    let after = query(&store, "monkey", SeasonFilter::All).len();
    assert_eq!(before, after);
}

#[test]
fn querying_never_mutates_the_store() {
    let store = sample_store();
    let _ = query(&store, "chicken fight", SeasonFilter::All);
    let _ = query(&store, "", SeasonFilter::Season(3));

    let expected = sample_catalog();
    assert_eq!(store.all_records(), expected.as_slice());
    assert_eq!(store.len(), expected.len());
}
