//! Shared test utilities and fixtures.

#![allow(dead_code)]

use cutaway::{GagRecord, GagStore};

// Re-export canonical test utilities from cutaway::testing
pub use cutaway::testing::{make_gag, make_gag_in_season, sample_catalog};

/// The hand-picked six-record catalog, loaded.
pub fn sample_store() -> GagStore {
    GagStore::load(sample_catalog()).expect("sample catalog is valid")
}

/// A synthetic catalog of `count` records spread over five seasons.
///
/// Titles are distinct ("Cutaway Gag 0", "Cutaway Gag 1", ...) so every
/// record matches the query "cutaway" exactly and cap/tie behavior can be
/// asserted precisely.
pub fn synthetic_store(count: usize) -> GagStore {
    let records: Vec<GagRecord> = (0..count)
        .map(|i| {
            make_gag_in_season(
                &format!("Cutaway Gag {}", i),
                "Peter Griffin",
                (i % 5 + 1) as u32,
            )
        })
        .collect();
    GagStore::load(records).expect("synthetic records are valid")
}
