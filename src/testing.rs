//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::GagRecord;

/// Create a test record in season 1 with defaulted display fields.
///
/// This is the canonical implementation used across all tests.
pub fn make_gag(title: &str, owner: &str) -> GagRecord {
    make_gag_in_season(title, owner, 1)
}

/// Create a test record in a specific season.
pub fn make_gag_in_season(title: &str, owner: &str, season: u32) -> GagRecord {
    GagRecord {
        title: title.to_string(),
        description: String::new(),
        cutaway_owner: owner.to_string(),
        season,
        episode_order: 0,
        episode: String::new(),
    }
}

/// A small hand-picked catalog exercising owners, seasons, and descriptions.
///
/// Kept deliberately free of words within two edits of "peter" so filter
/// tests can assert exact result sets.
pub fn sample_catalog() -> Vec<GagRecord> {
    vec![
        GagRecord {
            title: "Chicken Fight".to_string(),
            description: "Peter fights the giant chicken over an expired coupon".to_string(),
            cutaway_owner: "Peter Griffin".to_string(),
            season: 3,
            episode_order: 2,
            episode: "S3E2".to_string(),
        },
        GagRecord {
            title: "Evil Monkey".to_string(),
            description: "The monkey in the closet points menacingly".to_string(),
            cutaway_owner: "Chris Griffin".to_string(),
            season: 3,
            episode_order: 5,
            episode: "S3E5".to_string(),
        },
        GagRecord {
            title: "Conway Twitty".to_string(),
            description: "A full musical number cuts away from the argument".to_string(),
            cutaway_owner: "Peter Griffin".to_string(),
            season: 5,
            episode_order: 9,
            episode: "S5E9".to_string(),
        },
        GagRecord {
            title: "Kool-Aid Man".to_string(),
            description: "Bursts through the courtroom wall".to_string(),
            cutaway_owner: "Lois Griffin".to_string(),
            season: 1,
            episode_order: 7,
            episode: "S1E7".to_string(),
        },
        GagRecord {
            title: "Cool Whip".to_string(),
            description: "Stewie insists on the pronunciation".to_string(),
            cutaway_owner: "Stewie Griffin".to_string(),
            season: 5,
            episode_order: 1,
            episode: "S5E1".to_string(),
        },
        GagRecord {
            title: "Grinds My Gears".to_string(),
            description: "A public access segment about minor annoyances".to_string(),
            cutaway_owner: "Ernie the Giant Chicken".to_string(),
            season: 4,
            episode_order: 3,
            episode: "S4E3".to_string(),
        },
    ]
}
