// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the catalog engine.
//!
//! These types define how gag records, searchable fields, and season filters
//! fit together. The catalog is loaded once, validated, and never mutated;
//! everything downstream (matching, ranking, filtering) borrows from it.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **GagRecord**: `title` and `cutaway_owner` are non-empty, `season >= 1`.
//!   `GagStore::load` enforces this at construction; nothing after it checks.
//!
//! - **Scores are distances**: `ScoredGag.score` lives in `[0, 1]` where
//!   0.0 is an exact match and anything above the matcher threshold never
//!   leaves the pipeline. Sorting is ascending - smaller is better.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// RECORD TYPES
// =============================================================================

/// One catalog entry: a single cutaway gag.
///
/// The serialized shape matches the catalog export (`cutawayOwner`,
/// `episodeOrder`), which is an external contract - the engine tolerates it
/// but does not define it. `episode` is a display label and never searched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GagRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub cutaway_owner: String,
    pub season: u32,
    #[serde(default)]
    pub episode_order: u32,
    #[serde(default)]
    pub episode: String,
}

/// The three searchable projections of a record.
///
/// Weights are a fixed configuration (title > owner > description), not
/// derived from data. See `scoring::field_weight` for the values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Title,
    Owner,
    Description,
}

impl FieldKind {
    /// All searchable fields, in weight order.
    pub const ALL: [FieldKind; 3] = [FieldKind::Title, FieldKind::Owner, FieldKind::Description];

    /// The text this field projects out of a record.
    pub fn text_of(self, gag: &GagRecord) -> &str {
        match self {
            FieldKind::Title => &gag.title,
            FieldKind::Owner => &gag.cutaway_owner,
            FieldKind::Description => &gag.description,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Title => write!(f, "title"),
            FieldKind::Owner => write!(f, "owner"),
            FieldKind::Description => write!(f, "description"),
        }
    }
}

// =============================================================================
// QUERY TYPES
// =============================================================================

/// Season predicate for a query: everything, or one season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonFilter {
    All,
    Season(u32),
}

impl SeasonFilter {
    /// Does this filter admit a record from `season`?
    #[inline]
    pub fn admits(self, season: u32) -> bool {
        match self {
            SeasonFilter::All => true,
            SeasonFilter::Season(wanted) => season == wanted,
        }
    }
}

impl FromStr for SeasonFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(SeasonFilter::All);
        }
        s.parse::<u32>()
            .map(SeasonFilter::Season)
            .map_err(|_| format!("expected 'all' or a season number, got '{}'", s))
    }
}

impl fmt::Display for SeasonFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonFilter::All => write!(f, "all"),
            SeasonFilter::Season(n) => write!(f, "{}", n),
        }
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// A record paired with its relevance score for one query.
///
/// Created and discarded per query; the record itself is only borrowed.
/// Score convention: 0.0 = perfect match, larger = worse (a distance, not a
/// similarity). Browse-mode results carry 0.0 since no matching ran.
#[derive(Debug, Clone, Copy)]
pub struct ScoredGag<'a> {
    pub gag: &'a GagRecord,
    pub score: f64,
}
