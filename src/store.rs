// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record store: validated at construction, immutable forever after.
//!
//! Instead of hoping every record was checked somewhere upstream, `load`
//! validates the whole collection once and either returns a complete store
//! or fails atomically - there is no partial store. The cost is paid once at
//! startup, then every query can assume well-formed records.
//!
//! Input order is preserved exactly as given: it is the ranking tie-break of
//! last resort, so reordering here would silently change query results.

use crate::types::{GagRecord, SeasonFilter};
use std::collections::HashMap;
use std::fmt;

/// Error type for records rejected at load time.
///
/// Carries the index of the offending record in the input collection so the
/// caller can point at the exact entry in its source data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `title` is empty or whitespace-only.
    EmptyTitle { index: usize },
    /// `cutaway_owner` is empty or whitespace-only.
    EmptyOwner { index: usize },
    /// `season` is zero (seasons are numbered from 1).
    InvalidSeason { index: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyTitle { index } => {
                write!(f, "record {} has an empty title", index)
            }
            ValidationError::EmptyOwner { index } => {
                write!(f, "record {} has an empty cutaway owner", index)
            }
            ValidationError::InvalidSeason { index } => {
                write!(f, "record {} has season 0 (seasons start at 1)", index)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Main cast names, lowercase. A gag whose owner contains none of these is
/// a non-main-cast ("absurdist") cutaway.
const MAIN_CAST: [&str; 9] = [
    "peter griffin",
    "lois griffin",
    "stewie griffin",
    "chris griffin",
    "meg griffin",
    "brian griffin",
    "quagmire",
    "joe swanson",
    "cleveland brown",
];

/// Summary statistics over the loaded catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStats {
    pub total: usize,
    /// (min, max) season observed, None for an empty store.
    pub season_range: Option<(u32, u32)>,
    pub distinct_owners: usize,
    /// Owners with their gag counts, descending by count then by name.
    pub top_owners: Vec<(String, usize)>,
    pub absurdist: usize,
}

/// The immutable collection of gag records plus derived lookups.
#[derive(Debug, Clone)]
pub struct GagStore {
    gags: Vec<GagRecord>,
    seasons: Vec<u32>,
}

impl GagStore {
    /// Build a store from an already-parsed collection.
    ///
    /// Validates every record (non-empty title and owner, season >= 1) and
    /// fails atomically on the first violation. On success the input order
    /// is preserved - it is the documented tie-break for ranking.
    pub fn load(records: Vec<GagRecord>) -> Result<Self, ValidationError> {
        for (index, gag) in records.iter().enumerate() {
            if gag.title.trim().is_empty() {
                return Err(ValidationError::EmptyTitle { index });
            }
            if gag.cutaway_owner.trim().is_empty() {
                return Err(ValidationError::EmptyOwner { index });
            }
            if gag.season == 0 {
                return Err(ValidationError::InvalidSeason { index });
            }
        }

        let mut seasons: Vec<u32> = records.iter().map(|g| g.season).collect();
        seasons.sort_unstable();
        seasons.dedup();

        Ok(Self {
            gags: records,
            seasons,
        })
    }

    /// Every record, in original input order.
    pub fn all_records(&self) -> &[GagRecord] {
        &self.gags
    }

    /// Distinct seasons observed across the collection, ascending.
    ///
    /// Computed once at load; drives the category options of any caller.
    pub fn distinct_seasons(&self) -> &[u32] {
        &self.seasons
    }

    /// How many records the season filter alone admits (no text matching).
    ///
    /// Used for "N of M" displays.
    pub fn total_count(&self, season: SeasonFilter) -> usize {
        match season {
            SeasonFilter::All => self.gags.len(),
            SeasonFilter::Season(_) => self
                .gags
                .iter()
                .filter(|g| season.admits(g.season))
                .count(),
        }
    }

    pub fn len(&self) -> usize {
        self.gags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gags.is_empty()
    }

    /// Summary statistics for the `stats` command.
    pub fn stats(&self) -> StoreStats {
        let season_range = match (self.seasons.first(), self.seasons.last()) {
            (Some(&lo), Some(&hi)) => Some((lo, hi)),
            _ => None,
        };

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for gag in &self.gags {
            *counts.entry(gag.cutaway_owner.as_str()).or_insert(0) += 1;
        }
        let mut top_owners: Vec<(String, usize)> = counts
            .iter()
            .map(|(owner, count)| ((*owner).to_string(), *count))
            .collect();
        top_owners.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        StoreStats {
            total: self.gags.len(),
            season_range,
            distinct_owners: counts.len(),
            top_owners,
            absurdist: self.non_main_cast().len(),
        }
    }

    /// Records whose cutaway owner is not part of the main cast, by title.
    pub fn non_main_cast(&self) -> Vec<&GagRecord> {
        let mut results: Vec<&GagRecord> = self
            .gags
            .iter()
            .filter(|gag| {
                let owner = gag.cutaway_owner.to_lowercase();
                !MAIN_CAST.iter().any(|main| owner.contains(main))
            })
            .collect();
        results.sort_by(|a, b| a.title.cmp(&b.title));
        results
    }

    /// Records whose owner contains `owner` case-insensitively, store order.
    ///
    /// This is a plain substring filter, not fuzzy matching - the listing
    /// commands want exactly what the user typed.
    pub fn records_by_owner(&self, owner: &str) -> Vec<&GagRecord> {
        let needle = owner.to_lowercase();
        self.gags
            .iter()
            .filter(|gag| gag.cutaway_owner.to_lowercase().contains(&needle))
            .collect()
    }
}
