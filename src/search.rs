//! The query pipeline: match, rank, filter, cap.
//!
//! `query` is a pure function of (store, text, season). It never fails for
//! well-typed input: nonsense text and absent seasons both yield an empty
//! result sequence, never an error, so callers need no error path for
//! user-typed search strings.
//!
//! Ranking is ascending by score (distances - lower is better). Ties keep
//! store order: records are scanned in store order and the sort is stable,
//! which together are the entire tie-break mechanism. Don't "optimize" the
//! scan into an unordered collection.

use crate::bitap::{MatchOptions, Pattern};
use crate::scoring::score_record;
use crate::store::GagStore;
use crate::types::{GagRecord, ScoredGag, SeasonFilter};
use crate::utils::normalize;

/// Maximum number of records a query returns.
///
/// The upstream source disagreed with itself (50 in one place, 51 in
/// another); 50 is the documented choice here.
pub const RESULT_CAP: usize = 50;

/// Run a query with the default matcher options.
///
/// Empty (after trimming) `text` is browse mode: all records in store order,
/// no ranking. Otherwise records are fuzzy-matched across the three weighted
/// fields and ranked ascending by score. The season predicate composes after
/// ranking, and the cap truncates last.
pub fn query<'a>(store: &'a GagStore, text: &str, season: SeasonFilter) -> Vec<&'a GagRecord> {
    query_scored(store, text, season)
        .into_iter()
        .map(|scored| scored.gag)
        .collect()
}

/// Like [`query`], but keeps each record's score.
///
/// Browse-mode entries carry 0.0 since no matching ran. Scores of matched
/// entries are in `[0, threshold]` after weighting and clamping.
pub fn query_scored<'a>(
    store: &'a GagStore,
    text: &str,
    season: SeasonFilter,
) -> Vec<ScoredGag<'a>> {
    query_scored_with_options(store, text, season, &MatchOptions::default())
}

/// Full-control variant used by tests and benchmarks.
pub fn query_scored_with_options<'a>(
    store: &'a GagStore,
    text: &str,
    season: SeasonFilter,
    options: &MatchOptions,
) -> Vec<ScoredGag<'a>> {
    let trimmed = text.trim();

    let mut candidates: Vec<ScoredGag<'a>> = if trimmed.is_empty() {
        // Browse mode: no ranking, store order is the result order.
        store
            .all_records()
            .iter()
            .map(|gag| ScoredGag { gag, score: 0.0 })
            .collect()
    } else {
        let patterns: Vec<Pattern> = normalize(trimmed)
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(Pattern::compile)
            .collect();

        let mut matched: Vec<ScoredGag<'a>> = store
            .all_records()
            .iter()
            .filter_map(|gag| {
                score_record(gag, &patterns, options).map(|score| ScoredGag { gag, score })
            })
            .collect();
        // Stable sort over a store-ordered scan: equal scores keep input
        // order, which is the documented tie-break.
        matched.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matched
    };

    candidates.retain(|scored| season.admits(scored.gag.season));
    candidates.truncate(RESULT_CAP);
    candidates
}
