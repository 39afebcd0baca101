//! Relevance scoring: field weights and weighted-minimum aggregation.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## FIELD_WEIGHT_HIERARCHY
//! The weights MUST satisfy `Title > Owner > Description`, all in (0, 1]:
//!
//! ```text
//! Title = 1.0, Owner = 0.8, Description = 0.5
//! ```
//!
//! Scores are distances (lower is better) and a field score is divided by
//! its weight, so a smaller weight inflates the distance: an equally-good
//! hit ranks title, then owner, then description.
//!
//! ## WEIGHTED_MINIMUM
//! A record's score is the minimum over its matched fields, not an average.
//! A perfect title hit must outrank a mediocre match smeared across all
//! three fields; averaging would invert that.

use crate::bitap::{score_query, MatchOptions, Pattern};
use crate::types::{FieldKind, GagRecord};
use crate::utils::normalize;

/// Relative importance of a searchable field, in (0, 1].
///
/// Fixed configuration - never derived from data.
pub fn field_weight(field: FieldKind) -> f64 {
    // INVARIANT: FIELD_WEIGHT_HIERARCHY - see module docs before changing.
    match field {
        FieldKind::Title => 1.0,
        FieldKind::Owner => 0.8,
        FieldKind::Description => 0.5,
    }
}

/// Combine per-field match scores into one record score.
///
/// `recordScore = min over matched fields of (fieldScore / fieldWeight)`,
/// clamped to [0, 1]. `None` means no field matched - the record is a
/// non-match, not a weak match, and must not appear in results.
pub fn aggregate_score(field_scores: &[(FieldKind, Option<f64>)]) -> Option<f64> {
    field_scores
        .iter()
        .filter_map(|&(field, score)| score.map(|s| s / field_weight(field)))
        .fold(None, |best: Option<f64>, weighted| match best {
            Some(b) if b <= weighted => Some(b),
            _ => Some(weighted),
        })
        .map(|s| s.clamp(0.0, 1.0))
}

/// Match one record against a compiled query: scan every searchable field,
/// aggregate by weighted minimum.
pub fn score_record(
    gag: &GagRecord,
    patterns: &[Pattern],
    options: &MatchOptions,
) -> Option<f64> {
    let field_scores: Vec<(FieldKind, Option<f64>)> = FieldKind::ALL
        .iter()
        .map(|&field| {
            let text = normalize(field.text_of(gag));
            (field, score_query(patterns, &text, options))
        })
        .collect();
    aggregate_score(&field_scores)
}
