//! Bounded approximate substring matching with a bit-parallel scan.
//!
//! Implements the Wu-Manber (1992) k-errors algorithm: one machine word per
//! error level, one shift-AND update per text character, O(|text| * k) for
//! patterns up to 32 characters. For each query token the scan finds the
//! minimal edit distance over all alignments of the token against substrings
//! of the candidate text, normalized by token length.
//!
//! Score convention is a distance: 0.0 is an exact (case-insensitive,
//! post-normalization) substring hit, `threshold` is the worst score still
//! reported, anything beyond comes back as `None`.
//!
//! # Bit layout
//!
//! `masks[c]` has bit `i` set when `pattern[i] == c`. Row `r[d]` has bit `j`
//! set when `pattern[0..=j]` matches some substring ending at the current
//! text character with at most `d` edits. A match with `<= d` errors ends
//! here exactly when bit `len - 1` of `r[d]` is set.
//!
//! Patterns longer than [`MAX_PATTERN_LEN`] do not fit a machine word and
//! degrade to a plain substring scan: containment scores 0.0, anything else
//! is a miss. Queries that long are far beyond any catalog title.

use std::collections::HashMap;

/// Longest pattern the bit-parallel scan can hold (bits in the row word).
pub const MAX_PATTERN_LEN: usize = 32;

/// Knobs for the approximate matcher.
///
/// `threshold` is the maximum normalized edit distance still considered a
/// match. `distance` controls how quickly the proximity penalty grows when
/// `ignore_location` is false; with the default `ignore_location = true` the
/// position of a match within the text does not affect its score, which is
/// the right call for short free-text fields like titles.
#[derive(Debug, Clone, Copy)]
pub struct MatchOptions {
    pub threshold: f64,
    pub distance: usize,
    pub ignore_location: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            threshold: 0.4,
            distance: 100,
            ignore_location: true,
        }
    }
}

/// A single query token, compiled once and scanned against many texts.
#[derive(Debug, Clone)]
pub struct Pattern {
    chars: Vec<char>,
    /// Per-character position bitmasks; empty when the pattern overflows
    /// the word and the literal fallback is in effect.
    masks: HashMap<char, u32>,
}

impl Pattern {
    /// Compile a normalized token into position bitmasks.
    ///
    /// The token must already be normalized (see `utils::normalize`); the
    /// matcher compares characters exactly.
    pub fn compile(token: &str) -> Self {
        let chars: Vec<char> = token.chars().collect();
        let mut masks = HashMap::new();
        if chars.len() <= MAX_PATTERN_LEN {
            for (i, &c) in chars.iter().enumerate() {
                *masks.entry(c).or_insert(0u32) |= 1 << i;
            }
        }
        Self { chars, masks }
    }

    /// Number of characters in the pattern.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Best score of this token against `text`, or `None` for no match.
    ///
    /// `text` must already be normalized. Empty text never matches. The scan
    /// only explores error counts the threshold can still accept, so a
    /// returned score is always `<= options.threshold`.
    pub fn score(&self, text: &str, options: &MatchOptions) -> Option<f64> {
        if text.is_empty() || self.chars.is_empty() {
            return None;
        }

        let len = self.chars.len();
        if len > MAX_PATTERN_LEN {
            return self.literal_score(text, options);
        }

        // Fast path: an exact substring hit cannot be beaten when location
        // is ignored.
        if options.ignore_location {
            let needle: String = self.chars.iter().collect();
            if text.contains(&needle) {
                return Some(0.0);
            }
        }

        let max_errors = ((options.threshold * len as f64).floor() as usize).min(len - 1);
        self.scan(text, max_errors, options)
    }

    /// Wu-Manber scan over `text` with up to `max_errors` edits.
    fn scan(&self, text: &str, max_errors: usize, options: &MatchOptions) -> Option<f64> {
        let len = self.chars.len();
        let accept = 1u32 << (len - 1);

        // r[d] starts with bits 0..d set: a prefix of length j+1 matches the
        // empty string with j+1 deletions.
        let mut rows: Vec<u32> = (0..=max_errors).map(|d| (1u32 << d) - 1).collect();

        let mut best: Option<f64> = None;
        for (position, c) in text.chars().enumerate() {
            let mask = self.masks.get(&c).copied().unwrap_or(0);

            let mut carry = rows[0];
            rows[0] = ((rows[0] << 1) | 1) & mask;
            for d in 1..=max_errors {
                let old = rows[d];
                // match | substitution+deletion | insertion
                rows[d] = (((old << 1) | 1) & mask)
                    | (((carry | rows[d - 1]) << 1) | 1)
                    | carry;
                carry = old;
            }

            for (d, &row) in rows.iter().enumerate() {
                if row & accept != 0 {
                    let score = self.alignment_score(d, position, options);
                    if best.map_or(true, |b| score < b) {
                        best = Some(score);
                    }
                    break; // rows are cumulative: smallest d wins here
                }
            }

            if best == Some(0.0) {
                break;
            }
        }

        best.filter(|&score| score <= options.threshold)
    }

    /// Score one alignment: normalized errors plus an optional proximity
    /// penalty relative to the start of the text.
    fn alignment_score(&self, errors: usize, end_position: usize, options: &MatchOptions) -> f64 {
        let accuracy = errors as f64 / self.chars.len() as f64;
        if options.ignore_location {
            return accuracy;
        }
        // The match ends at `end_position`; its start is approximately one
        // pattern-length earlier. Expected location is the text start.
        let start = (end_position + 1).saturating_sub(self.chars.len());
        if options.distance == 0 {
            return if start == 0 { accuracy } else { 1.0 };
        }
        accuracy + start as f64 / options.distance as f64
    }

    /// Fallback for patterns wider than the row word: plain containment.
    fn literal_score(&self, text: &str, options: &MatchOptions) -> Option<f64> {
        let needle: String = self.chars.iter().collect();
        let byte_index = text.find(&needle)?;
        if options.ignore_location {
            return Some(0.0);
        }
        let start = text[..byte_index].chars().count();
        if options.distance == 0 {
            return (start == 0).then_some(0.0);
        }
        Some(start as f64 / options.distance as f64).filter(|&s| s <= options.threshold)
    }
}

/// Score a whole query (one or more compiled tokens) against one text.
///
/// Token scores combine by mean, which keeps the semantics AND-like without
/// requiring every token verbatim: a token with no qualifying alignment
/// contributes 1.0, and the mean is subject to the same threshold cutoff as
/// a single token.
pub fn score_query(patterns: &[Pattern], text: &str, options: &MatchOptions) -> Option<f64> {
    if patterns.is_empty() || text.is_empty() {
        return None;
    }
    let total: f64 = patterns
        .iter()
        .map(|p| p.score(text, options).unwrap_or(1.0))
        .sum();
    let mean = total / patterns.len() as f64;
    (mean <= options.threshold).then_some(mean)
}
