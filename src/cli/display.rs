// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the cutaway CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. The detection tries `CUTAWAY_THEME`
//! first (for explicit control), then `COLORFGBG` (set by some terminals),
//! then defaults to dark because most developers live there.
//!
//! Respects `NO_COLOR` for the purists and non-TTY detection for pipelines.

use cutaway::{GagRecord, ScoredGag};
use std::sync::OnceLock;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via CUTAWAY_THEME
    if let Ok(theme) = std::env::var("CUTAWAY_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    // 3. Default to dark (most developer terminals)
    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
}

pub use colors::*;

/// OneDark palette
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

/// One Light palette
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

// ═══════════════════════════════════════════════════════════════════════════
// THEME-AWARE COLOR ACCESSORS
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded season badge: S3, S12, ...
pub fn season_label(season: u32) -> String {
    themed(BLUE, &[], &format!("S{}", season))
}

/// Color-coded relevance score. Scores are distances: 0 is a perfect hit,
/// so green means small.
pub fn score_value(score: f64) -> String {
    if !use_colors() {
        return format!("{:.3}", score);
    }
    let color = if score <= 0.1 {
        GREEN()
    } else if score <= 0.25 {
        YELLOW()
    } else {
        RED()
    };
    format!("{}{:.3}{}", color, score, RESET)
}

/// Print a section heading
pub fn heading(text: &str) {
    println!("{}", themed(CYAN, &[BOLD], text));
}

/// Print one result card: title line, owner, optional description, episode.
pub fn print_gag(gag: &GagRecord, score: Option<f64>) {
    let title = themed(MAGENTA, &[BOLD], &gag.title);
    match score {
        Some(s) => println!("  {}  {}  [{}]", title, season_label(gag.season), score_value(s)),
        None => println!("  {}  {}", title, season_label(gag.season)),
    }
    println!("    {} {}", themed(GRAY, &[], "owner:"), gag.cutaway_owner);
    if !gag.description.is_empty() {
        let description = if gag.description.len() > 80 {
            let cut: String = gag.description.chars().take(77).collect();
            format!("{}...", cut)
        } else {
            gag.description.clone()
        };
        println!("    {} {}", themed(GRAY, &[], "desc: "), description);
    }
    if !gag.episode.is_empty() {
        println!("    {} {}", themed(GRAY, &[], "ep:   "), gag.episode);
    }
    println!();
}

/// Print a capped run of result cards with a "... and N more" trailer.
pub fn print_results(results: &[ScoredGag<'_>], display_limit: usize, with_scores: bool) {
    for scored in results.iter().take(display_limit) {
        print_gag(scored.gag, with_scores.then_some(scored.score));
    }
    if results.len() > display_limit {
        println!(
            "{}",
            themed(
                GRAY,
                &[DIM],
                &format!("... and {} more results", results.len() - display_limit)
            )
        );
        println!();
    }
}

/// Same as [`print_results`] for unscored record lists.
pub fn print_records(records: &[&GagRecord], display_limit: usize) {
    for gag in records.iter().take(display_limit) {
        print_gag(gag, None);
    }
    if records.len() > display_limit {
        println!(
            "{}",
            themed(
                GRAY,
                &[DIM],
                &format!("... and {} more results", records.len() - display_limit)
            )
        );
        println!();
    }
}
