// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the cutaway command-line interface.
//!
//! The `search` subcommand runs the fuzzy engine; `list`, `seasons`,
//! `stats`, and `absurdist` are plain catalog views; `export` round-trips
//! the catalog JSON; `shell` is an interactive loop over all of the above.

pub mod display;

use clap::{Parser, Subcommand};
use cutaway::SeasonFilter;

#[derive(Parser)]
#[command(
    name = "cutaway",
    about = "Fuzzy search over a catalog of cutaway gags",
    version
)]
pub struct Cli {
    /// Path to the catalog JSON file ({"total": N, "gags": [...]})
    #[arg(short, long, default_value = "gags.json", global = true)]
    pub data: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fuzzy-search titles, owners, and descriptions
    Search {
        /// Search text; typos within the matcher threshold still hit
        query: String,

        /// Restrict to one season ('all' or a season number)
        #[arg(short, long, default_value = "all")]
        season: SeasonFilter,

        /// Show relevance scores next to each result (0 = exact)
        #[arg(long)]
        scores: bool,
    },

    /// List gags whose cutaway owner contains the given name
    List {
        /// Owner name (case-insensitive substring)
        owner: String,
    },

    /// List seasons with their record counts
    Seasons,

    /// Catalog statistics: totals, season range, top owners
    Stats,

    /// List gags owned by non-main-cast characters
    Absurdist,

    /// Export the loaded catalog back to JSON
    Export {
        /// Output file
        #[arg(short, long, default_value = "gags_export.json")]
        output: String,
    },

    /// Interactive search shell
    Shell,
}
