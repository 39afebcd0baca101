//! In-memory fuzzy retrieval over a catalog of cutaway gags.
//!
//! This crate turns a free-text query plus an optional season filter into a
//! ranked, size-bounded result set over a fixed collection of ~1,400 gag
//! records. The matcher is a self-contained bit-parallel bounded edit
//! distance scan; there is no persisted index, no incremental update, and no
//! I/O anywhere in the query path.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   types.rs  │────▶│   store.rs   │────▶│  search.rs  │
//! │ (GagRecord, │     │ (GagStore::  │     │  (query)    │
//! │ SeasonFilter)│    │  load)       │     │             │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌──────────────┐     ┌─────────────┐
//!                     │  bitap.rs    │────▶│ scoring.rs  │
//!                     │ (Pattern,    │     │ (weighted   │
//!                     │  score_query)│     │  minimum)   │
//!                     └──────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use cutaway::{query, GagStore, SeasonFilter};
//!
//! let store = GagStore::load(records)?;
//! let results = query(&store, "chiken fight", SeasonFilter::All);
//! ```
//!
//! The store is read-only after `load`, so `query` may be called from any
//! number of threads without synchronization; each call is a self-contained
//! synchronous pass over the collection.

// Module declarations
pub mod bitap;
mod scoring;
mod search;
mod store;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use bitap::{score_query, MatchOptions, Pattern, MAX_PATTERN_LEN};
pub use scoring::{aggregate_score, field_weight, score_record};
pub use search::{query, query_scored, query_scored_with_options, RESULT_CAP};
pub use store::{GagStore, StoreStats, ValidationError};
pub use types::{FieldKind, GagRecord, ScoredGag, SeasonFilter};
pub use utils::normalize;
