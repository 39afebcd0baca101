use clap::Parser;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};

use cutaway::{query_scored, GagRecord, GagStore, SeasonFilter};

mod cli;
use cli::display;
use cli::{Cli, Commands};

/// How many cards the shell and listing commands print before the
/// "... and N more" trailer.
const DISPLAY_LIMIT: usize = 10;

/// Catalog payload shape, shared by ingest and export.
#[derive(Serialize, Deserialize)]
struct Payload {
    total: usize,
    gags: Vec<GagRecord>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let store = load_catalog(&cli.data)?;

    match cli.command {
        Commands::Search {
            query,
            season,
            scores,
        } => run_search(&store, &query, season, scores),
        Commands::List { owner } => run_list(&store, &owner),
        Commands::Seasons => run_seasons(&store),
        Commands::Stats => run_stats(&store),
        Commands::Absurdist => run_absurdist(&store),
        Commands::Export { output } => run_export(&store, &output)?,
        Commands::Shell => run_shell(&store)?,
    }
    Ok(())
}

/// Read and validate the catalog file.
fn load_catalog(path: &str) -> Result<GagStore, Box<dyn Error>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("cannot read catalog '{}': {}", path, e))?;
    let payload: Payload =
        serde_json::from_str(&raw).map_err(|e| format!("invalid catalog '{}': {}", path, e))?;
    if payload.total != payload.gags.len() {
        eprintln!(
            "warning: catalog claims {} records, found {}",
            payload.total,
            payload.gags.len()
        );
    }
    Ok(GagStore::load(payload.gags)?)
}

fn run_search(store: &GagStore, text: &str, season: SeasonFilter, scores: bool) {
    let results = query_scored(store, text, season);
    display::heading(&format!(
        "{} of {} gags match '{}' (season: {})",
        results.len(),
        store.total_count(season),
        text,
        season
    ));
    println!();
    display::print_results(&results, results.len(), scores);
}

fn run_list(store: &GagStore, owner: &str) {
    let results = store.records_by_owner(owner);
    display::heading(&format!("{} gags owned by '{}'", results.len(), owner));
    println!();
    display::print_records(&results, results.len());
}

fn run_seasons(store: &GagStore) {
    display::heading("Seasons");
    for &season in store.distinct_seasons() {
        println!(
            "  {}  {} gags",
            display::season_label(season),
            store.total_count(SeasonFilter::Season(season))
        );
    }
}

fn run_stats(store: &GagStore) {
    let stats = store.stats();
    display::heading("Catalog statistics");
    println!("  Total gags:       {}", stats.total);
    match stats.season_range {
        Some((lo, hi)) => println!("  Season range:     {} - {}", lo, hi),
        None => println!("  Season range:     (empty catalog)"),
    }
    println!("  Unique owners:    {}", stats.distinct_owners);
    println!("  Absurdist gags:   {}", stats.absurdist);
    println!();
    display::heading("Top 20 owners by gag count");
    for (owner, count) in stats.top_owners.iter().take(20) {
        println!("  {:30} {:3} gags", owner, count);
    }
}

fn run_absurdist(store: &GagStore) {
    let results = store.non_main_cast();
    display::heading(&format!(
        "{} absurdist gags (non-main-cast cutaways)",
        results.len()
    ));
    println!();
    // The absurdist view always prints everything - that is its point.
    display::print_records(&results, results.len());
}

fn run_export(store: &GagStore, output: &str) -> Result<(), Box<dyn Error>> {
    let payload = Payload {
        total: store.len(),
        gags: store.all_records().to_vec(),
    };
    let serialized = serde_json::to_string_pretty(&payload)?;
    fs::write(output, serialized)
        .map_err(|e| format!("cannot write '{}': {}", output, e))?;
    println!("Exported {} gags to {}", store.len(), output);
    Ok(())
}

/// Interactive loop: one command per line, results capped for readability.
fn run_shell(store: &GagStore) -> Result<(), Box<dyn Error>> {
    display::heading("CUTAWAY GAG CATALOG - INTERACTIVE SEARCH");
    println!(
        "Loaded {} gags | {} absurdist gags",
        store.len(),
        store.non_main_cast().len()
    );
    println!();
    println!("Commands:");
    println!("  search <term>    fuzzy search across all fields");
    println!("  char <name>      list gags by cutaway owner");
    println!("  desc <term>      substring search in descriptions");
    println!("  absurdist        show non-main-cast gags");
    println!("  seasons          list seasons with counts");
    println!("  stats            catalog statistics");
    println!("  quit / exit      leave the shell");
    println!();

    let stdin = io::stdin();
    loop {
        print!("gag> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, argument) = match line.split_once(' ') {
            Some((c, a)) => (c, a.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "search" => {
                if argument.is_empty() {
                    println!("usage: search <term>");
                    continue;
                }
                let results = query_scored(store, argument, SeasonFilter::All);
                if results.is_empty() {
                    println!("no results for '{}'", argument);
                    continue;
                }
                println!("found {} result(s):", results.len());
                println!();
                display::print_results(&results, DISPLAY_LIMIT, false);
            }
            "char" | "list" => {
                if argument.is_empty() {
                    println!("usage: {} <name>", command);
                    continue;
                }
                let results = store.records_by_owner(argument);
                if results.is_empty() {
                    println!("no gags owned by '{}'", argument);
                    continue;
                }
                display::print_records(&results, DISPLAY_LIMIT);
            }
            "desc" => {
                if argument.is_empty() {
                    println!("usage: desc <term>");
                    continue;
                }
                let needle = argument.to_lowercase();
                let results: Vec<&GagRecord> = store
                    .all_records()
                    .iter()
                    .filter(|g| g.description.to_lowercase().contains(&needle))
                    .collect();
                if results.is_empty() {
                    println!("no descriptions mention '{}'", argument);
                    continue;
                }
                display::print_records(&results, DISPLAY_LIMIT);
            }
            "absurdist" => {
                let results = store.non_main_cast();
                println!("found {} absurdist gag(s):", results.len());
                println!();
                // Show everything here, like the absurdist command does.
                display::print_records(&results, results.len());
            }
            "seasons" => run_seasons(store),
            "stats" => run_stats(store),
            other => println!("unknown command: {}", other),
        }
    }

    println!("bye");
    Ok(())
}
