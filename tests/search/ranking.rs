//! Ranking behavior: weighted-minimum aggregation and tie stability.

use super::common::{make_gag, make_gag_in_season};
use cutaway::{query_scored, GagStore, SeasonFilter};

#[test]
fn scores_are_ascending() {
    let store = GagStore::load(vec![
        make_gag("Giant Chicken Rematch", "Peter Griffin"),
        make_gag("Chicken Fight", "Peter Griffin"),
        make_gag("Chickn Dance", "Quagmire"),
    ])
    .expect("valid records");
    let results = query_scored(&store, "chicken", SeasonFilter::All);
    assert!(results.len() >= 2);
    for pair in results.windows(2) {
        assert!(
            pair[0].score <= pair[1].score,
            "ranking must be ascending: {} before {}",
            pair[0].score,
            pair[1].score
        );
    }
}

#[test]
fn title_hit_outranks_description_hit() {
    let mut in_description = make_gag("Completely Unrelated", "Quagmire");
    in_description.description = "a giant chickn brawl".to_string();
    let store = GagStore::load(vec![
        in_description,
        make_gag("Chickn Fight", "Peter Griffin"),
    ])
    .expect("valid records");

    // Same typo distance in both records; the title's weight must win even
    // though the description record comes first in the store.
    let results = query_scored(&store, "chicken", SeasonFilter::All);
    assert_eq!(results[0].gag.title, "Chickn Fight");
    assert!(results[0].score < results[1].score);
}

#[test]
fn owner_hit_outranks_description_hit() {
    let mut in_description = make_gag("First Bit", "Quagmire");
    in_description.description = "herbert waves from the porch".to_string();
    let store = GagStore::load(vec![in_description, make_gag("Second Bit", "Herbert")])
        .expect("valid records");

    let results = query_scored(&store, "herbet", SeasonFilter::All);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].gag.title, "Second Bit");
}

#[test]
fn best_field_dominates_the_record_score() {
    // One record matches perfectly on title; the other matches the same
    // token only via its (weight 0.5) description. The perfect title hit
    // must rank first regardless of everything else about the records.
    let mut smeared = make_gag("Vaudeville Act", "Vern");
    smeared.description = "vaudeville music plays".to_string();
    let store = GagStore::load(vec![smeared, make_gag("Vaudeville", "Johnny")])
        .expect("valid records");

    let results = query_scored(&store, "vaudeville", SeasonFilter::All);
    assert_eq!(results.len(), 2);
    // Both contain the token exactly, so both score 0.0 and store order
    // breaks the tie.
    assert_eq!(results[0].gag.title, "Vaudeville Act");
    assert_eq!(results[0].score, 0.0);
}

#[test]
fn equal_scores_keep_store_order() {
    let store = GagStore::load(vec![
        make_gag_in_season("Chicken Fight", "Peter Griffin", 1),
        make_gag_in_season("Chicken Fight", "Peter Griffin", 2),
        make_gag_in_season("Chicken Fight", "Peter Griffin", 3),
    ])
    .expect("valid records");

    let results = query_scored(&store, "chicken fight", SeasonFilter::All);
    let seasons: Vec<u32> = results.iter().map(|s| s.gag.season).collect();
    assert_eq!(seasons, vec![1, 2, 3]);
}

#[test]
fn scores_never_exceed_threshold_after_weighting() {
    let mut weak = make_gag("Something Else", "Nobody in Particular");
    weak.description = "a chickn appears briefly".to_string();
    let store = GagStore::load(vec![weak]).expect("valid records");

    for scored in query_scored(&store, "chicken", SeasonFilter::All) {
        assert!(scored.score >= 0.0 && scored.score <= 1.0);
    }
}
