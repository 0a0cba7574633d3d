//! End-to-end lifecycle test: construct → seed → serve
//!
//! Exercises the library surface the way the server binary uses it, minus
//! the HTTP layer.

use rand::rngs::StdRng;
use rand::SeedableRng;

use podium::{limits, Error, Participant, RankedIndex, ScoreRange, SeedConfig};

#[test]
fn test_seed_batch_query_lifecycle() {
    let config = SeedConfig {
        population: 1_000,
        ..SeedConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(2024);
    let index = RankedIndex::seed(&config, &mut rng);

    // Seeded and ranked before the first query.
    assert_eq!(index.len(), 1_000);
    index.verify_consistency().unwrap();

    let page = index.top(limits::LEADERBOARD_PAGE_SIZE);
    assert_eq!(page.len(), 100);
    assert_eq!(page[0].rank, 1);

    // A seeded resident is reachable through both views.
    let probe = page[0].username.clone();
    let record = index.lookup(&probe).unwrap();
    assert_eq!(record.username, probe);
    assert_eq!(record.rank, 1);

    // One batch, then the board is still whole and consistent.
    index.run_update_batch(limits::DEFAULT_UPDATE_BATCH, &mut rng);
    index.verify_consistency().unwrap();
    assert_eq!(index.len(), 1_000);

    let board = index.top(2_000);
    assert_eq!(board.len(), 1_000);
    for pair in board.windows(2) {
        assert!(pair[0].rating >= pair[1].rating);
    }
}

#[test]
fn test_small_population_serves_short_page() {
    let config = SeedConfig {
        population: 7,
        ..SeedConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(5);
    let index = RankedIndex::seed(&config, &mut rng);

    assert_eq!(index.top(limits::LEADERBOARD_PAGE_SIZE).len(), 7);
}

#[test]
fn test_search_contract_end_to_end() {
    let index = RankedIndex::from_records(
        vec![
            Participant::new("alice_3", 900),
            Participant::new("alice_30", 4100),
            Participant::new("alice_300", 2200),
            Participant::new("malice_31", 3000),
            Participant::new("bob_1", 5000),
        ],
        ScoreRange::new(100, 5000),
    );

    let results = index
        .search("alice_3", limits::SEARCH_PARTIAL_LIMIT)
        .unwrap();
    let names: Vec<&str> = results.iter().map(|p| p.username.as_str()).collect();
    // Exact match first, partials in rating order, exact excluded from them.
    assert_eq!(names, vec!["alice_3", "alice_30", "malice_31", "alice_300"]);

    assert!(matches!(
        index.search("  ", limits::SEARCH_PARTIAL_LIMIT),
        Err(Error::EmptyQuery)
    ));
}
