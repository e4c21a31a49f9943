//! Integration tests for the catalog.
//!
//! These exercise the public API end to end: building a library, watching
//! items, and ranking them the way the daily report does.

use catalog::{CatalogError, ContentType, Library, Playable, PlayableItem, Simulation, SimulationConfig};
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::sink;

fn create_test_library() -> Library {
    let mut library = Library::new();

    library.add_movie("The Matrix", 1999, "Sci-Fi");
    library.add_series_season("Friends", 1994, "Comedy", 1, 3);
    library.add_movie("Amelie", 2001, "Romance");
    library.add_series_entry("Breaking Bad", 2008, "Crime", 1, 1);
    library.add_movie("The Matrix", 2021, "Sci-Fi");
    library.add_series_season("Friends", 1995, "Comedy", 2, 2);

    library
}

/// Play every item whose display string matches `display` `times` times
fn watch(library: &mut Library, display: &str, times: usize) {
    let mut out = sink();
    for item in library.iter_mut().filter(|item| item.to_string() == display) {
        for _ in 0..times {
            item.play(&mut out).unwrap();
        }
    }
}

fn displays(items: &[&PlayableItem]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[test]
fn test_movies_and_series_partition_library() {
    let library = create_test_library();

    let movies = library.get_movies();
    let series = library.get_series();

    assert_eq!(movies.len() + series.len(), library.len());
    assert!(movies.iter().all(|item| item.is_movie()));
    assert!(series.iter().all(|item| item.is_series()));

    assert!(movies.windows(2).all(|w| w[0].title() <= w[1].title()));
    assert!(series.windows(2).all(|w| w[0].title() <= w[1].title()));

    // Every library item shows up in exactly one of the two lists
    for item in &library {
        let in_movies = movies.iter().filter(|m| std::ptr::eq(**m, item)).count();
        let in_series = series.iter().filter(|s| std::ptr::eq(**s, item)).count();
        assert_eq!(in_movies + in_series, 1);
    }
}

#[test]
fn test_search_returns_insertion_order() {
    let library = create_test_library();

    let matrix = library.search("The Matrix");
    assert_eq!(displays(&matrix), ["The Matrix (1999)", "The Matrix (2021)"]);

    let friends = library.search("Friends");
    assert_eq!(friends.len(), 5);
    assert_eq!(library.episode_count("Friends"), 5);

    assert!(library.search("Seinfeld").is_empty());
}

#[test]
fn test_top_titles_least_watched_first() {
    let mut library = create_test_library();

    watch(&mut library, "The Matrix (1999)", 10);
    watch(&mut library, "Amelie (2001)", 5);
    watch(&mut library, "The Matrix (2021)", 1);

    let top = library.get_top_titles(2, Some("Movie")).unwrap();
    assert_eq!(displays(&top), ["The Matrix (2021)", "Amelie (2001)"]);

    let all = library.get_top_titles(library.len() + 5, None).unwrap();
    assert_eq!(all.len(), library.len());
    assert!(all.windows(2).all(|w| w[0].watch_count() <= w[1].watch_count()));
}

#[test]
fn test_series_ranking_uses_episode_display() {
    let mut library = create_test_library();

    watch(&mut library, "Breaking Bad S01E01", 3);

    let top = library.top_titles(10, Some(ContentType::Series));

    assert_eq!(top.len(), 6);
    assert_eq!(top.last().unwrap().to_string(), "Breaking Bad S01E01");
    // Second season episodes render with the episode number twice
    assert!(displays(&top).contains(&"Friends S02E02".to_string()));
}

#[test]
fn test_ranking_errors() {
    let library = create_test_library();

    assert!(library.get_top_titles(0, Some("Unknown")).unwrap().is_empty());
    assert!(matches!(
        library.get_top_titles(1, Some("Unknown")),
        Err(CatalogError::InvalidContentType { .. })
    ));
}

#[test]
fn test_random_playback_accumulates() {
    let mut library = create_test_library();
    let mut rng = StdRng::seed_from_u64(99);
    let mut out = Vec::new();

    let mut expected_total = 0u64;
    for _ in 0..25 {
        let event = library.generate_random_playback(&mut rng, &mut out).unwrap();
        expected_total += u64::from(event.plays);
    }

    let total: u64 = library.iter().map(|item| item.watch_count()).sum();
    assert_eq!(total, expected_total);
    assert_eq!(String::from_utf8(out).unwrap().lines().count() as u64, expected_total);

    let err = Library::new()
        .generate_random_playback(&mut rng, &mut sink())
        .unwrap_err();
    assert!(matches!(err, CatalogError::EmptyLibrary));
}

#[test]
fn test_daily_simulation_report() {
    let simulation = Simulation::new(SimulationConfig::new().with_seed(Some(5)));
    let mut library = Library::sample();
    let mut rng = simulation.config().build_rng();
    let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();

    let report = simulation.run(&mut library, &mut rng, &mut sink(), date).unwrap();

    assert_eq!(report.header(), "Most popular movies and series of the day 31.12.2023");
    assert_eq!(report.titles.len(), 3);

    let expected: Vec<String> = library
        .top_titles(3, None)
        .iter()
        .map(|item| item.to_string())
        .collect();
    let reported: Vec<String> = report.titles.iter().map(|t| t.display.clone()).collect();
    assert_eq!(reported, expected);
}
