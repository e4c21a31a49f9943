//! The in-memory [`Library`] and its add/query operations.
//!
//! Ranking lives in [`crate::ranking`] and random playback in
//! [`crate::playback`]; both extend `Library` with further `impl` blocks.

use crate::types::*;
use serde::Serialize;

/// Ordered collection of everything in the catalog.
///
/// Items keep their insertion order, duplicate titles are allowed, and
/// nothing is ever removed. Watch counts only move through
/// [`Playable::play`], so they never go down.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Library {
    pub(crate) items: Vec<PlayableItem>,
}

impl Library {
    /// Creates a new, empty Library
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The catalog the simulation starts from: three Star Wars films plus
    /// the first season of Friends and of House M.D.
    pub fn sample() -> Self {
        let mut library = Self::new();

        library.add_movie("Star Wars 1", 1999, "Sci-Fi");
        library.add_movie("Star Wars 2", 2002, "Sci-Fi");
        library.add_movie("Star Wars 3", 2005, "Sci-Fi");

        library.add_series_season("Friends", 1994, "Comedy", 1, 3);
        library.add_series_season("House M.D.", 2004, "Medical drama", 1, 5);

        library
    }

    // Mutators

    /// Append a movie
    pub fn add_movie(&mut self, title: impl Into<String>, release_year: ReleaseYear, genre: impl Into<String>) {
        self.items.push(Movie::new(title, release_year, genre).into());
    }

    /// Append a single series episode
    pub fn add_series_entry(
        &mut self,
        title: impl Into<String>,
        release_year: ReleaseYear,
        genre: impl Into<String>,
        season_number: u32,
        series_number: u32,
    ) {
        self.items
            .push(Series::new(title, release_year, genre, season_number, series_number).into());
    }

    /// Append a whole season, numbering episodes `1..=episode_count`.
    ///
    /// An `episode_count` of zero adds nothing.
    pub fn add_series_season(
        &mut self,
        title: impl Into<String>,
        release_year: ReleaseYear,
        genre: impl Into<String>,
        season_number: u32,
        episode_count: u32,
    ) {
        let title = title.into();
        let genre = genre.into();

        for series_number in 1..=episode_count {
            self.add_series_entry(
                title.clone(),
                release_year,
                genre.clone(),
                season_number,
                series_number,
            );
        }
    }

    // Queries - these borrow from the library rather than cloning items

    /// All movies, sorted ascending by title (ties keep library order)
    pub fn get_movies(&self) -> Vec<&PlayableItem> {
        self.sorted_by_title(ContentType::Movie)
    }

    /// All series episodes, sorted ascending by title (ties keep library order)
    pub fn get_series(&self) -> Vec<&PlayableItem> {
        self.sorted_by_title(ContentType::Series)
    }

    /// Items whose title equals `query` exactly, in library order
    pub fn search(&self, query: &str) -> Vec<&PlayableItem> {
        self.items
            .iter()
            .filter(|item| item.title() == query)
            .collect()
    }

    /// How many entries carry this title; for a series that is its
    /// episode count across all seasons.
    pub fn episode_count(&self, title: &str) -> usize {
        self.items.iter().filter(|item| item.title() == title).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over every item in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &PlayableItem> {
        self.items.iter()
    }

    /// Iterate mutably, e.g. to [`play`](Playable::play) specific items.
    /// Watch counts stay private, so playing is the only way to move them.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PlayableItem> {
        self.items.iter_mut()
    }

    fn sorted_by_title(&self, content_type: ContentType) -> Vec<&PlayableItem> {
        let mut items: Vec<&PlayableItem> = self
            .items
            .iter()
            .filter(|item| item.is_a(content_type))
            .collect();
        // sort_by is stable, so equal titles stay in insertion order
        items.sort_by(|a, b| a.title().cmp(b.title()));
        items
    }
}

impl<'a> IntoIterator for &'a Library {
    type Item = &'a PlayableItem;
    type IntoIter = std::slice::Iter<'a, PlayableItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
