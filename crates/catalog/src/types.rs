//! Core domain types for the media catalog.
//!
//! - [`Movie`] and [`Series`] are the two kinds of catalog entry
//! - [`PlayableItem`] is the sum type the [`Library`](crate::Library) stores
//! - [`Playable`] is the capability set every entry shares
//! - [`ContentType`] names the variant, used to filter rankings

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

// =============================================================================
// Type Aliases
// =============================================================================

/// Number of times an item has been played
pub type WatchCount = u64;

/// Release year of a movie or series
pub type ReleaseYear = u16;

// =============================================================================
// Capability Trait
// =============================================================================

mod sealed {
    /// Crate-private view counter; [`Playable::play`](super::Playable::play)
    /// is the only public way to count a view.
    pub trait RecordView {
        fn record_view(&mut self);
    }
}

use sealed::RecordView;

/// Everything that can sit in the library and be watched.
///
/// Sealed: only the catalog's own item types implement it. [`play`](Self::play)
/// is shared so every variant counts a view and emits its play line together.
pub trait Playable: fmt::Display + RecordView {
    fn title(&self) -> &str;

    fn release_year(&self) -> ReleaseYear;

    fn genre(&self) -> &str;

    fn watch_count(&self) -> WatchCount;

    fn content_type(&self) -> ContentType;

    /// Watch the item once: increments the watch count and writes the
    /// display string, followed by a newline, to `out`.
    fn play(&mut self, out: &mut dyn Write) -> io::Result<()> {
        self.record_view();
        writeln!(out, "{}", self)
    }
}

// =============================================================================
// Content Type
// =============================================================================

/// Which variant of [`PlayableItem`] a ranking should be restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    Movie,
    Series,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Movie => f.write_str("Movie"),
            ContentType::Series => f.write_str("Series"),
        }
    }
}

impl FromStr for ContentType {
    type Err = CatalogError;

    /// Only the exact names `Movie` and `Series` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Movie" => Ok(ContentType::Movie),
            "Series" => Ok(ContentType::Series),
            _ => Err(CatalogError::InvalidContentType {
                value: s.to_string(),
            }),
        }
    }
}

// =============================================================================
// Movie
// =============================================================================

/// A single feature film
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub release_year: ReleaseYear,
    pub genre: String,
    pub(crate) watch_count: WatchCount,
}

impl Movie {
    /// Create a movie that has never been watched
    pub fn new(title: impl Into<String>, release_year: ReleaseYear, genre: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            release_year,
            genre: genre.into(),
            watch_count: 0,
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.release_year)
    }
}

impl Playable for Movie {
    fn title(&self) -> &str {
        &self.title
    }

    fn release_year(&self) -> ReleaseYear {
        self.release_year
    }

    fn genre(&self) -> &str {
        &self.genre
    }

    fn watch_count(&self) -> WatchCount {
        self.watch_count
    }

    fn content_type(&self) -> ContentType {
        ContentType::Movie
    }
}

impl RecordView for Movie {
    fn record_view(&mut self) {
        self.watch_count += 1;
    }
}

// =============================================================================
// Series
// =============================================================================

/// One episode of a series.
///
/// `series_number` is the episode's position within its season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub title: String,
    pub release_year: ReleaseYear,
    pub genre: String,
    pub season_number: u32,
    pub series_number: u32,
    pub(crate) watch_count: WatchCount,
}

impl Series {
    /// Create an episode that has never been watched
    pub fn new(
        title: impl Into<String>,
        release_year: ReleaseYear,
        genre: impl Into<String>,
        season_number: u32,
        series_number: u32,
    ) -> Self {
        Self {
            title: title.into(),
            release_year,
            genre: genre.into(),
            season_number,
            series_number,
            watch_count: 0,
        }
    }
}

/// Renders `<title> SxxExx`.
///
/// The season slot carries `series_number` as well, so episode 3 of any
/// season prints as `S03E03`. Existing report consumers depend on this.
impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} S{:02}E{:02}",
            self.title, self.series_number, self.series_number
        )
    }
}

impl Playable for Series {
    fn title(&self) -> &str {
        &self.title
    }

    fn release_year(&self) -> ReleaseYear {
        self.release_year
    }

    fn genre(&self) -> &str {
        &self.genre
    }

    fn watch_count(&self) -> WatchCount {
        self.watch_count
    }

    fn content_type(&self) -> ContentType {
        ContentType::Series
    }
}

impl RecordView for Series {
    fn record_view(&mut self) {
        self.watch_count += 1;
    }
}

// =============================================================================
// PlayableItem - what the Library stores
// =============================================================================

/// A catalog entry: either a [`Movie`] or a [`Series`] episode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayableItem {
    Movie(Movie),
    Series(Series),
}

impl PlayableItem {
    /// Borrow the inner value through the shared capability trait
    fn as_playable(&self) -> &dyn Playable {
        match self {
            PlayableItem::Movie(movie) => movie,
            PlayableItem::Series(series) => series,
        }
    }

    fn as_playable_mut(&mut self) -> &mut dyn Playable {
        match self {
            PlayableItem::Movie(movie) => movie,
            PlayableItem::Series(series) => series,
        }
    }

    pub fn is_movie(&self) -> bool {
        matches!(self, PlayableItem::Movie(_))
    }

    pub fn is_series(&self) -> bool {
        matches!(self, PlayableItem::Series(_))
    }

    /// True when this item belongs to the given content type
    pub fn is_a(&self, content_type: ContentType) -> bool {
        self.content_type() == content_type
    }
}

impl From<Movie> for PlayableItem {
    fn from(movie: Movie) -> Self {
        PlayableItem::Movie(movie)
    }
}

impl From<Series> for PlayableItem {
    fn from(series: Series) -> Self {
        PlayableItem::Series(series)
    }
}

impl fmt::Display for PlayableItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayableItem::Movie(movie) => fmt::Display::fmt(movie, f),
            PlayableItem::Series(series) => fmt::Display::fmt(series, f),
        }
    }
}

impl Playable for PlayableItem {
    fn title(&self) -> &str {
        self.as_playable().title()
    }

    fn release_year(&self) -> ReleaseYear {
        self.as_playable().release_year()
    }

    fn genre(&self) -> &str {
        self.as_playable().genre()
    }

    fn watch_count(&self) -> WatchCount {
        self.as_playable().watch_count()
    }

    fn content_type(&self) -> ContentType {
        self.as_playable().content_type()
    }
}

impl RecordView for PlayableItem {
    fn record_view(&mut self) {
        self.as_playable_mut().record_view();
    }
}
