//! # Catalog Crate
//!
//! An in-memory media catalog of movies and series episodes, with title
//! search, simulated viewing, and watch-count rankings.
//!
//! ## Main Components
//!
//! - **types**: Playable items (`Movie`, `Series`, `PlayableItem`) and the
//!   `Playable` capability trait
//! - **library**: The ordered `Library` with add/search operations
//! - **ranking**: Top-N titles by watch count, optionally filtered by type
//! - **playback**: Random playback events with an injected random source
//! - **simulation**: A simulated viewing day and its report
//! - **error**: Error types for catalog operations
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{Library, ContentType};
//! use rand::SeedableRng;
//!
//! let mut library = Library::new();
//! library.add_movie("Star Wars 1", 1999, "Sci-Fi");
//! library.add_series_season("Friends", 1994, "Comedy", 1, 3);
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! library.generate_random_playback(&mut rng, &mut std::io::stdout())?;
//!
//! for item in library.top_titles(3, Some(ContentType::Series)) {
//!     println!("{item}");
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod library;
pub mod ranking;
pub mod playback;
pub mod simulation;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use types::{
    // Type aliases
    WatchCount,
    ReleaseYear,
    // Core types
    Playable,
    PlayableItem,
    Movie,
    Series,
    ContentType,
};
pub use library::Library;
pub use playback::{PlaybackEvent, MAX_PLAYS_PER_EVENT};
pub use simulation::{RankedTitle, Report, Simulation, SimulationConfig};
