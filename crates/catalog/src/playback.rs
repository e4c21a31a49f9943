//! Random playback generation.
//!
//! The random source is passed in by the caller, so tests and the `--seed`
//! flag get reproducible runs while the default run stays OS-seeded.

use crate::error::{CatalogError, Result};
use crate::library::Library;
use crate::types::*;
use rand::Rng;
use serde::Serialize;
use std::io::Write;
use tracing::debug;

/// Upper bound (inclusive) on plays produced by one playback event
pub const MAX_PLAYS_PER_EVENT: u32 = 100;

/// What a single call to [`Library::generate_random_playback`] did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaybackEvent {
    /// Position of the chosen item in the library
    pub index: usize,
    /// Display string of the chosen item
    pub title: String,
    pub plays: u32,
}

impl Library {
    /// Pick one item uniformly at random and play it between 1 and
    /// [`MAX_PLAYS_PER_EVENT`] times, writing each play line to `out`.
    ///
    /// # Errors
    /// [`CatalogError::EmptyLibrary`] when there is nothing to choose from,
    /// [`CatalogError::Io`] when `out` rejects a write.
    pub fn generate_random_playback<R, W>(&mut self, rng: &mut R, out: &mut W) -> Result<PlaybackEvent>
    where
        R: Rng,
        W: Write,
    {
        self.generate_playback_up_to(MAX_PLAYS_PER_EVENT, rng, out)
    }

    /// Like [`generate_random_playback`](Self::generate_random_playback) with
    /// a custom inclusive upper bound on plays. A bound of zero is treated
    /// as one.
    pub fn generate_playback_up_to<R, W>(
        &mut self,
        max_plays: u32,
        rng: &mut R,
        out: &mut W,
    ) -> Result<PlaybackEvent>
    where
        R: Rng,
        W: Write,
    {
        if self.items.is_empty() {
            return Err(CatalogError::EmptyLibrary);
        }

        let index = rng.random_range(0..self.items.len());
        let plays = rng.random_range(1..=max_plays.max(1));

        let item = &mut self.items[index];
        for _ in 0..plays {
            item.play(out)?;
        }

        debug!(
            "Played {} x{} (watch count now {})",
            item,
            plays,
            item.watch_count()
        );

        Ok(PlaybackEvent {
            index,
            title: item.to_string(),
            plays,
        })
    }
}
