//! Simulated viewing day and the popularity report it produces.
//!
//! A [`Simulation`] drives repeated random playback over a [`Library`] and
//! then ranks it into a [`Report`]. Knobs live in [`SimulationConfig`],
//! configured builder-style.

use crate::error::Result;
use crate::library::Library;
use crate::playback::MAX_PLAYS_PER_EVENT;
use crate::types::*;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Text that opens every report, followed by the date
pub const REPORT_HEADER: &str = "Most popular movies and series of the day";

/// Date layout used in the report header
pub const REPORT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Settings for one simulated day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of random playback events
    pub rounds: usize,
    /// Inclusive upper bound on plays per event
    pub max_plays: u32,
    /// How many titles the report lists
    pub top_limit: usize,
    /// Restrict the report to movies or series
    pub content_type: Option<ContentType>,
    /// Fixed seed for a reproducible run; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: 1000,
            max_plays: MAX_PLAYS_PER_EVENT,
            top_limit: 3,
            content_type: None,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the number of playback events (default: 1000)
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Configure the plays-per-event bound (default: 100)
    pub fn with_max_plays(mut self, max_plays: u32) -> Self {
        self.max_plays = max_plays;
        self
    }

    /// Configure how many titles are reported (default: 3)
    pub fn with_top_limit(mut self, top_limit: usize) -> Self {
        self.top_limit = top_limit;
        self
    }

    pub fn with_content_type(mut self, content_type: Option<ContentType>) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Random source for this configuration
    pub fn build_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// One line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedTitle {
    pub display: String,
    pub content_type: ContentType,
    pub watch_count: WatchCount,
}

impl From<&PlayableItem> for RankedTitle {
    fn from(item: &PlayableItem) -> Self {
        Self {
            display: item.to_string(),
            content_type: item.content_type(),
            watch_count: item.watch_count(),
        }
    }
}

/// Outcome of a simulated day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub date: NaiveDate,
    /// Total plays generated across all rounds
    pub total_plays: u64,
    pub titles: Vec<RankedTitle>,
}

impl Report {
    /// `Most popular movies and series of the day DD.MM.YYYY`
    pub fn header(&self) -> String {
        format!("{} {}", REPORT_HEADER, self.date.format(REPORT_DATE_FORMAT))
    }

    /// Write the header and then one display string per ranked title
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.header())?;
        for title in &self.titles {
            writeln!(out, "{}", title.display)?;
        }
        Ok(())
    }
}

/// Runs a simulated viewing day
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play `rounds` random events against `library`, writing every play
    /// line to `out`, then rank the library into a report dated `date`.
    ///
    /// Fails if the library is empty and at least one round is requested.
    #[instrument(skip_all, fields(rounds = self.config.rounds, items = library.len()))]
    pub fn run<R, W>(
        &self,
        library: &mut Library,
        rng: &mut R,
        out: &mut W,
        date: NaiveDate,
    ) -> Result<Report>
    where
        R: Rng,
        W: Write,
    {
        info!("Simulating {} playback event(s)", self.config.rounds);

        let mut total_plays = 0u64;
        for _ in 0..self.config.rounds {
            let event = library.generate_playback_up_to(self.config.max_plays, rng, out)?;
            total_plays += u64::from(event.plays);
        }

        let titles: Vec<RankedTitle> = library
            .top_titles(self.config.top_limit, self.config.content_type)
            .into_iter()
            .map(RankedTitle::from)
            .collect();

        debug!("Report lists {} title(s)", titles.len());
        info!("Simulation finished with {} total plays", total_plays);

        Ok(Report {
            date,
            total_plays,
            titles,
        })
    }
}
