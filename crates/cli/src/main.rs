use anyhow::{Context, Result};
use catalog::{ContentType, Library, Playable, PlayableItem, Report, Simulation, SimulationConfig};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, BufWriter, Write};
use std::time::Instant;
use tracing::info;

/// Media Library - simulated viewing day for a small movie and series catalog
#[derive(Parser)]
#[command(name = "media-library")]
#[command(about = "In-memory movie and series catalog with a daily popularity report", long_about = None)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a day of random viewing and print the popularity report (default)
    Simulate(SimulateArgs),

    /// List the catalog's movies and series, sorted by title
    List,

    /// Search the catalog for an exact title
    Search {
        /// Title to search for (exact, case-sensitive match)
        #[arg(long)]
        title: String,
    },
}

#[derive(clap::Args)]
struct SimulateArgs {
    /// Number of random playback events
    #[arg(long, default_value = "1000")]
    rounds: usize,

    /// Maximum plays per playback event
    #[arg(long, default_value = "100")]
    max_plays: u32,

    /// Number of titles in the report
    #[arg(short, long, default_value = "3")]
    limit: usize,

    /// Only rank this content type (Movie or Series)
    #[arg(long)]
    content_type: Option<ContentType>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Do not print a line for every play
    #[arg(short, long)]
    quiet: bool,

    /// Print the report as JSON (implies --quiet so stdout stays valid JSON)
    #[arg(long)]
    json: bool,
}

impl Default for SimulateArgs {
    fn default() -> Self {
        let config = SimulationConfig::default();
        Self {
            rounds: config.rounds,
            max_plays: config.max_plays,
            limit: config.top_limit,
            content_type: config.content_type,
            seed: config.seed,
            quiet: false,
            json: false,
        }
    }
}

impl From<&SimulateArgs> for SimulationConfig {
    fn from(args: &SimulateArgs) -> Self {
        SimulationConfig::new()
            .with_rounds(args.rounds)
            .with_max_plays(args.max_plays)
            .with_top_limit(args.limit)
            .with_content_type(args.content_type)
            .with_seed(args.seed)
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only play lines and the report
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let mut library = Library::sample();
    info!("Seeded library with {} items", library.len());

    match cli.command.unwrap_or_else(|| Commands::Simulate(SimulateArgs::default())) {
        Commands::Simulate(args) => handle_simulate(&mut library, &args)?,
        Commands::List => handle_list(&library),
        Commands::Search { title } => handle_search(&library, &title),
    }

    Ok(())
}

/// Title line printed before a text-mode simulation
const BANNER: &str = "Movie library";

impl SimulateArgs {
    /// Banner to print first; JSON runs print nothing but the report
    fn banner(&self) -> Option<&'static str> {
        (!self.json).then_some(BANNER)
    }

    /// Play lines are shown unless `--quiet` or `--json` is set
    fn shows_plays(&self) -> bool {
        !(self.quiet || self.json)
    }
}

/// Handle the 'simulate' command
fn handle_simulate(library: &mut Library, args: &SimulateArgs) -> Result<()> {
    if let Some(banner) = args.banner() {
        println!("{}", banner);
    }

    let simulation = Simulation::new(SimulationConfig::from(args));
    let mut rng = simulation.config().build_rng();

    let stdout = io::stdout();
    let mut out: Box<dyn Write> = if args.shows_plays() {
        Box::new(BufWriter::new(stdout.lock()))
    } else {
        Box::new(io::sink())
    };

    let start = Instant::now();
    let today = chrono::Local::now().date_naive();
    let report = simulation
        .run(library, &mut rng, &mut out, today)
        .context("Failed to simulate playback")?;
    out.flush().context("Failed to flush play output")?;
    drop(out);

    eprintln!(
        "{} Simulated {} plays in {:?}",
        "✓".green(),
        report.total_plays,
        start.elapsed()
    );

    print_report(&report, args.json)
}

/// Handle the 'list' command
fn handle_list(library: &Library) {
    println!("{}", "Movies:".bold().blue());
    for movie in library.get_movies() {
        print_item(movie);
    }

    println!("{}", "Series:".bold().blue());
    for episode in library.get_series() {
        print_item(episode);
    }
}

/// Handle the 'search' command
fn handle_search(library: &Library, title: &str) {
    let matches = library.search(title);

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if matches.is_empty() {
        println!("  no items titled '{}'", title);
        return;
    }
    for item in &matches {
        print_item(item);
    }
    if matches.iter().any(|item| item.is_series()) {
        println!(
            "{}{} episode(s) in the catalog",
            "• ".cyan(),
            library.episode_count(title)
        );
    }
}

fn print_item(item: &PlayableItem) {
    println!(
        "{}{} [{}] - {} view(s)",
        "• ".green(),
        item,
        item.genre(),
        item.watch_count()
    );
}

/// Helper function to print the popularity report
fn print_report(report: &Report, json: bool) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, report).context("Failed to encode report")?;
        writeln!(stdout)?;
    } else {
        report.write_to(&mut stdout).context("Failed to write report")?;
    }
    Ok(())
}
