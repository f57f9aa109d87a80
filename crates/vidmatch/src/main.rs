//! # vidmatch CLI (`vid`)
//!
//! The `vid` binary is the interface to a local CSV video catalogue.
//!
//! ## Usage
//!
//! ```bash
//! vid --config ./config/vidmatch.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `vid browse` | Popular videos and random picks |
//! | `vid search "<text>"` | Substring search over descriptions |
//! | `vid recommend "<text>"` | Most similar video by TF-IDF cosine similarity |
//! | `vid stats` | Catalogue overview |
//!
//! ## Examples
//!
//! ```bash
//! # Front page: popular + random
//! vid browse
//!
//! # Everything that mentions cooking
//! vid search "cooking"
//!
//! # The single closest match to a description
//! vid recommend "late night jazz piano for studying"
//!
//! # Point at a catalogue without a config file
//! vid --catalog ./data/videos.csv recommend "cat videos"
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use vidmatch::{browse, config, recommend, search, session, stats};

/// vidmatch — a local-first video catalogue browser and similarity
/// recommender.
///
/// All commands read the catalogue location and display settings from a
/// TOML config file. A `--catalog` override lets any command run
/// against a CSV directly, without a config file.
#[derive(Parser)]
#[command(
    name = "vid",
    about = "vidmatch — browse a video catalogue and find the most similar entry for a description",
    version,
    long_about = "vidmatch loads a flat CSV catalogue of videos and exposes three views over it: \
    a browse screen (popular and random picks), a case-insensitive substring search, and a TF-IDF \
    cosine-similarity recommendation that returns the single most similar catalogue entry for a \
    free-text description."
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/vidmatch.toml")]
    config: PathBuf,

    /// Override the catalogue CSV path from the config file.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Browse as a guest instead of the configured session.
    #[arg(long, global = true)]
    guest: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Show the browse screen: popular videos and random picks.
    ///
    /// Ranks the catalogue by view count and draws a uniform random
    /// sample. Counts default to the `[browse]` config section.
    Browse {
        /// Number of popular videos to show.
        #[arg(long)]
        popular: Option<usize>,

        /// Number of random picks to show.
        #[arg(long)]
        random: Option<usize>,

        /// Emit the screen as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Search descriptions by substring containment.
    ///
    /// Case-insensitive; results keep catalogue order and are capped at
    /// `search.max_results`. This is a plain text filter — for
    /// similarity ranking use `recommend`.
    Search {
        /// Text to look for inside descriptions.
        query: String,

        /// Maximum number of results to print.
        #[arg(long)]
        limit: Option<usize>,

        /// Emit results as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Recommend the catalogue entry most similar to a description.
    ///
    /// Builds a TF-IDF model over all descriptions and returns the
    /// single nearest entry by cosine similarity, with its score.
    Recommend {
        /// Free-text description to match against the catalogue.
        query: String,

        /// Emit the result as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Show a catalogue overview.
    ///
    /// Record count, description coverage, and view totals for the
    /// configured CSV.
    Stats,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // With an explicit --catalog the config file is optional.
    let mut config = if cli.catalog.is_some() {
        config::load_config(&cli.config).unwrap_or_else(|_| config::Config::minimal())
    } else {
        config::load_config(&cli.config)?
    };
    if let Some(path) = cli.catalog {
        config.catalog.path = path;
    }

    let session = if cli.guest {
        session::SessionContext::guest()
    } else {
        session::SessionContext::registered(config.session.name.clone())
    };

    match cli.command {
        Commands::Browse {
            popular,
            random,
            json,
        } => {
            browse::run_browse(&config, &session, popular, random, json)?;
        }
        Commands::Search { query, limit, json } => {
            search::run_search(&config, &query, limit, json)?;
        }
        Commands::Recommend { query, json } => {
            recommend::run_recommend(&config, &query, json)?;
        }
        Commands::Stats => {
            stats::run_stats(&config)?;
        }
    }

    Ok(())
}
