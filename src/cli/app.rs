//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use streamorder::config::Config;
use streamorder::core::models::StreamId;
use streamorder::core::services::{SortDirection, SortMode};
use streamorder::output::OutputMode;

/// streamorder - Display order and refresh countdowns for monitored streams
#[derive(Parser, Debug)]
#[command(
    name = "streamorder",
    version,
    about = "Display order and refresh countdowns for monitored streams",
    long_about = "Sort monitored topic streams manually or by recency.\n\n\
                  Stream lists are read from JSON files as exported by the stream backend.\n\
                  The manual order is stored locally and survives between runs."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: ~/.streamorder/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show streams in display order with their countdowns
    Order {
        /// JSON file with the stream list ("-" for stdin)
        streams: PathBuf,

        /// Sort mode: manual, last_updated
        #[arg(short, long)]
        mode: Option<SortMode>,

        /// Direction for last_updated: asc, desc
        #[arg(short, long)]
        direction: Option<SortDirection>,
    },

    /// Move a stream to an insertion slot of the manual order
    Move {
        /// JSON file with the stream list ("-" for stdin)
        streams: PathBuf,

        /// Stream to move
        id: StreamId,

        /// Insertion slot (0 = before the first stream, N = after the last)
        index: usize,
    },

    /// Drag a stream to a pointer position over an evenly spaced list
    Drag {
        /// JSON file with the stream list ("-" for stdin)
        streams: PathBuf,

        /// Stream to drag
        id: StreamId,

        /// Pointer position where the stream is dropped
        #[arg(long, allow_negative_numbers = true)]
        pointer_y: f64,

        /// Height of one list row
        #[arg(long, default_value_t = 64.0)]
        row_height: f64,
    },

    /// Print refresh countdowns for the displayed streams
    Countdown {
        /// JSON file with the stream list ("-" for stdin)
        streams: PathBuf,

        /// Number of one-second ticks to print
        #[arg(short, long, default_value_t = 1)]
        ticks: u32,
    },

    /// Show the stored manual order
    ShowOrder,

    /// Forget the stored manual order
    ResetOrder,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };

    match cli.command {
        Some(Command::Order {
            streams,
            mode,
            direction,
        }) => commands::order(&streams, mode, direction, &config, output_mode),
        Some(Command::Move { streams, id, index }) => {
            commands::move_stream(&streams, id, index, &config, output_mode)
        },
        Some(Command::Drag {
            streams,
            id,
            pointer_y,
            row_height,
        }) => commands::drag(&streams, id, pointer_y, row_height, &config, output_mode),
        Some(Command::Countdown { streams, ticks }) => {
            commands::countdown(&streams, ticks, &config, output_mode)
        },
        Some(Command::ShowOrder) => commands::show_order(&config, output_mode),
        Some(Command::ResetOrder) => commands::reset_order(&config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": streamorder::VERSION
                    })
                );
            } else {
                println!("streamorder v{}", streamorder::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": streamorder::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("streamorder v{}", streamorder::VERSION);
                println!("\nRun 'streamorder --help' for usage");
            }
            Ok(())
        },
    }
}
