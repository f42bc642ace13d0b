//! tictactoe-history CLI
//!
//! Play interactively in the terminal, or replay a list of clicks and
//! print the resulting board and history.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::info;

use tictactoe_history::error::AppError;
use tictactoe_history::logging::{init_file_logging, init_stderr_logging};
use tictactoe_history::replay::{parse_cells, replay};
use tictactoe_history::report::format_transcript;
use tictactoe_history::tui;
use tictactoe_history::types::{OutputFormat, ReplayConfig, SessionConfig, SortOrder};

#[derive(Parser)]
#[command(name = "tictactoe-history")]
#[command(about = "Tic-tac-toe with a move history you can jump through")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default)
    Play {
        /// List history newest first
        #[arg(long)]
        descending: bool,

        /// Write logs here instead of the cache directory
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Apply clicks to a fresh game and print the result
    Replay {
        /// Cell indices 0-8, row-major, clicked in order
        cells: Vec<String>,

        /// Jump to this move after the clicks
        #[arg(long)]
        jump: Option<usize>,

        /// List history newest first
        #[arg(long)]
        descending: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn sort_order(descending: bool) -> SortOrder {
    if descending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cmd_play(SessionConfig::default()),
        Some(Commands::Play { descending, log_file }) => cmd_play(SessionConfig {
            sort: sort_order(descending),
            log_file,
        }),
        Some(Commands::Replay { cells, jump, descending, format }) => {
            cmd_replay(&cells, jump, sort_order(descending), format.into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_play(config: SessionConfig) -> Result<(), AppError> {
    let log_path = init_file_logging(config.log_file.as_deref())?;
    info!(log = %log_path.display(), "logging initialized");

    let game = tui::run(&config)?;

    let moves = game.history().len() - 1;
    if moves > 0 {
        println!("Played {} move{}.", moves, if moves == 1 { "" } else { "s" });
    }
    Ok(())
}

fn cmd_replay(
    cells: &[String],
    jump: Option<usize>,
    sort: SortOrder,
    format: OutputFormat,
) -> Result<(), AppError> {
    init_stderr_logging();

    let config = ReplayConfig {
        cells: parse_cells(cells)?,
        jump,
        sort,
        format,
    };
    let game = replay(&config)?;

    print!("{}", format_transcript(&game, config.format));
    Ok(())
}
