//! Command-line interface for noughts.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a friend or a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe with a perfect computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Game mode; prompted for when omitted
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Board side length (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,

        /// Seat that moves first (1 or 2); random when omitted
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
        first: Option<u8>,
    },

    /// Let the computer play itself and report the result
    Solve {
        /// Board side length (overrides the config file)
        #[arg(short, long)]
        size: Option<usize>,
    },
}

/// Game mode as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Two humans at one terminal
    Pvp,
    /// Human against the computer
    Pvc,
}
