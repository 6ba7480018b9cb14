//! CLI argument definitions using clap derive
//!
//! The launcher surface is a single verbosity flag; everything else the
//! binary does is decided by the application it launches.

use clap::Parser;

/// Launcher for the quantumleap application
#[derive(Parser, Debug, Clone, Copy, PartialEq, Eq)]
#[command(name = "quantumleap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(
        short,
        long,
        num_args = 0..=1,
        default_missing_value = "true",
        default_value_t = false,
        action = clap::ArgAction::Set
    )]
    pub verbose: bool,
}
