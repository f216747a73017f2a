//! CLI argument definitions and parsing structures.

use super::types::GameweekId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(name = "fpl-points", about = "Fantasy Premier League points engine CLI")]
pub struct FplPoints {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute season totals and per-gameweek breakdowns from an input file.
    Season {
        /// Path to the season input JSON document.
        input: PathBuf,

        /// Emit the full result as JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Print each gameweek's audit log under its breakdown.
        #[clap(long)]
        audit: bool,
    },

    /// Compute a single gameweek's breakdown from an input file.
    Gameweek {
        /// Path to the season input JSON document.
        input: PathBuf,

        /// Gameweek id to compute.
        #[clap(long, short)]
        gameweek: GameweekId,

        /// Emit the full result as JSON instead of a breakdown.
        #[clap(long)]
        json: bool,

        /// Print the audit log under the breakdown.
        #[clap(long)]
        audit: bool,
    },

    /// Validate team state (formation, bench, captaincy) for each gameweek.
    Validate {
        /// Path to the season input JSON document.
        input: PathBuf,
    },

    /// Compute many managers' season files in parallel.
    Batch {
        /// Season input files, one per manager.
        inputs: Vec<PathBuf>,

        /// Emit one JSON array of per-file totals.
        #[clap(long)]
        json: bool,
    },
}
