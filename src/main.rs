//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fpl_points::{
    cli::{Commands, FplPoints},
    commands::{
        batch::handle_batch, gameweek_points::handle_gameweek_points,
        season_points::handle_season_points, validate_team::handle_validate_team,
    },
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = FplPoints::parse();

    match app.command {
        Commands::Season { input, json, audit } => handle_season_points(&input, json, audit)?,

        Commands::Gameweek {
            input,
            gameweek,
            json,
            audit,
        } => handle_gameweek_points(&input, gameweek, json, audit)?,

        Commands::Validate { input } => handle_validate_team(&input)?,

        Commands::Batch { inputs, json } => handle_batch(&inputs, json)?,
    }

    Ok(())
}
