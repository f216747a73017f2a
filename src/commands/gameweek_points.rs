//! `gameweek` command: compute a single gameweek's breakdown.

use crate::cli::types::GameweekId;
use crate::commands::common::{load_season_inputs, print_gameweek_breakdown};
use crate::error::{FplError, Result};
use crate::fpl::compute::compute_gameweek_points;
use crate::fpl::types::GameweekScores;
use std::path::Path;

pub fn handle_gameweek_points(
    input: &Path,
    gameweek: GameweekId,
    as_json: bool,
    with_audit: bool,
) -> Result<()> {
    let inputs = load_season_inputs(input)?;

    let descriptor = inputs
        .gameweeks
        .iter()
        .copied()
        .find(|gw| gw.id == gameweek)
        .ok_or(FplError::MissingTeamState {
            gameweek: gameweek.as_u16(),
        })?;
    let entry = inputs
        .entries
        .get(&gameweek)
        .ok_or(FplError::MissingTeamState {
            gameweek: gameweek.as_u16(),
        })?;
    let empty_scores = GameweekScores::default();
    let scores = inputs.scores.get(&gameweek).unwrap_or(&empty_scores);

    let result = compute_gameweek_points(
        &entry.team,
        scores,
        descriptor,
        &entry.chips,
        &entry.transfers,
    )?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_gameweek_breakdown(&result, with_audit);
    Ok(())
}
