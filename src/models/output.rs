//! Output models used for printing and JSON serialization.

use crate::cli::types::{GameweekId, PlayerId};
use crate::fpl::compute::{GwResult, SeasonResult};
use serde::Serialize;

/// One row of the season points table.
#[derive(Debug, Serialize)]
pub struct GameweekSummary {
    pub gameweek: GameweekId,
    pub points: i32,
    pub captain: Option<PlayerId>,
    pub multiplier: i32,
    pub autosubs: usize,
    pub transfer_hit: i32,
    pub counted: bool,
}

impl From<&GwResult> for GameweekSummary {
    fn from(result: &GwResult) -> Self {
        Self {
            gameweek: result.gameweek,
            points: result.gw_points,
            captain: result.captain.player_id,
            multiplier: result.captain.multiplier,
            autosubs: result.autosubs_applied.len(),
            transfer_hit: result.transfer_hit_points,
            counted: result.counts_toward_total,
        }
    }
}

/// Season table payload.
#[derive(Debug, Serialize)]
pub struct SeasonSummary {
    pub gameweeks: Vec<GameweekSummary>,
    pub total_points: i32,
}

impl From<&SeasonResult> for SeasonSummary {
    fn from(result: &SeasonResult) -> Self {
        Self {
            gameweeks: result.gameweeks.iter().map(GameweekSummary::from).collect(),
            total_points: result.total_points,
        }
    }
}

/// One manager's line in `batch` output.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub file: String,
    pub total_points: i32,
    pub gameweeks: usize,
}
