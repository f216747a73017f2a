//! Season input document: the typed boundary of the engine.
//!
//! The document is parsed once into the strict engine types and validated
//! immediately; malformed records are rejected here instead of being
//! threaded through the calculation as loose data.

use crate::cli::types::GameweekId;
use crate::error::{FplError, Result};
use crate::fpl::compute::{GameweekEntry, SeasonInputs};
use crate::fpl::formation::{BENCH_SIZE, XI_SIZE};
use crate::fpl::types::{
    ChipsState, Gameweek, GameweekScores, JoinConfig, PlayerScore, SquadPlayer, TeamState,
    TransfersState,
};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Root season input document.
#[derive(Debug, Deserialize)]
pub struct SeasonInputDoc {
    #[serde(default)]
    pub join: JoinConfig,
    pub gameweeks: Vec<GameweekDoc>,
}

/// One gameweek's block in the input document.
///
/// `scores`, `chips` and `transfers` may be omitted and default to "no data
/// yet", no active chips and the standard single free transfer.
#[derive(Debug, Deserialize)]
pub struct GameweekDoc {
    pub id: GameweekId,
    pub finished: bool,
    pub team: TeamDoc,
    #[serde(default)]
    pub scores: Vec<PlayerScore>,
    #[serde(default)]
    pub chips: ChipsState,
    #[serde(default)]
    pub transfers: TransfersState,
}

#[derive(Debug, Deserialize)]
pub struct TeamDoc {
    pub starting_xi: Vec<SquadPlayer>,
    pub bench: Vec<SquadPlayer>,
}

impl SeasonInputDoc {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the document and convert it into engine inputs.
    pub fn into_inputs(self) -> Result<SeasonInputs> {
        let mut gameweeks = Vec::with_capacity(self.gameweeks.len());
        let mut scores = BTreeMap::new();
        let mut entries = BTreeMap::new();
        let mut seen = BTreeSet::new();

        for gw in self.gameweeks {
            if !seen.insert(gw.id) {
                return Err(invalid(format!("duplicate gameweek {} in document", gw.id)));
            }
            validate_gameweek_doc(&gw)?;

            gameweeks.push(Gameweek::new(gw.id, gw.finished));
            scores.insert(gw.id, GameweekScores::new(gw.scores));
            entries.insert(
                gw.id,
                GameweekEntry {
                    team: TeamState::new(gw.team.starting_xi, gw.team.bench),
                    chips: gw.chips,
                    transfers: gw.transfers,
                },
            );
        }

        Ok(SeasonInputs {
            gameweeks,
            scores,
            entries,
            join: self.join,
        })
    }
}

fn invalid(message: String) -> FplError {
    FplError::InvalidInput { message }
}

/// Fail fast on structurally broken gameweek blocks: wrong squad sizes,
/// duplicate players, duplicate score records, more than one active chip.
/// Formation and captaincy legality are the engine's own validation step.
fn validate_gameweek_doc(gw: &GameweekDoc) -> Result<()> {
    if gw.team.starting_xi.len() != XI_SIZE {
        return Err(invalid(format!(
            "gameweek {}: starting XI must have {} players (has {})",
            gw.id,
            XI_SIZE,
            gw.team.starting_xi.len()
        )));
    }
    if gw.team.bench.len() != BENCH_SIZE {
        return Err(invalid(format!(
            "gameweek {}: bench must have {} players (has {})",
            gw.id,
            BENCH_SIZE,
            gw.team.bench.len()
        )));
    }

    let mut squad_ids = BTreeSet::new();
    for player in gw.team.starting_xi.iter().chain(gw.team.bench.iter()) {
        if !squad_ids.insert(player.id) {
            return Err(invalid(format!(
                "gameweek {}: player {} appears more than once in the squad",
                gw.id, player.id
            )));
        }
    }

    let mut score_ids = BTreeSet::new();
    for score in &gw.scores {
        if !score_ids.insert(score.player_id) {
            return Err(invalid(format!(
                "gameweek {}: duplicate score record for player {}",
                gw.id, score.player_id
            )));
        }
    }

    if gw.chips.active_count() > 1 {
        return Err(invalid(format!(
            "gameweek {}: at most one chip may be active",
            gw.id
        )));
    }

    Ok(())
}
