//! Core data model for the points engine.
//!
//! All entities here are read-only snapshots constructed fresh for each
//! calculation call; the engine holds no mutable state between calls.

use crate::cli::types::{GameweekId, PlayerId, Position};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(test)]
mod tests;

/// One member of the 15-man squad for a single gameweek snapshot.
///
/// Exactly one squad member carries `is_captain` and at most one carries
/// `is_vice_captain`; captain and vice-captain must be distinct players.
/// Those invariants are checked by [`crate::fpl::compute`] before scoring
/// and by the input boundary in [`crate::models::input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadPlayer {
    pub id: PlayerId,
    pub position: Position,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
}

impl SquadPlayer {
    pub fn new(id: PlayerId, position: Position) -> Self {
        Self {
            id,
            position,
            is_captain: false,
            is_vice_captain: false,
        }
    }

    /// Mark this player as the captain.
    pub fn captain(mut self) -> Self {
        self.is_captain = true;
        self
    }

    /// Mark this player as the vice-captain.
    pub fn vice_captain(mut self) -> Self {
        self.is_vice_captain = true;
        self
    }
}

/// Raw per-player performance for one gameweek, produced externally.
///
/// `minutes_played == 0` is the sole signal that a player did not play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player_id: PlayerId,
    pub minutes_played: u16,
    pub raw_points: i32,
}

impl PlayerScore {
    pub fn new(player_id: PlayerId, minutes_played: u16, raw_points: i32) -> Self {
        Self {
            player_id,
            minutes_played,
            raw_points,
        }
    }

    pub fn played(&self) -> bool {
        self.minutes_played > 0
    }
}

/// Immutable per-gameweek score lookup.
///
/// A rostered player with no record reads as zero minutes and zero points:
/// at this boundary "no data yet" is indistinguishable from "did not play".
#[derive(Debug, Clone, Default)]
pub struct GameweekScores {
    by_player: BTreeMap<PlayerId, PlayerScore>,
}

impl GameweekScores {
    pub fn new(scores: impl IntoIterator<Item = PlayerScore>) -> Self {
        Self {
            by_player: scores.into_iter().map(|s| (s.player_id, s)).collect(),
        }
    }

    pub fn get(&self, id: PlayerId) -> Option<&PlayerScore> {
        self.by_player.get(&id)
    }

    /// Raw points for a player, zero when no record exists.
    pub fn points(&self, id: PlayerId) -> i32 {
        self.by_player.get(&id).map_or(0, |s| s.raw_points)
    }

    /// Minutes played, zero when no record exists.
    pub fn minutes(&self, id: PlayerId) -> u16 {
        self.by_player.get(&id).map_or(0, |s| s.minutes_played)
    }

    pub fn played(&self, id: PlayerId) -> bool {
        self.minutes(id) > 0
    }

    /// Score snapshot for a player, zero-filled when no record exists.
    pub fn score_or_default(&self, id: PlayerId) -> PlayerScore {
        self.by_player
            .get(&id)
            .copied()
            .unwrap_or(PlayerScore::new(id, 0, 0))
    }
}

/// Starting XI plus bench for one gameweek.
///
/// The bench is ordered by manager-assigned substitute priority: index 0
/// comes on first. A legal bench holds exactly one goalkeeper and three
/// outfield players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamState {
    pub starting_xi: Vec<SquadPlayer>,
    pub bench: Vec<SquadPlayer>,
}

impl TeamState {
    pub fn new(starting_xi: Vec<SquadPlayer>, bench: Vec<SquadPlayer>) -> Self {
        Self { starting_xi, bench }
    }

    /// All 15 squad members, starters first.
    pub fn squad(&self) -> impl Iterator<Item = &SquadPlayer> {
        self.starting_xi.iter().chain(self.bench.iter())
    }

    pub fn captain(&self) -> Option<&SquadPlayer> {
        self.squad().find(|p| p.is_captain)
    }

    pub fn vice_captain(&self) -> Option<&SquadPlayer> {
        self.squad().find(|p| p.is_vice_captain)
    }

    /// Registered position of a squad member, if rostered.
    pub fn position_of(&self, id: PlayerId) -> Option<Position> {
        self.squad().find(|p| p.id == id).map(|p| p.position)
    }

    pub fn xi_positions(&self) -> Vec<Position> {
        self.starting_xi.iter().map(|p| p.position).collect()
    }

    pub fn bench_positions(&self) -> Vec<Position> {
        self.bench.iter().map(|p| p.position).collect()
    }
}

/// Gameweek descriptor.
///
/// Substitution and captain-fallback logic only applies once `is_finished`
/// is true; before that the engine reports live, unresolved totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gameweek {
    pub id: GameweekId,
    pub is_finished: bool,
}

impl Gameweek {
    pub fn new(id: GameweekId, is_finished: bool) -> Self {
        Self { id, is_finished }
    }
}

/// Mid-season join configuration.
///
/// Gameweeks strictly before `joined_gameweek` contribute zero points to the
/// season total; their per-gameweek results are still emitted for
/// transparency. `points_before_join` is a manager-reported constant folded
/// into the season total to cover the pre-join stretch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinConfig {
    pub joined_gameweek: GameweekId,
    #[serde(default)]
    pub points_before_join: i32,
}

impl Default for JoinConfig {
    /// Neutral config: joined from gameweek 1, no reported offset.
    fn default() -> Self {
        Self {
            joined_gameweek: GameweekId::new(1),
            points_before_join: 0,
        }
    }
}

/// Chip flags for one gameweek.
///
/// At most one chip is active in a given gameweek. The input boundary
/// (`models::input`) rejects documents violating this; the engine itself
/// assumes it without re-checking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipsState {
    #[serde(default)]
    pub bench_boost: bool,
    #[serde(default)]
    pub triple_captain: bool,
    #[serde(default)]
    pub free_hit: bool,
    #[serde(default)]
    pub wildcard: bool,
}

impl ChipsState {
    pub fn active_count(&self) -> usize {
        [
            self.bench_boost,
            self.triple_captain,
            self.free_hit,
            self.wildcard,
        ]
        .iter()
        .filter(|&&c| c)
        .count()
    }

    /// Free Hit and Wildcard waive transfer costs for the gameweek.
    pub fn waives_transfer_cost(&self) -> bool {
        self.free_hit || self.wildcard
    }
}

fn default_free_transfers() -> u32 {
    1
}

/// Transfer activity for one gameweek.
///
/// Used only to compute point deductions, never to validate transfer
/// legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransfersState {
    #[serde(default)]
    pub transfers_made: u32,
    #[serde(default = "default_free_transfers")]
    pub free_transfers: u32,
}

impl Default for TransfersState {
    /// Neutral state: no transfers made, the standard single free transfer.
    fn default() -> Self {
        Self {
            transfers_made: 0,
            free_transfers: 1,
        }
    }
}
