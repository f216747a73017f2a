//! Gameweek points computation: the orchestrating calculator.
//!
//! Pulls together the substitution resolver, captaincy multipliers, chip
//! effects, transfer penalties and mid-season-join offsets into a fully
//! audited per-gameweek breakdown and a season aggregate. All arithmetic is
//! integer; the engine is a pure function over its inputs.

use crate::cli::types::{GameweekId, PlayerId};
use crate::error::{FplError, Result};
use crate::fpl::autosub::{resolve_lineup, Substitution};
use crate::fpl::formation::{
    count_players_by_position, formation_display_name, validate_formation, BENCH_SIZE,
};
use crate::fpl::types::{
    ChipsState, Gameweek, GameweekScores, JoinConfig, PlayerScore, TeamState, TransfersState,
};
use serde::Serialize;
use std::collections::BTreeMap;


/// Point cost of each transfer beyond the free allowance.
pub const POINTS_PER_EXTRA_TRANSFER: i32 = 4;

/// Everything a manager committed for one gameweek: squad, chip, transfers.
#[derive(Debug, Clone)]
pub struct GameweekEntry {
    pub team: TeamState,
    pub chips: ChipsState,
    pub transfers: TransfersState,
}

/// Full season input: gameweek descriptors plus per-gameweek scores and
/// manager entries, and the join configuration.
#[derive(Debug, Clone)]
pub struct SeasonInputs {
    pub gameweeks: Vec<Gameweek>,
    pub scores: BTreeMap<GameweekId, GameweekScores>,
    pub entries: BTreeMap<GameweekId, GameweekEntry>,
    pub join: JoinConfig,
}

/// Final holder of the captain multiplier for one gameweek.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CaptainFinal {
    /// `None` when neither captain nor vice-captain played.
    pub player_id: Option<PlayerId>,
    pub multiplier: i32,
    /// The holder's total contribution: base points times multiplier.
    pub points: i32,
}

/// Fully audited points breakdown for one gameweek.
#[derive(Debug, Clone, Serialize)]
pub struct GwResult {
    pub gameweek: GameweekId,
    pub gw_points: i32,
    pub captain: CaptainFinal,
    pub autosubs_applied: Vec<Substitution>,
    /// Pre-substitution bench scores; always recorded, summed into
    /// `gw_points` only when Bench Boost is active.
    pub bench_points_counted: Vec<PlayerScore>,
    pub transfer_hit_points: i32,
    pub chip_effects: ChipsState,
    /// False for gameweeks before the manager joined: the result is emitted
    /// for transparency but excluded from the season total.
    pub counts_toward_total: bool,
    pub audit_log: Vec<String>,
}

/// Season aggregate: one result per requested gameweek plus a running total.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonResult {
    pub gameweeks: Vec<GwResult>,
    pub total_points: i32,
}

/// Collect every team-state violation: XI formation, bench composition and
/// captaincy exclusivity. Empty means legal.
pub fn validate_team_state(team: &TeamState) -> Vec<String> {
    let mut errors = validate_formation(&team.xi_positions()).errors;

    if team.bench.len() != BENCH_SIZE {
        errors.push(format!(
            "Bench must have exactly {} players (has {})",
            BENCH_SIZE,
            team.bench.len()
        ));
    }
    let bench_gkps = team
        .bench
        .iter()
        .filter(|p| p.position.is_goalkeeper())
        .count();
    if bench_gkps != 1 {
        errors.push(format!(
            "Bench must hold exactly 1 goalkeeper (has {})",
            bench_gkps
        ));
    }

    let captains = team.squad().filter(|p| p.is_captain).count();
    if captains != 1 {
        errors.push(format!("Exactly one captain required (has {})", captains));
    }
    let vices = team.squad().filter(|p| p.is_vice_captain).count();
    if vices > 1 {
        errors.push(format!("At most one vice-captain allowed (has {})", vices));
    }
    if let (Some(captain), Some(vice)) = (team.captain(), team.vice_captain()) {
        if captain.id == vice.id {
            errors.push("Captain and vice-captain must be distinct players".to_string());
        }
    }

    errors
}

/// Compute one gameweek's points breakdown.
///
/// Refuses to score a malformed team state: the structured error lists every
/// violated constraint rather than guessing a lineup.
pub fn compute_gameweek_points(
    team: &TeamState,
    scores: &GameweekScores,
    gameweek: Gameweek,
    chips: &ChipsState,
    transfers: &TransfersState,
) -> Result<GwResult> {
    let errors = validate_team_state(team);
    if !errors.is_empty() {
        return Err(FplError::InvalidTeamState {
            gameweek: gameweek.id.as_u16(),
            errors,
        });
    }

    let mut audit = Vec::new();
    let counts = count_players_by_position(&team.xi_positions());
    audit.push(format!(
        "Formation validated: {}",
        formation_display_name(&counts)
    ));

    let lineup = resolve_lineup(team, scores, gameweek, chips.bench_boost);
    audit.extend(lineup.audit);

    let xi_points: i32 = lineup
        .effective_xi
        .iter()
        .map(|p| scores.points(p.id))
        .sum();
    audit.push(format!("Effective XI points: {}", xi_points));

    let (captain, captain_bonus) = captain_contribution(&lineup.captaincy.player_id, scores, chips, &mut audit);

    let bench_points_counted: Vec<PlayerScore> = team
        .bench
        .iter()
        .map(|p| scores.score_or_default(p.id))
        .collect();
    let bench_total: i32 = bench_points_counted.iter().map(|s| s.raw_points).sum();
    let bench_counted = if chips.bench_boost {
        audit.push(format!(
            "Bench Boost active - bench contributes {} points",
            bench_total
        ));
        bench_total
    } else {
        audit.push(format!(
            "Bench scored {} points (recorded only - no Bench Boost)",
            bench_total
        ));
        0
    };

    let transfer_hit_points = transfer_hit(chips, transfers, &mut audit);

    let gw_points = xi_points + captain_bonus + bench_counted + transfer_hit_points;
    audit.push(format!(
        "Gameweek {} total: {} (XI {} + captain bonus {} + bench {} + transfer hits {})",
        gameweek.id, gw_points, xi_points, captain_bonus, bench_counted, transfer_hit_points
    ));

    Ok(GwResult {
        gameweek: gameweek.id,
        gw_points,
        captain,
        autosubs_applied: lineup.substitutions,
        bench_points_counted,
        transfer_hit_points,
        chip_effects: *chips,
        counts_toward_total: true,
        audit_log: audit,
    })
}

/// Compute every requested gameweek in ascending id order and aggregate the
/// season total, suppressing pre-join gameweeks from the sum.
pub fn compute_season_points(inputs: &SeasonInputs) -> Result<SeasonResult> {
    let mut gameweeks = inputs.gameweeks.clone();
    gameweeks.sort_by_key(|gw| gw.id);

    let empty_scores = GameweekScores::default();
    let mut results = Vec::with_capacity(gameweeks.len());
    let mut total_points = inputs.join.points_before_join;

    for gameweek in gameweeks {
        let entry = inputs
            .entries
            .get(&gameweek.id)
            .ok_or(FplError::MissingTeamState {
                gameweek: gameweek.id.as_u16(),
            })?;
        let scores = inputs.scores.get(&gameweek.id).unwrap_or(&empty_scores);

        let mut result = compute_gameweek_points(
            &entry.team,
            scores,
            gameweek,
            &entry.chips,
            &entry.transfers,
        )?;

        result.counts_toward_total = gameweek.id >= inputs.join.joined_gameweek;
        if result.counts_toward_total {
            total_points += result.gw_points;
        } else {
            result.audit_log.push(format!(
                "Joined in gameweek {} - gameweek {} excluded from the season total",
                inputs.join.joined_gameweek, gameweek.id
            ));
        }
        results.push(result);
    }

    Ok(SeasonResult {
        gameweeks: results,
        total_points,
    })
}

/// Captain multiplier term: x2 normally, x3 under Triple Captain, applied to
/// the effective holder resolved by the substitution pass.
fn captain_contribution(
    holder: &Option<PlayerId>,
    scores: &GameweekScores,
    chips: &ChipsState,
    audit: &mut Vec<String>,
) -> (CaptainFinal, i32) {
    let Some(id) = *holder else {
        audit.push("No captain multiplier applied this gameweek".to_string());
        let captain = CaptainFinal {
            player_id: None,
            multiplier: 1,
            points: 0,
        };
        return (captain, 0);
    };

    let multiplier = if chips.triple_captain { 3 } else { 2 };
    if chips.triple_captain {
        audit.push("Triple Captain active - 3x multiplier this gameweek".to_string());
    }
    let base = scores.points(id);
    let bonus = (multiplier - 1) * base;
    audit.push(format!(
        "Captain bonus: {} points ({}x multiplier on {} base points for player {})",
        bonus, multiplier, base, id
    ));
    let captain = CaptainFinal {
        player_id: Some(id),
        multiplier,
        points: base * multiplier,
    };
    (captain, bonus)
}

/// Transfer penalty term: zero under Free Hit or Wildcard, otherwise
/// -4 per transfer beyond the free allowance.
fn transfer_hit(chips: &ChipsState, transfers: &TransfersState, audit: &mut Vec<String>) -> i32 {
    if chips.free_hit {
        audit.push("Free Hit active - transfer costs waived".to_string());
        return 0;
    }
    if chips.wildcard {
        audit.push("Wildcard active - transfer costs waived".to_string());
        return 0;
    }

    let extra = transfers.transfers_made.saturating_sub(transfers.free_transfers);
    let hit = -(extra as i32) * POINTS_PER_EXTRA_TRANSFER;
    if extra == 0 {
        audit.push(format!(
            "{} transfer(s) made, {} free - no hit",
            transfers.transfers_made, transfers.free_transfers
        ));
    } else {
        audit.push(format!(
            "{} transfer(s) made, {} free - {} extra x {} = {} points",
            transfers.transfers_made, transfers.free_transfers, extra, POINTS_PER_EXTRA_TRANSFER, hit
        ));
    }
    hit
}
