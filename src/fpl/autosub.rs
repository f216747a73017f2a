//! Auto-substitution and captaincy resolution for a gameweek.
//!
//! Once a gameweek is finished, starting players with zero minutes are
//! replaced by bench players in bench-priority order, provided the swap
//! keeps the formation legal. Substitution is best-effort: a starter with no
//! legal replacement stays on, scoring zero. Captaincy is resolved after
//! substitutions, since a substituted-out captain is a non-player for the
//! gameweek.

use crate::cli::types::PlayerId;
use crate::fpl::formation::validate_substitution;
use crate::fpl::types::{Gameweek, GameweekScores, SquadPlayer, TeamState};
use serde::Serialize;

#[cfg(test)]
mod tests;

/// One applied substitution, with the human-readable reason that also lands
/// in the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Substitution {
    pub player_out: PlayerId,
    pub player_in: PlayerId,
    pub reason: String,
}

/// Who ends up holding the captain multiplier, if anyone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CaptaincyOutcome {
    pub player_id: Option<PlayerId>,
    pub used_vice: bool,
}

/// Effective lineup after substitution and captaincy resolution.
#[derive(Debug, Clone)]
pub struct ResolvedLineup {
    pub effective_xi: Vec<SquadPlayer>,
    pub substitutions: Vec<Substitution>,
    pub captaincy: CaptaincyOutcome,
    pub audit: Vec<String>,
}

/// Resolve the effective lineup for a gameweek.
///
/// An unfinished gameweek is reported live: no substitutions, no
/// vice-captain fallback. With Bench Boost active all 15 players already
/// count, so no substitutions are applied either; captain fallback still
/// runs.
pub fn resolve_lineup(
    team: &TeamState,
    scores: &GameweekScores,
    gameweek: Gameweek,
    bench_boost: bool,
) -> ResolvedLineup {
    let mut audit = Vec::new();
    let mut effective_xi = team.starting_xi.clone();
    let mut substitutions = Vec::new();

    if !gameweek.is_finished {
        audit.push(format!(
            "Gameweek {} still in progress - no substitutions, live totals shown",
            gameweek.id
        ));
        let captaincy = live_captaincy(team, &mut audit);
        return ResolvedLineup {
            effective_xi,
            substitutions,
            captaincy,
            audit,
        };
    }

    if bench_boost {
        audit.push("Bench Boost active - no auto-substitutions applied".to_string());
    } else {
        apply_substitutions(team, scores, &mut effective_xi, &mut substitutions, &mut audit);
    }

    let captaincy = resolve_captaincy(team, scores, &mut audit);

    ResolvedLineup {
        effective_xi,
        substitutions,
        captaincy,
        audit,
    }
}

/// Walk the bench in priority order, swapping each playing bench player for
/// the first non-playing starter the formation rules allow them to replace.
fn apply_substitutions(
    team: &TeamState,
    scores: &GameweekScores,
    effective_xi: &mut [SquadPlayer],
    substitutions: &mut Vec<Substitution>,
    audit: &mut Vec<String>,
) {
    let absent = effective_xi
        .iter()
        .filter(|p| !scores.played(p.id))
        .count();
    if absent == 0 {
        audit.push("All starting players played - no substitutions needed".to_string());
        return;
    }
    audit.push(format!("{} starting player(s) did not play", absent));

    for bench_player in &team.bench {
        if !scores.played(bench_player.id) {
            audit.push(format!(
                "Bench {} {} did not play - cannot come on",
                bench_player.position, bench_player.id
            ));
            continue;
        }

        if let Some(index) = find_replacement_target(bench_player, effective_xi, scores) {
            let outgoing = effective_xi[index];
            let reason = format!(
                "{} {} (0 mins) replaced by {} {} from the bench",
                outgoing.position, outgoing.id, bench_player.position, bench_player.id
            );
            effective_xi[index] = *bench_player;
            substitutions.push(Substitution {
                player_out: outgoing.id,
                player_in: bench_player.id,
                reason: reason.clone(),
            });
            audit.push(reason);
        }
    }

    // Starters with no legal replacement stay on and score zero.
    for starter in effective_xi.iter() {
        if !scores.played(starter.id) {
            audit.push(format!(
                "No valid substitute found for {} {} - stays on, scoring 0",
                starter.position, starter.id
            ));
        }
    }
}

/// Pick the starter this bench player replaces, if any: the bench GKP may
/// only replace a non-playing starting GKP; a bench outfield player replaces
/// the first non-playing outfield starter whose removal keeps the XI legal.
fn find_replacement_target(
    bench_player: &SquadPlayer,
    effective_xi: &[SquadPlayer],
    scores: &GameweekScores,
) -> Option<usize> {
    if bench_player.position.is_goalkeeper() {
        return effective_xi
            .iter()
            .position(|p| p.position.is_goalkeeper() && !scores.played(p.id));
    }

    let xi_positions: Vec<_> = effective_xi.iter().map(|p| p.position).collect();
    effective_xi.iter().position(|starter| {
        starter.position.is_outfield()
            && !scores.played(starter.id)
            && validate_substitution(&xi_positions, starter.position, bench_player.position)
                .is_valid
    })
}

/// Captaincy for an unfinished gameweek: the designated captain keeps the
/// armband, no fallback until all matches have ended.
fn live_captaincy(team: &TeamState, audit: &mut Vec<String>) -> CaptaincyOutcome {
    match team.captain() {
        Some(captain) => {
            audit.push(format!(
                "Captain {} holds the armband (gameweek unfinished, no fallback check)",
                captain.id
            ));
            CaptaincyOutcome {
                player_id: Some(captain.id),
                used_vice: false,
            }
        }
        None => {
            audit.push("No captain selected - no multiplier applied".to_string());
            CaptaincyOutcome {
                player_id: None,
                used_vice: false,
            }
        }
    }
}

/// Post-substitution captain fallback: a captain with zero minutes passes the
/// multiplier to the vice-captain; if the vice-captain is also absent, nobody
/// receives it.
fn resolve_captaincy(
    team: &TeamState,
    scores: &GameweekScores,
    audit: &mut Vec<String>,
) -> CaptaincyOutcome {
    let Some(captain) = team.captain() else {
        audit.push("No captain selected - no multiplier applied".to_string());
        return CaptaincyOutcome {
            player_id: None,
            used_vice: false,
        };
    };

    if scores.played(captain.id) {
        audit.push(format!(
            "Captain {} played ({} mins) - multiplier stays with the captain",
            captain.id,
            scores.minutes(captain.id)
        ));
        return CaptaincyOutcome {
            player_id: Some(captain.id),
            used_vice: false,
        };
    }
    audit.push(format!("Captain {} did not play (0 mins)", captain.id));

    let Some(vice) = team.vice_captain() else {
        audit.push("No vice-captain selected - no multiplier applied".to_string());
        return CaptaincyOutcome {
            player_id: None,
            used_vice: false,
        };
    };

    if scores.played(vice.id) {
        audit.push(format!(
            "Vice-captain {} played ({} mins) - promoted to captain",
            vice.id,
            scores.minutes(vice.id)
        ));
        return CaptaincyOutcome {
            player_id: Some(vice.id),
            used_vice: true,
        };
    }

    audit.push(format!(
        "Vice-captain {} also did not play - no multiplier applied",
        vice.id
    ));
    CaptaincyOutcome {
        player_id: None,
        used_vice: false,
    }
}
