//! Unit tests for auto-substitution and captaincy resolution

use super::*;
use crate::cli::types::{GameweekId, Position};
use crate::fpl::types::PlayerScore;

fn p(id: u32, pos: Position) -> SquadPlayer {
    SquadPlayer::new(PlayerId::new(id), pos)
}

/// 3-5-2 squad: XI is GKP 1, DEF 2-4, MID 5-9 (9 = vice), FWD 10 (captain)
/// and 11; bench priority order DEF 13, MID 14, FWD 15, GKP 12.
fn team_352() -> TeamState {
    TeamState::new(
        vec![
            p(1, Position::GKP),
            p(2, Position::DEF),
            p(3, Position::DEF),
            p(4, Position::DEF),
            p(5, Position::MID),
            p(6, Position::MID),
            p(7, Position::MID),
            p(8, Position::MID),
            p(9, Position::MID).vice_captain(),
            p(10, Position::FWD).captain(),
            p(11, Position::FWD),
        ],
        vec![
            p(13, Position::DEF),
            p(14, Position::MID),
            p(15, Position::FWD),
            p(12, Position::GKP),
        ],
    )
}

/// Everyone played 90 minutes scoring their own id as points, except the
/// listed players who sat out entirely.
fn played_except(absent: &[u32]) -> GameweekScores {
    GameweekScores::new((1..=15).map(|id| {
        if absent.contains(&id) {
            PlayerScore::new(PlayerId::new(id), 0, 0)
        } else {
            PlayerScore::new(PlayerId::new(id), 90, id as i32)
        }
    }))
}

fn finished() -> Gameweek {
    Gameweek::new(GameweekId::new(10), true)
}

fn in_progress() -> Gameweek {
    Gameweek::new(GameweekId::new(10), false)
}

#[test]
fn test_everyone_played_no_substitutions() {
    let team = team_352();
    let lineup = resolve_lineup(&team, &played_except(&[]), finished(), false);

    assert!(lineup.substitutions.is_empty());
    assert_eq!(lineup.effective_xi, team.starting_xi);
    assert_eq!(lineup.captaincy.player_id, Some(PlayerId::new(10)));
    assert!(!lineup.captaincy.used_vice);
}

#[test]
fn test_unfinished_gameweek_is_reported_live() {
    let team = team_352();
    // Captain absent so far, but nothing resolves until the gameweek ends
    let lineup = resolve_lineup(&team, &played_except(&[10, 2]), in_progress(), false);

    assert!(lineup.substitutions.is_empty());
    assert_eq!(lineup.effective_xi, team.starting_xi);
    assert_eq!(lineup.captaincy.player_id, Some(PlayerId::new(10)));
    assert!(!lineup.captaincy.used_vice);
}

#[test]
fn test_goalkeeper_replaced_only_by_bench_goalkeeper() {
    let team = team_352();
    let lineup = resolve_lineup(&team, &played_except(&[1]), finished(), false);

    assert_eq!(lineup.substitutions.len(), 1);
    let sub = &lineup.substitutions[0];
    assert_eq!(sub.player_out, PlayerId::new(1));
    assert_eq!(sub.player_in, PlayerId::new(12));
    assert!(lineup
        .effective_xi
        .iter()
        .any(|p| p.id == PlayerId::new(12)));
}

#[test]
fn test_absent_goalkeeper_with_absent_backup_stays_on() {
    let team = team_352();
    let lineup = resolve_lineup(&team, &played_except(&[1, 12]), finished(), false);

    assert!(lineup.substitutions.is_empty());
    assert!(lineup.effective_xi.iter().any(|p| p.id == PlayerId::new(1)));
    assert!(lineup
        .audit
        .iter()
        .any(|l| l.contains("No valid substitute found for GKP 1")));
}

#[test]
fn test_formation_constraint_skips_higher_priority_bench_player() {
    // 3-5-2 with a non-playing DEF: the bench MID (priority 0 here) cannot
    // come on without dropping DEF below 3, so the bench DEF does instead.
    let team = TeamState::new(
        team_352().starting_xi,
        vec![
            p(14, Position::MID),
            p(13, Position::DEF),
            p(15, Position::FWD),
            p(12, Position::GKP),
        ],
    );
    let lineup = resolve_lineup(&team, &played_except(&[2]), finished(), false);

    assert_eq!(lineup.substitutions.len(), 1);
    assert_eq!(lineup.substitutions[0].player_out, PlayerId::new(2));
    assert_eq!(lineup.substitutions[0].player_in, PlayerId::new(13));
}

#[test]
fn test_outfield_swap_may_change_formation() {
    // 4-4-2 with a non-playing FWD: the bench MID comes on, leaving 4-5-1.
    let team = TeamState::new(
        vec![
            p(1, Position::GKP),
            p(2, Position::DEF),
            p(3, Position::DEF),
            p(4, Position::DEF),
            p(5, Position::DEF),
            p(6, Position::MID),
            p(7, Position::MID),
            p(8, Position::MID),
            p(9, Position::MID).vice_captain(),
            p(10, Position::FWD).captain(),
            p(11, Position::FWD),
        ],
        vec![
            p(14, Position::MID),
            p(13, Position::DEF),
            p(15, Position::FWD),
            p(12, Position::GKP),
        ],
    );
    let lineup = resolve_lineup(&team, &played_except(&[11]), finished(), false);

    assert_eq!(lineup.substitutions.len(), 1);
    assert_eq!(lineup.substitutions[0].player_in, PlayerId::new(14));
}

#[test]
fn test_bench_priority_order_is_respected() {
    // Two absent midfielders, bench order DEF 13 then MID 14: 13 fills the
    // first slot (3-5-2 becomes 4-4-2), 14 fills the second.
    let team = team_352();
    let lineup = resolve_lineup(&team, &played_except(&[5, 6]), finished(), false);

    assert_eq!(lineup.substitutions.len(), 2);
    // Bench priority 0 is DEF 13: swapping a MID for a DEF keeps 4 DEF legal
    assert_eq!(lineup.substitutions[0].player_out, PlayerId::new(5));
    assert_eq!(lineup.substitutions[0].player_in, PlayerId::new(13));
    assert_eq!(lineup.substitutions[1].player_out, PlayerId::new(6));
    assert_eq!(lineup.substitutions[1].player_in, PlayerId::new(14));
}

#[test]
fn test_non_playing_bench_player_never_comes_on() {
    let team = team_352();
    // DEF 2 absent; bench DEF 13 also absent, bench MID 14 would break the
    // 3-DEF floor, so nobody comes on.
    let lineup = resolve_lineup(&team, &played_except(&[2, 13]), finished(), false);

    assert!(lineup.substitutions.is_empty());
    assert!(lineup
        .audit
        .iter()
        .any(|l| l.contains("Bench DEF 13 did not play")));
    assert!(lineup
        .audit
        .iter()
        .any(|l| l.contains("No valid substitute found for DEF 2")));
}

#[test]
fn test_captain_absent_promotes_vice() {
    let team = team_352();
    let lineup = resolve_lineup(&team, &played_except(&[10]), finished(), false);

    assert_eq!(lineup.captaincy.player_id, Some(PlayerId::new(9)));
    assert!(lineup.captaincy.used_vice);
    // The captain's slot itself was filled from the bench
    assert_eq!(lineup.substitutions.len(), 1);
    assert_eq!(lineup.substitutions[0].player_out, PlayerId::new(10));
}

#[test]
fn test_captain_and_vice_both_absent() {
    let team = team_352();
    let lineup = resolve_lineup(&team, &played_except(&[9, 10]), finished(), false);

    assert_eq!(lineup.captaincy.player_id, None);
    assert!(!lineup.captaincy.used_vice);
}

#[test]
fn test_bench_boost_skips_substitutions_but_not_captain_fallback() {
    let team = team_352();
    let lineup = resolve_lineup(&team, &played_except(&[10, 2]), finished(), true);

    assert!(lineup.substitutions.is_empty());
    assert_eq!(lineup.effective_xi, team.starting_xi);
    // Captain fallback still ran
    assert_eq!(lineup.captaincy.player_id, Some(PlayerId::new(9)));
    assert!(lineup.captaincy.used_vice);
}

#[test]
fn test_resolved_lineup_always_has_eleven_players() {
    let team = team_352();
    for absent in [vec![], vec![1], vec![2, 5, 10], vec![1, 2, 12, 13]] {
        let lineup = resolve_lineup(&team, &played_except(&absent), finished(), false);
        assert_eq!(lineup.effective_xi.len(), 11);
    }
}
