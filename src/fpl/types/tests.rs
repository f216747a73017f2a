//! Unit tests for the core data model

use super::*;

fn p(id: u32, pos: Position) -> SquadPlayer {
    SquadPlayer::new(PlayerId::new(id), pos)
}

#[test]
fn test_squad_player_builders() {
    let skipper = p(7, Position::MID).captain();
    assert!(skipper.is_captain);
    assert!(!skipper.is_vice_captain);

    let deputy = p(9, Position::FWD).vice_captain();
    assert!(deputy.is_vice_captain);
    assert!(!deputy.is_captain);
}

#[test]
fn test_player_score_played() {
    assert!(PlayerScore::new(PlayerId::new(1), 90, 6).played());
    assert!(PlayerScore::new(PlayerId::new(1), 1, 0).played());
    assert!(!PlayerScore::new(PlayerId::new(1), 0, 0).played());
}

#[test]
fn test_gameweek_scores_missing_record_reads_as_zero() {
    let scores = GameweekScores::new([PlayerScore::new(PlayerId::new(1), 90, 8)]);

    assert_eq!(scores.points(PlayerId::new(1)), 8);
    assert_eq!(scores.minutes(PlayerId::new(1)), 90);
    assert!(scores.played(PlayerId::new(1)));

    // No record for player 2: indistinguishable from "did not play"
    assert_eq!(scores.points(PlayerId::new(2)), 0);
    assert_eq!(scores.minutes(PlayerId::new(2)), 0);
    assert!(!scores.played(PlayerId::new(2)));
    assert!(scores.get(PlayerId::new(2)).is_none());

    let default = scores.score_or_default(PlayerId::new(2));
    assert_eq!(default.player_id, PlayerId::new(2));
    assert_eq!(default.raw_points, 0);
}

#[test]
fn test_team_state_accessors() {
    let team = TeamState::new(
        vec![p(1, Position::GKP), p(2, Position::DEF).captain()],
        vec![p(12, Position::GKP), p(13, Position::MID).vice_captain()],
    );

    assert_eq!(team.captain().unwrap().id, PlayerId::new(2));
    assert_eq!(team.vice_captain().unwrap().id, PlayerId::new(13));
    assert_eq!(team.position_of(PlayerId::new(13)), Some(Position::MID));
    assert_eq!(team.position_of(PlayerId::new(99)), None);
    assert_eq!(team.squad().count(), 4);
    assert_eq!(team.xi_positions(), vec![Position::GKP, Position::DEF]);
}

#[test]
fn test_chips_state_defaults_and_counting() {
    let none = ChipsState::default();
    assert_eq!(none.active_count(), 0);
    assert!(!none.waives_transfer_cost());

    let wildcard = ChipsState {
        wildcard: true,
        ..ChipsState::default()
    };
    assert_eq!(wildcard.active_count(), 1);
    assert!(wildcard.waives_transfer_cost());

    let triple = ChipsState {
        triple_captain: true,
        ..ChipsState::default()
    };
    assert!(!triple.waives_transfer_cost());
}

#[test]
fn test_neutral_defaults() {
    let join = JoinConfig::default();
    assert_eq!(join.joined_gameweek, GameweekId::new(1));
    assert_eq!(join.points_before_join, 0);

    let transfers = TransfersState::default();
    assert_eq!(transfers.transfers_made, 0);
    assert_eq!(transfers.free_transfers, 1);
}

#[test]
fn test_transfers_state_deserializes_with_defaults() {
    let t: TransfersState = serde_json::from_str("{}").unwrap();
    assert_eq!(t.transfers_made, 0);
    assert_eq!(t.free_transfers, 1);

    let t: TransfersState = serde_json::from_str(r#"{"transfers_made": 3}"#).unwrap();
    assert_eq!(t.transfers_made, 3);
    assert_eq!(t.free_transfers, 1);
}

#[test]
fn test_squad_player_deserializes_with_default_flags() {
    let p: SquadPlayer = serde_json::from_str(r#"{"id": 5, "position": "MID"}"#).unwrap();
    assert_eq!(p.id, PlayerId::new(5));
    assert_eq!(p.position, Position::MID);
    assert!(!p.is_captain);
    assert!(!p.is_vice_captain);
}
