//! FPL Points Engine Library
//!
//! A deterministic Fantasy Premier League points calculator: given a squad
//! selection and per-player raw scores for a gameweek, it reproduces the
//! official scoring rulebook exactly and emits a fully audited breakdown.
//!
//! ## Features
//!
//! - **Formation Validation**: constraint checking for legal starting XIs,
//!   with every violated rule reported at once
//! - **Auto-Substitutions**: bench-priority replacement of non-playing
//!   starters, formation-aware, applied only once a gameweek is finished
//! - **Captaincy**: captain multiplier with vice-captain fallback
//! - **Chips**: Bench Boost, Triple Captain, Free Hit and Wildcard effects
//! - **Transfer Hits**: point deductions beyond the free allowance
//! - **Mid-Season Joins**: pre-join gameweeks excluded from season totals
//! - **Audit Logging**: every scoring decision recorded as human-readable text
//!
//! ## Quick Start
//!
//! ```rust
//! use fpl_points::fpl::compute::compute_gameweek_points;
//! use fpl_points::fpl::types::{
//!     ChipsState, Gameweek, GameweekScores, PlayerScore, SquadPlayer, TeamState, TransfersState,
//! };
//! use fpl_points::{GameweekId, PlayerId, Position, Result};
//!
//! fn main() -> Result<()> {
//!     let positions = [
//!         Position::GKP,
//!         Position::DEF, Position::DEF, Position::DEF,
//!         Position::MID, Position::MID, Position::MID, Position::MID, Position::MID,
//!         Position::FWD, Position::FWD,
//!     ];
//!     let mut starting_xi: Vec<SquadPlayer> = positions
//!         .iter()
//!         .enumerate()
//!         .map(|(i, &position)| SquadPlayer::new(PlayerId::new(i as u32 + 1), position))
//!         .collect();
//!     starting_xi[9] = starting_xi[9].captain();
//!     starting_xi[8] = starting_xi[8].vice_captain();
//!     let bench = vec![
//!         SquadPlayer::new(PlayerId::new(12), Position::GKP),
//!         SquadPlayer::new(PlayerId::new(13), Position::DEF),
//!         SquadPlayer::new(PlayerId::new(14), Position::MID),
//!         SquadPlayer::new(PlayerId::new(15), Position::FWD),
//!     ];
//!     let team = TeamState::new(starting_xi, bench);
//!
//!     // Everyone in the XI played 90 minutes for 2 points
//!     let scores =
//!         GameweekScores::new((1u32..=11).map(|id| PlayerScore::new(PlayerId::new(id), 90, 2)));
//!     let gameweek = Gameweek::new(GameweekId::new(1), true);
//!
//!     let result = compute_gameweek_points(
//!         &team,
//!         &scores,
//!         gameweek,
//!         &ChipsState::default(),
//!         &TransfersState::default(),
//!     )?;
//!     assert_eq!(result.gw_points, 24); // 22 from the XI plus the captain's extra 2
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod fpl;
pub mod models;

// Re-export commonly used types
pub use cli::types::{GameweekId, PlayerId, Position};
pub use error::{FplError, Result};
pub use fpl::compute::{
    compute_gameweek_points, compute_season_points, GwResult, SeasonInputs, SeasonResult,
};
pub use fpl::types::{
    ChipsState, Gameweek, GameweekScores, JoinConfig, PlayerScore, SquadPlayer, TeamState,
    TransfersState,
};
