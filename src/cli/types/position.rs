//! FPL position types and utilities.

use crate::error::FplError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// FPL player positions.
///
/// Every squad member is registered as exactly one of these four positions;
/// the position drives formation validation and substitution eligibility.
///
/// # Examples
///
/// ```rust
/// use fpl_points::Position;
///
/// let keeper = Position::GKP;
/// assert_eq!(keeper.to_string(), "GKP");
/// assert!(keeper.is_goalkeeper());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    GKP,
    DEF,
    MID,
    FWD,
}

impl Position {
    /// Whether this is the goalkeeper position.
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::GKP)
    }

    /// Whether this is an outfield position (DEF, MID or FWD).
    pub fn is_outfield(&self) -> bool {
        !self.is_goalkeeper()
    }

    /// Allowed count range for this position in a legal starting XI.
    pub fn xi_range(&self) -> (u8, u8) {
        match self {
            Position::GKP => (1, 1),
            Position::DEF => (3, 5),
            Position::MID => (2, 5),
            Position::FWD => (1, 3),
        }
    }

    /// Total number of players of this position in a full 15-man squad.
    pub fn squad_quota(&self) -> u8 {
        match self {
            Position::GKP => 2,
            Position::DEF => 5,
            Position::MID => 5,
            Position::FWD => 3,
        }
    }

    /// Full position name used in validation messages.
    pub fn long_name(&self) -> &'static str {
        match self {
            Position::GKP => "goalkeeper",
            Position::DEF => "defender",
            Position::MID => "midfielder",
            Position::FWD => "forward",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::GKP => "GKP",
            Position::DEF => "DEF",
            Position::MID => "MID",
            Position::FWD => "FWD",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = FplError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GKP" | "GK" | "GOALKEEPER" => Ok(Position::GKP),
            "DEF" | "DEFENDER" => Ok(Position::DEF),
            "MID" | "MIDFIELDER" => Ok(Position::MID),
            "FWD" | "FORWARD" => Ok(Position::FWD),
            other => Err(FplError::InvalidPosition {
                position: other.to_string(),
            }),
        }
    }
}
