//! Formation validation: the constraint rules for a legal starting XI.
//!
//! A legal XI has exactly 11 players: 1 GKP, 3-5 DEF, 2-5 MID and 1-3 FWD.
//! The same constraint definitions also back the bench-capacity queries used
//! by external squad builders, so the two can never drift apart.

use crate::cli::types::Position;


pub const XI_SIZE: usize = 11;
pub const BENCH_SIZE: usize = 4;
pub const SQUAD_SIZE: usize = 15;

/// Player counts per position for a set of position tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionCounts {
    pub gkp: u8,
    pub def: u8,
    pub mid: u8,
    pub fwd: u8,
}

impl PositionCounts {
    pub fn total(&self) -> u8 {
        self.gkp + self.def + self.mid + self.fwd
    }

    pub fn get(&self, position: Position) -> u8 {
        match position {
            Position::GKP => self.gkp,
            Position::DEF => self.def,
            Position::MID => self.mid,
            Position::FWD => self.fwd,
        }
    }
}

/// Outcome of validating an XI or a hypothetical post-swap XI.
///
/// `errors` carries one entry per violated constraint, so callers can report
/// every problem at once rather than just the first.
#[derive(Debug, Clone)]
pub struct FormationValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub counts: PositionCounts,
}

pub fn count_players_by_position(positions: &[Position]) -> PositionCounts {
    let mut counts = PositionCounts::default();
    for position in positions {
        match position {
            Position::GKP => counts.gkp += 1,
            Position::DEF => counts.def += 1,
            Position::MID => counts.mid += 1,
            Position::FWD => counts.fwd += 1,
        }
    }
    counts
}

/// Validate a starting XI against the formation rules.
pub fn validate_formation(positions: &[Position]) -> FormationValidation {
    let counts = count_players_by_position(positions);
    let mut errors = Vec::new();

    if positions.len() != XI_SIZE {
        errors.push(format!(
            "Starting XI must have exactly {} players (has {})",
            XI_SIZE,
            positions.len()
        ));
    }

    for position in [Position::GKP, Position::DEF, Position::MID, Position::FWD] {
        let (min, max) = position.xi_range();
        let have = counts.get(position);
        if have < min || have > max {
            if min == max {
                errors.push(format!(
                    "Must have exactly {} {} (has {})",
                    min,
                    position.long_name(),
                    have
                ));
            } else {
                errors.push(format!(
                    "Must have {}-{} {}s (has {})",
                    min,
                    max,
                    position.long_name(),
                    have
                ));
            }
        }
    }

    FormationValidation {
        is_valid: errors.is_empty(),
        errors,
        counts,
    }
}

/// Position-level substitution rule: goalkeepers only swap with goalkeepers,
/// outfield players swap with any outfield player. Whether the resulting XI
/// stays legal is answered by [`validate_substitution`].
pub fn can_substitute_positions(player_out: Position, player_in: Position) -> bool {
    if player_out.is_goalkeeper() || player_in.is_goalkeeper() {
        return player_out.is_goalkeeper() && player_in.is_goalkeeper();
    }
    true
}

/// Re-run formation validation on the hypothetical XI after swapping one
/// `player_out` for `player_in`, reporting the specific constraint a bad
/// swap would break (e.g. "Must have 3-5 defenders (has 2)").
pub fn validate_substitution(
    starting_xi: &[Position],
    player_out: Position,
    player_in: Position,
) -> FormationValidation {
    let mut replaced = false;
    let swapped: Vec<Position> = starting_xi
        .iter()
        .map(|&pos| {
            if !replaced && pos == player_out {
                replaced = true;
                player_in
            } else {
                pos
            }
        })
        .collect();

    if !replaced {
        return FormationValidation {
            is_valid: false,
            errors: vec![format!(
                "No {} in the starting XI to substitute",
                player_out.long_name()
            )],
            counts: count_players_by_position(starting_xi),
        };
    }

    validate_formation(&swapped)
}

/// "4-4-2"-style label (DEF-MID-FWD, the goalkeeper implicit).
pub fn formation_display_name(counts: &PositionCounts) -> String {
    if counts.gkp != 1 || counts.total() != XI_SIZE as u8 {
        return "Invalid".to_string();
    }
    format!("{}-{}-{}", counts.def, counts.mid, counts.fwd)
}

/// Every legal DEF-MID-FWD shape, sorted.
pub fn valid_formations() -> Vec<String> {
    let (def_min, def_max) = Position::DEF.xi_range();
    let (mid_min, mid_max) = Position::MID.xi_range();
    let (fwd_min, fwd_max) = Position::FWD.xi_range();
    let outfield = XI_SIZE as u8 - 1;

    let mut formations = Vec::new();
    for def in def_min..=def_max {
        for mid in mid_min..=mid_max {
            for fwd in fwd_min..=fwd_max {
                if def + mid + fwd == outfield {
                    formations.push(format!("{}-{}-{}", def, mid, fwd));
                }
            }
        }
    }
    formations.sort();
    formations
}

/// Bench capacity remaining per position, given the starting XI.
///
/// Derived from the 15-man squad quotas (2 GKP / 5 DEF / 5 MID / 3 FWD);
/// used by external squad builders, not by the scoring path.
pub fn available_bench_slots(starting_xi: &[Position]) -> PositionCounts {
    let starting = count_players_by_position(starting_xi);
    PositionCounts {
        gkp: Position::GKP.squad_quota().saturating_sub(starting.gkp),
        def: Position::DEF.squad_quota().saturating_sub(starting.def),
        mid: Position::MID.squad_quota().saturating_sub(starting.mid),
        fwd: Position::FWD.squad_quota().saturating_sub(starting.fwd),
    }
}

/// Whether a player of `position` still fits on the bench given the current
/// starting XI and bench composition.
pub fn can_add_to_bench(starting_xi: &[Position], bench: &[Position], position: Position) -> bool {
    let available = available_bench_slots(starting_xi);
    let on_bench = count_players_by_position(bench);
    on_bench.get(position) < available.get(position)
}

/// Human-readable corrections for an illegal set of XI counts.
pub fn suggest_formation_fix(counts: &PositionCounts) -> Vec<String> {
    let mut suggestions = Vec::new();

    if counts.gkp != 1 {
        suggestions.push("Need exactly 1 goalkeeper".to_string());
    }

    for position in [Position::DEF, Position::MID, Position::FWD] {
        let (min, max) = position.xi_range();
        let have = counts.get(position);
        if have < min {
            suggestions.push(format!(
                "Need {} more {}(s)",
                min - have,
                position.long_name()
            ));
        } else if have > max {
            suggestions.push(format!("Remove {} {}(s)", have - max, position.long_name()));
        }
    }

    suggestions
}
