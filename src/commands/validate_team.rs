//! `validate` command: report team-state legality per gameweek.

use crate::commands::common::load_season_inputs;
use crate::error::Result;
use crate::fpl::compute::validate_team_state;
use crate::fpl::formation::{
    count_players_by_position, formation_display_name, suggest_formation_fix,
};
use std::path::Path;

pub fn handle_validate_team(input: &Path) -> Result<()> {
    let inputs = load_season_inputs(input)?;

    let mut gameweeks = inputs.gameweeks.clone();
    gameweeks.sort_by_key(|gw| gw.id);

    for gameweek in gameweeks {
        let Some(entry) = inputs.entries.get(&gameweek.id) else {
            continue;
        };
        let errors = validate_team_state(&entry.team);
        let counts = count_players_by_position(&entry.team.xi_positions());

        if errors.is_empty() {
            println!(
                "GW {:>2}: OK ({})",
                gameweek.id,
                formation_display_name(&counts)
            );
        } else {
            println!("GW {:>2}: INVALID", gameweek.id);
            for error in &errors {
                println!("  - {}", error);
            }
            for suggestion in suggest_formation_fix(&counts) {
                println!("  fix: {}", suggestion);
            }
        }
    }

    Ok(())
}
