//! `season` command: compute a full season's points table.

use crate::commands::common::load_season_inputs;
use crate::error::Result;
use crate::fpl::compute::compute_season_points;
use crate::models::output::SeasonSummary;
use std::path::Path;

pub fn handle_season_points(input: &Path, as_json: bool, with_audit: bool) -> Result<()> {
    let inputs = load_season_inputs(input)?;
    let result = compute_season_points(&inputs)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let summary = SeasonSummary::from(&result);
    for (row, gameweek) in summary.gameweeks.iter().zip(&result.gameweeks) {
        let suffix = if row.counted {
            ""
        } else {
            " (before join - not counted)"
        };
        let captain = match row.captain {
            Some(id) => format!("player {} x{}", id, row.multiplier),
            None => "none".to_string(),
        };
        println!(
            "GW {:>2}: {:>4} points  captain {}  subs {}  hit {}{}",
            row.gameweek, row.points, captain, row.autosubs, row.transfer_hit, suffix
        );
        if with_audit {
            for line in &gameweek.audit_log {
                println!("    {}", line);
            }
        }
    }
    println!("Season total: {} points", summary.total_points);
    Ok(())
}
