//! Common helpers shared across commands.

use crate::error::Result;
use crate::fpl::compute::{GwResult, SeasonInputs};
use crate::models::input::SeasonInputDoc;
use std::path::Path;

/// Load and validate a season input document from disk.
pub fn load_season_inputs(path: &Path) -> Result<SeasonInputs> {
    let raw = std::fs::read_to_string(path)?;
    SeasonInputDoc::from_json(&raw)?.into_inputs()
}

/// Print one gameweek's breakdown in table form.
pub fn print_gameweek_breakdown(result: &GwResult, with_audit: bool) {
    let suffix = if result.counts_toward_total {
        ""
    } else {
        " (before join - not counted)"
    };
    println!(
        "GW {:>2}: {:>4} points{}",
        result.gameweek, result.gw_points, suffix
    );

    match result.captain.player_id {
        Some(id) => println!(
            "  captain: player {} x{} = {} pts",
            id, result.captain.multiplier, result.captain.points
        ),
        None => println!("  captain: none (no multiplier applied)"),
    }

    for sub in &result.autosubs_applied {
        println!("  autosub: {} -> {}", sub.player_out, sub.player_in);
    }
    if result.transfer_hit_points != 0 {
        println!("  transfer hit: {}", result.transfer_hit_points);
    }

    if with_audit {
        for line in &result.audit_log {
            println!("    {}", line);
        }
    }
}
