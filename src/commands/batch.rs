//! `batch` command: compute many managers' seasons in parallel.
//!
//! The engine is a pure function over its inputs, so sharding by manager
//! needs no locking; rayon fans the files out across cores.

use crate::commands::common::load_season_inputs;
use crate::error::Result;
use crate::fpl::compute::{compute_season_points, SeasonResult};
use crate::models::output::BatchSummary;
use rayon::prelude::*;
use std::path::PathBuf;

pub fn handle_batch(inputs: &[PathBuf], as_json: bool) -> Result<()> {
    let results: Vec<(String, Result<SeasonResult>)> = inputs
        .par_iter()
        .map(|path| {
            let label = path.display().to_string();
            let outcome =
                load_season_inputs(path).and_then(|inputs| compute_season_points(&inputs));
            (label, outcome)
        })
        .collect();

    let mut summaries = Vec::new();
    for (file, outcome) in results {
        match outcome {
            Ok(season) => summaries.push(BatchSummary {
                file,
                total_points: season.total_points,
                gameweeks: season.gameweeks.len(),
            }),
            Err(e) => eprintln!("{}: {}", file, e),
        }
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    for summary in &summaries {
        println!(
            "{}: {} points over {} gameweek(s)",
            summary.file, summary.total_points, summary.gameweeks
        );
    }
    Ok(())
}
