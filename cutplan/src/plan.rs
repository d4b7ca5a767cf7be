use anyhow::{Context, Result};
use log::{info, warn};
use sheetcut::geometry::Flattening;
use sheetcut::io::export::{export, export_scenario};
use sheetcut::io::ext_repr::{ExtScenario, SolveWarning};
use sheetcut::packing::scenario::ScenarioKind;
use sheetcut::packing::{compare, solve};
use thousands::Separable;

use crate::config::CutPlanConfig;
use crate::io::output::CutPlanOutput;
use crate::job::Job;

/// Solves `job` and assembles everything the output file contains
pub fn plan(job: &Job, config: &CutPlanConfig) -> Result<CutPlanOutput> {
    let request = job.to_request()?;
    info!(
        "[PLAN] usable area {}x{} (sheet {}x{}, offset {})",
        request.usable_w, request.usable_h, job.sheet.width, job.sheet.height, job.sheet.offset
    );

    let (mut solution, mut scenarios) = match config.compare_baselines {
        true => {
            let comparison = compare(&request)?;
            let hybrid = comparison
                .get(ScenarioKind::Hybrid)
                .map(|s| export(&comparison.instance, &s.layout))
                .context("comparison is missing the hybrid scenario")?;

            if let Flattening::Flattened { chord, width } = comparison.instance.flattening {
                info!("[PLAN] curve width {chord} mm, flat length {width:.1} mm");
            }
            for s in &comparison.scenarios {
                info!(
                    "[PLAN] {}: {} pcs, {:.1}%",
                    s.kind,
                    s.layout.total_count().separate_with_commas(),
                    s.efficiency_pct
                );
            }
            let scenarios = comparison.scenarios.iter().map(export_scenario).collect::<Vec<ExtScenario>>();
            (hybrid, scenarios)
        }
        false => (solve(&request)?, vec![]),
    };

    for w in &solution.warnings {
        match w {
            SolveWarning::DegenerateCurve { chord, radius } => warn!(
                "[PLAN] curve ignored: a chord of {chord} mm does not fit a radius of {radius} mm"
            ),
        }
    }

    if config.sheet_coordinates {
        job.to_sheet_coordinates(&mut solution.pieces);
        for s in scenarios.iter_mut() {
            job.to_sheet_coordinates(&mut s.pieces);
        }
    }

    info!(
        "[PLAN] {} pieces: {}",
        solution.total_count.separate_with_commas(),
        solution.description
    );

    Ok(CutPlanOutput {
        job: *job,
        config: *config,
        solution,
        scenarios,
    })
}
