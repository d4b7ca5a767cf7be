use crate::entities::{Instance, Layout, PlacedPiece};
use crate::geometry::Flattening;
use crate::io::ext_repr::{ExtPlacedPiece, ExtScenario, SolveResult, SolveWarning};
use crate::packing::scenario::Scenario;

pub fn export_placed_piece(p: &PlacedPiece) -> ExtPlacedPiece {
    ExtPlacedPiece {
        x: p.x,
        y: p.y,
        w: p.w,
        h: p.h,
        rotated: p.rotated,
    }
}

pub fn export_warnings(instance: &Instance) -> Vec<SolveWarning> {
    match instance.flattening {
        Flattening::Degenerate { chord, radius } => vec![SolveWarning::DegenerateCurve { chord, radius }],
        _ => vec![],
    }
}

/// Exports a solved layout out of the library
pub fn export(instance: &Instance, layout: &Layout) -> SolveResult {
    SolveResult {
        total_count: layout.total_count(),
        pieces: layout.placements.iter().map(export_placed_piece).collect(),
        description: layout.description(),
        flat_piece_w: instance.piece.width,
        warnings: export_warnings(instance),
    }
}

pub fn export_scenario(scenario: &Scenario) -> ExtScenario {
    ExtScenario {
        name: scenario.kind.to_string(),
        total_count: scenario.layout.total_count(),
        efficiency_pct: scenario.efficiency_pct,
        description: scenario.layout.description(),
        pieces: scenario.layout.placements.iter().map(export_placed_piece).collect(),
    }
}
