use serde::{Deserialize, Serialize};

use crate::geometry::CurveSpec;

/// External representation of a cutting request.
/// All dimensions in mm. `usable_w` and `usable_h` describe the sheet with its border already removed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct SolveRequest {
    pub usable_w: f64,
    pub usable_h: f64,
    /// Width of the piece, the chord width if the piece is curved
    pub piece_w: f64,
    pub piece_h: f64,
    /// Spacing between adjacent pieces
    #[serde(default)]
    pub gap: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curve: Option<CurveSpec>,
}

/// External representation of a [`PlacedPiece`](crate::entities::PlacedPiece).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ExtPlacedPiece {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub rotated: bool,
}

/// Conditions that did not prevent a solution but deserve the caller's attention
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SolveWarning {
    /// The curve was enabled but the chord exceeds the diameter, the unflattened width was used
    DegenerateCurve { chord: f64, radius: f64 },
}

/// External representation of a solved [`Layout`](crate::entities::Layout).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SolveResult {
    pub total_count: u64,
    /// Placements relative to the usable area's origin, main block first
    pub pieces: Vec<ExtPlacedPiece>,
    pub description: String,
    /// Effective piece width used for packing
    pub flat_piece_w: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<SolveWarning>,
}

/// External representation of a [`Scenario`](crate::packing::scenario::Scenario).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtScenario {
    pub name: String,
    pub total_count: u64,
    pub efficiency_pct: f64,
    pub description: String,
    pub pieces: Vec<ExtPlacedPiece>,
}
