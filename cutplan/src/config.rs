use serde::{Deserialize, Serialize};

/// Configuration of the cutplan output
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct CutPlanConfig {
    /// Include the horizontal-only and vertical-only baselines next to the hybrid layout
    pub compare_baselines: bool,
    /// Express placements relative to the sheet corner (border offset added) instead of the usable area
    pub sheet_coordinates: bool,
}

impl Default for CutPlanConfig {
    fn default() -> Self {
        Self {
            compare_baselines: true,
            sheet_coordinates: true,
        }
    }
}
