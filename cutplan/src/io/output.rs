use serde::{Deserialize, Serialize};
use sheetcut::io::ext_repr::{ExtScenario, SolveResult};

use crate::config::CutPlanConfig;
use crate::job::Job;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CutPlanOutput {
    pub job: Job,
    pub config: CutPlanConfig,
    /// Best hybrid layout
    pub solution: SolveResult,
    /// All layouts, most pieces first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scenarios: Vec<ExtScenario>,
}
