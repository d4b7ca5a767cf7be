use std::cmp::Reverse;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::entities::{Instance, Layout};
use crate::packing::solver::LayoutSolver;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScenarioKind {
    HorizontalOnly,
    VerticalOnly,
    Hybrid,
}

impl Display for ScenarioKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScenarioKind::HorizontalOnly => write!(f, "Horizontal Only"),
            ScenarioKind::VerticalOnly => write!(f, "Vertical Only"),
            ScenarioKind::Hybrid => write!(f, "Hybrid"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub layout: Layout,
    /// Share of the usable area covered by pieces, in percent
    pub efficiency_pct: f64,
}

/// The baselines and the hybrid layout side by side, most pieces first
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub instance: Instance,
    pub scenarios: Vec<Scenario>,
}

impl Comparison {
    pub fn best(&self) -> &Scenario {
        &self.scenarios[0]
    }

    pub fn get(&self, kind: ScenarioKind) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.kind == kind)
    }
}

/// Evaluates the horizontal-only and vertical-only baselines and the hybrid layout.
/// Scenarios are ranked by descending piece count. The ranking is stable:
/// equal counts keep the order horizontal, vertical, hybrid.
pub fn compare_instance(instance: &Instance) -> Comparison {
    let solver = LayoutSolver::from_instance(instance);

    let scenarios = [
        (ScenarioKind::HorizontalOnly, solver.horizontal_only()),
        (ScenarioKind::VerticalOnly, solver.vertical_only()),
        (ScenarioKind::Hybrid, solver.solve()),
    ]
    .into_iter()
    .map(|(kind, layout)| Scenario {
        kind,
        efficiency_pct: instance.density(layout.total_count()) * 100.0,
        layout,
    })
    .sorted_by_key(|s| Reverse(s.layout.total_count()))
    .collect_vec();

    Comparison {
        instance: *instance,
        scenarios,
    }
}
