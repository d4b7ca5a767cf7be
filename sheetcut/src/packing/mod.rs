/// Row-major grid packing of identical rectangles
pub mod grid;

/// Single-grid filling of leftover areas
pub mod remainder;

/// Ranking of the baselines against the hybrid layout
pub mod scenario;

/// The hybrid layout search
pub mod solver;

use anyhow::Result;
use rayon::prelude::*;

use crate::io::ext_repr::{SolveRequest, SolveResult};
use crate::io::{export, import};
use crate::packing::scenario::{Comparison, compare_instance};
use crate::packing::solver::LayoutSolver;

/// Validates `request`, flattens the piece if it is curved and solves the hybrid layout.
/// Fails with [`SolveError::InvalidDimension`](crate::error::SolveError) before any packing is attempted.
pub fn solve(request: &SolveRequest) -> Result<SolveResult> {
    let instance = import::import(request)?;
    let layout = LayoutSolver::from_instance(&instance).solve();
    Ok(export::export(&instance, &layout))
}

/// Solves independent requests in parallel. Results are in the same order as `requests`.
pub fn solve_batch(requests: &[SolveRequest]) -> Vec<Result<SolveResult>> {
    requests.par_iter().map(solve).collect()
}

/// Validates `request` and ranks the horizontal-only, vertical-only and hybrid layouts.
pub fn compare(request: &SolveRequest) -> Result<Comparison> {
    let instance = import::import(request)?;
    Ok(compare_instance(&instance))
}

/// Keeps the first candidate with the strictly greatest count.
/// Unlike [`Iterator::max_by_key`], which returns the last maximum, ties favour earlier candidates.
pub(crate) fn max_by_count<T>(
    candidates: impl IntoIterator<Item = T>,
    count: impl Fn(&T) -> u64,
) -> Option<T> {
    candidates.into_iter().fold(None, |best, c| match best {
        Some(b) if count(&c) <= count(&b) => Some(b),
        _ => Some(c),
    })
}
