use thiserror::Error;

/// Reasons a request is rejected at the entry point of the solver.
/// Carried inside [`anyhow::Error`], retrieve it with [`anyhow::Error::downcast_ref`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    /// A dimension is not strictly positive (or the gap is negative), or a value is not finite.
    #[error("invalid dimension: {field} = {value} ({requirement})")]
    InvalidDimension {
        field: &'static str,
        value: f64,
        requirement: &'static str,
    },
}

impl SolveError {
    pub fn invalid(field: &'static str, value: f64, requirement: &'static str) -> Self {
        SolveError::InvalidDimension {
            field,
            value,
            requirement,
        }
    }
}
