/// Exporting internal results into their external representation
pub mod export;

/// External (serializable) representation of requests and results
pub mod ext_repr;

/// Validating and importing external requests
pub mod import;
