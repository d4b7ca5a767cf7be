#![doc = document_features::document_features!()]
//! Layout solver for cutting identical rectangular pieces out of the usable area of a sheet.
//!
//! The usable area is expected to be offset-adjusted by the caller. All placements are expressed
//! relative to the usable area's own `(0, 0)` corner.

/// Entities describing pieces, placements and solved layouts
pub mod entities;

/// Validation error taxonomy
pub mod error;

/// Geometric primitives and the curved-piece flattening transform
pub mod geometry;

/// Importing requests into and exporting results out of this library
pub mod io;

/// Grid packing, remainder optimization and the layout solver
pub mod packing;

/// Helper functions which do not belong to any specific module
pub mod util;
