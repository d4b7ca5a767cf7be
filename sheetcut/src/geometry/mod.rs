/// Conversion of curved piece widths into flat packing widths
pub mod curve;

/// Primitive geometric shapes
pub mod primitives;

#[doc(inline)]
pub use curve::{CurveSpec, Flattening, flatten};
