use crate::entities::Piece;
use crate::geometry::Flattening;

/// A validated cutting problem: the usable area of a sheet and the piece to cut from it.
/// Created through [`import`](crate::io::import::import), which rejects invalid dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Instance {
    pub usable_w: f64,
    pub usable_h: f64,
    /// The piece with its effective (possibly flattened) width
    pub piece: Piece,
    /// Spacing between adjacent pieces
    pub gap: f64,
    /// How the effective piece width was derived from the requested one
    pub flattening: Flattening,
}

impl Instance {
    pub fn usable_area(&self) -> f64 {
        self.usable_w * self.usable_h
    }

    /// Fraction of the usable area covered by `n` pieces
    pub fn density(&self, n: u64) -> f64 {
        n as f64 * self.piece.area() / self.usable_area()
    }
}
