use crate::geometry::primitives::Rect;
use crate::util::FPA;

/// A piece placed in the usable area.
/// Coordinates are relative to the usable area's own origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedPiece {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    /// Whether the piece's width differs from the width of the piece in its original orientation
    pub rotated: bool,
}

impl PlacedPiece {
    /// `orig_w` is the width of the piece as supplied by the caller, before any orientation logic.
    pub fn new(x: f64, y: f64, w: f64, h: f64, orig_w: f64) -> Self {
        Self {
            x,
            y,
            w,
            h,
            rotated: FPA(w) != FPA(orig_w),
        }
    }

    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_corner(self.x, self.y, self.w, self.h)
    }
}
