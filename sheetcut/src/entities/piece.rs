use std::fmt::{Display, Formatter};

use crate::util::FPA;

/// The two axis-aligned orientations a rectangular piece can be cut in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Width and height as supplied by the caller
    Original,
    /// Turned by 90°, width and height swapped
    Rotated,
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Original => write!(f, "Original"),
            Orientation::Rotated => write!(f, "Rotated"),
        }
    }
}

/// Rectangular piece to be cut, in its original orientation.
/// For curved pieces `width` is the already flattened width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Piece {
    pub width: f64,
    pub height: f64,
}

impl Piece {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_square(&self) -> bool {
        FPA(self.width) == FPA(self.height)
    }

    /// `(width, height)` of the piece when cut in orientation `o`
    pub fn dims(&self, o: Orientation) -> (f64, f64) {
        match o {
            Orientation::Original => (self.width, self.height),
            Orientation::Rotated => (self.height, self.width),
        }
    }

    /// Distinct orientations worth trying, in the order they are tried.
    /// A square piece only has its original orientation.
    pub fn orientations(&self) -> &'static [Orientation] {
        match self.is_square() {
            true => &[Orientation::Original],
            false => &[Orientation::Original, Orientation::Rotated],
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
