use crate::entities::{Orientation, Piece, PlacedPiece};
use crate::packing::grid::{GridBlock, pack};
use crate::packing::max_by_count;

/// Best single-orientation grid found for a leftover area
#[derive(Clone, Debug, PartialEq)]
pub struct RemainderFill {
    /// Orientation of the winning grid, `None` if no piece fits
    pub orientation: Option<Orientation>,
    pub block: GridBlock,
}

impl RemainderFill {
    pub fn count(&self) -> u64 {
        self.block.count()
    }

    /// Placements translated by `(dx, dy)`, flagged as rotated against the original width of `piece`
    pub fn placements(&self, piece: &Piece, dx: f64, dy: f64) -> impl Iterator<Item = PlacedPiece> + '_ {
        self.block.placements(piece.width, dx, dy)
    }
}

/// Fills a leftover `area_w` x `area_h` area with a single grid of `piece`,
/// trying every orientation of the piece and keeping the one that fits the most.
///
/// Ties go to the orientation tried first (original before rotated).
/// The remainder of the remainder is not packed any further.
pub fn optimize_remainder(area_w: f64, area_h: f64, piece: &Piece, gap: f64) -> RemainderFill {
    let candidates = piece.orientations().iter().map(|&o| {
        let (pw, ph) = piece.dims(o);
        (o, pack(area_w, area_h, pw, ph, gap))
    });

    match max_by_count(candidates, |(_, block)| block.count()) {
        Some((o, block)) if block.count() > 0 => RemainderFill {
            orientation: Some(o),
            block,
        },
        _ => RemainderFill {
            orientation: None,
            block: GridBlock::empty(),
        },
    }
}
