use crate::entities::PlacedPiece;

/// Identical pieces packed row-major into a rectangular area
#[derive(Clone, Debug, PartialEq)]
pub struct GridBlock {
    pub cols: usize,
    pub rows: usize,
    pub piece_w: f64,
    pub piece_h: f64,
    /// Horizontal extent consumed by the block, gaps between columns included
    pub used_w: f64,
    /// Vertical extent consumed by the block, gaps between rows included
    pub used_h: f64,
    /// Corners of the pieces, row by row
    pub positions: Vec<(f64, f64)>,
}

impl GridBlock {
    pub fn empty() -> Self {
        GridBlock {
            cols: 0,
            rows: 0,
            piece_w: 0.0,
            piece_h: 0.0,
            used_w: 0.0,
            used_h: 0.0,
            positions: vec![],
        }
    }

    pub fn count(&self) -> u64 {
        (self.cols * self.rows) as u64
    }

    /// The block's pieces as [`PlacedPiece`]s, translated by `(dx, dy)`.
    /// `orig_w` is the width of the piece in its original orientation, used to flag rotated pieces.
    pub fn placements(&self, orig_w: f64, dx: f64, dy: f64) -> impl Iterator<Item = PlacedPiece> + '_ {
        self.positions
            .iter()
            .map(move |&(x, y)| PlacedPiece::new(x + dx, y + dy, self.piece_w, self.piece_h, orig_w))
    }
}

/// Number of pieces of length `piece` fitting in `extent`, with `gap` between consecutive pieces.
/// The first piece carries no leading gap.
fn n_fitting(extent: f64, piece: f64, gap: f64) -> usize {
    match extent >= piece {
        true => 1 + ((extent - piece) / (piece + gap)).floor() as usize,
        false => 0,
    }
}

fn used_extent(n: usize, piece: f64, gap: f64) -> f64 {
    match n {
        0 => 0.0,
        n => n as f64 * piece + (n - 1) as f64 * gap,
    }
}

/// Packs as many `piece_w` x `piece_h` pieces as possible into an `area_w` x `area_h` area,
/// filling row by row with `gap` between adjacent pieces.
/// A piece that is degenerate or larger than the area results in an empty block.
pub fn pack(area_w: f64, area_h: f64, piece_w: f64, piece_h: f64, gap: f64) -> GridBlock {
    if piece_w <= 0.0 || piece_h <= 0.0 || piece_w > area_w || piece_h > area_h {
        return GridBlock::empty();
    }

    let cols = n_fitting(area_w, piece_w, gap);
    let rows = n_fitting(area_h, piece_h, gap);

    let positions = (0..rows)
        .flat_map(|r| {
            (0..cols).map(move |c| {
                (
                    c as f64 * (piece_w + gap),
                    r as f64 * (piece_h + gap),
                )
            })
        })
        .collect();

    GridBlock {
        cols,
        rows,
        piece_w,
        piece_h,
        used_w: used_extent(cols, piece_w, gap),
        used_h: used_extent(rows, piece_h, gap),
        positions,
    }
}
