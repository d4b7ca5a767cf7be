use log::{debug, info};

use crate::entities::{Instance, Layout, Orientation, Piece, SegmentKind};
use crate::packing::grid::pack;
use crate::packing::max_by_count;
use crate::packing::remainder::optimize_remainder;
use crate::util::assertions;

/// Searches the hybrid layout with the most pieces: a main grid block in one orientation,
/// followed by single-grid fills of the leftover strips to its right and below it.
#[derive(Clone, Copy, Debug)]
pub struct LayoutSolver {
    pub usable_w: f64,
    pub usable_h: f64,
    /// Piece in its original orientation
    pub piece: Piece,
    pub gap: f64,
}

impl LayoutSolver {
    pub fn new(usable_w: f64, usable_h: f64, piece: Piece, gap: f64) -> Self {
        Self {
            usable_w,
            usable_h,
            piece,
            gap,
        }
    }

    pub fn from_instance(instance: &Instance) -> Self {
        Self::new(instance.usable_w, instance.usable_h, instance.piece, instance.gap)
    }

    /// Tries every orientation of the piece for the main block and keeps the hybrid layout with the most pieces.
    /// On equal counts the orientation tried first wins (original before rotated).
    /// Returns an empty layout if the piece fits in no orientation.
    pub fn solve(&self) -> Layout {
        let trials = self.piece.orientations().iter().map(|&o| {
            let layout = self.hybrid(o);
            debug!(
                "[SOLVE] main {o}: {} pieces [{}]",
                layout.total_count(),
                layout.description()
            );
            layout
        });

        let best = max_by_count(trials, Layout::total_count)
            .filter(|l| !l.is_empty())
            .unwrap_or_default();

        debug_assert!(
            !cfg!(feature = "layout-assertions")
                || assertions::layout_is_valid(&best.placements, self.usable_w, self.usable_h, self.gap)
        );

        info!(
            "[SOLVE] {} pieces of {}x{} in {}x{} (gap {}): {}",
            best.total_count(),
            self.piece.width,
            self.piece.height,
            self.usable_w,
            self.usable_h,
            self.gap,
            best.description()
        );
        best
    }

    /// Hybrid layout with the main block cut in orientation `main`
    fn hybrid(&self, main: Orientation) -> Layout {
        let (main_w, main_h) = self.piece.dims(main);
        let block = pack(self.usable_w, self.usable_h, main_w, main_h, self.gap);

        let mut layout = Layout::default();
        layout.push_segment(SegmentKind::Main, main, block.placements(self.piece.width, 0.0, 0.0));

        //strip to the right of the main block, spanning the full height
        let x_offset = match block.used_w > 0.0 {
            true => block.used_w + self.gap,
            false => 0.0,
        };
        let (right_w, right_h) = (self.usable_w - x_offset, self.usable_h);
        if right_w > 0.0 && right_h > 0.0 {
            let fill = optimize_remainder(right_w, right_h, &self.piece, self.gap);
            if let Some(o) = fill.orientation {
                layout.push_segment(
                    SegmentKind::RightRemainder,
                    o,
                    fill.placements(&self.piece, x_offset, 0.0),
                );
            }
        }

        //strip below the main block, only as wide as the main block
        let y_offset = match block.used_h > 0.0 {
            true => block.used_h + self.gap,
            false => 0.0,
        };
        let (bottom_w, bottom_h) = (block.used_w, self.usable_h - y_offset);
        if bottom_w > 0.0 && bottom_h > 0.0 {
            let fill = optimize_remainder(bottom_w, bottom_h, &self.piece, self.gap);
            if let Some(o) = fill.orientation {
                layout.push_segment(
                    SegmentKind::BottomRemainder,
                    o,
                    fill.placements(&self.piece, 0.0, y_offset),
                );
            }
        }

        layout
    }

    /// Baseline: a single grid over the whole usable area with the piece as given
    pub fn horizontal_only(&self) -> Layout {
        self.single_grid(Orientation::Original)
    }

    /// Baseline: a single grid over the whole usable area with width and height swapped
    pub fn vertical_only(&self) -> Layout {
        self.single_grid(Orientation::Rotated)
    }

    fn single_grid(&self, o: Orientation) -> Layout {
        let (pw, ph) = self.piece.dims(o);
        let block = pack(self.usable_w, self.usable_h, pw, ph, self.gap);
        let mut layout = Layout::default();
        layout.push_segment(SegmentKind::Main, o, block.placements(self.piece.width, 0.0, 0.0));
        layout
    }
}

/// Solves the hybrid layout for already validated dimensions, see [`LayoutSolver::solve`].
pub fn solve_layout(usable_w: f64, usable_h: f64, piece_w: f64, piece_h: f64, gap: f64) -> Layout {
    LayoutSolver::new(usable_w, usable_h, Piece::new(piece_w, piece_h), gap).solve()
}
