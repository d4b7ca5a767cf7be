use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::entities::{Orientation, PlacedPiece};

/// Region of the usable area a [`Segment`] was packed into
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Grid over the whole usable area
    Main,
    /// Leftover strip to the right of the main block, full height
    RightRemainder,
    /// Leftover strip below the main block, as wide as the main block
    BottomRemainder,
}

/// Contribution of one sub-configuration to a [`Layout`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub orientation: Orientation,
    pub count: u64,
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let region = match self.kind {
            SegmentKind::Main => "Main",
            SegmentKind::RightRemainder => "Right Remain",
            SegmentKind::BottomRemainder => "Bottom Remain",
        };
        write!(f, "{region} {}({})", self.orientation, self.count)
    }
}

/// Pieces placed in the usable area by one configuration.
/// Placements are ordered: main block first, then the right remainder, then the bottom remainder.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Layout {
    pub placements: Vec<PlacedPiece>,
    pub segments: Vec<Segment>,
}

impl Layout {
    pub fn total_count(&self) -> u64 {
        self.placements.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Appends a segment of placements
    pub fn push_segment(
        &mut self,
        kind: SegmentKind,
        orientation: Orientation,
        placements: impl IntoIterator<Item = PlacedPiece>,
    ) {
        let n_before = self.placements.len();
        self.placements.extend(placements);
        self.segments.push(Segment {
            kind,
            orientation,
            count: (self.placements.len() - n_before) as u64,
        });
    }

    /// Human-readable account of which sub-configuration contributed how many pieces,
    /// e.g. `Main Original(35) | Right Remain Rotated(5)`
    pub fn description(&self) -> String {
        match self.is_empty() {
            true => "No placement possible: the piece does not fit the area in any orientation"
                .to_string(),
            false => self.segments.iter().join(" | "),
        }
    }
}
