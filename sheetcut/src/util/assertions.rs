use crate::entities::PlacedPiece;
use crate::geometry::primitives::Rect;
use crate::util::FPA;
use itertools::Itertools;
use log::error;

//Various checks to verify correctness of the solved layouts
//Used in debug_assert!() blocks

/// Every placement lies fully within `[0, area_w] x [0, area_h]`
pub fn pieces_within_area(pieces: &[PlacedPiece], area_w: f64, area_h: f64) -> bool {
    let area = Rect::from_corner(0.0, 0.0, area_w, area_h);
    pieces.iter().enumerate().all(|(i, p)| {
        let inside = area.encloses(&p.rect());
        if !inside {
            error!("piece {i} {p:?} exceeds area {area_w}x{area_h}");
        }
        inside
    })
}

/// No two placements overlap in their interiors (touching edges are allowed)
pub fn pieces_disjoint(pieces: &[PlacedPiece]) -> bool {
    let rects = pieces.iter().map(PlacedPiece::rect).collect_vec();
    rects.iter().enumerate().tuple_combinations().all(|((i, a), (j, b))| {
        let overlap = a.interiors_overlap(b);
        if overlap {
            error!("pieces {i} {a:?} and {j} {b:?} overlap");
        }
        !overlap
    })
}

/// Horizontally or vertically adjacent placements within a row or column keep at least `gap` between them
pub fn gap_respected(pieces: &[PlacedPiece], gap: f64) -> bool {
    pieces
        .iter()
        .map(PlacedPiece::rect)
        .tuple_combinations()
        .all(|(a, b): (Rect, Rect)| {
            let separation = a.separation(&b);
            // pieces that share neither a row band nor a column band cannot violate the gap
            separation.is_none_or(|d| FPA(d) >= FPA(gap))
        })
}

/// All layout invariants at once: bounds, disjointness and gap
pub fn layout_is_valid(pieces: &[PlacedPiece], area_w: f64, area_h: f64, gap: f64) -> bool {
    pieces_within_area(pieces, area_w, area_h) && pieces_disjoint(pieces) && gap_respected(pieces, gap)
}
