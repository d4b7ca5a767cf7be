mod instance;
mod layout;
mod piece;
mod placed_piece;

#[doc(inline)]
pub use instance::Instance;
#[doc(inline)]
pub use layout::{Layout, Segment, SegmentKind};
#[doc(inline)]
pub use piece::{Orientation, Piece};
#[doc(inline)]
pub use placed_piece::PlacedPiece;
