use crate::util::FPA;

///Axis-aligned rectangle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
}

impl Rect {
    /// Rectangle with its corner at `(x, y)`, extending `w` to the right and `h` downwards.
    pub fn from_corner(x: f64, y: f64, w: f64, h: f64) -> Self {
        Rect {
            x_min: x,
            y_min: y,
            x_max: x + w,
            y_max: y + h,
        }
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// True if the interiors of `self` and `other` intersect.
    /// Rectangles sharing only an edge or a corner (within tolerance) do not overlap.
    pub fn interiors_overlap(&self, other: &Rect) -> bool {
        FPA(self.x_min) < FPA(other.x_max)
            && FPA(other.x_min) < FPA(self.x_max)
            && FPA(self.y_min) < FPA(other.y_max)
            && FPA(other.y_min) < FPA(self.y_max)
    }

    /// True if `other` lies completely inside `self` (within tolerance).
    pub fn encloses(&self, other: &Rect) -> bool {
        FPA(self.x_min) <= FPA(other.x_min)
            && FPA(self.y_min) <= FPA(other.y_min)
            && FPA(self.x_max) >= FPA(other.x_max)
            && FPA(self.y_max) >= FPA(other.y_max)
    }

    /// Distance between `self` and `other` along the axis in which they face each other.
    /// Horizontal distance if their vertical extents overlap, vertical distance if their horizontal extents overlap.
    /// Returns `None` if the rectangles are diagonal neighbours or overlap.
    pub fn separation(&self, other: &Rect) -> Option<f64> {
        let share_rows = FPA(self.y_min) < FPA(other.y_max) && FPA(other.y_min) < FPA(self.y_max);
        let share_cols = FPA(self.x_min) < FPA(other.x_max) && FPA(other.x_min) < FPA(self.x_max);
        match (share_rows, share_cols) {
            (true, false) => Some(f64::max(other.x_min - self.x_max, self.x_min - other.x_max)),
            (false, true) => Some(f64::max(other.y_min - self.y_max, self.y_min - other.y_max)),
            _ => None,
        }
    }
}
