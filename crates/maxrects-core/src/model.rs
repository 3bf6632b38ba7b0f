use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in bin space. `x,y` is top-left (Y grows downward); `width,height` are sizes.
///
/// `rotated` records whether the rectangle sits in the bin swapped relative to its original orientation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub rotated: bool,
}

impl Rect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotated: false,
        }
    }

    /// Unplaced rectangle of the given size, anchored at the origin.
    pub fn sized(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Copy of position and size only; the rotation flag is reset.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Exclusive right edge (`x + width`).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge (`y + height`).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// True if `self` lies entirely within `other` (edges may coincide).
    pub fn is_contained_in(&self, other: &Rect) -> bool {
        self.x >= other.x
            && self.y >= other.y
            && self.right() <= other.right()
            && self.bottom() <= other.bottom()
    }

    /// True if `other` lies entirely within `self`.
    pub fn contains(&self, other: &Rect) -> bool {
        other.is_contained_in(self)
    }

    /// Separating-axis overlap test; touching edges do not count as overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.x >= other.right()
            || other.x >= self.right()
            || self.y >= other.bottom()
            || other.y >= self.bottom())
    }
}

/// The fixed packing surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bin {
    pub width: u32,
    pub height: u32,
    pub allow_rotation: bool,
}

impl Bin {
    pub fn new(width: u32, height: u32, allow_rotation: bool) -> Self {
        Self {
            width,
            height,
            allow_rotation,
        }
    }

    /// The whole bin as a rectangle at the origin.
    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Statistics about a packed layout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PackStats {
    /// Number of pages in the layout.
    pub num_pages: usize,
    /// Number of placed rectangles.
    pub num_placements: usize,
    /// Sum of page areas.
    pub total_page_area: u64,
    /// Sum of placed rectangle areas.
    pub used_area: u64,
    /// used_area / total_page_area (0.0 to 1.0).
    pub occupancy: f64,
    /// Number of placements reported as rotated.
    pub num_rotated: usize,
}

impl PackStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Pages: {}, Placements: {}, Occupancy: {:.2}%, Total Area: {} px², Used Area: {} px², Rotated: {}",
            self.num_pages,
            self.num_placements,
            self.occupancy * 100.0,
            self.total_page_area,
            self.used_area,
            self.num_rotated,
        )
    }

    /// Returns wasted space in pixels.
    pub fn wasted_area(&self) -> u64 {
        self.total_page_area.saturating_sub(self.used_area)
    }
}
