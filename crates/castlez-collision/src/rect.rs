//! Point-in-rectangle test with the grid's asymmetric edge rule.

use castlez_core::types::Vec2;

/// Is `point` inside the rectangle spanned by `start` and `end`?
///
/// Both vertical edges and the top edge are outside; the bottom edge is
/// inside.
pub fn point_in_rect(point: Vec2, start: Vec2, end: Vec2) -> bool {
    let x_inside = start.x < point.x && point.x < end.x;
    let y_inside = start.y < point.y && point.y <= end.y;
    x_inside && y_inside
}

/// Axis-aligned box in global grid space, built fresh for each query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub start: Vec2,
    pub end: Vec2,
}

impl Rect {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Box covering `size` cells from `origin` (top-left).
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            start: origin,
            end: origin + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.end - self.start
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point_in_rect(point, self.start, self.end)
    }
}
