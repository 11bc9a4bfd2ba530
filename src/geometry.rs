//! Geometric primitives for rasterization.
//!
//! Provides the integer point and bounding-rect types shared by the
//! rasterizers and the occupancy grid.

/// A 2D point with integer pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Swap the x and y coordinates.
    ///
    /// Used by the line rasterizers to move steep segments into the
    /// shallow-slope frame and back.
    #[must_use]
    pub const fn transposed(self) -> Self {
        Self::new(self.y, self.x)
    }
}

/// An axis-aligned bounding rectangle with inclusive integer bounds.
///
/// Invariant for any rect used for rendering: `min_x <= max_x` and
/// `min_y <= max_y`. The constructors below build correct bounds from raw
/// endpoint or center/radius arguments in any order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Minimum x coordinate (inclusive).
    pub min_x: i32,
    /// Minimum y coordinate (inclusive).
    pub min_y: i32,
    /// Maximum x coordinate (inclusive).
    pub max_x: i32,
    /// Maximum y coordinate (inclusive).
    pub max_y: i32,
}

impl Rect {
    /// Bounding box of a line segment between two endpoints.
    ///
    /// Takes the min/max of each axis, so endpoint order does not matter.
    #[must_use]
    pub fn from_endpoints(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min_x: x0.min(x1),
            min_y: y0.min(y1),
            max_x: x0.max(x1),
            max_y: y0.max(y1),
        }
    }

    /// Bounding box of a circle: center ± radius on both axes.
    #[must_use]
    pub const fn around_center(cx: i32, cy: i32, r: i32) -> Self {
        Self {
            min_x: cx - r,
            min_y: cy - r,
            max_x: cx + r,
            max_y: cy + r,
        }
    }

    /// Width in cells (inclusive extent, `max_x - min_x + 1`).
    ///
    /// Returned as `i64` so degenerate i32-spanning rects cannot overflow.
    #[must_use]
    pub const fn width(&self) -> i64 {
        self.max_x as i64 - self.min_x as i64 + 1
    }

    /// Height in cells (inclusive extent, `max_y - min_y + 1`).
    #[must_use]
    pub const fn height(&self) -> i64 {
        self.max_y as i64 - self.min_y as i64 + 1
    }

    /// Check if a point lies inside the rectangle (bounds inclusive).
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_transposed() {
        assert_eq!(Point::new(3, 7).transposed(), Point::new(7, 3));
        assert_eq!(Point::ORIGIN.transposed(), Point::ORIGIN);
    }

    #[test]
    fn test_rect_from_endpoints_orders_bounds() {
        let rect = Rect::from_endpoints(5, -2, -1, 4);
        assert_eq!(rect.min_x, -1);
        assert_eq!(rect.min_y, -2);
        assert_eq!(rect.max_x, 5);
        assert_eq!(rect.max_y, 4);
    }

    #[test]
    fn test_rect_around_center() {
        let rect = Rect::around_center(10, -3, 5);
        assert_eq!(rect, Rect { min_x: 5, min_y: -8, max_x: 15, max_y: 2 });
    }

    #[test]
    fn test_rect_extents() {
        let rect = Rect::from_endpoints(0, 0, 4, 2);
        assert_eq!(rect.width(), 5);
        assert_eq!(rect.height(), 3);

        let single = Rect::from_endpoints(2, 2, 2, 2);
        assert_eq!(single.width(), 1);
        assert_eq!(single.height(), 1);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::from_endpoints(0, 0, 10, 10);
        assert!(rect.contains(Point::new(0, 0)));
        assert!(rect.contains(Point::new(10, 10)));
        assert!(!rect.contains(Point::new(11, 5)));
        assert!(!rect.contains(Point::new(5, -1)));
    }
}
