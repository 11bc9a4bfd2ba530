//! Midpoint circle rasterization.

use crate::geometry::Point;

/// Rasterize a circle boundary with the midpoint algorithm.
///
/// Emits the boundary pixels of the circle of integer center `(cx, cy)` and
/// integer radius `r >= 0`, using integer arithmetic only. Each decision
/// step computes one octant pixel and emits its 8 reflections about the
/// center, so points on the axes and the 45° diagonal appear more than
/// once. No deduplication happens here; the occupancy grid's idempotent
/// write absorbs the duplicates, and callers needing a pixel set must
/// deduplicate themselves.
///
/// `r == 0` emits the center point 8 times. A negative radius yields an
/// empty sequence.
pub fn bresenham_circle(cx: i32, cy: i32, r: i32) -> BresenhamCircle {
    BresenhamCircle {
        cx,
        cy,
        x: 0,
        y: r,
        d: 3 - 2 * r,
        octet: [Point::ORIGIN; 8],
        idx: 8,
    }
}

/// Iterator over the boundary pixels of a midpoint circle.
///
/// Created by [`bresenham_circle`].
#[derive(Debug, Clone)]
pub struct BresenhamCircle {
    cx: i32,
    cy: i32,
    x: i32,
    y: i32,
    d: i32,
    /// Reflections of the current octant pixel, drained before the next
    /// decision step. `idx == 8` means the buffer is exhausted.
    octet: [Point; 8],
    idx: usize,
}

impl BresenhamCircle {
    /// The 8 reflections of the octant offset `(x, y)` about the center.
    const fn reflections(&self) -> [Point; 8] {
        let (cx, cy, x, y) = (self.cx, self.cy, self.x, self.y);
        [
            Point::new(cx + x, cy + y),
            Point::new(cx - x, cy + y),
            Point::new(cx + x, cy - y),
            Point::new(cx - x, cy - y),
            Point::new(cx + y, cy + x),
            Point::new(cx - y, cy + x),
            Point::new(cx + y, cy - x),
            Point::new(cx - y, cy - x),
        ]
    }
}

impl Iterator for BresenhamCircle {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.idx == 8 {
            if self.y < self.x {
                return None;
            }
            self.octet = self.reflections();
            self.idx = 0;

            // Decision update for the next octant step.
            self.x += 1;
            if self.d > 0 {
                self.y -= 1;
                self.d += 4 * (self.x - self.y) + 10;
            } else {
                self.d += 4 * self.x + 6;
            }
        }

        let p = self.octet[self.idx];
        self.idx += 1;
        Some(p)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn circle_points_lie_near_radius(cx in -50i32..=50, cy in -50i32..=50, r in 0i32..=64) {
            for p in bresenham_circle(cx, cy, r) {
                let dx = f64::from(p.x - cx);
                let dy = f64::from(p.y - cy);
                let dist = (dx * dx + dy * dy).sqrt();
                prop_assert!(
                    (dist - f64::from(r)).abs() <= 1.5,
                    "point {:?} at distance {} from center, radius {}", p, dist, r
                );
            }
        }

        #[test]
        fn circle_set_invariant_under_symmetries(r in 0i32..=64) {
            let pts: HashSet<(i32, i32)> =
                bresenham_circle(0, 0, r).map(|p| (p.x, p.y)).collect();
            for &(x, y) in &pts {
                prop_assert!(pts.contains(&(-x, y)));
                prop_assert!(pts.contains(&(x, -y)));
                prop_assert!(pts.contains(&(-x, -y)));
                prop_assert!(pts.contains(&(y, x)));
                prop_assert!(pts.contains(&(-y, -x)));
            }
        }

        #[test]
        fn circle_emits_full_octets(r in 0i32..=64) {
            let count = bresenham_circle(0, 0, r).count();
            prop_assert!(count > 0);
            prop_assert_eq!(count % 8, 0);
        }
    }
}
