//! Occupancy grid built from a rasterized pixel sequence.
//!
//! The grid is the hand-off point between the rasterizers and the
//! renderers: a dense row-major boolean buffer where foreground cells mark
//! exactly the emitted pixels.

use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};

/// Dense 2-D occupancy buffer over a bounding rect.
///
/// Row 0 holds the cells at `rect.min_y`, column 0 the cells at
/// `rect.min_x`. `true` is foreground, `false` background.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    /// Width in cells.
    width: usize,
    /// Height in cells.
    height: usize,
    /// The bounding rect the grid was built over.
    rect: Rect,
    /// Cells in row-major order.
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Build a grid by draining a pixel sequence over its bounding rect.
    ///
    /// Every cell starts as background; each drained point marks the cell
    /// at `(y - rect.min_y, x - rect.min_x)` foreground. Marking the same
    /// cell twice is harmless, which is what makes the circle rasterizer's
    /// symmetry duplicates safe.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] when the rect extents are
    /// non-positive or do not fit in memory, and
    /// [`Error::PointOutOfBounds`] when any point lies outside `rect`. An
    /// out-of-bounds point means the caller built the rect from something
    /// other than the primitive's true extrema; it is never silently
    /// clipped.
    ///
    /// # Example
    ///
    /// ```
    /// use rasterviz::geometry::Rect;
    /// use rasterviz::grid::OccupancyGrid;
    /// use rasterviz::raster::bresenham_line;
    ///
    /// let rect = Rect::from_endpoints(0, 0, 5, 2);
    /// let grid = OccupancyGrid::from_pixels(bresenham_line(0, 0, 5, 2), rect).unwrap();
    /// assert_eq!(grid.width(), 6);
    /// assert_eq!(grid.height(), 3);
    /// assert!(grid.get(0, 0).unwrap());
    /// ```
    pub fn from_pixels<I>(pixels: I, rect: Rect) -> Result<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let (w, h) = (rect.width(), rect.height());
        if w <= 0 || h <= 0 {
            return Err(Error::InvalidDimensions { width: w, height: h });
        }
        let width = usize::try_from(w).map_err(|_| Error::InvalidDimensions { width: w, height: h })?;
        let height =
            usize::try_from(h).map_err(|_| Error::InvalidDimensions { width: w, height: h })?;
        let len = width
            .checked_mul(height)
            .ok_or(Error::InvalidDimensions { width: w, height: h })?;

        let mut cells = vec![false; len];
        for p in pixels {
            if !rect.contains(p) {
                return Err(Error::PointOutOfBounds {
                    x: p.x,
                    y: p.y,
                    min_x: rect.min_x,
                    min_y: rect.min_y,
                    max_x: rect.max_x,
                    max_y: rect.max_y,
                });
            }
            let row = (p.y - rect.min_y) as usize;
            let col = (p.x - rect.min_x) as usize;
            cells[row * width + col] = true;
        }

        Ok(Self { width, height, rect, cells })
    }

    /// Width in cells.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The bounding rect the grid was built over.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    /// Whether the cell at `(col, row)` is foreground.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get(&self, col: usize, row: usize) -> Option<bool> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Iterate over rows, bottom row (`rect.min_y`) first.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks_exact(self.width)
    }

    /// Number of foreground cells.
    #[must_use]
    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}
