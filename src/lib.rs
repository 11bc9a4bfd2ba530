//! # rasterviz
//!
//! Classical scanline rasterization of lines and circles on an integer
//! pixel grid, with terminal and PNG rendering of the result.
//!
//! Four independent algorithms convert a primitive into a lazy sequence of
//! pixel coordinates: naive slope-intercept stepping, the digital
//! differential analyzer (DDA), Bresenham's integer line algorithm, and
//! the midpoint circle algorithm with 8-way symmetry. An
//! [`OccupancyGrid`](grid::OccupancyGrid) folds any of those sequences
//! into a dense boolean buffer over the primitive's bounding rect, which
//! the output encoders display.
//!
//! ## Quick Start
//!
//! ```
//! use rasterviz::prelude::*;
//!
//! let rect = Rect::from_endpoints(0, 0, 5, 2);
//! let grid = OccupancyGrid::from_pixels(bresenham_line(0, 0, 5, 2), rect)?;
//! print!("{}", TerminalEncoder::new().render(&grid));
//! # Ok::<(), rasterviz::Error>(())
//! ```
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." IBM Systems Journal 4(1).

// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]

// ============================================================================
// Core Modules
// ============================================================================

/// Error types for rasterviz operations.
pub mod error;

/// Geometric primitives (points, bounding rects).
pub mod geometry;

/// Occupancy grid built from rasterized pixels.
pub mod grid;

/// Scanline rasterization algorithms.
pub mod raster;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Output encoders (terminal, PNG).
pub mod output;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```
/// use rasterviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{Point, Rect};
    pub use crate::grid::OccupancyGrid;
    pub use crate::output::{PngEncoder, TerminalEncoder};
    pub use crate::raster::{bresenham_circle, bresenham_line, dda_line, naive_line};
}
