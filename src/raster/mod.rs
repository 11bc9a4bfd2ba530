//! Scanline rasterization algorithms.
//!
//! Four classical algorithms converting ideal lines and circles into
//! sequences of integer pixel coordinates:
//!
//! - [`naive_line`] — slope/intercept stepping along the dominant axis.
//! - [`dda_line`] — digital differential analyzer, fixed fractional
//!   increments per step.
//! - [`bresenham_line`] — integer-only error-term line algorithm.
//! - [`bresenham_circle`] — integer-only midpoint circle algorithm with
//!   8-way symmetry.
//!
//! Each constructor is pure and returns a finite, single-pass iterator over
//! [`Point`](crate::geometry::Point). Invocations share no state.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." IBM Systems Journal.

mod circle;
mod line;

pub use circle::{bresenham_circle, BresenhamCircle};
pub use line::{bresenham_line, dda_line, naive_line, BresenhamLine, DdaLine, NaiveLine};
