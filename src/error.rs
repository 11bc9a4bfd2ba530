//! Error types for rasterviz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rasterviz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for an occupancy grid.
    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: i64,
        /// Height value.
        height: i64,
    },

    /// A rasterized point fell outside the caller-supplied bounding rect.
    ///
    /// This is a contract violation on the caller's side (the rect must be
    /// the true bounding box of the primitive) and is never silently
    /// clipped.
    #[error("Point ({x}, {y}) outside bounding rect ({min_x}, {min_y})..({max_x}, {max_y})")]
    PointOutOfBounds {
        /// X coordinate of the offending point.
        x: i32,
        /// Y coordinate of the offending point.
        y: i32,
        /// Rect minimum x.
        min_x: i32,
        /// Rect minimum y.
        min_y: i32,
        /// Rect maximum x.
        max_x: i32,
        /// Rect maximum y.
        max_y: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions { width: 0, height: 100 };
        assert!(err.to_string().contains("Invalid grid dimensions"));
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = Error::PointOutOfBounds {
            x: 7,
            y: -3,
            min_x: 0,
            min_y: 0,
            max_x: 5,
            max_y: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("(7, -3)"));
        assert!(msg.contains("(0, 0)..(5, 5)"));
    }
}
