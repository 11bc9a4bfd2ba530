//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. The grid is written as an
//! 8-bit grayscale image, foreground dark (0) on a light background (255),
//! with grid rows flipped so the y axis points up as in the terminal
//! renderer.

use crate::error::Result;
use crate::grid::OccupancyGrid;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// PNG encoder for occupancy grid output.
#[derive(Debug, Clone)]
pub struct PngEncoder {
    scale: u32,
}

impl Default for PngEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PngEncoder {
    /// Create a new PNG encoder with the default cell scale.
    #[must_use]
    pub const fn new() -> Self {
        Self { scale: 8 }
    }

    /// Set the edge length in image pixels of one grid cell.
    ///
    /// A scale of 0 is treated as 1.
    #[must_use]
    pub const fn scale(mut self, scale: u32) -> Self {
        self.scale = if scale == 0 { 1 } else { scale };
        self
    }

    /// Write an occupancy grid to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, grid: &OccupancyGrid, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        self.encode(grid, writer)
    }

    /// Encode an occupancy grid to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(&self, grid: &OccupancyGrid) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.encode(grid, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: std::io::Write>(&self, grid: &OccupancyGrid, writer: W) -> Result<()> {
        let scale = self.scale as usize;
        let width = grid.width() * scale;
        let height = grid.height() * scale;

        let mut data = Vec::with_capacity(width * height);
        let rows: Vec<&[bool]> = grid.rows().collect();
        for row in rows.iter().rev() {
            let mut line = Vec::with_capacity(width);
            for &cell in *row {
                let luma = if cell { 0u8 } else { 255u8 };
                line.extend(std::iter::repeat(luma).take(scale));
            }
            for _ in 0..scale {
                data.extend_from_slice(&line);
            }
        }

        let mut encoder = png::Encoder::new(writer, width as u32, height as u32);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&data)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Rect};

    fn diagonal_grid() -> OccupancyGrid {
        let rect = Rect::from_endpoints(1, 1, 2, 2);
        OccupancyGrid::from_pixels([Point::new(1, 1), Point::new(2, 2)], rect)
            .expect("grid build should succeed")
    }

    #[test]
    fn test_png_to_bytes() {
        let bytes = PngEncoder::new().to_bytes(&diagonal_grid()).expect("encoding should succeed");
        // PNG magic bytes
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_scale_one_pixel_per_cell() {
        let encoder = PngEncoder::new().scale(1);
        let bytes = encoder.to_bytes(&diagonal_grid()).expect("encoding should succeed");
        assert!(!bytes.is_empty());
    }

    #[test]
    fn test_zero_scale_clamps_to_one() {
        let encoder = PngEncoder::new().scale(0);
        assert!(encoder.to_bytes(&diagonal_grid()).is_ok());
    }
}
