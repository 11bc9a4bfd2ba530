//! Terminal output encoder.
//!
//! Renders an occupancy grid as text, one character cell per pixel,
//! foreground dark and background light. Rows are printed top-down with
//! the y axis pointing up, so the row at `rect.min_y` lands at the bottom
//! of the output, matching a conventional plot.

use crate::grid::OccupancyGrid;

/// Terminal encoder configuration.
#[derive(Debug, Clone)]
pub struct TerminalEncoder {
    foreground: char,
    background: char,
    axis_labels: bool,
}

impl Default for TerminalEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalEncoder {
    /// Create a new terminal encoder with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self { foreground: '█', background: '·', axis_labels: true }
    }

    /// Set the character used for foreground cells.
    #[must_use]
    pub const fn foreground(mut self, c: char) -> Self {
        self.foreground = c;
        self
    }

    /// Set the character used for background cells.
    #[must_use]
    pub const fn background(mut self, c: char) -> Self {
        self.background = c;
        self
    }

    /// Enable or disable the x/y axis labels.
    #[must_use]
    pub const fn axis_labels(mut self, enabled: bool) -> Self {
        self.axis_labels = enabled;
        self
    }

    /// Render an occupancy grid to a string.
    ///
    /// Each cell is emitted twice so the output keeps a roughly equal
    /// aspect ratio in a monospace terminal, whose character cells are
    /// about twice as tall as they are wide.
    #[must_use]
    pub fn render(&self, grid: &OccupancyGrid) -> String {
        let margin = if self.axis_labels { 2 } else { 0 };
        let line_len = margin + grid.width() * 2 + 1;
        let mut output = String::with_capacity(line_len * (grid.height() + 1));

        let rows: Vec<&[bool]> = grid.rows().collect();
        let label_row = grid.height() / 2;

        for (row_idx, row) in rows.iter().enumerate().rev() {
            if self.axis_labels {
                output.push(if row_idx == label_row { 'y' } else { ' ' });
                output.push(' ');
            }
            for &cell in *row {
                let c = if cell { self.foreground } else { self.background };
                output.push(c);
                output.push(c);
            }
            output.push('\n');
        }

        if self.axis_labels {
            for _ in 0..margin + grid.width() {
                output.push(' ');
            }
            output.push('x');
            output.push('\n');
        }

        output
    }
}
