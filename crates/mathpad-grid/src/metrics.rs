#![forbid(unsafe_code)]

//! Grid geometry: resolving pointer coordinates to cell indices.
//!
//! Cells are laid out uniformly with a fixed inter-cell gap; gaps count
//! toward the cell they precede, so the resolution is a plain floor division
//! of the pointer offset by `cell size + gap` in each axis.

use crate::catalog::{COLS, GAP, ROWS};

/// Pixel bounds of the rendered grid, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridBounds {
    /// Left edge in pixels.
    pub left: f32,
    /// Top edge in pixels.
    pub top: f32,
    /// Total width in pixels.
    pub width: f32,
    /// Total height in pixels.
    pub height: f32,
}

impl GridBounds {
    /// Create grid bounds from origin and size.
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Fixed shape of the key grid: column/row counts and the inter-cell gap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Number of columns.
    pub cols: usize,
    /// Number of rows.
    pub rows: usize,
    /// Gap between adjacent cells in pixels.
    pub gap: f32,
}

impl Default for GridSpec {
    /// The default 7×5 keyboard grid.
    fn default() -> Self {
        Self {
            cols: COLS,
            rows: ROWS,
            gap: GAP,
        }
    }
}

impl GridSpec {
    /// Resolve a pointer position to a linear cell index.
    ///
    /// With gap `g`, `C` columns, `R` rows and pixel size `W × H`:
    /// `cell_w = (W − g·(C−1)) / C`, `col = ⌊(x − left) / (cell_w + g)⌋`
    /// (and likewise for rows); the index is `row·C + col`. Returns `None`
    /// when the position falls outside the grid.
    #[must_use]
    pub fn cell_at(&self, x: f32, y: f32, bounds: GridBounds) -> Option<usize> {
        if self.cols == 0 || self.rows == 0 {
            return None;
        }
        let cols = self.cols as f32;
        let rows = self.rows as f32;
        let cell_w = (bounds.width - self.gap * (cols - 1.0)) / cols;
        let cell_h = (bounds.height - self.gap * (rows - 1.0)) / rows;
        let col = ((x - bounds.left) / (cell_w + self.gap)).floor();
        let row = ((y - bounds.top) / (cell_h + self.gap)).floor();
        // NaN coordinates fail both comparisons and resolve to None.
        if col >= 0.0 && col < cols && row >= 0.0 && row < rows {
            Some(row as usize * self.cols + col as usize)
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
