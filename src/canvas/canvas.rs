//! Fixed-size character canvas with a deterministic text rendering

use std::fmt;

use super::cell::Cell;
use crate::errors::{coerce_dimension, DrawError, Result};

/// Grid of cells indexed `[x, y]`, `0 <= x < width`, `0 <= y < height`
///
/// Dimensions are fixed at construction. Storage is row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    /// Create an empty canvas
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    /// Create a canvas from user-supplied dimension strings
    pub fn parse(width: &str, height: &str) -> Result<Self> {
        let width = coerce_dimension("width", width)?;
        let height = coerce_dimension("height", height)?;
        Ok(Self::new(width, height))
    }

    /// Width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` lies on the canvas
    #[inline]
    pub fn exists(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Grid point for signed coordinates, `None` when off the canvas
    #[inline]
    pub fn grid_point(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        self.exists(x, y).then_some((x, y))
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        self.exists(x, y).then(|| y * self.width + x)
    }

    /// Get cell at coordinates
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// Get mutable cell at coordinates
    #[inline]
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        self.index(x, y).map(move |idx| &mut self.cells[idx])
    }

    /// Set the fill state of the cell at coordinates
    pub fn set_filled(&mut self, x: usize, y: usize, filled: bool) -> Result<()> {
        let (width, height) = (self.width, self.height);
        let cell = self.get_mut(x, y).ok_or_else(|| {
            DrawError::geometry(format!(
                "cell ({x}, {y}) is outside the {width}x{height} canvas"
            ))
        })?;
        cell.set_filled(filled);
        Ok(())
    }

    /// Number of cells on the canvas
    #[inline]
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Canonical text form
    ///
    /// Empty string when either dimension is zero. Otherwise a dashed border above
    /// and below, one space of indent, and every row framed by `|`.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let border = format!(" {}", "-".repeat(self.width));
        let mut lines = Vec::with_capacity(self.height + 2);
        lines.push(border.clone());
        for row in self.cells.chunks(self.width) {
            let body: String = row.iter().map(Cell::glyph).collect();
            lines.push(format!("|{body}|"));
        }
        lines.push(border);
        lines.join("\n")
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
