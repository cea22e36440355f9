//! A single grid unit

use tracing::warn;

use super::color::Color;

/// One canvas cell: fill state plus colour
///
/// An unfilled cell renders as a space whatever its colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    filled: bool,
    color: Color,
}

impl Cell {
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn set_filled(&mut self, filled: bool) {
        self.filled = filled;
    }

    /// Set the colour. Returns false (and warns) when it already has this colour.
    pub fn set_color(&mut self, color: Color) -> bool {
        if self.color == color {
            warn!("Cell already has colour '{}'", color);
            return false;
        }
        self.color = color;
        true
    }

    /// Visible paint: the colour when filled, `None` for a blank cell
    #[inline]
    pub fn paint(&self) -> Option<Color> {
        self.filled.then_some(self.color)
    }

    /// Character this cell contributes to the text rendering
    #[inline]
    pub fn glyph(&self) -> char {
        self.paint().map_or(' ', Color::as_char)
    }
}
