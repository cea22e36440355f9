//! Single-character paint colour

use std::fmt;
use std::str::FromStr;

use crate::errors::DrawError;

/// Paint colour: exactly one printable character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(char);

impl Color {
    /// Colour used by lines and rectangles
    pub const DEFAULT: Self = Self('x');

    /// Create from a char, rejecting control characters and whitespace
    pub fn new(ch: char) -> Result<Self, DrawError> {
        if ch.is_control() || ch.is_whitespace() {
            return Err(DrawError::Color(format!(
                "colour must be a visible character, got {ch:?}"
            )));
        }
        Ok(Self(ch))
    }

    #[inline]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Color {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => Err(DrawError::Color(format!(
                "colour must be exactly one character, got '{s}'"
            ))),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
