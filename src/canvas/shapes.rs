//! Shape geometry for canvas drawing
//!
//! Shapes are built from 1-based, inclusive "human" coordinates. They know
//! nothing about any particular canvas; fitting a shape onto a canvas is the
//! drawer's job.

use std::fmt;

use crate::errors::{coerce_int, DrawError, Result};

/// Corner pair in 1-based human coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coords {
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
}

impl Coords {
    #[inline]
    pub const fn new(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Coerce four user-supplied strings into coordinates
    pub fn parse(args: &[&str]) -> Result<Self> {
        const FIELDS: [&str; 4] = ["x1", "y1", "x2", "y2"];
        if args.len() != FIELDS.len() {
            return Err(DrawError::invalid(
                "coordinates",
                format!("expected 4 values (x1 y1 x2 y2), got {}", args.len()),
            ));
        }
        let mut values = [0_i64; 4];
        for ((value, field), raw) in values.iter_mut().zip(FIELDS).zip(args) {
            *value = coerce_int(field, raw)?;
        }
        let [x1, y1, x2, y2] = values;
        Ok(Self::new(x1, y1, x2, y2))
    }

    /// First corner as a 0-based grid index
    #[inline]
    pub fn start_coordinate(&self) -> (i64, i64) {
        (self.x1.saturating_sub(1), self.y1.saturating_sub(1))
    }

    /// Second corner in human terms; doubles as the exclusive grid bound
    #[inline]
    pub fn end_coordinate(&self) -> (i64, i64) {
        (self.x2, self.y2)
    }

    /// Same corners with `x1 <= x2` and `y1 <= y2`
    pub fn normalized(&self) -> Self {
        Self::new(
            self.x1.min(self.x2),
            self.y1.min(self.y2),
            self.x1.max(self.x2),
            self.y1.max(self.y2),
        )
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})-({}, {})", self.x1, self.y1, self.x2, self.y2)
    }
}

/// Axis a line runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Shape trait for drawable primitives
///
/// Every shape the drawer knows decomposes into axis-aligned lines.
pub trait Shape {
    /// Human coordinates the shape was built from
    fn coords(&self) -> Coords;

    /// Lines that make up the shape
    fn lines(&self) -> Vec<Line>;
}

/// Horizontal or vertical line segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    coords: Coords,
    orientation: Orientation,
}

impl Line {
    /// Build a line; diagonal endpoints are rejected
    ///
    /// A single point (`x1 == x2` and `y1 == y2`) counts as vertical.
    pub fn new(coords: Coords) -> Result<Self> {
        let orientation = if coords.x1 == coords.x2 {
            Orientation::Vertical
        } else if coords.y1 == coords.y2 {
            Orientation::Horizontal
        } else {
            return Err(DrawError::geometry(format!(
                "diagonal line {coords} is not supported, only horizontal or vertical"
            )));
        };
        Ok(Self {
            coords,
            orientation,
        })
    }

    pub fn from_points(x1: i64, y1: i64, x2: i64, y2: i64) -> Result<Self> {
        Self::new(Coords::new(x1, y1, x2, y2))
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of cells covered, endpoints included
    pub fn length(&self) -> u64 {
        let dx = self.coords.x1.abs_diff(self.coords.x2);
        let dy = self.coords.y1.abs_diff(self.coords.y2);
        dx.max(dy).saturating_add(1)
    }

    /// 0-based grid cells covered by the line, both endpoints included
    pub fn points(&self) -> impl Iterator<Item = (i64, i64)> {
        let c = self.coords.normalized();
        let (x0, y0) = c.start_coordinate();
        let (x_end, y_end) = c.end_coordinate();
        let orientation = self.orientation;
        let (from, to) = match orientation {
            Orientation::Horizontal => (x0, x_end),
            Orientation::Vertical => (y0, y_end),
        };
        (from..to).map(move |v| match orientation {
            Orientation::Horizontal => (v, y0),
            Orientation::Vertical => (x0, v),
        })
    }
}

impl Shape for Line {
    fn coords(&self) -> Coords {
        self.coords
    }

    fn lines(&self) -> Vec<Line> {
        vec![*self]
    }
}

/// Axis-aligned rectangle outline
///
/// Corners are normalised on construction so `(x1, y1)` is upper-left and
/// `(x2, y2)` lower-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    coords: Coords,
}

impl Rectangle {
    pub fn new(coords: Coords) -> Self {
        Self {
            coords: coords.normalized(),
        }
    }

    pub fn from_points(x1: i64, y1: i64, x2: i64, y2: i64) -> Self {
        Self::new(Coords::new(x1, y1, x2, y2))
    }

    fn edge(x1: i64, y1: i64, x2: i64, y2: i64, orientation: Orientation) -> Line {
        Line {
            coords: Coords::new(x1, y1, x2, y2),
            orientation,
        }
    }

    /// Top edge, along `y1`
    pub fn north_line(&self) -> Line {
        let Coords { x1, y1, x2, .. } = self.coords;
        Self::edge(x1, y1, x2, y1, Orientation::Horizontal)
    }

    /// Bottom edge, along `y2`
    pub fn south_line(&self) -> Line {
        let Coords { x1, x2, y2, .. } = self.coords;
        Self::edge(x1, y2, x2, y2, Orientation::Horizontal)
    }

    /// Right edge, along `x2`
    pub fn east_line(&self) -> Line {
        let Coords { y1, x2, y2, .. } = self.coords;
        Self::edge(x2, y1, x2, y2, Orientation::Vertical)
    }

    /// Left edge, along `x1`
    pub fn west_line(&self) -> Line {
        let Coords { x1, y1, y2, .. } = self.coords;
        Self::edge(x1, y1, x1, y2, Orientation::Vertical)
    }
}

impl Shape for Rectangle {
    fn coords(&self) -> Coords {
        self.coords
    }

    fn lines(&self) -> Vec<Line> {
        vec![
            self.north_line(),
            self.south_line(),
            self.east_line(),
            self.west_line(),
        ]
    }
}
