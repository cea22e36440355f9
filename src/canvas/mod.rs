//! # Drawing engine
//!
//! ```text
//!   Coords (1-based, human)
//!        │
//!        ▼
//!   Line / Rectangle ──lines()──▶ Drawer ──mutates──▶ Canvas ──render()──▶ text
//!                                   │                   ▲
//!                                   └── bucket fill ────┘
//! ```
//!
//! Shapes only do coordinate math. The [`Drawer`] checks that a shape fits the
//! canvas, rasterizes it and runs flood fills. The [`Canvas`] owns its cells and
//! renders them as a bordered block of text.

mod canvas;
mod cell;
mod color;
mod drawer;
mod shapes;

pub use canvas::Canvas;
pub use cell::Cell;
pub use color::Color;
pub use drawer::{Drawer, FillOutcome, GridPoint};
pub use shapes::{Coords, Line, Orientation, Rectangle, Shape};
