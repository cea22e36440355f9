//! # ASCII Draw
//!
//! A small drawing tool for the terminal. A canvas is a grid of character
//! cells; users draw horizontal and vertical lines, rectangle outlines and
//! bucket fills, and see the canvas re-rendered as text after every command.
//!
//! The [`canvas`] module is the drawing engine. [`session`] and [`command`]
//! turn text commands into engine calls, and [`interactive`] wraps them in a
//! REPL.

pub mod canvas;
pub mod command;
pub mod config;
pub mod errors;
pub mod interactive;
pub mod session;

pub use canvas::{Canvas, Cell, Color, Coords, Drawer, FillOutcome, Line, Rectangle, Shape};
pub use errors::{DrawError, ErrorKind, Result};
pub use session::{Outcome, Session};
