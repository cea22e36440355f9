//! Text commands accepted by the drawing session

use crate::canvas::{Color, Coords};
use crate::errors::{coerce_dimension, coerce_int, DrawError, Result};

/// Command reference shown by `H`
pub const HELP: &str = "\
Commands:
  C w h          Create a new canvas of width w and height h
  L x1 y1 x2 y2  Draw a horizontal or vertical line from (x1,y1) to (x2,y2)
  R x1 y1 x2 y2  Draw a rectangle with upper-left (x1,y1) and lower-right (x2,y2)
  B x y c        Fill the area connected to (x,y) with colour c
  S              Show the canvas
  H              Show this help
  Q              Quit";

/// A parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create { width: usize, height: usize },
    Line(Coords),
    Rectangle(Coords),
    /// Seed in 1-based human coordinates
    BucketFill { x: i64, y: i64, color: Color },
    Show,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line; blank input yields `None`
    pub fn parse(input: &str) -> Result<Option<Self>> {
        let mut parts = input.split_whitespace();
        let Some(name) = parts.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = parts.collect();

        let command = match name.to_ascii_uppercase().as_str() {
            "C" => {
                expect_args(&args, 2, "C w h")?;
                Self::Create {
                    width: coerce_dimension("width", args[0])?,
                    height: coerce_dimension("height", args[1])?,
                }
            }
            "L" => {
                expect_args(&args, 4, "L x1 y1 x2 y2")?;
                Self::Line(Coords::parse(&args)?)
            }
            "R" => {
                expect_args(&args, 4, "R x1 y1 x2 y2")?;
                Self::Rectangle(Coords::parse(&args)?)
            }
            "B" => {
                expect_args(&args, 3, "B x y c")?;
                Self::BucketFill {
                    x: coerce_int("x", args[0])?,
                    y: coerce_int("y", args[1])?,
                    color: args[2].parse()?,
                }
            }
            "S" => {
                expect_args(&args, 0, "S")?;
                Self::Show
            }
            "H" | "HELP" | "?" => Self::Help,
            "Q" | "QUIT" | "EXIT" => Self::Quit,
            _ => {
                return Err(DrawError::invalid(
                    "command",
                    format!("unknown command '{name}', type H for help"),
                ))
            }
        };
        Ok(Some(command))
    }
}

fn expect_args(args: &[&str], count: usize, usage: &str) -> Result<()> {
    if args.len() == count {
        Ok(())
    } else {
        Err(DrawError::invalid(
            "arguments",
            format!("Expected args: {usage}"),
        ))
    }
}
