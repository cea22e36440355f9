//! Drawing session: owns the current canvas and executes commands against it

use std::collections::HashSet;

use tracing::{debug, info};

use crate::canvas::{Canvas, Drawer, FillOutcome, Line, Rectangle};
use crate::command::{Command, HELP};
use crate::config::AppConfig;
use crate::errors::{DrawError, Result};

/// What the user should see after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Rendered canvas
    Canvas(String),
    /// Rendered canvas with a non-fatal warning
    Warning { message: String, canvas: String },
    /// Plain informational text
    Message(String),
    Quit,
}

/// A single user's drawing session
#[derive(Debug)]
pub struct Session {
    canvas: Option<Canvas>,
    drawer: Drawer,
    max_cells: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            canvas: None,
            drawer: Drawer::new(),
            max_cells: config.max_cells,
        }
    }

    /// Current canvas, if one was created
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// Parse and execute one input line; blank lines yield `None`
    pub fn run_line(&mut self, line: &str) -> Result<Option<Outcome>> {
        match Command::parse(line)? {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        debug!("Executing {:?}", command);
        let drawer = self.drawer;
        match command {
            Command::Create { width, height } => {
                let cells = width.saturating_mul(height);
                if cells > self.max_cells {
                    return Err(DrawError::invalid(
                        "size",
                        format!("{width}x{height} canvas exceeds the limit of {} cells", self.max_cells),
                    ));
                }
                info!("Creating {}x{} canvas", width, height);
                let canvas = self.canvas.insert(Canvas::new(width, height));
                Ok(Outcome::Canvas(canvas.render()))
            }
            Command::Line(coords) => {
                let line = Line::new(coords)?;
                let canvas = self.canvas_mut()?;
                drawer.draw_line(canvas, &line)?;
                Ok(Outcome::Canvas(canvas.render()))
            }
            Command::Rectangle(coords) => {
                let rectangle = Rectangle::new(coords);
                let canvas = self.canvas_mut()?;
                drawer.draw_rectangle(canvas, &rectangle)?;
                Ok(Outcome::Canvas(canvas.render()))
            }
            Command::BucketFill { x, y, color } => {
                let canvas = self.canvas_mut()?;
                let seed = to_grid_seed(x, y).ok_or_else(|| {
                    DrawError::geometry(format!(
                        "fill point ({x}, {y}) is outside the {}x{} canvas",
                        canvas.width(),
                        canvas.height()
                    ))
                })?;
                let outcome = drawer.draw_bucket_fill(canvas, &HashSet::from([seed]), color)?;
                let rendered = canvas.render();
                Ok(match outcome {
                    FillOutcome::Painted { .. } => Outcome::Canvas(rendered),
                    FillOutcome::AlreadyColored => Outcome::Warning {
                        message: format!("Area at ({x}, {y}) already has colour '{color}'"),
                        canvas: rendered,
                    },
                })
            }
            Command::Show => Ok(Outcome::Canvas(self.canvas_ref()?.render())),
            Command::Help => Ok(Outcome::Message(HELP.to_string())),
            Command::Quit => {
                info!("Quit requested");
                Ok(Outcome::Quit)
            }
        }
    }

    fn canvas_ref(&self) -> Result<&Canvas> {
        self.canvas.as_ref().ok_or(DrawError::NoCanvas)
    }

    fn canvas_mut(&mut self) -> Result<&mut Canvas> {
        self.canvas.as_mut().ok_or(DrawError::NoCanvas)
    }
}

/// 1-based user coordinates to a 0-based grid point
fn to_grid_seed(x: i64, y: i64) -> Option<(usize, usize)> {
    let x = usize::try_from(x.checked_sub(1)?).ok()?;
    let y = usize::try_from(y.checked_sub(1)?).ok()?;
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use rstest::rstest;

    fn canvas_text(outcome: Option<Outcome>) -> String {
        match outcome {
            Some(Outcome::Canvas(text)) => text,
            other => panic!("expected a canvas, got {other:?}"),
        }
    }

    #[test]
    fn test_draw_before_create() {
        let mut session = Session::default();
        let err = session.run_line("L 1 1 2 1").unwrap_err();
        assert!(matches!(err, DrawError::NoCanvas));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_full_drawing_sequence() {
        let mut session = Session::default();
        session.run_line("C 20 4").unwrap();
        session.run_line("L 1 2 6 2").unwrap();
        session.run_line("L 6 3 6 4").unwrap();
        session.run_line("R 16 1 20 3").unwrap();
        let text = canvas_text(session.run_line("B 10 3 o").unwrap());
        let expected = [
            " --------------------",
            "|oooooooooooooooxxxxx|",
            "|xxxxxxooooooooox   x|",
            "|     xoooooooooxxxxx|",
            "|     xoooooooooooooo|",
            " --------------------",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_create_replaces_canvas() {
        let mut session = Session::default();
        session.run_line("C 2 2").unwrap();
        session.run_line("B 1 1 o").unwrap();
        let text = canvas_text(session.run_line("C 1 1").unwrap());
        assert_eq!(text, " -\n| |\n -");
        assert_eq!(session.canvas().map(Canvas::width), Some(1));
    }

    #[test]
    fn test_diagonal_line_is_geometry_error() {
        let mut session = Session::default();
        session.run_line("C 4 4").unwrap();
        let err = session.run_line("L 1 1 3 3").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Geometry);
    }

    #[rstest]
    #[case("L -9223372036854775808 1 1 1")]
    #[case("L 1 -9223372036854775808 1 1")]
    #[case("R 1 1 2 -9223372036854775808")]
    fn test_extreme_coordinates_are_geometry_errors(#[case] line: &str) {
        let mut session = Session::default();
        session.run_line("C 4 2").unwrap();
        let err = session.run_line(line).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Geometry);
        assert_eq!(session.canvas(), Some(&Canvas::new(4, 2)));
    }

    #[test]
    fn test_fill_seed_below_one() {
        let mut session = Session::default();
        session.run_line("C 4 4").unwrap();
        let err = session.run_line("B 0 1 o").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Geometry);
    }

    #[test]
    fn test_repeat_fill_warns() {
        let mut session = Session::default();
        session.run_line("C 2 1").unwrap();
        session.run_line("B 1 1 o").unwrap();
        let outcome = session.run_line("B 2 1 o").unwrap();
        assert!(matches!(
            outcome,
            Some(Outcome::Warning { ref canvas, .. }) if canvas == " --\n|oo|\n --"
        ));
    }

    #[test]
    fn test_size_limit() {
        let config = AppConfig {
            max_cells: 10,
            ..AppConfig::default()
        };
        let mut session = Session::new(&config);
        assert!(session.run_line("C 5 2").is_ok());
        let err = session.run_line("C 5 3").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_quit_and_help() {
        let mut session = Session::default();
        assert_eq!(session.run_line("Q").unwrap(), Some(Outcome::Quit));
        assert!(matches!(session.run_line("H").unwrap(), Some(Outcome::Message(_))));
        assert_eq!(session.run_line("").unwrap(), None);
    }
}
