//! Interactive REPL Module
//!
//! Two front ends over the same [`Session`]:
//! - a `reedline` line editor when stdin is a terminal
//! - a plain line reader for scripts and piped input

mod highlighter;
mod prompt;

use std::io::{BufRead, Write};

use reedline::{FileBackedHistory, Reedline, Signal};
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::errors::{DrawError, Result};
use crate::session::{Outcome, Session};

use self::highlighter::CommandHighlighter;
use self::prompt::CanvasPrompt;

/// What the caller should do after a line was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive REPL
pub struct Interactive {
    session: Session,
    editor: Reedline,
    prompt: CanvasPrompt,
    banner: Option<String>,
}

impl Interactive {
    pub fn new(config: &AppConfig, show_banner: bool) -> Result<Self> {
        Ok(Self {
            session: Session::new(config),
            editor: Self::create_editor(config)?,
            prompt: CanvasPrompt::new(&config.prompt),
            banner: show_banner.then(|| config.banner.clone()),
        })
    }

    fn create_editor(config: &AppConfig) -> Result<Reedline> {
        let history = FileBackedHistory::new(config.history_size)
            .map_err(|e| DrawError::Configuration(format!("Invalid history size: {e}")))?;

        let editor = Reedline::create()
            .with_history(Box::new(history))
            .with_highlighter(Box::new(CommandHighlighter::new()))
            .with_ansi_colors(true);

        Ok(editor)
    }

    /// Run the interactive REPL until quit or Ctrl-D
    pub fn run(&mut self) -> Result<()> {
        let mut stdout = std::io::stdout();
        if let Some(banner) = &self.banner {
            writeln!(stdout, "{banner}")?;
        }

        loop {
            self.prompt.update(&self.session);

            match self.editor.read_line(&self.prompt) {
                Ok(Signal::Success(line)) => {
                    let result = self.session.run_line(&line);
                    if report(&mut stdout, result)? == Flow::Quit {
                        break;
                    }
                }
                Ok(Signal::CtrlC) => {
                    writeln!(stdout, "\x1b[90m(Press Ctrl+D or type Q to quit)\x1b[0m")?;
                }
                Ok(Signal::CtrlD) => {
                    writeln!(stdout, "Quitting.")?;
                    break;
                }
                Err(e) => {
                    warn!("Input error: {}", e);
                    return Err(DrawError::Io(e));
                }
            }
        }

        info!("Interactive session ended");
        Ok(())
    }
}

/// Run commands read line by line from `input`, writing results to `out`
///
/// Stops at `Q` or end of input.
pub fn run_script<R: BufRead, W: Write>(session: &mut Session, input: R, out: &mut W) -> Result<()> {
    for (number, line) in input.lines().enumerate() {
        let line = line?;
        debug!("script line {}: {}", number + 1, line);
        if report(out, session.run_line(&line))? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Print the result of one command
///
/// Recoverable errors are shown and swallowed; only IO failures propagate.
pub fn report<W: Write>(out: &mut W, result: Result<Option<Outcome>>) -> Result<Flow> {
    match result {
        Ok(None) => {}
        Ok(Some(Outcome::Canvas(text) | Outcome::Message(text))) => writeln!(out, "{text}")?,
        Ok(Some(Outcome::Warning { message, canvas })) => {
            writeln!(out, "Warning: {message}")?;
            writeln!(out, "{canvas}")?;
        }
        Ok(Some(Outcome::Quit)) => {
            writeln!(out, "Quitting.")?;
            return Ok(Flow::Quit);
        }
        Err(e) if e.is_recoverable() => {
            warn!("Command failed: {}", e);
            writeln!(out, "Error: {e}")?;
        }
        Err(e) => return Err(e),
    }
    Ok(Flow::Continue)
}
