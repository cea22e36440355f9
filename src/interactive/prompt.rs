//! Custom prompt for the drawing REPL
//!
//! Shows: `(Canvas) ` on the left, current canvas size on the right.

use std::borrow::Cow;

use reedline::{Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus};

use crate::session::Session;

/// Prompt with the configured label and the canvas dimensions
pub struct CanvasPrompt {
    left: String,
    right: String,
}

impl CanvasPrompt {
    pub fn new(label: &str) -> Self {
        Self {
            left: label.to_string(),
            right: String::new(),
        }
    }

    /// Refresh the right-hand side from the session's canvas
    pub fn update(&mut self, session: &Session) {
        self.right = match session.canvas() {
            Some(canvas) => format!("\x1b[90m[{}x{}]\x1b[0m", canvas.width(), canvas.height()),
            None => "\x1b[90m[no canvas]\x1b[0m".to_string(),
        };
    }
}

impl Prompt for CanvasPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.left)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.right)
    }

    fn render_prompt_indicator(&self, edit_mode: PromptEditMode) -> Cow<'_, str> {
        match edit_mode {
            PromptEditMode::Vi(reedline::PromptViMode::Normal) => Cow::Borrowed("\x1b[33m❮\x1b[0m "),
            _ => Cow::Borrowed(""),
        }
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("\x1b[90m··· \x1b[0m")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}
