//! Input highlighting: command letter, numeric arguments, everything else

use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

/// Highlighter for drawing commands
pub struct CommandHighlighter {
    command_style: Style,
    number_style: Style,
    arg_style: Style,
}

impl CommandHighlighter {
    pub fn new() -> Self {
        Self {
            command_style: Style::new().fg(Color::Yellow).bold(),
            number_style: Style::new().fg(Color::Cyan),
            arg_style: Style::new().fg(Color::Magenta),
        }
    }
}

impl Default for CommandHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for CommandHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();
        let mut first = true;

        // Keep the user's spacing intact
        for token in line.split_inclusive(char::is_whitespace) {
            let word = token.trim_end();
            let gap = &token[word.len()..];
            if !word.is_empty() {
                let style = if first {
                    self.command_style
                } else if word.parse::<i64>().is_ok() {
                    self.number_style
                } else {
                    self.arg_style
                };
                styled.push((style, word.to_string()));
                first = false;
            }
            if !gap.is_empty() {
                styled.push((Style::new(), gap.to_string()));
            }
        }

        styled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_preserves_text() {
        let highlighter = CommandHighlighter::new();
        let styled = highlighter.highlight("B  10 3 o", 0);
        let text: String = styled.buffer.iter().map(|(_, s)| s.as_str()).collect();
        assert_eq!(text, "B  10 3 o");
    }

    #[test]
    fn test_command_and_numbers_styled() {
        let highlighter = CommandHighlighter::new();
        let styled = highlighter.highlight("L 1 2", 0);
        assert_eq!(styled.buffer[0].0, highlighter.command_style);
        assert_eq!(styled.buffer[2].0, highlighter.number_style);
    }
}
