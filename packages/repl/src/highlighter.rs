use nu_ansi_term::{Color, Style};
use reedline::{Highlighter, StyledText};

use crate::commands::{takes_name, COMMAND_WORDS};

/// Colors the command word, its name argument and any trailing content.
pub struct ReplHighlighter {
    commands: &'static [&'static str],
}

impl ReplHighlighter {
    pub fn new() -> Self {
        Self {
            commands: COMMAND_WORDS,
        }
    }
}

impl Default for ReplHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for ReplHighlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();

        if line.is_empty() {
            return styled;
        }

        let (command, rest) = split_word(line);

        let cmd_lower = command.to_lowercase();
        let cmd_style = if self.commands.contains(&cmd_lower.as_str()) {
            Style::new().bold().fg(Color::Cyan)
        } else {
            Style::new().fg(Color::Red)
        };
        styled.push((cmd_style, command.to_string()));

        if rest.is_empty() {
            return styled;
        }

        if !takes_name(&cmd_lower) {
            styled.push((Style::new(), rest.to_string()));
            return styled;
        }

        // Leading whitespace and the name share a span.
        let name_start = rest.len() - rest.trim_start().len();
        let name_end = name_start + name_len(&rest[name_start..]);
        let content = &rest[name_end..];
        styled.push((Style::new().fg(Color::Yellow), rest[..name_end].to_string()));

        if !content.is_empty() {
            let content_style = match cmd_lower.as_str() {
                "touch" | "create" | "new" | "write" | "w" => Style::new().fg(Color::Green),
                _ => Style::new().fg(Color::Red),
            };
            styled.push((content_style, content.to_string()));
        }

        styled
    }
}

/// Byte length of the name at the start of `text`, quotes included. An
/// unterminated quote runs to the end of the line.
fn name_len(text: &str) -> usize {
    match text.strip_prefix('"') {
        Some(quoted) => quoted.find('"').map_or(text.len(), |end| end + 2),
        None => split_word(text).0.len(),
    }
}

fn split_word(text: &str) -> (&str, &str) {
    match text.find(char::is_whitespace) {
        Some(pos) => (&text[..pos], &text[pos..]),
        None => (text, ""),
    }
}
