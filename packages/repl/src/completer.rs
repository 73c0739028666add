use reedline::{Completer, Span, Suggestion};

use crate::commands::COMMAND_WORDS;

/// Completes command words at the start of the line.
pub struct ReplCompleter {
    commands: Vec<&'static str>,
}

impl ReplCompleter {
    pub fn new() -> Self {
        Self {
            commands: COMMAND_WORDS.iter().copied().filter(|w| *w != "?").collect(),
        }
    }
}

impl Default for ReplCompleter {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for ReplCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let line_to_pos = &line[..pos];
        let words: Vec<&str> = line_to_pos.split_whitespace().collect();

        // Only the command word is completed; names depend on session state.
        let on_command_word =
            words.is_empty() || (words.len() == 1 && !line_to_pos.ends_with(char::is_whitespace));
        if !on_command_word {
            return Vec::new();
        }

        let prefix = words.first().copied().unwrap_or("");
        let start = pos - prefix.len();

        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Suggestion {
                value: cmd.to_string(),
                description: Some(command_description(cmd).to_string()),
                style: None,
                extra: None,
                span: Span::new(start, pos),
                append_whitespace: true,
                match_indices: None,
            })
            .collect()
    }
}

fn command_description(cmd: &str) -> &'static str {
    match cmd {
        "help" => "Show help",
        "exit" | "quit" | "q" => "Exit the REPL",
        "touch" | "create" | "new" => "Create a file",
        "cat" | "read" => "Show a file's content",
        "write" | "w" => "Replace a file's content",
        "rm" | "del" | "delete" => "Delete a file",
        "mkdir" | "md" => "Create a directory",
        "ls" | "dir" | "list" => "List the current directory",
        "cd" => "Enter a child directory",
        "pwd" => "Print the current path",
        _ => "",
    }
}
