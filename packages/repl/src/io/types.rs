//! Values passed across the [`IoHost`](super::IoHost) boundary.

/// A line of input from the user.
#[derive(Debug, Clone)]
pub struct InputLine {
    pub line: String,
}

/// A signal from the host (Ctrl+C, Ctrl+D).
#[derive(Debug, Clone)]
pub enum Signal {
    /// User pressed Ctrl+C.
    Interrupt,
    /// User pressed Ctrl+D.
    Eof,
}

/// Output to be written by the REPL.
#[derive(Debug, Clone)]
pub struct Output {
    pub text: String,
    pub style: OutputStyle,
}

impl Output {
    pub fn normal(text: impl Into<String>) -> Self {
        Self::styled(text, OutputStyle::Normal)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::styled(text, OutputStyle::Error)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::styled(text, OutputStyle::Info)
    }

    pub fn banner(text: impl Into<String>) -> Self {
        Self::styled(text, OutputStyle::Banner)
    }

    fn styled(text: impl Into<String>, style: OutputStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// Style hint for output rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// Printed as is; may already carry ANSI codes.
    #[default]
    Normal,
    /// Host adds a red `Error:` prefix.
    Error,
    Info,
    Banner,
}

/// What the host should show in the next prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptConfig {
    /// Rendered path of the current directory.
    pub current_path: String,
    /// Number of entries in the current directory.
    pub entry_count: usize,
}

/// Reason the REPL exited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// User typed 'exit' or 'quit'.
    UserExit,
    /// User pressed Ctrl+D.
    Eof,
}
