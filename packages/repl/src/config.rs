//! Runtime configuration for the terminal host.
//!
//! Settings come from command-line flags first, then the environment:
//! - `MEMFS_EDIT_MODE` (`vi` or `emacs`)
//! - `EDITOR` / `VISUAL` naming a vi-family editor
//! - `set editing-mode vi` in `$INPUTRC`, `~/.inputrc` or `/etc/inputrc`

use std::path::PathBuf;

/// Environment variable that forces the edit mode.
pub const EDIT_MODE_VAR: &str = "MEMFS_EDIT_MODE";

/// Number of lines kept in the history file.
pub const HISTORY_CAPACITY: usize = 1000;

/// Line-editing key bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    Emacs,
    Vi,
}

/// Configuration handed to the terminal host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub edit_mode: EditMode,
    /// `None` disables history entirely.
    pub history_path: Option<PathBuf>,
}

impl ReplConfig {
    /// Build a configuration from explicit overrides, falling back to the
    /// environment for anything left unset.
    pub fn resolve(
        edit_mode: Option<EditMode>,
        history: bool,
        history_path: Option<PathBuf>,
    ) -> Self {
        let edit_mode = edit_mode.unwrap_or_else(detect_edit_mode);
        let history_path = if history {
            history_path.or_else(default_history_path)
        } else {
            None
        };

        Self {
            edit_mode,
            history_path,
        }
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self::resolve(None, true, None)
    }
}

/// `<data_local_dir>/memfs/history.txt`, when the platform has one.
pub fn default_history_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("memfs").join("history.txt"))
}

/// Pick an edit mode from the environment.
pub fn detect_edit_mode() -> EditMode {
    if let Ok(mode) = std::env::var(EDIT_MODE_VAR) {
        if let Some(mode) = parse_edit_mode(&mode) {
            return mode;
        }
        log::warn!("ignoring unknown {} value '{}'", EDIT_MODE_VAR, mode);
    }

    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = std::env::var(var) {
            if is_vi_editor(&editor) {
                return EditMode::Vi;
            }
        }
    }

    if check_inputrc_vi_mode() {
        return EditMode::Vi;
    }

    EditMode::Emacs
}

fn parse_edit_mode(value: &str) -> Option<EditMode> {
    match value.trim().to_lowercase().as_str() {
        "vi" | "vim" => Some(EditMode::Vi),
        "emacs" => Some(EditMode::Emacs),
        _ => None,
    }
}

fn is_vi_editor(editor: &str) -> bool {
    let editor = editor.to_lowercase();
    let program = editor.rsplit('/').next().unwrap_or(&editor);
    program.contains("vim") || program == "vi"
}

/// Check .inputrc for vi mode setting.
fn check_inputrc_vi_mode() -> bool {
    let inputrc_paths = [
        std::env::var("INPUTRC").ok().map(PathBuf::from),
        dirs::home_dir().map(|p| p.join(".inputrc")),
        Some(PathBuf::from("/etc/inputrc")),
    ];

    inputrc_paths
        .into_iter()
        .flatten()
        .filter_map(|path| std::fs::read_to_string(path).ok())
        .any(|content| inputrc_selects_vi(&content))
}

fn inputrc_selects_vi(content: &str) -> bool {
    content.lines().map(str::trim).any(|line| {
        let mut words = line.split_whitespace();
        words.next() == Some("set")
            && words.next() == Some("editing-mode")
            && words.next() == Some("vi")
    })
}
