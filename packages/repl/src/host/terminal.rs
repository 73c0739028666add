//! Terminal host built on Reedline.
//!
//! Key bindings and history come from [`ReplConfig`]; the prompt shows the
//! current path and how many entries the directory holds.

use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

use nu_ansi_term::{Color, Style};
use reedline::{
    default_emacs_keybindings, default_vi_insert_keybindings, default_vi_normal_keybindings,
    ColumnarMenu, DefaultHinter, EditMode as Bindings, Emacs, FileBackedHistory,
    KeyCode, KeyModifiers, Keybindings, MenuBuilder, Prompt, PromptEditMode, PromptHistorySearch,
    PromptHistorySearchStatus, Reedline, ReedlineEvent, ReedlineMenu, Signal as ReedlineSignal,
    Vi,
};

use crate::completer::ReplCompleter;
use crate::config::{EditMode, ReplConfig, HISTORY_CAPACITY};
use crate::highlighter::ReplHighlighter;
use crate::io::{InputLine, IoError, IoHost, Output, OutputStyle, PromptConfig, Signal};

/// Terminal host using Reedline for interactive I/O.
pub struct TerminalHost {
    line_editor: Reedline,
    pending_input: Option<InputLine>,
    pending_signal: Option<Signal>,
    current_prompt: PromptConfig,
}

impl TerminalHost {
    /// Create a terminal host configured by `config`.
    pub fn new(config: &ReplConfig) -> io::Result<Self> {
        let completer = Box::new(ReplCompleter::new());
        let highlighter = Box::new(ReplHighlighter::new());
        let hinter = Box::new(
            DefaultHinter::default().with_style(Style::new().fg(Color::LightGray).dimmed()),
        );

        let completion_menu = Box::new(
            ColumnarMenu::default()
                .with_name(COMPLETION_MENU)
                .with_text_style(Style::new().fg(Color::Cyan))
                .with_selected_text_style(Style::new().fg(Color::Black).on(Color::Cyan).bold()),
        );

        let mut line_editor = Reedline::create()
            .with_completer(completer)
            .with_highlighter(highlighter)
            .with_hinter(hinter)
            .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
            .with_edit_mode(key_bindings(config.edit_mode));

        if let Some(path) = &config.history_path {
            match open_history(path) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => log::warn!("history disabled: {}", e),
            }
        }

        Ok(Self {
            line_editor,
            pending_input: None,
            pending_signal: None,
            current_prompt: PromptConfig::default(),
        })
    }
}

const COMPLETION_MENU: &str = "completion_menu";

fn key_bindings(mode: EditMode) -> Box<dyn Bindings> {
    match mode {
        EditMode::Vi => Box::new(Vi::new(
            vi_insert_keybindings(),
            default_vi_normal_keybindings(),
        )),
        EditMode::Emacs => Box::new(Emacs::new(emacs_keybindings())),
    }
}

/// Reedline's emacs map plus Tab completion. Ctrl-D keeps its default and
/// ends the session.
fn emacs_keybindings() -> Keybindings {
    let mut keybindings = default_emacs_keybindings();
    bind_tab_completion(&mut keybindings);
    keybindings
}

fn vi_insert_keybindings() -> Keybindings {
    let mut keybindings = default_vi_insert_keybindings();
    bind_tab_completion(&mut keybindings);
    keybindings
}

fn bind_tab_completion(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
}

fn open_history(path: &Path) -> Result<FileBackedHistory, String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("cannot create {}: {}", parent.display(), e))?;
    }
    FileBackedHistory::with_file(HISTORY_CAPACITY, path.to_path_buf())
        .map_err(|e| format!("cannot open {}: {}", path.display(), e))
}

impl IoHost for TerminalHost {
    fn wait_for_input(&mut self) -> Result<(), IoError> {
        let prompt = TerminalPrompt::from_config(&self.current_prompt);

        match self.line_editor.read_line(&prompt) {
            Ok(ReedlineSignal::Success(line)) => {
                self.pending_input = Some(InputLine { line });
            }
            Ok(ReedlineSignal::CtrlC) => {
                self.pending_signal = Some(Signal::Interrupt);
            }
            Ok(ReedlineSignal::CtrlD) => {
                self.pending_signal = Some(Signal::Eof);
            }
            Err(e) => {
                return Err(IoError::Io(format!("Reedline error: {}", e)));
            }
        }

        Ok(())
    }

    fn read_input(&mut self) -> Result<Option<InputLine>, IoError> {
        Ok(self.pending_input.take())
    }

    fn read_signal(&mut self) -> Result<Option<Signal>, IoError> {
        Ok(self.pending_signal.take())
    }

    fn write_output(&mut self, output: Output) -> Result<(), IoError> {
        let styled = match output.style {
            OutputStyle::Normal => output.text,
            OutputStyle::Error => {
                format!("{} {}", Color::Red.bold().paint("Error:"), output.text)
            }
            OutputStyle::Info => Color::Cyan.paint(&output.text).to_string(),
            OutputStyle::Banner => Color::Cyan.paint(&output.text).to_string(),
        };
        println!("{}", styled);
        Ok(())
    }

    fn write_prompt(&mut self, config: PromptConfig) -> Result<(), IoError> {
        self.current_prompt = config;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), IoError> {
        io::stdout().flush().map_err(|e| IoError::Io(e.to_string()))
    }
}

/// Prompt rendered as `<path> (<n> entries)`.
struct TerminalPrompt {
    path: String,
    entry_count: usize,
}

impl TerminalPrompt {
    fn from_config(config: &PromptConfig) -> Self {
        Self {
            path: config.current_path.clone(),
            entry_count: config.entry_count,
        }
    }

    fn entries_label(&self) -> String {
        match self.entry_count {
            1 => "1 entry".to_string(),
            n => format!("{} entries", n),
        }
    }
}

impl Prompt for TerminalPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Owned(format!(
            "{} {}",
            Color::Yellow.bold().paint(&self.path),
            Color::DarkGray.paint(format!("({})", self.entries_label()))
        ))
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, edit_mode: PromptEditMode) -> Cow<'_, str> {
        match edit_mode {
            PromptEditMode::Default | PromptEditMode::Emacs => {
                Cow::Owned(format!("{} ", Color::Green.bold().paint(">")))
            }
            PromptEditMode::Vi(vi_mode) => {
                let indicator = match vi_mode {
                    reedline::PromptViMode::Normal => Color::Blue.bold().paint("[N]>"),
                    reedline::PromptViMode::Insert => Color::Green.bold().paint("[I]>"),
                };
                Cow::Owned(format!("{} ", indicator))
            }
            PromptEditMode::Custom(s) => Cow::Owned(format!("({})> ", s)),
        }
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed(": ")
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

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(path: &str, entry_count: usize) -> TerminalPrompt {
        TerminalPrompt::from_config(&PromptConfig {
            current_path: path.to_string(),
            entry_count,
        })
    }

    #[test]
    fn entries_label_pluralizes() {
        assert_eq!(prompt("/", 0).entries_label(), "0 entries");
        assert_eq!(prompt("/", 1).entries_label(), "1 entry");
        assert_eq!(prompt("/", 7).entries_label(), "7 entries");
    }

    #[test]
    fn left_prompt_shows_path_and_count() {
        let rendered = prompt("/docs/notes", 3).render_prompt_left().to_string();
        assert!(rendered.contains("/docs/notes"));
        assert!(rendered.contains("(3 entries)"));
    }

    #[test]
    fn vi_indicator_shows_mode() {
        let p = prompt("/", 0);
        let normal = p.render_prompt_indicator(PromptEditMode::Vi(reedline::PromptViMode::Normal));
        let insert = p.render_prompt_indicator(PromptEditMode::Vi(reedline::PromptViMode::Insert));
        assert!(normal.contains("[N]>"));
        assert!(insert.contains("[I]>"));
    }

    #[test]
    fn ctrl_d_ends_emacs_sessions() {
        let ctrl_d = emacs_keybindings().find_binding(KeyModifiers::CONTROL, KeyCode::Char('d'));
        assert!(matches!(ctrl_d, Some(ReedlineEvent::CtrlD)));
    }

    #[test]
    fn tab_opens_completion_menu() {
        for keybindings in [emacs_keybindings(), vi_insert_keybindings()] {
            let tab = keybindings.find_binding(KeyModifiers::NONE, KeyCode::Tab);
            let Some(ReedlineEvent::UntilFound(events)) = tab else {
                panic!("tab is not bound to completion: {:?}", tab);
            };
            assert!(matches!(&events[0], ReedlineEvent::Menu(name) if name == COMPLETION_MENU));
        }
    }

    #[test]
    fn history_parent_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.txt");

        assert!(open_history(&path).is_ok());
        assert!(dir.path().join("nested").is_dir());
    }
}
