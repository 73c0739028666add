//! Platform-independent REPL core.
//!
//! The loop reads one line, runs it against the session's [`FsContext`]
//! and writes the result back through the host.

use crate::commands::{self, CommandResult};
use crate::config::ReplConfig;
use crate::context::FsContext;
use crate::host::TerminalHost;
use crate::io::{ExitReason, IoError, IoHost, Output, PromptConfig, Signal};

/// The platform-independent REPL core.
pub struct ReplCore {
    ctx: FsContext,
}

impl ReplCore {
    /// A core over a fresh, empty tree.
    pub fn new() -> Self {
        Self::with_context(FsContext::new())
    }

    pub fn with_context(ctx: FsContext) -> Self {
        Self { ctx }
    }

    /// Run the REPL loop, reading/writing through the provided I/O host.
    pub fn run(&mut self, io: &mut impl IoHost) -> Result<ExitReason, IoError> {
        io.write_output(Output::banner(BANNER))?;

        loop {
            self.update_prompt(io)?;
            io.wait_for_input()?;

            if let Some(signal) = io.read_signal()? {
                match signal {
                    Signal::Eof => {
                        io.write_output(Output::info("Goodbye!"))?;
                        io.flush()?;
                        return Ok(ExitReason::Eof);
                    }
                    Signal::Interrupt => {
                        io.write_output(Output::info("^C (use 'exit' to quit)"))?;
                        continue;
                    }
                }
            }

            let Some(input) = io.read_input()? else {
                continue;
            };

            log::trace!("input: {:?}", input.line);

            match commands::execute(&input.line, &mut self.ctx) {
                CommandResult::Ok { display: None } => {}
                CommandResult::Ok {
                    display: Some(text),
                } => io.write_output(Output::normal(text))?,
                CommandResult::Error(msg) => io.write_output(Output::error(msg))?,
                CommandResult::Help => io.write_output(Output::normal(commands::format_help()))?,
                CommandResult::Exit => {
                    io.write_output(Output::info("Goodbye!"))?;
                    io.flush()?;
                    return Ok(ExitReason::UserExit);
                }
            }

            io.flush()?;
        }
    }

    pub fn context(&self) -> &FsContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut FsContext {
        &mut self.ctx
    }

    fn update_prompt(&self, io: &mut impl IoHost) -> Result<(), IoError> {
        io.write_prompt(PromptConfig {
            current_path: self.ctx.current_path(),
            entry_count: self.ctx.entry_count(),
        })
    }
}

impl Default for ReplCore {
    fn default() -> Self {
        Self::new()
    }
}

/// Run an interactive session on the terminal.
pub fn run(config: ReplConfig) -> Result<ExitReason, IoError> {
    log::debug!("starting repl with {:?}", config);
    let mut host = TerminalHost::new(&config)?;
    ReplCore::new().run(&mut host)
}

const BANNER: &str = r#"
                       __
  _ __ ___   ___ _ __ / _|___
 | '_ ` _ \ / _ \ '_ \ |_/ __|
 | | | | | |  __/ | | |  _\__ \
 |_| |_| |_|\___|_| |_|_| |___/

An in-memory file tree. Type 'help' for commands, 'exit' to quit.
"#;
