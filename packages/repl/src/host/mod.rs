//! Hosts that drive the REPL core.
//!
//! Only the terminal host lives here; tests use [`crate::io::TestHost`].

pub mod terminal;

pub use terminal::TerminalHost;
