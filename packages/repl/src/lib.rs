//! # memfs-repl
//!
//! An interactive shell over an in-memory file tree.
//!
//! The session starts in an empty root directory. Files hold text, names are
//! single path segments resolved against the current directory, and `cd`
//! only moves down into child directories.
//!
//! ## Features
//!
//! - Create, read, overwrite and delete files
//! - Create, list and enter directories
//! - Tab completion and highlighting for commands
//! - Vi mode (from `--vi`, `MEMFS_EDIT_MODE`, `EDITOR` or `.inputrc`)
//! - Command history
//!
//! ## Usage
//!
//! ```bash
//! memfs
//!
//! # Inside the REPL:
//! / (0 entries) > mkdir docs
//! / (1 entry) > cd docs
//! /docs (0 entries) > touch a.txt hello
//! /docs (1 entry) > cat a.txt
//! hello
//! ```

pub mod commands;
pub mod completer;
pub mod config;
pub mod context;
pub mod highlighter;
pub mod host;
pub mod io;
pub mod repl;

pub use config::{EditMode, ReplConfig};
pub use context::{FsContext, Listing};
pub use repl::{run, ReplCore};
