use std::path::PathBuf;

use clap::Parser;
use memfs_repl::{EditMode, ReplConfig};

/// memfs - Interactive shell over an in-memory file tree
#[derive(Parser, Debug)]
#[command(name = "memfs")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Force vi editing mode
    #[arg(long, conflicts_with = "emacs")]
    vi: bool,

    /// Force emacs editing mode
    #[arg(long)]
    emacs: bool,

    /// Do not read or write command history
    #[arg(long, conflicts_with = "history_file")]
    no_history: bool,

    /// Keep command history in this file
    #[arg(long, value_name = "PATH")]
    history_file: Option<PathBuf>,
}

impl Args {
    fn edit_mode(&self) -> Option<EditMode> {
        if self.vi {
            Some(EditMode::Vi)
        } else if self.emacs {
            Some(EditMode::Emacs)
        } else {
            None
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = ReplConfig::resolve(args.edit_mode(), !args.no_history, args.history_file.clone());

    if let Err(e) = memfs_repl::run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
