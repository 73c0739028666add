//! REPL command parsing and execution.
//!
//! Commands:
//! - `touch <name> [content]` - Create a file (alias: create, new)
//! - `cat <name>` - Show a file's content (alias: read)
//! - `write <name> [content]` - Replace a file's content (alias: w)
//! - `rm <name>` - Delete a file (alias: del, delete)
//! - `mkdir <name>` - Create a directory (alias: md)
//! - `ls` - List the current directory (alias: dir, list)
//! - `cd <name>` - Enter a child directory
//! - `pwd` - Print the current path
//! - `help` - Show help
//! - `exit` - Exit the REPL
//!
//! A name is the first word after the command, or a double-quoted string
//! when it contains whitespace. Content is the rest of the line.

use memfs_namespace::EntryKind;
use nu_ansi_term::{Color, Style};

use crate::context::FsContext;

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command succeeded, optionally with output to display
    Ok { display: Option<String> },
    /// Command failed with an error message
    Error(String),
    /// User requested to exit
    Exit,
    /// Show help
    Help,
}

impl CommandResult {
    fn ok_display(display: impl Into<String>) -> Self {
        CommandResult::Ok {
            display: Some(display.into()),
        }
    }

    fn ok_none() -> Self {
        CommandResult::Ok { display: None }
    }
}

/// Parse and execute a command
pub fn execute(input: &str, ctx: &mut FsContext) -> CommandResult {
    let input = input.trim();

    if input.is_empty() {
        return CommandResult::ok_none();
    }

    let mut parts = input.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    match command.to_lowercase().as_str() {
        "help" | "?" => CommandResult::Help,
        "exit" | "quit" | "q" => CommandResult::Exit,
        "touch" | "create" | "new" => cmd_touch(args, ctx),
        "cat" | "read" => cmd_cat(args, ctx),
        "write" | "w" => cmd_write(args, ctx),
        "rm" | "del" | "delete" => cmd_rm(args, ctx),
        "mkdir" | "md" => cmd_mkdir(args, ctx),
        "ls" | "dir" | "list" => cmd_ls(args, ctx),
        "cd" => cmd_cd(args, ctx),
        "pwd" => cmd_pwd(args, ctx),
        _ => CommandResult::Error(format!(
            "Unknown command: '{}'. Type 'help' for available commands.",
            command
        )),
    }
}

/// Every command word the REPL accepts, aliases included.
pub const COMMAND_WORDS: &[&str] = &[
    "help", "?", "exit", "quit", "q", "touch", "create", "new", "cat", "read", "write", "w", "rm",
    "del", "delete", "mkdir", "md", "ls", "dir", "list", "cd", "pwd",
];

/// Commands whose first argument names an existing entry.
pub fn takes_name(command: &str) -> bool {
    matches!(
        command.to_lowercase().as_str(),
        "touch" | "create" | "new" | "cat" | "read" | "write" | "w" | "rm" | "del" | "delete"
            | "mkdir" | "md" | "cd"
    )
}

/// Format help text
pub fn format_help() -> String {
    let cmd_style = Style::new().bold().fg(Color::Cyan);
    let arg_style = Style::new().fg(Color::Yellow);
    let desc_style = Style::new().fg(Color::White);

    let mut help = String::new();
    help.push_str(&format!(
        "{}\n\n",
        Style::new().bold().paint("memfs Commands")
    ));

    let commands = [
        ("touch", "<name> [content]", "Create a file (alias: create, new)"),
        ("cat", "<name>", "Show a file's content (alias: read)"),
        ("write", "<name> [content]", "Replace a file's content (alias: w)"),
        ("rm", "<name>", "Delete a file (alias: del, delete)"),
        ("", "", ""),
        ("mkdir", "<name>", "Create a directory (alias: md)"),
        ("ls", "", "List the current directory (alias: dir, list)"),
        ("cd", "<name>", "Enter a child directory"),
        ("pwd", "", "Print the current path"),
        ("", "", ""),
        ("help", "", "Show this help message"),
        ("exit", "", "Exit the REPL (alias: quit, q)"),
    ];

    for (cmd, args, desc) in commands {
        if cmd.is_empty() {
            help.push('\n');
        } else {
            help.push_str(&format!(
                "  {:<12} {:<20} {}\n",
                cmd_style.paint(cmd),
                arg_style.paint(args),
                desc_style.paint(desc)
            ));
        }
    }

    help.push_str(&format!(
        "\n{}",
        Style::new()
            .italic()
            .paint("Names are entries of the current directory; quote names with spaces (\"my notes\"). 'cd' only goes down.")
    ));

    help
}

fn cmd_touch(args: &str, ctx: &mut FsContext) -> CommandResult {
    let Some((name, content)) = split_name(args) else {
        return usage("touch <name> [content]");
    };

    match ctx.create_file(name, content) {
        Ok(()) => ok_message(format!("File '{}' created.", name)),
        Err(e) => CommandResult::Error(format!("touch: {}", e)),
    }
}

fn cmd_cat(args: &str, ctx: &mut FsContext) -> CommandResult {
    let Some(name) = single_name(args) else {
        return usage("cat <name>");
    };

    match ctx.read_file(name) {
        Ok(content) => CommandResult::ok_display(content),
        Err(e) => CommandResult::Error(format!("cat: {}", e)),
    }
}

fn cmd_write(args: &str, ctx: &mut FsContext) -> CommandResult {
    let Some((name, content)) = split_name(args) else {
        return usage("write <name> [content]");
    };

    match ctx.write_file(name, content) {
        Ok(()) => ok_message(format!("Content written to '{}'.", name)),
        Err(e) => CommandResult::Error(format!("write: {}", e)),
    }
}

fn cmd_rm(args: &str, ctx: &mut FsContext) -> CommandResult {
    let Some(name) = single_name(args) else {
        return usage("rm <name>");
    };

    match ctx.delete_file(name) {
        Ok(()) => ok_message(format!("File '{}' deleted.", name)),
        Err(e) => CommandResult::Error(format!("rm: {}", e)),
    }
}

fn cmd_mkdir(args: &str, ctx: &mut FsContext) -> CommandResult {
    let Some(name) = single_name(args) else {
        return usage("mkdir <name>");
    };

    match ctx.create_directory(name) {
        Ok(()) => ok_message(format!("Directory '{}' created.", name)),
        Err(e) => CommandResult::Error(format!("mkdir: {}", e)),
    }
}

fn cmd_ls(args: &str, ctx: &mut FsContext) -> CommandResult {
    if !args.is_empty() {
        return usage("ls");
    }

    let listing = match ctx.list_directory() {
        Ok(listing) => listing,
        Err(e) => return CommandResult::Error(format!("ls: {}", e)),
    };

    let header = format!("Contents of '{}':", Color::Yellow.paint(&listing.path));
    if listing.names.is_empty() {
        return CommandResult::ok_display(format!(
            "{} {}",
            header,
            Color::DarkGray.paint("(empty)")
        ));
    }

    let tree = ctx.tree();
    let current = ctx.navigator().current();
    let mut output = header;
    for name in &listing.names {
        let kind = tree.lookup(current, name).and_then(|id| tree.kind(id));
        let line = match kind {
            Some(EntryKind::Directory) => Color::Blue.bold().paint(format!("{}/", name)),
            _ => Style::new().paint(name.as_str()),
        };
        output.push_str(&format!("\n  {}", line));
    }

    CommandResult::ok_display(output)
}

fn cmd_cd(args: &str, ctx: &mut FsContext) -> CommandResult {
    let Some(name) = single_name(args) else {
        return usage("cd <name>");
    };

    match ctx.change_directory(name) {
        Ok(path) => ok_message(format!("Changed directory to '{}'.", path)),
        Err(e) => CommandResult::Error(format!("cd: {}", e)),
    }
}

fn cmd_pwd(args: &str, ctx: &mut FsContext) -> CommandResult {
    if !args.is_empty() {
        return usage("pwd");
    }
    CommandResult::ok_display(ctx.current_path())
}

/// Split `args` into a name and the (possibly empty) rest of the line.
///
/// `None` when the name is missing or its opening quote is never closed.
fn split_name(args: &str) -> Option<(&str, &str)> {
    let args = args.trim();
    if args.is_empty() {
        return None;
    }

    if let Some(quoted) = args.strip_prefix('"') {
        let end = quoted.find('"')?;
        return Some((&quoted[..end], quoted[end + 1..].trim()));
    }

    match args.split_once(char::is_whitespace) {
        Some((name, rest)) => Some((name, rest.trim())),
        None => Some((args, "")),
    }
}

/// `args` as exactly one name, or `None` if missing or followed by more words.
fn single_name(args: &str) -> Option<&str> {
    match split_name(args)? {
        (name, "") => Some(name),
        _ => None,
    }
}

fn usage(form: &str) -> CommandResult {
    CommandResult::Error(format!("Usage: {}", form))
}

fn ok_message(message: String) -> CommandResult {
    CommandResult::ok_display(Color::Green.paint(message).to_string())
}
