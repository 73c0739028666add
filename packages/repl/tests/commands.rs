//! Command-level sessions through the public API.

use memfs_repl::commands::{execute, CommandResult};
use memfs_repl::FsContext;

fn run(ctx: &mut FsContext, line: &str) -> CommandResult {
    execute(line, ctx)
}

fn output(ctx: &mut FsContext, line: &str) -> String {
    match run(ctx, line) {
        CommandResult::Ok {
            display: Some(text),
        } => text,
        other => panic!("'{}' gave {:?}", line, other),
    }
}

fn failure(ctx: &mut FsContext, line: &str) -> String {
    match run(ctx, line) {
        CommandResult::Error(msg) => msg,
        other => panic!("'{}' should fail, gave {:?}", line, other),
    }
}

#[test]
fn docs_session() {
    let mut ctx = FsContext::new();

    output(&mut ctx, "mkdir docs");
    output(&mut ctx, "cd docs");
    assert_eq!(output(&mut ctx, "pwd"), "/docs");

    output(&mut ctx, "touch a.txt hello");
    assert_eq!(output(&mut ctx, "cat a.txt"), "hello");
}

#[test]
fn file_lifecycle_session() {
    let mut ctx = FsContext::new();

    output(&mut ctx, "touch test_file.txt This is a test file.");
    assert_eq!(output(&mut ctx, "cat test_file.txt"), "This is a test file.");

    output(&mut ctx, "rm test_file.txt");
    assert!(!output(&mut ctx, "ls").contains("test_file.txt"));

    output(&mut ctx, "touch test_file.txt This is a test file.");
    output(&mut ctx, "write test_file.txt New content.");
    assert_eq!(output(&mut ctx, "cat test_file.txt"), "New content.");
}

#[test]
fn errors_name_the_entry() {
    let mut ctx = FsContext::new();
    output(&mut ctx, "mkdir x");
    output(&mut ctx, "touch f");

    assert_eq!(failure(&mut ctx, "cat missing"), "cat: 'missing' does not exist");
    assert_eq!(failure(&mut ctx, "touch x"), "touch: 'x' already exists");
    assert_eq!(failure(&mut ctx, "cat x"), "cat: 'x' is not a file");
    assert_eq!(failure(&mut ctx, "rm x"), "rm: 'x' is not a file");
    assert_eq!(failure(&mut ctx, "write x data"), "write: 'x' is not a file");
    assert_eq!(failure(&mut ctx, "cd f"), "cd: 'f' is not a directory");
    assert_eq!(failure(&mut ctx, "cd nowhere"), "cd: 'nowhere' does not exist");
    assert_eq!(failure(&mut ctx, "cd .."), "cd: '..' does not exist");
}

#[test]
fn names_are_taken_literally() {
    let mut ctx = FsContext::new();

    output(&mut ctx, "mkdir ..");
    output(&mut ctx, "cd ..");
    assert_eq!(output(&mut ctx, "pwd"), "/..");

    output(&mut ctx, "touch \"first draft.txt\" notes go here");
    assert_eq!(output(&mut ctx, "cat \"first draft.txt\""), "notes go here");
    output(&mut ctx, "rm \"first draft.txt\"");
    assert_eq!(
        failure(&mut ctx, "cat \"first draft.txt\""),
        "cat: 'first draft.txt' does not exist"
    );
}

#[test]
fn empty_file_reads_as_empty_text() {
    let mut ctx = FsContext::new();
    output(&mut ctx, "touch blank");
    assert_eq!(output(&mut ctx, "cat blank"), "");
}

#[test]
fn deep_paths_render_every_level() {
    let mut ctx = FsContext::new();
    for dir in ["a", "b", "c", "d"] {
        output(&mut ctx, &format!("mkdir {}", dir));
        output(&mut ctx, &format!("cd {}", dir));
    }

    assert_eq!(output(&mut ctx, "pwd"), "/a/b/c/d");
    assert!(output(&mut ctx, "ls").contains("/a/b/c/d"));
}

#[test]
fn failed_commands_change_nothing() {
    let mut ctx = FsContext::new();
    output(&mut ctx, "touch keep.txt original");
    output(&mut ctx, "mkdir docs");
    let before = ctx.tree().entry_count();

    failure(&mut ctx, "touch keep.txt clobber");
    failure(&mut ctx, "mkdir docs");
    failure(&mut ctx, "rm docs");
    failure(&mut ctx, "cd keep.txt");
    failure(&mut ctx, "write ghost.txt boo");

    assert_eq!(ctx.tree().entry_count(), before);
    assert_eq!(output(&mut ctx, "cat keep.txt"), "original");
    assert_eq!(output(&mut ctx, "pwd"), "/");
}

#[test]
fn exit_and_help_are_signals() {
    let mut ctx = FsContext::new();
    assert_eq!(run(&mut ctx, "quit"), CommandResult::Exit);
    assert_eq!(run(&mut ctx, "HELP"), CommandResult::Help);
    assert_eq!(run(&mut ctx, "   "), CommandResult::Ok { display: None });
}
