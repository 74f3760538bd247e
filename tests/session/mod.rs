//! Shared helpers for driving a full session from a script.

use contact_book::{repl, Config, Session};
use std::io::Cursor;

/// Run `lines` through a fresh session and return every output line.
pub fn run_lines(lines: &[&str]) -> Vec<String> {
    let (_, output) = run_session(lines);
    output
}

/// Run `lines` through a fresh session, returning it with the output lines.
pub fn run_session(lines: &[&str]) -> (Session, Vec<String>) {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut session = Session::new(&Config::default());
    let mut output = Vec::new();
    repl::run(&mut session, Cursor::new(script), &mut output).expect("session should not fail");

    let text = String::from_utf8(output).expect("output should be UTF-8");
    (session, text.lines().map(str::to_string).collect())
}
