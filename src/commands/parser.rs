//! Command-line parsing.

/// A line split into its command keyword and positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// The first token, lowercased.
    pub command: String,
    /// Every token after the command, verbatim.
    pub args: Vec<String>,
}

/// Split `line` on whitespace into a command and its arguments.
///
/// Returns `None` for a blank line; callers skip those without dispatching.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();

    Some(ParsedInput { command, args })
}
