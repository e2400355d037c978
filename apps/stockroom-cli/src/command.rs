//! Command keywords accepted at the `Enter command:` prompt.

use std::fmt;

/// The menu line printed before every command prompt.
pub const MENU: &str = "Commands: add, find, update, delete, sort, transaction, display, exit";

/// A recognised command keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Find,
    Update,
    Delete,
    Sort,
    Transaction,
    Display,
    Exit,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::Add,
        Command::Find,
        Command::Update,
        Command::Delete,
        Command::Sort,
        Command::Transaction,
        Command::Display,
        Command::Exit,
    ];

    pub const fn keyword(&self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::Find => "find",
            Command::Update => "update",
            Command::Delete => "delete",
            Command::Sort => "sort",
            Command::Transaction => "transaction",
            Command::Display => "display",
            Command::Exit => "exit",
        }
    }

    /// Matches a line exactly. No trimming, no case folding.
    pub fn parse(line: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|c| c.keyword() == line)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(Command::parse("add"), Some(Command::Add));
        assert_eq!(Command::parse("transaction"), Some(Command::Transaction));
        assert_eq!(Command::parse("exit"), Some(Command::Exit));
    }

    #[test]
    fn test_parse_is_exact() {
        assert_eq!(Command::parse("Add"), None);
        assert_eq!(Command::parse(" add"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("quit"), None);
    }

    #[test]
    fn test_menu_lists_every_command() {
        let listed: Vec<&str> = MENU
            .trim_start_matches("Commands: ")
            .split(", ")
            .collect();
        let keywords: Vec<&str> = Command::ALL.iter().map(|c| c.keyword()).collect();
        assert_eq!(listed, keywords);
    }
}
