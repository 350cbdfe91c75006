// src/ui/prompt.rs
//
// Prompt line parsing for the interactive terminal.
// Lines starting with `:` are commands; everything else is a search.

/// What one line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand {
    /// Submit the line as a search query
    Search(String),
    /// Open the Nth card of the grid (1-based, as printed)
    Open(usize),
    Close,
    Help,
    Quit,
    /// A `:` command that could not be understood
    Unknown(String),
}

impl PromptCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let Some(command) = line.strip_prefix(':') else {
            return PromptCommand::Search(line.to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("open" | "o"), Some(n), None) => match n.parse::<usize>() {
                Ok(n) if n >= 1 => PromptCommand::Open(n),
                _ => PromptCommand::Unknown(line.to_string()),
            },
            (Some("close" | "c"), None, None) => PromptCommand::Close,
            (Some("help" | "h"), None, None) => PromptCommand::Help,
            (Some("quit" | "q"), None, None) => PromptCommand::Quit,
            _ => PromptCommand::Unknown(line.to_string()),
        }
    }
}

pub const HELP_TEXT: &str = "\
Type a movie title and press Enter to search.
  :open N   show details for result N
  :close    close the details
  :help     show this help
  :quit     exit";
