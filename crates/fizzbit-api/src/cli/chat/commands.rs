//! Slash command parsing for the chat loop.
//!
//! Commands start with `/` and stand in for the web widget's controls:
//! the mascot (open), the close button and overlay (close), Escape (esc).

use console::style;

/// Available slash commands in the chat loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    /// Open the chat panel.
    Open,
    /// Close the chat panel (close button, overlay click, Escape).
    Close,
    /// Finish the running reveal animation immediately.
    Skip,
    /// Ask the gateway for a random space fact.
    Fact,
    /// Probe the gateway's health endpoint.
    Health,
    /// Show available commands.
    Help,
    /// Exit the chat.
    Quit,
    /// Unknown command.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_lowercase();

    match cmd.as_str() {
        "/open" => Some(ChatCommand::Open),
        "/close" | "/esc" => Some(ChatCommand::Close),
        "/skip" => Some(ChatCommand::Skip),
        "/fact" => Some(ChatCommand::Fact),
        "/health" => Some(ChatCommand::Health),
        "/help" | "/h" | "/?" => Some(ChatCommand::Help),
        "/quit" | "/exit" | "/q" => Some(ChatCommand::Quit),
        other => Some(ChatCommand::Unknown(other.to_string())),
    }
}

/// Help text listing all available commands, one entry per line.
pub fn help_lines() -> Vec<String> {
    let entry = |name: &str, text: &str| format!("  {:<9} {}", style(name).cyan(), text);
    vec![
        String::new(),
        format!("  {}", style("Available commands:").bold()),
        String::new(),
        entry("/open", "Open the chat panel"),
        entry("/close", "Close the chat panel (also /esc)"),
        entry("/skip", "Show the whole reply right away"),
        entry("/fact", "Get a random space fact"),
        entry("/health", "Check on the gateway"),
        entry("/help", "Show this help message"),
        entry("/quit", "End the chat"),
        String::new(),
        format!("  {}", style("Ctrl+D to exit").dim()),
        String::new(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_open_close() {
        assert_eq!(parse("/open"), Some(ChatCommand::Open));
        assert_eq!(parse("/close"), Some(ChatCommand::Close));
        assert_eq!(parse("/esc"), Some(ChatCommand::Close));
        assert_eq!(parse("  /OPEN  "), Some(ChatCommand::Open));
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse("/quit"), Some(ChatCommand::Quit));
        assert_eq!(parse("/exit"), Some(ChatCommand::Quit));
        assert_eq!(parse("/q"), Some(ChatCommand::Quit));
    }

    #[test]
    fn test_parse_gateway_commands() {
        assert_eq!(parse("/fact"), Some(ChatCommand::Fact));
        assert_eq!(parse("/health"), Some(ChatCommand::Health));
        assert_eq!(parse("/skip"), Some(ChatCommand::Skip));
        assert_eq!(parse("/help"), Some(ChatCommand::Help));
    }

    #[test]
    fn test_parse_not_command() {
        assert_eq!(parse("fact"), None);
        assert_eq!(parse("tell me something"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse("/meow loudly"), Some(ChatCommand::Unknown("/meow".to_string())));
    }

    #[test]
    fn test_help_mentions_every_command() {
        let help = help_lines().join("\n");
        for name in ["/open", "/close", "/skip", "/fact", "/health", "/help", "/quit"] {
            assert!(help.contains(name), "{name} missing from help");
        }
    }
}
