//! Parsing of REPL input lines

/// One line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Plain text: set it as the question and submit
    Ask(String),
    Voice,
    /// `/image <path>`; the path may be empty
    Image(String),
    ClearImage,
    Submit,
    Retry,
    Edit,
    New,
    Home,
    Officer,
    Help,
    Quit,
    /// Any other slash command
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line. Returns `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if !line.starts_with('/') {
            return Some(ReplCommand::Ask(line.to_string()));
        }

        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        let command = match name {
            "/voice" | "/v" => ReplCommand::Voice,
            "/image" | "/img" | "/i" => ReplCommand::Image(arg.to_string()),
            "/clear-image" => ReplCommand::ClearImage,
            "/submit" | "/s" => ReplCommand::Submit,
            "/retry" | "/r" => ReplCommand::Retry,
            "/edit" | "/e" => ReplCommand::Edit,
            "/new" | "/another" => ReplCommand::New,
            "/home" => ReplCommand::Home,
            "/officer" => ReplCommand::Officer,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            _ => ReplCommand::Unknown(name.to_string()),
        };
        Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_is_ignored() {
        assert_eq!(ReplCommand::parse("   "), None);
    }

    #[test]
    fn test_plain_text_is_a_question() {
        assert_eq!(
            ReplCommand::parse("  Yellow leaves on my tomato  "),
            Some(ReplCommand::Ask("Yellow leaves on my tomato".to_string()))
        );
    }

    #[test]
    fn test_image_keeps_path_with_spaces() {
        assert_eq!(
            ReplCommand::parse("/image /tmp/my leaf.png"),
            Some(ReplCommand::Image("/tmp/my leaf.png".to_string()))
        );
        assert_eq!(
            ReplCommand::parse("/image"),
            Some(ReplCommand::Image(String::new()))
        );
    }

    #[test]
    fn test_aliases() {
        assert_eq!(ReplCommand::parse("/q"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("/?"), Some(ReplCommand::Help));
        assert_eq!(ReplCommand::parse("/another"), Some(ReplCommand::New));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            ReplCommand::parse("/weather today"),
            Some(ReplCommand::Unknown("/weather".to_string()))
        );
    }
}
