//! Line commands accepted on stdin.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// New location text; may be blank to restore the default
    Location(String),
    /// Fiqh selector value; `None` when given without an argument
    Fiqh(Option<String>),
    /// A keystroke in the location search box
    Search(String),
    /// Pick a suggestion, 1-based as displayed
    Pick(usize),
    Refresh,
    Quit,
}

pub const HELP: &str = "commands: location <text> | fiqh <hanafi|shafi> | search <text> | pick <n> | refresh | quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "location" => Ok(Command::Location(rest.to_string())),
            "fiqh" => Ok(Command::Fiqh((!rest.is_empty()).then(|| rest.to_string()))),
            "search" => Ok(Command::Search(rest.to_string())),
            "pick" => rest
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map(Command::Pick)
                .ok_or_else(|| format!("pick expects a row number, got {:?}", rest)),
            "refresh" => Ok(Command::Refresh),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Err("empty command".to_string()),
            other => Err(format!("unknown command {:?}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location() {
        assert_eq!(
            Command::parse("location  Kulgam 192231 "),
            Ok(Command::Location("Kulgam 192231".to_string()))
        );
        assert_eq!(Command::parse("location"), Ok(Command::Location(String::new())));
    }

    #[test]
    fn test_parse_fiqh() {
        assert_eq!(
            Command::parse("fiqh shafi"),
            Ok(Command::Fiqh(Some("shafi".to_string())))
        );
        assert_eq!(Command::parse("fiqh"), Ok(Command::Fiqh(None)));
    }

    #[test]
    fn test_parse_pick() {
        assert_eq!(Command::parse("pick 2"), Ok(Command::Pick(2)));
        assert!(Command::parse("pick 0").is_err());
        assert!(Command::parse("pick two").is_err());
    }

    #[test]
    fn test_parse_unknown() {
        assert!(Command::parse("").is_err());
        assert!(Command::parse("dance").is_err());
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
    }
}
