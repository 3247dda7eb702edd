//! Line-oriented command language of the interactive frontend.
//!
//! # Responsibility
//! - Parse one input line into a `Command`, with usage messages for
//!   malformed input.
//!
//! # Invariants
//! - Parsing is pure; no controller state is consulted or changed.
//! - `add` takes the number from the last whitespace-separated token, so
//!   names may contain spaces.

/// One parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the visible (filtered) contact list.
    List,
    /// Set the filter text; empty clears it.
    Filter(String),
    /// Set the draft name.
    Name(String),
    /// Set the draft number.
    Number(String),
    /// Set both draft fields and submit.
    Add { name: String, number: String },
    /// Submit the current draft.
    Submit,
    /// Delete the visible contact with this exact name.
    Delete(String),
    /// Answer a pending overwrite confirmation.
    Answer(bool),
    /// Re-fetch the list from the server.
    Reload,
    Help,
    Quit,
}

/// Parses a non-empty input line.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "list" | "ls" => Ok(Command::List),
        "filter" => Ok(Command::Filter(rest.to_string())),
        "name" => {
            if rest.is_empty() {
                return Err("usage: name <text>".to_string());
            }
            Ok(Command::Name(rest.to_string()))
        }
        "number" => {
            if rest.is_empty() {
                return Err("usage: number <text>".to_string());
            }
            Ok(Command::Number(rest.to_string()))
        }
        "add" => {
            let Some((name, number)) = rest.rsplit_once(char::is_whitespace) else {
                return Err("usage: add <name> <number>".to_string());
            };
            let name = name.trim();
            if name.is_empty() {
                return Err("usage: add <name> <number>".to_string());
            }
            Ok(Command::Add {
                name: name.to_string(),
                number: number.to_string(),
            })
        }
        "submit" => Ok(Command::Submit),
        "delete" => {
            if rest.is_empty() {
                return Err("usage: delete <name>".to_string());
            }
            Ok(Command::Delete(rest.to_string()))
        }
        "y" | "yes" => Ok(Command::Answer(true)),
        "n" | "no" => Ok(Command::Answer(false)),
        "reload" => Ok(Command::Reload),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}`; type 'help'")),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_command, Command};

    #[test]
    fn parses_bare_verbs() {
        assert_eq!(parse_command("list").expect("list parses"), Command::List);
        assert_eq!(parse_command("ls").expect("ls parses"), Command::List);
        assert_eq!(parse_command("quit").expect("quit parses"), Command::Quit);
        assert_eq!(
            parse_command("exit").expect("exit parses"),
            Command::Quit
        );
    }

    #[test]
    fn add_takes_number_from_last_token() {
        assert_eq!(
            parse_command("add Cid Highwind 44-55").expect("add parses"),
            Command::Add {
                name: "Cid Highwind".to_string(),
                number: "44-55".to_string(),
            }
        );
    }

    #[test]
    fn add_requires_name_and_number() {
        assert!(parse_command("add Bob").is_err());
        assert!(parse_command("add").is_err());
    }

    #[test]
    fn filter_without_argument_clears() {
        assert_eq!(
            parse_command("filter").expect("bare filter parses"),
            Command::Filter(String::new())
        );
        assert_eq!(
            parse_command("filter ann").expect("filter parses"),
            Command::Filter("ann".to_string())
        );
    }

    #[test]
    fn answers_map_to_bool() {
        assert_eq!(
            parse_command("y").expect("y parses"),
            Command::Answer(true)
        );
        assert_eq!(
            parse_command("no").expect("no parses"),
            Command::Answer(false)
        );
    }

    #[test]
    fn delete_keeps_full_name() {
        assert_eq!(
            parse_command("delete Cid Highwind").expect("delete parses"),
            Command::Delete("Cid Highwind".to_string())
        );
    }

    #[test]
    fn unknown_verb_is_reported() {
        let error = parse_command("frobnicate").expect_err("unknown verb fails");
        assert!(error.contains("frobnicate"));
    }
}
