use std::path::PathBuf;

/// Everything the shell can ask the editor core to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    New,
    Open(PathBuf),
    /// Index into the recent files list, most recent first.
    OpenRecent(usize),
    Save,
    SaveAs(PathBuf),
    Find(String),
    FindNext,
    Replace { needle: String, replacement: String },
    ClearHighlights,
    SetFontSize(u16),
    SelectAll,
    Cut,
    Copy,
    Paste,
    InsertChar(char),
    DeleteChar,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveLineStart,
    MoveLineEnd,
    Exit,
}

/// What the shell should do after a command ran.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Continue,
    Status(String),
    Error(String),
    /// The document has unsaved changes; ask save / discard / cancel and
    /// answer with `EditorState::resolve`.
    ConfirmDiscard,
    /// Saving needs a path; prompt for one and send `Command::SaveAs`.
    NeedPath,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmChoice {
    Save,
    Discard,
    Cancel,
}

impl ConfirmChoice {
    /// `y` saves, `n` discards, anything else cancels.
    pub fn from_key(c: char) -> Self {
        match c.to_ascii_lowercase() {
            'y' => ConfirmChoice::Save,
            'n' => ConfirmChoice::Discard,
            _ => ConfirmChoice::Cancel,
        }
    }
}

impl Command {
    /// Cursor movement, which drops any selection.
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            Command::MoveLeft
                | Command::MoveRight
                | Command::MoveUp
                | Command::MoveDown
                | Command::MoveLineStart
                | Command::MoveLineEnd
        )
    }

    /// Parse a `:` command line. Returns `None` for unknown or incomplete input.
    ///
    /// `replace <find> <with>` takes the first word as the text to find and
    /// the rest of the line as the replacement. Either may be wrapped in
    /// double quotes to include spaces.
    ///
    /// ```
    /// use notepad::command::Command;
    /// assert_eq!(Command::parse("font 14"), Some(Command::SetFontSize(14)));
    /// assert_eq!(
    ///     Command::parse(r#"replace "old name" new"#),
    ///     Some(Command::Replace {
    ///         needle: "old name".to_string(),
    ///         replacement: "new".to_string(),
    ///     })
    /// );
    /// ```
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match (name, rest) {
            ("new", "") => Some(Command::New),
            ("w" | "write", "") => Some(Command::Save),
            ("w" | "write" | "saveas", path) if !path.is_empty() => {
                Some(Command::SaveAs(PathBuf::from(path)))
            }
            ("e" | "edit" | "open", path) if !path.is_empty() => {
                Some(Command::Open(PathBuf::from(path)))
            }
            ("recent", n) => n
                .parse::<usize>()
                .ok()
                .filter(|&n| n >= 1)
                .map(|n| Command::OpenRecent(n - 1)),
            ("find" | "f", needle) if !needle.is_empty() => Some(Command::Find(needle.to_string())),
            ("n" | "next", "") => Some(Command::FindNext),
            ("replace" | "s", args) => {
                let (needle, replacement) = split_arg(args)?;
                if needle.is_empty() {
                    return None;
                }
                Some(Command::Replace {
                    needle: needle.to_string(),
                    replacement: unquote(replacement).to_string(),
                })
            }
            ("noh" | "nohlsearch", "") => Some(Command::ClearHighlights),
            ("font", size) => size.parse().ok().map(Command::SetFontSize),
            ("q" | "quit", "") => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Split off the first argument, a bare word or a double-quoted string.
/// Returns `None` for an unterminated quote.
fn split_arg(args: &str) -> Option<(&str, &str)> {
    if let Some(quoted) = args.strip_prefix('"') {
        let end = quoted.find('"')?;
        return Some((&quoted[..end], quoted[end + 1..].trim()));
    }
    Some(match args.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (args, ""),
    })
}

fn unquote(arg: &str) -> &str {
    arg.strip_prefix('"')
        .and_then(|a| a.strip_suffix('"'))
        .unwrap_or(arg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_variants() {
        assert_eq!(Command::MoveLeft, Command::MoveLeft);
        assert_ne!(Command::MoveRight, Command::MoveUp);
        let cmd = Command::InsertChar('a');
        if let Command::InsertChar(c) = cmd {
            assert_eq!(c, 'a');
        } else {
            panic!("Expected InsertChar");
        }
    }

    #[test]
    fn test_is_movement() {
        assert!(Command::MoveUp.is_movement());
        assert!(Command::MoveLineEnd.is_movement());
        assert!(!Command::Paste.is_movement());
        assert!(!Command::InsertChar('a').is_movement());
    }

    #[test]
    fn test_parse_file_commands() {
        assert_eq!(Command::parse("new"), Some(Command::New));
        assert_eq!(Command::parse("w"), Some(Command::Save));
        assert_eq!(
            Command::parse("w notes.txt"),
            Some(Command::SaveAs(PathBuf::from("notes.txt")))
        );
        assert_eq!(
            Command::parse("  e   /tmp/my file.txt "),
            Some(Command::Open(PathBuf::from("/tmp/my file.txt")))
        );
        assert_eq!(Command::parse("e"), None);
        assert_eq!(Command::parse("q"), Some(Command::Exit));
    }

    #[test]
    fn test_parse_recent_is_one_based() {
        assert_eq!(Command::parse("recent 1"), Some(Command::OpenRecent(0)));
        assert_eq!(Command::parse("recent 5"), Some(Command::OpenRecent(4)));
        assert_eq!(Command::parse("recent 0"), None);
        assert_eq!(Command::parse("recent x"), None);
    }

    #[test]
    fn test_parse_search_commands() {
        assert_eq!(
            Command::parse("find two words"),
            Some(Command::Find("two words".to_string()))
        );
        assert_eq!(Command::parse("find"), None);
        assert_eq!(Command::parse("n"), Some(Command::FindNext));
        assert_eq!(Command::parse("noh"), Some(Command::ClearHighlights));
        assert_eq!(
            Command::parse("replace foo bar baz"),
            Some(Command::Replace {
                needle: "foo".to_string(),
                replacement: "bar baz".to_string(),
            })
        );
        assert_eq!(
            Command::parse("s foo"),
            Some(Command::Replace {
                needle: "foo".to_string(),
                replacement: String::new(),
            })
        );
        assert_eq!(Command::parse("replace"), None);
    }

    #[test]
    fn test_parse_replace_with_quoted_arguments() {
        assert_eq!(
            Command::parse(r#"replace "two words" one"#),
            Some(Command::Replace {
                needle: "two words".to_string(),
                replacement: "one".to_string(),
            })
        );
        assert_eq!(
            Command::parse(r#"s "a b" " padded ""#),
            Some(Command::Replace {
                needle: "a b".to_string(),
                replacement: " padded ".to_string(),
            })
        );
        assert_eq!(Command::parse(r#"replace "unterminated x"#), None);
        assert_eq!(Command::parse(r#"replace "" x"#), None);
    }

    #[test]
    fn test_parse_font() {
        assert_eq!(Command::parse("font 14"), Some(Command::SetFontSize(14)));
        assert_eq!(Command::parse("font big"), None);
        assert_eq!(Command::parse("font -1"), None);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse("frobnicate"), None);
    }

    #[test]
    fn test_confirm_choice_from_key() {
        assert_eq!(ConfirmChoice::from_key('y'), ConfirmChoice::Save);
        assert_eq!(ConfirmChoice::from_key('N'), ConfirmChoice::Discard);
        assert_eq!(ConfirmChoice::from_key('c'), ConfirmChoice::Cancel);
    }
}
