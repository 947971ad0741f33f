use std::path::PathBuf;

use crate::command::Command;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Edit,
    /// Collecting a line of input on the bottom row.
    Prompt(Prompt),
    /// Waiting for save / discard / cancel on unsaved changes.
    Confirm,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PromptKind {
    Open,
    SaveAs,
    Find,
    ReplaceNeedle,
    ReplaceWith { needle: String },
    FontSize,
    CommandLine,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PromptResult {
    Command(Command),
    /// Replace asks for two strings; this carries the follow-up prompt.
    Next(Prompt),
    Invalid(String),
}

impl Prompt {
    pub fn new(kind: PromptKind) -> Self {
        Self {
            kind,
            input: String::new(),
        }
    }

    pub fn label(&self) -> String {
        match &self.kind {
            PromptKind::Open => "Open: ".to_string(),
            PromptKind::SaveAs => "Save as: ".to_string(),
            PromptKind::Find => "Find: ".to_string(),
            PromptKind::ReplaceNeedle => "Replace: ".to_string(),
            PromptKind::ReplaceWith { needle } => format!("Replace '{needle}' with: "),
            PromptKind::FontSize => "Font size: ".to_string(),
            PromptKind::CommandLine => ":".to_string(),
        }
    }

    pub fn display(&self) -> String {
        format!("{}{}", self.label(), self.input)
    }

    pub fn push(&mut self, c: char) {
        if !c.is_control() {
            self.input.push(c);
        }
    }

    pub fn pop(&mut self) {
        self.input.pop();
    }

    pub fn submit(self) -> PromptResult {
        let Prompt { kind, input } = self;
        match kind {
            PromptKind::Open | PromptKind::SaveAs => {
                let path = input.trim();
                if path.is_empty() {
                    return PromptResult::Invalid("No file name given".to_string());
                }
                let path = PathBuf::from(path);
                if kind == PromptKind::Open {
                    PromptResult::Command(Command::Open(path))
                } else {
                    PromptResult::Command(Command::SaveAs(path))
                }
            }
            PromptKind::Find if input.is_empty() => {
                PromptResult::Invalid("Nothing to find".to_string())
            }
            PromptKind::Find => PromptResult::Command(Command::Find(input)),
            PromptKind::ReplaceNeedle if input.is_empty() => {
                PromptResult::Invalid("Nothing to replace".to_string())
            }
            PromptKind::ReplaceNeedle => {
                PromptResult::Next(Prompt::new(PromptKind::ReplaceWith { needle: input }))
            }
            PromptKind::ReplaceWith { needle } => PromptResult::Command(Command::Replace {
                needle,
                replacement: input,
            }),
            PromptKind::FontSize => match input.trim().parse() {
                Ok(size) => PromptResult::Command(Command::SetFontSize(size)),
                Err(_) => PromptResult::Invalid(format!("'{}' is not a font size", input.trim())),
            },
            PromptKind::CommandLine => match Command::parse(&input) {
                Some(cmd) => PromptResult::Command(cmd),
                None => PromptResult::Invalid(format!("Unknown command: {}", input.trim())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt_with(kind: PromptKind, input: &str) -> Prompt {
        let mut prompt = Prompt::new(kind);
        for c in input.chars() {
            prompt.push(c);
        }
        prompt
    }

    #[test]
    fn test_mode_variants() {
        assert_eq!(Mode::Edit, Mode::Edit);
        assert_ne!(Mode::Edit, Mode::Confirm);
        assert_ne!(
            Mode::Prompt(Prompt::new(PromptKind::Find)),
            Mode::Prompt(Prompt::new(PromptKind::Open))
        );
    }

    #[test]
    fn test_push_ignores_control_chars() {
        let mut prompt = prompt_with(PromptKind::Find, "a\tb\x1b");
        assert_eq!(prompt.input, "ab");
        prompt.pop();
        assert_eq!(prompt.display(), "Find: a");
    }

    #[test]
    fn test_open_and_save_as() {
        assert_eq!(
            prompt_with(PromptKind::Open, " notes.txt ").submit(),
            PromptResult::Command(Command::Open(PathBuf::from("notes.txt")))
        );
        assert_eq!(
            prompt_with(PromptKind::SaveAs, "out.txt").submit(),
            PromptResult::Command(Command::SaveAs(PathBuf::from("out.txt")))
        );
        assert!(matches!(
            prompt_with(PromptKind::SaveAs, "  ").submit(),
            PromptResult::Invalid(_)
        ));
    }

    #[test]
    fn test_find_keeps_whitespace() {
        assert_eq!(
            prompt_with(PromptKind::Find, " x ").submit(),
            PromptResult::Command(Command::Find(" x ".to_string()))
        );
        assert!(matches!(
            Prompt::new(PromptKind::Find).submit(),
            PromptResult::Invalid(_)
        ));
    }

    #[test]
    fn test_replace_asks_twice() {
        let next = match prompt_with(PromptKind::ReplaceNeedle, "cat").submit() {
            PromptResult::Next(next) => next,
            other => panic!("expected follow-up prompt, got {other:?}"),
        };
        assert_eq!(next.label(), "Replace 'cat' with: ");
        let mut next = next;
        next.push('d');
        next.push('o');
        next.push('g');
        assert_eq!(
            next.submit(),
            PromptResult::Command(Command::Replace {
                needle: "cat".to_string(),
                replacement: "dog".to_string(),
            })
        );
    }

    #[test]
    fn test_font_size() {
        assert_eq!(
            prompt_with(PromptKind::FontSize, "14").submit(),
            PromptResult::Command(Command::SetFontSize(14))
        );
        assert!(matches!(
            prompt_with(PromptKind::FontSize, "huge").submit(),
            PromptResult::Invalid(_)
        ));
    }

    #[test]
    fn test_command_line() {
        assert_eq!(
            prompt_with(PromptKind::CommandLine, "recent 2").submit(),
            PromptResult::Command(Command::OpenRecent(1))
        );
        assert!(matches!(
            prompt_with(PromptKind::CommandLine, "bogus").submit(),
            PromptResult::Invalid(_)
        ));
    }
}
