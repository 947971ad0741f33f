// src/shell.rs - Key handling for the terminal front-end

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::command::{ConfirmChoice, Outcome};
use crate::editor::EditorState;
use crate::keymap::{self, KeyAction};
use crate::mode::{Mode, Prompt, PromptKind, PromptResult};

/// Editor state plus the input mode of the terminal UI.
pub struct Shell {
    pub editor: EditorState,
    pub mode: Mode,
}

impl Shell {
    pub fn new(editor: EditorState) -> Self {
        Self {
            editor,
            mode: Mode::Edit,
        }
    }

    /// Handle one key press. Returns true when the editor should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        match std::mem::replace(&mut self.mode, Mode::Edit) {
            Mode::Edit => match keymap::edit_key(key) {
                Some(KeyAction::Command(cmd)) => {
                    let outcome = self.editor.execute(cmd);
                    self.apply(outcome)
                }
                Some(KeyAction::StartPrompt(kind)) => {
                    self.mode = Mode::Prompt(Prompt::new(kind));
                    false
                }
                None => false,
            },
            Mode::Prompt(prompt) => self.handle_prompt_key(prompt, key),
            Mode::Confirm => {
                let choice = match key.code {
                    KeyCode::Char(c) => ConfirmChoice::from_key(c),
                    KeyCode::Esc => ConfirmChoice::Cancel,
                    _ => {
                        self.mode = Mode::Confirm;
                        return false;
                    }
                };
                let outcome = self.editor.resolve(choice);
                self.apply(outcome)
            }
        }
    }

    /// Auto-save tick from the background ticker.
    pub fn on_auto_save_tick(&mut self) {
        // Never save out from under an open prompt or confirmation.
        if self.mode == Mode::Edit {
            self.editor.auto_save();
        }
    }

    fn handle_prompt_key(&mut self, mut prompt: Prompt, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.editor.cancel_pending();
                false
            }
            KeyCode::Enter => match prompt.submit() {
                PromptResult::Command(cmd) => {
                    let outcome = self.editor.execute(cmd);
                    self.apply(outcome)
                }
                PromptResult::Next(next) => {
                    self.mode = Mode::Prompt(next);
                    false
                }
                PromptResult::Invalid(msg) => {
                    self.editor.cancel_pending();
                    self.editor.show_error(msg);
                    false
                }
            },
            KeyCode::Backspace => {
                prompt.pop();
                self.mode = Mode::Prompt(prompt);
                false
            }
            KeyCode::Char(c) => {
                prompt.push(c);
                self.mode = Mode::Prompt(prompt);
                false
            }
            _ => {
                self.mode = Mode::Prompt(prompt);
                false
            }
        }
    }

    fn apply(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Quit => return true,
            Outcome::ConfirmDiscard => self.mode = Mode::Confirm,
            Outcome::NeedPath => self.mode = Mode::Prompt(Prompt::new(PromptKind::SaveAs)),
            Outcome::Continue | Outcome::Status(_) | Outcome::Error(_) => self.mode = Mode::Edit,
        }
        false
    }
}
