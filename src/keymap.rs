// src/keymap.rs - Key bindings for the terminal shell

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::Command;
use crate::mode::PromptKind;

#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    Command(Command),
    StartPrompt(PromptKind),
}

/// Bindings while editing text. Shortcuts follow the classic notepad set.
pub fn edit_key(key: KeyEvent) -> Option<KeyAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('n') => Some(KeyAction::Command(Command::New)),
            KeyCode::Char('o') => Some(KeyAction::StartPrompt(PromptKind::Open)),
            KeyCode::Char('s') => Some(KeyAction::Command(Command::Save)),
            KeyCode::Char('f') => Some(KeyAction::StartPrompt(PromptKind::Find)),
            KeyCode::Char('g') => Some(KeyAction::Command(Command::FindNext)),
            KeyCode::Char('r') => Some(KeyAction::StartPrompt(PromptKind::ReplaceNeedle)),
            KeyCode::Char('t') => Some(KeyAction::StartPrompt(PromptKind::FontSize)),
            KeyCode::Char('p') => Some(KeyAction::StartPrompt(PromptKind::CommandLine)),
            KeyCode::Char('q') => Some(KeyAction::Command(Command::Exit)),
            KeyCode::Char('a') => Some(KeyAction::Command(Command::SelectAll)),
            KeyCode::Char('x') => Some(KeyAction::Command(Command::Cut)),
            KeyCode::Char('c') => Some(KeyAction::Command(Command::Copy)),
            KeyCode::Char('v') => Some(KeyAction::Command(Command::Paste)),
            _ => None,
        };
    }

    let cmd = match key.code {
        KeyCode::Char(c) => Command::InsertChar(c),
        KeyCode::Enter => Command::InsertChar('\n'),
        KeyCode::Tab => Command::InsertChar('\t'),
        KeyCode::Backspace => Command::DeleteChar,
        KeyCode::Left => Command::MoveLeft,
        KeyCode::Right => Command::MoveRight,
        KeyCode::Up => Command::MoveUp,
        KeyCode::Down => Command::MoveDown,
        KeyCode::Home => Command::MoveLineStart,
        KeyCode::End => Command::MoveLineEnd,
        KeyCode::Esc => Command::ClearHighlights,
        KeyCode::F(3) => Command::FindNext,
        _ => return None,
    };
    Some(KeyAction::Command(cmd))
}
