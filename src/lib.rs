// lib.rs - Library root for the notepad editor

pub mod autosave;
pub mod buffer;
pub mod cli;
pub mod clipboard;
pub mod command;
pub mod config;
pub mod cursor;
pub mod editor;
pub mod error;
pub mod keymap;
pub mod mode;
pub mod paths;
pub mod persistence;
pub mod preferences;
pub mod recent;
pub mod search;
pub mod shell;
pub mod ui;
pub mod viewport;

pub use error::{EditorError, Result};
