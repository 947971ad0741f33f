// src/editor.rs - Editor state and command dispatch

use std::ops::Range;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::autosave::SaveGate;
use crate::buffer::DocumentBuffer;
use crate::clipboard::{Clipboard, ClipboardError};
use crate::command::{Command, ConfirmChoice, Outcome};
use crate::cursor::{Cursor, Position};
use crate::error::{EditorError, Result};
use crate::paths;
use crate::persistence::{self, FilePersistence};
use crate::preferences::{Preferences, PreferencesStore};
use crate::recent::RecentFiles;
use crate::search::{self, MatchSpan};
use crate::viewport::Viewport;

/// Where preferences and the recent files list live on disk.
pub struct Storage {
    pub preferences: PreferencesStore,
    pub recent_files: PathBuf,
}

impl Storage {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            preferences: PreferencesStore::new(dir.join(paths::PREFERENCES_FILE)),
            recent_files: dir.join(paths::RECENT_FILES_FILE),
        }
    }

    /// Storage under the user's config directory, which is created if needed.
    pub fn from_config_dir() -> Self {
        let dir = paths::get_config_dir();
        if let Err(e) = std::fs::create_dir_all(&dir) {
            warn!("cannot create {}: {e}", dir.display());
        }
        Self::in_dir(&dir)
    }
}

/// Operations that would throw away the current document.
#[derive(Debug, Clone, PartialEq)]
enum PendingAction {
    New,
    Open { path: PathBuf, from_recent: bool },
    Exit,
}

pub struct EditorState {
    pub buffer: DocumentBuffer,
    pub file: FilePersistence,
    pub recent: RecentFiles,
    pub preferences: Preferences,
    pub cursor: Cursor,
    pub viewport: Viewport,
    /// Matches of the last search, sorted. Cleared on every edit.
    pub highlights: Vec<MatchSpan>,
    /// Selected byte range. Dropped by cursor movement and edits.
    pub selection: Option<Range<usize>>,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    last_search: Option<String>,
    pending: Option<PendingAction>,
    storage: Option<Storage>,
    save_gate: SaveGate,
    clipboard: Clipboard,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// An editor that keeps preferences and recent files in memory only.
    pub fn new() -> Self {
        Self {
            buffer: DocumentBuffer::new(),
            file: FilePersistence::new(),
            recent: RecentFiles::new(),
            preferences: Preferences::default(),
            cursor: Cursor::new(),
            viewport: Viewport::new(20, 80),
            highlights: Vec::new(),
            selection: None,
            status_message: None,
            status_is_error: false,
            last_search: None,
            pending: None,
            storage: None,
            save_gate: SaveGate::new(),
            clipboard: Clipboard::in_memory(),
        }
    }

    /// Replace the in-memory clipboard, typically with [`Clipboard::new`].
    pub fn with_clipboard(mut self, clipboard: Clipboard) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// Load preferences and recent files from `storage`. Both fall back to
    /// defaults when missing or unreadable.
    pub fn with_storage(storage: Storage) -> Self {
        let mut state = Self::new();
        state.preferences = storage.preferences.load();
        state.recent = RecentFiles::load(&storage.recent_files);
        info!(
            "preferences: font size {}, {} recent files",
            state.preferences.font_size,
            state.recent.len()
        );
        state.storage = Some(storage);
        state
    }

    pub fn save_gate(&self) -> &SaveGate {
        &self.save_gate
    }

    pub fn title(&self) -> String {
        let title = self.file.title();
        if self.buffer.is_dirty() {
            format!("*{title}")
        } else {
            title
        }
    }

    pub fn handle_resize(&mut self, rows: u16, cols: u16) {
        // Status bar and prompt line take the bottom row
        self.viewport.rows = (rows as usize).saturating_sub(1).max(1);
        self.viewport.cols = (cols as usize).max(1);
        self.viewport
            .scroll_to_cursor(self.cursor.line, self.cursor.col);
    }

    pub fn has_pending_confirmation(&self) -> bool {
        self.pending.is_some()
    }

    pub fn execute(&mut self, cmd: Command) -> Outcome {
        if cmd.is_movement() {
            self.selection = None;
        }
        let outcome = match cmd {
            Command::New => self.guard_discard(PendingAction::New),
            Command::Open(path) => self.guard_discard(PendingAction::Open {
                path,
                from_recent: false,
            }),
            Command::OpenRecent(index) => match self.recent.get(index) {
                Some(path) => {
                    let path = path.to_path_buf();
                    self.guard_discard(PendingAction::Open {
                        path,
                        from_recent: true,
                    })
                }
                None => Outcome::Error(EditorError::NoRecentEntry(index + 1).to_string()),
            },
            Command::Save => match self.file.current_path().map(Path::to_path_buf) {
                Some(path) => self.save_outcome(&path),
                None => Outcome::NeedPath,
            },
            Command::SaveAs(path) => {
                let outcome = self.save_outcome(&path);
                match (&outcome, self.pending.take()) {
                    (Outcome::Status(_), Some(action)) => self.perform(action),
                    _ => outcome,
                }
            }
            Command::Find(needle) => self.find(needle),
            Command::FindNext => self.find_next(),
            Command::Replace {
                needle,
                replacement,
            } => self.replace(&needle, &replacement),
            Command::ClearHighlights => {
                self.highlights.clear();
                Outcome::Continue
            }
            Command::SetFontSize(size) => self.set_font_size(size),
            Command::SelectAll => self.select_all(),
            Command::Cut => self.cut(),
            Command::Copy => self.copy(),
            Command::Paste => self.paste(),
            Command::InsertChar(c) => self.insert_char(c),
            Command::DeleteChar => self.delete_char(),
            Command::MoveLeft => {
                if self.cursor.col > 0 {
                    self.cursor.col -= 1;
                } else if self.cursor.line > 0 {
                    self.cursor.line -= 1;
                    self.cursor.col = self.buffer.line_len(self.cursor.line);
                }
                self.cursor.desired_col = self.cursor.col;
                Outcome::Continue
            }
            Command::MoveRight => {
                if self.cursor.col < self.buffer.line_len(self.cursor.line) {
                    self.cursor.col += 1;
                } else if self.cursor.line + 1 < self.buffer.line_count() {
                    self.cursor.line += 1;
                    self.cursor.col = 0;
                }
                self.cursor.desired_col = self.cursor.col;
                Outcome::Continue
            }
            Command::MoveUp => {
                if self.cursor.line > 0 {
                    self.cursor.line -= 1;
                    self.cursor.col = self
                        .cursor
                        .desired_col
                        .min(self.buffer.line_len(self.cursor.line));
                }
                Outcome::Continue
            }
            Command::MoveDown => {
                if self.cursor.line + 1 < self.buffer.line_count() {
                    self.cursor.line += 1;
                    self.cursor.col = self
                        .cursor
                        .desired_col
                        .min(self.buffer.line_len(self.cursor.line));
                }
                Outcome::Continue
            }
            Command::MoveLineStart => {
                self.cursor.set_position(Position::new(self.cursor.line, 0));
                Outcome::Continue
            }
            Command::MoveLineEnd => {
                let end = self.buffer.line_len(self.cursor.line);
                self.cursor.set_position(Position::new(self.cursor.line, end));
                Outcome::Continue
            }
            Command::Exit => self.guard_discard(PendingAction::Exit),
        };

        self.viewport
            .scroll_to_cursor(self.cursor.line, self.cursor.col);
        self.record_status(&outcome);
        outcome
    }

    /// Answer a [`Outcome::ConfirmDiscard`] prompt.
    pub fn resolve(&mut self, choice: ConfirmChoice) -> Outcome {
        let Some(action) = self.pending.take() else {
            return Outcome::Continue;
        };

        let outcome = match choice {
            ConfirmChoice::Cancel => Outcome::Status("Cancelled".to_string()),
            ConfirmChoice::Discard => self.perform(action),
            ConfirmChoice::Save => match self.file.current_path().map(Path::to_path_buf) {
                Some(path) => match self.save_outcome(&path) {
                    Outcome::Status(_) => self.perform(action),
                    failed => failed,
                },
                None => {
                    // Keep the action until the shell supplies a path via SaveAs.
                    self.pending = Some(action);
                    Outcome::NeedPath
                }
            },
        };
        self.record_status(&outcome);
        outcome
    }

    pub fn show_error(&mut self, msg: impl Into<String>) {
        self.record_status(&Outcome::Error(msg.into()));
    }

    /// Drop an action still waiting for a save-as path.
    pub fn cancel_pending(&mut self) {
        if self.pending.take().is_some() {
            self.status_message = Some("Cancelled".to_string());
        }
    }

    /// Called on each auto-save tick. Saves only a dirty document that already
    /// has a path, and never while another save holds the gate.
    pub fn auto_save(&mut self) -> Outcome {
        if !self.buffer.is_dirty() {
            return Outcome::Continue;
        }
        let Some(path) = self.file.current_path().map(Path::to_path_buf) else {
            return Outcome::Continue;
        };
        let Some(_guard) = self.save_gate.try_acquire() else {
            debug!("auto-save skipped, save in progress");
            return Outcome::Continue;
        };

        let outcome = match self.write_document(&path) {
            Ok(()) => Outcome::Status(format!("Auto-saved {}", path.display())),
            Err(e) => Outcome::Error(format!("Auto-save failed: {e}")),
        };
        self.record_status(&outcome);
        outcome
    }

    /// Persist preferences and recent files. Failures are logged, not returned.
    pub fn persist_session(&self) {
        let Some(storage) = &self.storage else {
            return;
        };
        if let Err(e) = storage.preferences.save(&self.preferences) {
            warn!("could not save preferences: {e}");
        }
        self.persist_recent();
    }

    fn persist_recent(&self) {
        if let Some(storage) = &self.storage
            && let Err(e) = self.recent.save(&storage.recent_files)
        {
            warn!("could not save recent files: {e}");
        }
    }

    fn guard_discard(&mut self, action: PendingAction) -> Outcome {
        if self.buffer.is_dirty() {
            debug!("unsaved changes, confirming {action:?}");
            self.pending = Some(action);
            Outcome::ConfirmDiscard
        } else {
            self.perform(action)
        }
    }

    fn perform(&mut self, action: PendingAction) -> Outcome {
        match action {
            PendingAction::New => {
                self.reset_document();
                self.file.clear();
                Outcome::Status("New document".to_string())
            }
            PendingAction::Open { path, from_recent } => self.open_path(&path, from_recent),
            PendingAction::Exit => {
                self.persist_session();
                Outcome::Quit
            }
        }
    }

    fn reset_document(&mut self) {
        self.buffer = DocumentBuffer::new();
        self.cursor = Cursor::new();
        self.highlights.clear();
        self.selection = None;
        self.last_search = None;
    }

    fn open_path(&mut self, path: &Path, from_recent: bool) -> Outcome {
        match persistence::load(path) {
            Ok(text) => {
                self.reset_document();
                self.buffer.set_content(&text);
                self.buffer.mark_clean();
                self.file.associate(path);
                if let Some(current) = self.file.current_path() {
                    self.recent.add(current);
                }
                self.persist_recent();
                Outcome::Status(format!("Opened {}", path.display()))
            }
            Err(_) if from_recent && !path.exists() => {
                info!("dropping stale recent entry {}", path.display());
                self.recent.remove_stale(path);
                self.persist_recent();
                Outcome::Error(format!("{} no longer exists", path.display()))
            }
            Err(e) => Outcome::Error(format!("Could not open file: {e}")),
        }
    }

    fn save_outcome(&mut self, path: &Path) -> Outcome {
        let Some(_guard) = self.save_gate.try_acquire() else {
            return Outcome::Error("A save is already in progress".to_string());
        };
        match self.write_document(path) {
            Ok(()) => {
                self.file.associate(path);
                if let Some(current) = self.file.current_path().map(Path::to_path_buf)
                    && self.recent.get(0) != Some(current.as_path())
                {
                    self.recent.add(current);
                    self.persist_recent();
                }
                Outcome::Status(format!("Saved {}", path.display()))
            }
            Err(e) => Outcome::Error(format!("Could not save file: {e}")),
        }
    }

    fn write_document(&mut self, path: &Path) -> Result<()> {
        persistence::save(path, &self.buffer.get_content())?;
        self.buffer.mark_clean();
        Ok(())
    }

    fn find(&mut self, needle: String) -> Outcome {
        self.highlights = search::find_all(&self.buffer.get_content(), &needle);
        debug!("find {needle:?}: {} matches", self.highlights.len());
        let count = self.highlights.len();
        let outcome = if count == 0 {
            Outcome::Status(format!("No matches for '{needle}'"))
        } else {
            let offset = self.buffer.byte_of_position(self.cursor.position());
            self.jump_to_match(offset);
            Outcome::Status(format!("{count} matches for '{needle}'"))
        };
        self.last_search = Some(needle);
        outcome
    }

    fn find_next(&mut self) -> Outcome {
        let Some(needle) = self.last_search.clone() else {
            return Outcome::Status("No previous search".to_string());
        };
        if self.highlights.is_empty() {
            self.highlights = search::find_all(&self.buffer.get_content(), &needle);
        }
        if self.highlights.is_empty() {
            return Outcome::Status(format!("No matches for '{needle}'"));
        }
        let offset = self.buffer.byte_of_position(self.cursor.position()) + 1;
        self.jump_to_match(offset);
        Outcome::Continue
    }

    fn jump_to_match(&mut self, offset: usize) {
        if let Some(span) = search::next_after(&self.highlights, offset) {
            let pos = self.buffer.position_of_byte(span.start);
            self.cursor.set_position(pos);
        }
    }

    fn replace(&mut self, needle: &str, replacement: &str) -> Outcome {
        let content = self.buffer.get_content();
        let spans = search::find_all(&content, needle);
        if spans.is_empty() {
            return Outcome::Status(format!("No matches for '{needle}'"));
        }
        self.buffer
            .set_content(&search::replace_spans(&content, &spans, replacement));
        self.highlights.clear();
        self.selection = None;
        let pos = self.buffer.clamp(self.cursor.position());
        self.cursor.set_position(pos);
        Outcome::Status(format!("Replaced {} occurrences", spans.len()))
    }

    fn set_font_size(&mut self, size: u16) -> Outcome {
        match self.preferences.with_font_size(size) {
            Ok(prefs) => {
                self.preferences = prefs;
                if let Some(storage) = &self.storage
                    && let Err(e) = storage.preferences.save(&self.preferences)
                {
                    warn!("could not save preferences: {e}");
                }
                Outcome::Status(format!("Font size {size}"))
            }
            Err(e) => Outcome::Error(e.to_string()),
        }
    }

    fn select_all(&mut self) -> Outcome {
        let len = self.buffer.len_bytes();
        if len == 0 {
            self.selection = None;
            return Outcome::Continue;
        }
        self.selection = Some(0..len);
        let end = self.buffer.position_of_byte(len);
        self.cursor.set_position(end);
        Outcome::Continue
    }

    fn selected_text(&self) -> Option<String> {
        self.selection
            .clone()
            .map(|range| self.buffer.text_in(range))
            .filter(|text| !text.is_empty())
    }

    fn copy(&mut self) -> Outcome {
        let Some(text) = self.selected_text() else {
            return Outcome::Status("Nothing selected".to_string());
        };
        match self.clipboard.set_text(&text) {
            Ok(()) => Outcome::Status(format!("Copied {} characters", text.chars().count())),
            Err(e) => Outcome::Error(e.to_string()),
        }
    }

    fn cut(&mut self) -> Outcome {
        let Some(text) = self.selected_text() else {
            return Outcome::Status("Nothing selected".to_string());
        };
        if let Err(e) = self.clipboard.set_text(&text) {
            return Outcome::Error(e.to_string());
        }
        self.delete_selection();
        Outcome::Status(format!("Cut {} characters", text.chars().count()))
    }

    fn paste(&mut self) -> Outcome {
        let text = match self.clipboard.get_text() {
            Ok(text) => text,
            Err(ClipboardError::Empty) => return Outcome::Status("Clipboard is empty".to_string()),
            Err(e) => return Outcome::Error(e.to_string()),
        };
        if text.is_empty() {
            return Outcome::Continue;
        }
        self.delete_selection();
        let pos = self.buffer.clamp(self.cursor.position());
        let start = self.buffer.byte_of_position(pos);
        if let Err(e) = self.buffer.insert_text(&text, pos.line, pos.col) {
            return Outcome::Error(e.to_string());
        }
        self.cursor
            .set_position(self.buffer.position_of_byte(start + text.len()));
        self.highlights.clear();
        Outcome::Continue
    }

    /// Remove the selected text, leaving the cursor where it started.
    /// Returns false when nothing was selected.
    fn delete_selection(&mut self) -> bool {
        let Some(range) = self.selection.take() else {
            return false;
        };
        let start = range.start;
        if !self.buffer.remove_range(range) {
            return false;
        }
        self.cursor.set_position(self.buffer.position_of_byte(start));
        self.highlights.clear();
        true
    }

    fn insert_char(&mut self, c: char) -> Outcome {
        self.delete_selection();
        let pos = self.buffer.clamp(self.cursor.position());
        let start = self.buffer.byte_of_position(pos);
        if let Err(e) = self.buffer.insert_char(c, pos.line, pos.col) {
            return Outcome::Error(e.to_string());
        }
        // Ask the rope where the cursor lands: a typed break can merge with
        // a preceding '\r' into a single "\r\n" line break.
        self.cursor
            .set_position(self.buffer.position_of_byte(start + c.len_utf8()));
        self.highlights.clear();
        Outcome::Continue
    }

    fn delete_char(&mut self) -> Outcome {
        if self.delete_selection() {
            return Outcome::Continue;
        }
        let before = self.buffer.version();
        let pos = self.buffer.clamp(self.cursor.position());
        match self.buffer.delete_char(pos.line, pos.col) {
            Ok(pos) => {
                self.cursor.set_position(pos);
                if self.buffer.version() != before {
                    self.highlights.clear();
                }
                Outcome::Continue
            }
            Err(e) => Outcome::Error(e.to_string()),
        }
    }

    fn record_status(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Status(msg) => {
                self.status_message = Some(msg.clone());
                self.status_is_error = false;
            }
            Outcome::Error(msg) => {
                self.status_message = Some(msg.clone());
                self.status_is_error = true;
            }
            Outcome::ConfirmDiscard => {
                self.status_is_error = false;
                self.status_message =
                    Some("Unsaved changes. Save first? (y)es / (n)o / (c)ancel".to_string());
            }
            Outcome::NeedPath => {
                self.status_is_error = false;
                self.status_message = Some("Choose a file name to save as".to_string());
            }
            Outcome::Continue | Outcome::Quit => {}
        }
    }
}
