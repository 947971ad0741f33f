// Common test utilities for editor workflow tests

use std::path::{Path, PathBuf};

use notepad::editor::{EditorState, Storage};
use tempfile::TempDir;

/// A temporary directory holding both documents and the editor's storage.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a document into the workspace and return its path.
    #[allow(dead_code)]
    pub fn write(&self, name: &str, text: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, text).unwrap();
        path
    }

    pub fn storage_dir(&self) -> PathBuf {
        let dir = self.path("config");
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// An editor whose preferences and recent files live in this workspace.
    pub fn editor(&self) -> EditorState {
        EditorState::with_storage(Storage::in_dir(&self.storage_dir()))
    }
}

/// Assert the editor's document path ends with `name`.
#[allow(dead_code)]
pub fn assert_current_file(editor: &EditorState, expected: &Path) {
    let current = editor
        .file
        .current_path()
        .expect("document should have a path");
    assert_eq!(
        current.file_name(),
        expected.file_name(),
        "editor is on {} instead of {}",
        current.display(),
        expected.display()
    );
}
