// src/persistence.rs - Plain UTF-8 file loading and atomic saving

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use tempfile::NamedTempFile;

use crate::error::{EditorError, Result};

pub const APP_NAME: &str = "Notepad";

/// Read a UTF-8 text file.
pub fn load(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| EditorError::io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|source| EditorError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    info!("loaded {} ({} bytes)", path.display(), text.len());
    Ok(text)
}

/// Write `text` to `path` atomically: the data goes to a temp file in the
/// destination directory which is then renamed over `path`. If anything fails
/// the destination is left as it was.
pub fn save(path: &Path, text: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| EditorError::io(path, e))?;
    tmp.write_all(text.as_bytes())
        .and_then(|_| tmp.as_file().sync_all())
        .map_err(|e| EditorError::io(path, e))?;

    if let Err(e) = copy_permissions(tmp.as_file(), path) {
        warn!("could not set permissions for {}: {e}", path.display());
    }

    tmp.persist(path).map_err(|e| EditorError::io(path, e.error))?;
    info!("saved {} ({} bytes)", path.display(), text.len());
    Ok(())
}

/// Temp files are created owner-only. Give `file` the mode of the file it
/// replaces at `dest`, or the usual default for a new file.
fn copy_permissions(file: &fs::File, dest: &Path) -> std::io::Result<()> {
    match fs::metadata(dest) {
        Ok(meta) => file.set_permissions(meta.permissions()),
        Err(_) => set_default_permissions(file),
    }
}

#[cfg(unix)]
fn set_default_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}

/// Tracks which file the current document belongs to.
#[derive(Debug, Clone, Default)]
pub struct FilePersistence {
    current: Option<PathBuf>,
}

impl FilePersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current.as_deref()
    }

    /// Associate the document with `path`, made absolute when possible.
    pub fn associate(&mut self, path: &Path) {
        let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        debug!("document associated with {}", path.display());
        self.current = Some(path);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Window title: `"<path> - Notepad"`, or just the app name when untitled.
    pub fn title(&self) -> String {
        match &self.current {
            Some(path) => format!("{} - {}", path.display(), APP_NAME),
            None => APP_NAME.to_string(),
        }
    }
}
