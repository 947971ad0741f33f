// src/error.rs - Error types shared by the editor core

use std::io;
use std::path::{Path, PathBuf};

use crate::buffer::BufferError;

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("could not encode settings: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("font size {size} is outside {min}..={max}")]
    InvalidFontSize { size: u16, min: u16, max: u16 },

    #[error("no recent file at position {0}")]
    NoRecentEntry(usize),

    #[error(transparent)]
    Buffer(#[from] BufferError),
}

impl EditorError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        EditorError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
