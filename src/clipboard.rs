// clipboard.rs - System clipboard with an in-memory fallback

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard is empty")]
    Empty,
    #[error("Clipboard error: {0}")]
    System(String),
}

enum Backend {
    #[cfg(feature = "clipboard")]
    System(arboard::Clipboard),
    Memory(Option<String>),
}

/// Cut/copy/paste storage. Uses the system clipboard when the `clipboard`
/// feature is enabled and a display is available, otherwise keeps the text
/// in memory for the lifetime of the editor.
pub struct Clipboard {
    backend: Backend,
}

impl Clipboard {
    pub fn new() -> Self {
        #[cfg(feature = "clipboard")]
        match arboard::Clipboard::new() {
            Ok(inner) => {
                return Self {
                    backend: Backend::System(inner),
                };
            }
            Err(e) => log::warn!("system clipboard unavailable, using in-memory clipboard: {e}"),
        }
        Self::in_memory()
    }

    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(None),
        }
    }

    pub fn is_system(&self) -> bool {
        match self.backend {
            #[cfg(feature = "clipboard")]
            Backend::System(_) => true,
            Backend::Memory(_) => false,
        }
    }

    pub fn get_text(&mut self) -> Result<String, ClipboardError> {
        match &mut self.backend {
            #[cfg(feature = "clipboard")]
            Backend::System(inner) => inner.get_text().map_err(|e| match e {
                arboard::Error::ContentNotAvailable => ClipboardError::Empty,
                other => ClipboardError::System(other.to_string()),
            }),
            Backend::Memory(text) => text.clone().ok_or(ClipboardError::Empty),
        }
    }

    pub fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        match &mut self.backend {
            #[cfg(feature = "clipboard")]
            Backend::System(inner) => inner
                .set_text(text)
                .map_err(|e| ClipboardError::System(e.to_string())),
            Backend::Memory(slot) => {
                *slot = Some(text.to_string());
                Ok(())
            }
        }
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new()
    }
}
