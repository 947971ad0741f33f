use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::NotepadConfig;

#[derive(Debug, Default, Parser)]
#[command(name = "notepad")]
#[command(version = "0.1.0")]
#[command(about = "A small single-document text editor")]
pub struct CliArgs {
    /// File to open
    pub file: Option<PathBuf>,

    /// Periodically save the document when it has a file name
    #[arg(long)]
    pub auto_save: bool,

    /// Seconds between auto-saves (implies --auto-save)
    #[arg(long, value_name = "SECS")]
    pub auto_save_interval: Option<u64>,
}

impl CliArgs {
    /// Check if the provided path is a directory (following symlinks)
    pub fn is_directory(&self) -> bool {
        if let Some(path) = &self.file {
            std::fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
        } else {
            false
        }
    }

    /// Auto-save interval if enabled by flags or by `config`. Flags win.
    pub fn auto_save(&self, config: &NotepadConfig) -> Option<Duration> {
        let enabled = self.auto_save || self.auto_save_interval.is_some() || config.auto_save_enabled();
        if !enabled {
            return None;
        }
        match self.auto_save_interval {
            Some(secs) if secs > 0 => Some(Duration::from_secs(secs)),
            _ => Some(config.auto_save_interval()),
        }
    }
}

pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_cli_args() {
        let args = CliArgs::default();
        assert!(args.file.is_none());
        assert!(!args.is_directory());
        assert_eq!(args.auto_save(&NotepadConfig::default()), None);
    }

    #[test]
    fn test_parse_no_args() {
        let args = CliArgs::parse_from(["notepad"]);
        assert!(args.file.is_none());
        assert!(!args.auto_save);
    }

    #[test]
    fn test_parse_file_and_auto_save() {
        let args = CliArgs::parse_from(["notepad", "todo.txt", "--auto-save-interval", "10"]);
        assert_eq!(args.file, Some(PathBuf::from("todo.txt")));
        assert_eq!(
            args.auto_save(&NotepadConfig::default()),
            Some(Duration::from_secs(10))
        );
    }

    #[test]
    fn test_config_enables_auto_save() {
        let args = CliArgs::parse_from(["notepad"]);
        let config = NotepadConfig {
            auto_save: Some(true),
            auto_save_interval_secs: Some(7),
        };
        assert_eq!(args.auto_save(&config), Some(Duration::from_secs(7)));

        let args = CliArgs::parse_from(["notepad", "--auto-save"]);
        assert_eq!(
            args.auto_save(&NotepadConfig::default()),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn test_directory_detection() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test_file.txt");
        fs::write(&file_path, "test content").unwrap();

        let file_args = CliArgs {
            file: Some(file_path),
            ..CliArgs::default()
        };
        let dir_args = CliArgs {
            file: Some(temp_dir.path().to_path_buf()),
            ..CliArgs::default()
        };

        assert!(!file_args.is_directory());
        assert!(dir_args.is_directory());
    }
}
