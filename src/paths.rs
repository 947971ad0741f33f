use std::path::PathBuf;

pub const CONFIG_FILE: &str = "config.toml";
pub const PREFERENCES_FILE: &str = "preferences.toml";
pub const RECENT_FILES_FILE: &str = "recent.toml";
pub const LOG_FILE: &str = "notepad.log";

pub fn get_config_dir() -> PathBuf {
    let config_home = dirs::config_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".config")
    });
    config_home.join("notepad")
}

pub fn find_config_file() -> Option<PathBuf> {
    let config_dir = get_config_dir();
    let paths = vec![
        config_dir.join(CONFIG_FILE),
        dirs::home_dir()?.join(".notepad").join(CONFIG_FILE),
    ];

    paths.into_iter().find(|p| p.exists())
}

pub fn log_file() -> PathBuf {
    get_config_dir().join(LOG_FILE)
}
