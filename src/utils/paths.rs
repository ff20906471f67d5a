use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".rent_schedule";
pub const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.rent_schedule`.
/// `RENT_SCHEDULE_HOME` overrides it.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("RENT_SCHEDULE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}
