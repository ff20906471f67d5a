//! Persistent user preferences for the CLI.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schedule::PaymentMethod;
use crate::utils::paths;

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Unknown configuration key `{0}`")]
    UnknownKey(String),
    #[error("Invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub show_occurrence_dates: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "PHP".into(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            default_payment_method: None,
            show_occurrence_dates: false,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 5] = [
        "locale",
        "currency",
        "ui_color_enabled",
        "default_payment_method",
        "show_occurrence_dates",
    ];

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Display value for a known key.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "locale" => self.locale.clone(),
            "currency" => self.currency.clone(),
            "ui_color_enabled" => self.ui_color_enabled.to_string(),
            "default_payment_method" => self
                .default_payment_method
                .map(|method| method.to_string())
                .unwrap_or_else(|| "none".into()),
            "show_occurrence_dates" => self.show_occurrence_dates.to_string(),
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        };
        Ok(value)
    }

    /// Updates a key from its textual form. `none` clears the default payment method.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "locale" => {
                if value.trim().is_empty() {
                    return Err(invalid());
                }
                self.locale = value.trim().to_string();
            }
            "currency" => {
                let code = value.trim();
                if code.len() != 3 || !code.chars().all(|ch| ch.is_ascii_alphabetic()) {
                    return Err(invalid());
                }
                self.currency = code.to_ascii_uppercase();
            }
            "ui_color_enabled" => self.ui_color_enabled = parse_bool(value).ok_or_else(invalid)?,
            "default_payment_method" => {
                self.default_payment_method = if value.eq_ignore_ascii_case("none") {
                    None
                } else {
                    Some(value.parse().map_err(|_| invalid())?)
                };
            }
            "show_occurrence_dates" => {
                self.show_occurrence_dates = parse_bool(value).ok_or_else(invalid)?
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Manager rooted at the application data directory.
    pub fn new() -> Self {
        Self::with_path(paths::config_file())
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn with_base_dir(base: &Path) -> Self {
        Self::with_path(base.join(paths::CONFIG_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored configuration, or defaults when none has been saved.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
