use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Prompt,
    Section,
}

#[derive(Clone, Copy, Debug)]
pub struct OutputPreferences {
    pub color_enabled: bool,
}

impl Default for OutputPreferences {
    fn default() -> Self {
        Self {
            color_enabled: true,
        }
    }
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn label(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "INFO",
        MessageKind::Success => "OK",
        MessageKind::Warning => "WARNING",
        MessageKind::Error => "ERROR",
        MessageKind::Prompt | MessageKind::Section => "",
    }
}

pub(crate) fn apply_style(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let text = message.to_string();
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Prompt => format!("> {}", text),
        _ => format!("{}: {}", label(kind), text),
    };

    if !prefs.color_enabled {
        return formatted;
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Prompt => formatted.bright_cyan().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = apply_style(kind, message, &preferences());
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn prompt(message: impl fmt::Display) {
    print(MessageKind::Prompt, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}
