use std::{fs, time::Duration};

use chrono::Datelike;
use serde::Serialize;

pub const SETTINGS_FILE: &str = "ttuns.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    pub backend_base: String,
    pub default_year: i32,
    pub default_semester: String,
    pub request_timeout_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Always passed to the client; `DEFAULT_BACKEND_BASE` only covers a blank value.
            backend_base: "https://ttuns.vercel.app".into(),
            default_year: chrono::Local::now().year(),
            default_semester: "3".into(),
            request_timeout_secs: None,
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

/// Defaults, then `ttuns.toml` in the working directory, then environment.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

pub fn apply_file(settings: &mut Settings, raw: &str) {
    let Ok(table) = toml::from_str::<toml::Table>(raw) else {
        tracing::warn!("config: ignoring unparsable {SETTINGS_FILE}");
        return;
    };

    if let Some(v) = table.get("backend_base").and_then(toml::Value::as_str) {
        settings.backend_base = v.to_string();
    }
    if let Some(v) = table.get("default_year").and_then(toml_i64) {
        if let Ok(year) = i32::try_from(v) {
            settings.default_year = year;
        }
    }
    if let Some(v) = table.get("default_semester").and_then(toml_text) {
        settings.default_semester = v;
    }
    if let Some(v) = table.get("request_timeout_secs").and_then(toml_i64) {
        settings.request_timeout_secs = u64::try_from(v).ok();
    }
}

pub fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("TTUNS_BACKEND_BASE") {
        settings.backend_base = v;
    }
    if let Some(v) = lookup("APP__BACKEND_BASE") {
        settings.backend_base = v;
    }

    if let Some(v) = lookup("APP__DEFAULT_YEAR") {
        if let Ok(parsed) = v.trim().parse::<i32>() {
            settings.default_year = parsed;
        }
    }

    if let Some(v) = lookup("APP__DEFAULT_SEMESTER") {
        settings.default_semester = v;
    }

    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.trim().parse::<u64>() {
            settings.request_timeout_secs = Some(parsed);
        }
    }
}

fn toml_i64(value: &toml::Value) -> Option<i64> {
    match value {
        toml::Value::Integer(v) => Some(*v),
        toml::Value::String(v) => v.trim().parse().ok(),
        _ => None,
    }
}

fn toml_text(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(v) => Some(v.clone()),
        toml::Value::Integer(v) => Some(v.to_string()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
