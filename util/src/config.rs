//! Global application configuration manager.
//!
//! `AppConfig` is a lazily initialized, globally accessible singleton containing
//! runtime configuration values loaded from environment variables. It provides
//! thread-safe access and mutation for testing or overrides in runtime environments.

use std::env;
use std::str::FromStr;
use std::sync::{OnceLock, RwLock, RwLockReadGuard};

/// Represents the complete application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub project_name: String,
    pub log_level: String,
    pub log_file: String,
    pub log_to_stdout: bool,
    pub database_path: String,
    pub host: String,
    pub port: u16,
    /// Class size assumed by the live feed when no roster is known.
    pub default_class_size: usize,
    pub feed_page_size: u64,
    pub notification_display_limit: usize,
    /// Minimum face match confidence (percent) accepted at check-in.
    pub face_match_threshold: f64,
    /// Period of the session pulse; `0` disables it.
    pub session_pulse_seconds: u64,
}

/// Lazily-initialized, thread-safe singleton instance of `AppConfig`.
static CONFIG_INSTANCE: OnceLock<RwLock<AppConfig>> = OnceLock::new();

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}

fn parsed_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Loads the configuration from `.env` and environment variables.
    ///
    /// Missing or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            env: var_or("APP_ENV", "development"),
            project_name: var_or("PROJECT_NAME", "attend-secure"),
            log_level: var_or("LOG_LEVEL", "api=info,store=info,services=info"),
            log_file: var_or("LOG_FILE", "api.log"),
            log_to_stdout: var_or("LOG_TO_STDOUT", "false") == "true",
            database_path: var_or("DATABASE_PATH", "data/attendance.db"),
            host: var_or("HOST", "127.0.0.1"),
            port: parsed_or("PORT", 3000),
            default_class_size: parsed_or("DEFAULT_CLASS_SIZE", 65),
            feed_page_size: parsed_or("FEED_PAGE_SIZE", 10),
            notification_display_limit: parsed_or("NOTIFICATION_DISPLAY_LIMIT", 10),
            face_match_threshold: parsed_or("FACE_MATCH_THRESHOLD", 85.0),
            session_pulse_seconds: parsed_or("SESSION_PULSE_SECONDS", 0),
        }
    }

    /// Returns a shared reference to the global configuration.
    pub fn global() -> RwLockReadGuard<'static, AppConfig> {
        CONFIG_INSTANCE
            .get_or_init(|| RwLock::new(AppConfig::from_env()))
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Resets the configuration by reloading from environment variables.
    ///
    /// Useful in tests to clear overrides.
    pub fn reset() {
        if let Some(lock) = CONFIG_INSTANCE.get() {
            let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
            *guard = AppConfig::from_env();
        }
    }

    /// Generic internal setter for any field in the config.
    fn set_field<F>(setter: F)
    where
        F: FnOnce(&mut AppConfig),
    {
        let lock = CONFIG_INSTANCE.get_or_init(|| RwLock::new(AppConfig::from_env()));
        let mut guard = lock.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        setter(&mut guard);
    }

    // --- Per-field setters below ---

    pub fn set_env(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.env = value.into());
    }

    pub fn set_database_path(value: impl Into<String>) {
        AppConfig::set_field(|cfg| cfg.database_path = value.into());
    }

    pub fn set_default_class_size(value: usize) {
        AppConfig::set_field(|cfg| cfg.default_class_size = value);
    }

    pub fn set_feed_page_size(value: u64) {
        AppConfig::set_field(|cfg| cfg.feed_page_size = value);
    }

    pub fn set_notification_display_limit(value: usize) {
        AppConfig::set_field(|cfg| cfg.notification_display_limit = value);
    }

    pub fn set_face_match_threshold(value: f64) {
        AppConfig::set_field(|cfg| cfg.face_match_threshold = value);
    }

    pub fn set_session_pulse_seconds(value: u64) {
        AppConfig::set_field(|cfg| cfg.session_pulse_seconds = value);
    }
}

// --- Shorthand accessors ---

pub fn env() -> String {
    AppConfig::global().env.clone()
}

pub fn project_name() -> String {
    AppConfig::global().project_name.clone()
}

pub fn log_level() -> String {
    AppConfig::global().log_level.clone()
}

pub fn log_file() -> String {
    AppConfig::global().log_file.clone()
}

pub fn log_to_stdout() -> bool {
    AppConfig::global().log_to_stdout
}

pub fn database_path() -> String {
    AppConfig::global().database_path.clone()
}

pub fn host() -> String {
    AppConfig::global().host.clone()
}

pub fn port() -> u16 {
    AppConfig::global().port
}

pub fn default_class_size() -> usize {
    AppConfig::global().default_class_size
}

pub fn feed_page_size() -> u64 {
    AppConfig::global().feed_page_size
}

pub fn notification_display_limit() -> usize {
    AppConfig::global().notification_display_limit
}

pub fn face_match_threshold() -> f64 {
    AppConfig::global().face_match_threshold
}

pub fn session_pulse_seconds() -> u64 {
    AppConfig::global().session_pulse_seconds
}
