//! Centralized configuration and builder for rolodex.
//!
//! Goals:
//! - Single place to collect tunables instead of scattering env lookups.
//! - RolodexConfig::from_env() reads the ROLO_* env vars; fluent with_*
//!   setters override specific fields.
//! - BookBuilder produces a RolodexConfig that AddressBook consumes.
//!
//! Defaults:
//! - book_path = ./address_book.json
//! - locale    = "en"
//! - pretty    = true  (pretty-printed snapshot, reference format)
//! - autosave  = true  (rewrite the snapshot after every insert)

use std::fmt;
use std::path::PathBuf;

use crate::consts::{
    DEFAULT_BOOK_FILE, DEFAULT_LOCALE, ENV_AUTOSAVE, ENV_BOOK_PATH, ENV_LOCALE, ENV_PRETTY,
};

/// Top-level configuration for an address book instance.
#[derive(Clone, Debug)]
pub struct RolodexConfig {
    /// Snapshot file path.
    /// Env: ROLO_BOOK_PATH (default ./address_book.json)
    pub book_path: PathBuf,

    /// Locale for CLI messages ("en" | "fr").
    /// Env: ROLO_LOCALE (default "en")
    pub locale: String,

    /// Pretty-print the JSON snapshot.
    /// Env: ROLO_PRETTY (default true; "0|false|off|no" => false)
    pub pretty: bool,

    /// Rewrite the snapshot synchronously after every insert.
    /// Env: ROLO_AUTOSAVE (default true). Disable for in-memory tests.
    pub autosave: bool,
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            book_path: PathBuf::from(DEFAULT_BOOK_FILE),
            locale: DEFAULT_LOCALE.to_string(),
            pretty: true,
            autosave: true,
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(v) => {
            let s = v.trim().to_ascii_lowercase();
            if default {
                !(s == "0" || s == "false" || s == "off" || s == "no")
            } else {
                s == "1" || s == "true" || s == "on" || s == "yes"
            }
        }
        Err(_) => default,
    }
}

impl RolodexConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var(ENV_BOOK_PATH) {
            let s = v.trim();
            if !s.is_empty() {
                cfg.book_path = PathBuf::from(s);
            }
        }

        if let Ok(v) = std::env::var(ENV_LOCALE) {
            let s = v.trim().to_ascii_lowercase();
            if !s.is_empty() {
                cfg.locale = s;
            }
        }

        cfg.pretty = env_flag(ENV_PRETTY, cfg.pretty);
        cfg.autosave = env_flag(ENV_AUTOSAVE, cfg.autosave);

        cfg
    }

    /// Fluent setters (builder-style) to override specific fields.

    pub fn with_book_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.book_path = path.into();
        self
    }

    pub fn with_locale<S: Into<String>>(mut self, locale: S) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_pretty(mut self, on: bool) -> Self {
        self.pretty = on;
        self
    }

    pub fn with_autosave(mut self, on: bool) -> Self {
        self.autosave = on;
        self
    }
}

impl fmt::Display for RolodexConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RolodexConfig {{ book_path: {}, locale: {}, pretty: {}, autosave: {} }}",
            self.book_path.display(),
            self.locale,
            self.pretty,
            self.autosave,
        )
    }
}

/// Lightweight builder that produces a RolodexConfig.
/// AddressBook exposes `AddressBook::builder()` returning this builder.
#[derive(Clone, Debug)]
pub struct BookBuilder {
    cfg: RolodexConfig,
}

impl Default for BookBuilder {
    fn default() -> Self {
        // Start from env to preserve current behavior, then allow overrides.
        Self {
            cfg: RolodexConfig::from_env(),
        }
    }
}

impl BookBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a clean default (without reading env).
    pub fn from_default() -> Self {
        Self {
            cfg: RolodexConfig::default(),
        }
    }

    pub fn book_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.cfg.book_path = path.into();
        self
    }

    pub fn locale<S: Into<String>>(mut self, locale: S) -> Self {
        self.cfg.locale = locale.into();
        self
    }

    pub fn pretty(mut self, on: bool) -> Self {
        self.cfg.pretty = on;
        self
    }

    pub fn autosave(mut self, on: bool) -> Self {
        self.cfg.autosave = on;
        self
    }

    /// Finish the builder and obtain the configuration.
    pub fn build(self) -> RolodexConfig {
        self.cfg
    }
}
