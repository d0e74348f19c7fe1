//! User configuration for revu.
//!
//! Loaded once at startup from `$XDG_CONFIG_HOME/revu/config.toml` (falling
//! back to `~/.config/revu/config.toml`). Every field has a default and the
//! whole load path is a soft failure: a missing or malformed file prints a
//! warning to stderr and starts with defaults, it never prevents startup.

use std::time::Duration;

use serde::Deserialize;

use revu_core::DEFAULT_SERVICE_URL;

/// All user-tunable settings.
///
/// `#[serde(default)]` on the struct makes every key optional in the file —
/// a config containing only `theme = "dark"` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Theme name resolved by `Theme::from_name`.
    pub theme: String,
    /// Base URL of the review service.
    pub service_url: String,
    /// Client-side timeout for a review request, in milliseconds.
    pub timeout_ms: u64,
    /// Language token used to highlight the source buffer (e.g. `"js"`,
    /// `"rust"`).
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "catppuccin-mocha".to_owned(),
            service_url: DEFAULT_SERVICE_URL.to_owned(),
            timeout_ms: 20_000,
            language: "js".to_owned(),
        }
    }
}

impl Config {
    /// The request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Parses a config from TOML text.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Loads the config from disk, falling back to defaults.
    ///
    /// A missing file is the normal first-run case and is silent; a parse
    /// error is reported to stderr (the terminal is not yet in raw mode at
    /// load time) and otherwise ignored.
    pub fn load() -> Self {
        let path = config_path();
        let raw = match std::fs::read_to_string(&path) {
            Ok(s) => s,
            Err(_) => return Self::default(),
        };
        match Self::from_toml_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("revu: config parse error in {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}

/// Returns the path to the revu config file.
///
/// Prefers `$XDG_CONFIG_HOME/revu/config.toml`; falls back to
/// `~/.config/revu/config.toml` when the env var is absent.
fn config_path() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(std::path::PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| std::path::PathBuf::from(h).join(".config"))
        })
        .unwrap_or_else(|| std::path::PathBuf::from(".config"));
    base.join("revu").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.theme, "catppuccin-mocha");
        assert_eq!(config.service_url, DEFAULT_SERVICE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(20));
        assert_eq!(config.language, "js");
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_overrides_only_named_keys() {
        let config = Config::from_toml_str(
            r#"
            theme = "dark"
            timeout_ms = 5000
            "#,
        )
        .unwrap();
        assert_eq!(config.theme, "dark");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        // Untouched keys keep their defaults.
        assert_eq!(config.service_url, DEFAULT_SERVICE_URL);
        assert_eq!(config.language, "js");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(Config::from_toml_str("theme = [not toml").is_err());
    }
}
