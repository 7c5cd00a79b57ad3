//! Configuration System
//!
//! Resolves the application configuration once at startup. The app runs in the
//! browser, so "environment" means values baked in at build time by Trunk; the
//! resolved [`AppConfig`] is then handed to the component tree via context.
//!
//! Build-time variables:
//! - `CODESPACE_NAME`: hosted-environment identifier (unset means local)
//! - `OCTOFIT_HOSTED_DOMAIN`: hosted domain suffix
//! - `OCTOFIT_API_PORT`: backend port
//! - `OCTOFIT_LOG_LEVEL`: console log level

pub const CODESPACE_NAME_VAR: &str = "CODESPACE_NAME";
pub const HOSTED_DOMAIN_VAR: &str = "OCTOFIT_HOSTED_DOMAIN";
pub const API_PORT_VAR: &str = "OCTOFIT_API_PORT";
pub const LOG_LEVEL_VAR: &str = "OCTOFIT_LOG_LEVEL";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

/// Backend API location
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Hosted-environment identifier. `None` selects the local fallback.
    pub codespace_name: Option<String>,
    pub hosted_domain: String,
    pub port: u16,
}

fn default_hosted_domain() -> String {
    "app.github.dev".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            codespace_name: None,
            hosted_domain: default_hosted_domain(),
            port: default_port(),
        }
    }
}

impl ApiConfig {
    /// The hosted identifier, if one is configured and non-empty.
    pub fn hosted_identifier(&self) -> Option<&str> {
        self.codespace_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Parse the configured level name.
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        self.level
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.level.clone()))
    }
}

impl AppConfig {
    /// Resolve the configuration from variables captured at build time.
    pub fn from_build_env() -> Self {
        let captured = [
            (CODESPACE_NAME_VAR, option_env!("CODESPACE_NAME")),
            (HOSTED_DOMAIN_VAR, option_env!("OCTOFIT_HOSTED_DOMAIN")),
            (API_PORT_VAR, option_env!("OCTOFIT_API_PORT")),
            (LOG_LEVEL_VAR, option_env!("OCTOFIT_LOG_LEVEL")),
        ];

        Self::from_vars(|key| {
            captured
                .iter()
                .find(|(name, _)| *name == key)
                .and_then(|(_, value)| value.map(str::to_string))
        })
    }

    /// Build a configuration from defaults plus whatever `lookup` returns.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();
        config.apply_overrides(lookup);
        config
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(CODESPACE_NAME_VAR) {
            self.api.codespace_name = Some(name);
        }
        if let Some(domain) = lookup(HOSTED_DOMAIN_VAR) {
            self.api.hosted_domain = domain;
        }
        if let Some(port) = lookup(API_PORT_VAR) {
            if let Ok(p) = port.trim().parse() {
                self.api.port = p;
            }
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            self.logging.level = level;
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid log level {0:?}")]
    InvalidLogLevel(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_local() {
        let config = AppConfig::from_vars(|_| None);
        assert_eq!(config.api.hosted_identifier(), None);
        assert_eq!(config.api.port, 8000);
        assert_eq!(config.api.hosted_domain, "app.github.dev");
        assert_eq!(config.logging.level().unwrap(), log::Level::Info);
    }

    #[test]
    fn test_overrides_applied() {
        let config = AppConfig::from_vars(lookup_from(&[
            ("CODESPACE_NAME", "abc123"),
            ("OCTOFIT_HOSTED_DOMAIN", "preview.example.dev"),
            ("OCTOFIT_API_PORT", "9000"),
            ("OCTOFIT_LOG_LEVEL", "debug"),
        ]));
        assert_eq!(config.api.hosted_identifier(), Some("abc123"));
        assert_eq!(config.api.hosted_domain, "preview.example.dev");
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.logging.level().unwrap(), log::Level::Debug);
    }

    #[test]
    fn test_blank_identifier_means_local() {
        let config = AppConfig::from_vars(lookup_from(&[("CODESPACE_NAME", "  ")]));
        assert_eq!(config.api.hosted_identifier(), None);
    }

    #[test]
    fn test_bad_port_keeps_default() {
        let config = AppConfig::from_vars(lookup_from(&[("OCTOFIT_API_PORT", "http")]));
        assert_eq!(config.api.port, 8000);
    }

    #[test]
    fn test_invalid_log_level() {
        let logging = LoggingConfig {
            level: "loud".to_string(),
        };
        assert_eq!(
            logging.level(),
            Err(ConfigError::InvalidLogLevel("loud".to_string()))
        );
    }
}
