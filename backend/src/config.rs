use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("Unknown ENVIRONMENT: {0}")]
    UnknownEnvironment(String),
    #[error("Invalid FRONTEND_URL: {0}")]
    InvalidFrontendUrl(String),
    #[error("Static directory not found: {0}")]
    MissingStaticDir(PathBuf),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "development" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Environment::Staging => 3100,
            _ => 3000,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub environment: Environment,
    pub port: u16,
    pub static_dir: PathBuf,
    pub frontend_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = match lookup("ENVIRONMENT") {
            Some(value) => Environment::parse(value.trim())?,
            None => Environment::Development,
        };
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value.clone()))?,
            None => environment.default_port(),
        };
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("frontend/dist"));
        let frontend_url = lookup("FRONTEND_URL")
            .unwrap_or_else(|| "http://localhost:8080".to_string());

        Ok(Self {
            environment,
            port,
            static_dir,
            frontend_url,
        })
    }

    pub fn ensure_static_dir(&self) -> Result<&Path, ConfigError> {
        if self.static_dir.is_dir() {
            Ok(&self.static_dir)
        } else {
            Err(ConfigError::MissingStaticDir(self.static_dir.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("frontend/dist"));
        assert_eq!(config.frontend_url, "http://localhost:8080");
    }

    #[test]
    fn test_staging_port() {
        let config = ServerConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "staging")])).unwrap();
        assert_eq!(config.port, 3100);
    }

    #[test]
    fn test_explicit_port_wins() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("ENVIRONMENT", "staging"),
            ("PORT", "8088"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8088);
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort("eighty".to_string()));
    }

    #[test]
    fn test_unknown_environment() {
        let err = ServerConfig::from_lookup(lookup_from(&[("ENVIRONMENT", "qa")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownEnvironment("qa".to_string()));
    }

    #[test]
    fn test_missing_static_dir() {
        let config = ServerConfig::from_lookup(lookup_from(&[(
            "STATIC_DIR",
            "/definitely/not/a/real/dist",
        )]))
        .unwrap();
        assert!(matches!(
            config.ensure_static_dir(),
            Err(ConfigError::MissingStaticDir(_))
        ));
    }
}
