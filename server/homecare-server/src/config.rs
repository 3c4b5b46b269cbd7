//! Server configuration from environment variables

use error_common::{HomecareError, Result};
use std::str::FromStr;
use std::time::Duration;
use symptom_engine::EngineConfig;

/// Deployment environment, selects the log format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl FromStr for Environment {
    type Err = HomecareError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(HomecareError::ConfigError(format!("unknown HOMECARE_ENV: {other}"))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub name: String,
    pub environment: Environment,
    /// Allowed CORS origin
    pub frontend_url: String,
    pub engine: EngineConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "HomeCare+ Engine".to_string(),
            environment: Environment::Development,
            frontend_url: "http://localhost:3000".to_string(),
            engine: EngineConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read `HOMECARE_ENV`, `FRONTEND_URL`, `MAX_PREDICTIONS` and
    /// `LOOKUP_TIMEOUT_MS`, keeping defaults for unset variables
    ///
    /// # Errors
    ///
    /// Returns [`HomecareError::ConfigError`] for an unknown environment name,
    /// a non-numeric value, or `MAX_PREDICTIONS=0`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(env) = lookup("HOMECARE_ENV") {
            config.environment = env.parse()?;
        }
        if let Some(url) = lookup("FRONTEND_URL") {
            config.frontend_url = url;
        }
        if let Some(max) = lookup("MAX_PREDICTIONS") {
            let max: usize = parse_var("MAX_PREDICTIONS", &max)?;
            if max == 0 {
                return Err(HomecareError::ConfigError("MAX_PREDICTIONS must be at least 1".to_string()));
            }
            config.engine.max_predictions = max;
        }
        if let Some(ms) = lookup("LOOKUP_TIMEOUT_MS") {
            config.engine.lookup_timeout = Duration::from_millis(parse_var("LOOKUP_TIMEOUT_MS", &ms)?);
        }

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| HomecareError::ConfigError(format!("invalid {name}: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.engine.max_predictions, 3);
        assert_eq!(config.engine.lookup_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOMECARE_ENV", "production"),
            ("FRONTEND_URL", "https://app.homecare.plus"),
            ("MAX_PREDICTIONS", "5"),
            ("LOOKUP_TIMEOUT_MS", "250"),
        ])
        .unwrap();

        assert!(!config.is_development());
        assert_eq!(config.frontend_url, "https://app.homecare.plus");
        assert_eq!(config.engine.max_predictions, 5);
        assert_eq!(config.engine.lookup_timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(config_from(&[("MAX_PREDICTIONS", "0")]).is_err());
        assert!(config_from(&[("LOOKUP_TIMEOUT_MS", "soon")]).is_err());
        assert!(config_from(&[("HOMECARE_ENV", "staging")]).is_err());
    }
}
