use crate::error::PublishError;
use std::env;

/// Which event bus implementation the handlers publish to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusType {
    EventBridge,
    InMemory,
}

impl BusType {
    /// Read only `BUS_TYPE`; the Lambda binaries need nothing else
    pub fn from_env() -> Result<Self, PublishError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self, PublishError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::parse(&lookup("BUS_TYPE").unwrap_or_else(|| "eventbridge".to_string()))
    }

    fn parse(raw: &str) -> Result<Self, PublishError> {
        match raw.to_lowercase().as_str() {
            "eventbridge" => Ok(BusType::EventBridge),
            "inmemory" => Ok(BusType::InMemory),
            other => Err(PublishError::Config(format!(
                "unknown BUS_TYPE '{}' (expected 'eventbridge' or 'inmemory')",
                other
            ))),
        }
    }
}

/// Run mode of the local development server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Release,
}

impl AppEnv {
    /// Read the run mode on its own, before any env file is loaded
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// `APP_ENV`, falling back to the legacy server's `GIN_MODE`
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::parse(lookup("APP_ENV").or_else(|| lookup("GIN_MODE")).as_deref())
    }

    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("release") => AppEnv::Release,
            _ => AppEnv::Development,
        }
    }

    /// Environment file loaded for this mode
    pub fn env_file(&self) -> &'static str {
        match self {
            AppEnv::Development => ".env.dev",
            AppEnv::Release => ".env.prod",
        }
    }
}

/// Application configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bus_type: BusType,
    pub app_env: AppEnv,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, PublishError> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup
    ///
    /// Defaults: `BUS_TYPE=eventbridge`, `APP_ENV=development`,
    /// `HOST=0.0.0.0`, `PORT=6000`. The legacy names `GIN_MODE` and `port`
    /// are read when `APP_ENV` and `PORT` are unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, PublishError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bus_type = BusType::from_vars(&lookup)?;

        let app_env = AppEnv::from_vars(&lookup);

        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port: u16 = lookup("PORT")
            .or_else(|| lookup("port"))
            .unwrap_or_else(|| "6000".to_string())
            .parse()
            .map_err(|_| PublishError::Config("PORT must be a valid u16".to_string()))?;

        Ok(Config {
            bus_type,
            app_env,
            host,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, PublishError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bus_type, BusType::EventBridge);
        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 6000);
    }

    #[test]
    fn test_bus_type_is_case_insensitive() {
        let config = config_from(&[("BUS_TYPE", "InMemory")]).unwrap();
        assert_eq!(config.bus_type, BusType::InMemory);
    }

    #[test]
    fn test_unknown_bus_type_is_config_error() {
        let result = config_from(&[("BUS_TYPE", "nats")]);
        assert!(matches!(result, Err(PublishError::Config(_))));
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let result = config_from(&[("PORT", "not-a-port")]);
        assert!(matches!(result, Err(PublishError::Config(_))));
    }

    #[test]
    fn test_legacy_gin_mode_and_lowercase_port() {
        let config = config_from(&[("GIN_MODE", "release"), ("port", "7000")]).unwrap();

        assert_eq!(config.app_env, AppEnv::Release);
        assert_eq!(config.port, 7000);
    }

    #[test]
    fn test_new_names_win_over_legacy_names() {
        let config = config_from(&[
            ("APP_ENV", "development"),
            ("GIN_MODE", "release"),
            ("PORT", "8000"),
            ("port", "7000"),
        ])
        .unwrap();

        assert_eq!(config.app_env, AppEnv::Development);
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_bus_type_ignores_server_settings() {
        let vars: HashMap<String, String> = [("BUS_TYPE", "inmemory"), ("PORT", "not-a-port")]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        assert!(Config::from_vars(|key| vars.get(key).cloned()).is_err());
        assert_eq!(
            BusType::from_vars(|key| vars.get(key).cloned()).unwrap(),
            BusType::InMemory
        );
    }

    #[test]
    fn test_release_mode_picks_prod_env_file() {
        let config = config_from(&[("APP_ENV", "release")]).unwrap();
        assert_eq!(config.app_env.env_file(), ".env.prod");
        assert_eq!(AppEnv::Development.env_file(), ".env.dev");
    }
}
