//! Runtime settings for [`OrderSystem`](crate::lifecycle::OrderSystem).
//!
//! Loaded with the `config` crate from environment variables carrying the
//! [`CONFIG_ENV_PREFIX`] prefix, e.g. `ORDER_RECIPE_CHANNEL_BUFFER=64`.
//! Anything not set keeps its [`Default`].

use serde::Deserialize;
use thiserror::Error;

/// Prefix of the environment variables read by [`SystemConfig::from_env`].
pub const CONFIG_ENV_PREFIX: &str = "ORDER_RECIPE";

const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("channel_buffer must be positive")]
    ZeroChannelBuffer,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Capacity of each store's request channel. Callers wait when it is full.
    pub channel_buffer: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
        }
    }
}

impl SystemConfig {
    /// Defaults, overridden by `ORDER_RECIPE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Like [`from_env`](Self::from_env), reading the variables from `vars`
    /// instead of the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: ::config::Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::load(Some(vars))
    }

    fn load(vars: Option<::config::Map<String, String>>) -> Result<Self, ConfigError> {
        use ::config::{Config, Environment};

        let config: SystemConfig = Config::builder()
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?
            .try_deserialize()?;

        if config.channel_buffer == 0 {
            return Err(ConfigError::ZeroChannelBuffer);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_env() {
        let config = SystemConfig::from_vars(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config, SystemConfig::default());
        assert_eq!(config.channel_buffer, 32);
    }

    #[test]
    fn test_env_override() {
        let config = SystemConfig::from_vars([("ORDER_RECIPE_CHANNEL_BUFFER", "8")]).unwrap();
        assert_eq!(config.channel_buffer, 8);
    }

    #[test]
    fn test_unrelated_vars_are_ignored() {
        let config = SystemConfig::from_vars([("OTHER_CHANNEL_BUFFER", "8")]).unwrap();
        assert_eq!(config.channel_buffer, 32);
    }

    #[test]
    fn test_rejects_zero() {
        let err = SystemConfig::from_vars([("ORDER_RECIPE_CHANNEL_BUFFER", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroChannelBuffer));
    }

    #[test]
    fn test_rejects_garbage() {
        for bad in ["-1", "lots"] {
            let err = SystemConfig::from_vars([("ORDER_RECIPE_CHANNEL_BUFFER", bad)]).unwrap_err();
            assert!(matches!(err, ConfigError::Load(_)), "{bad}");
        }
    }
}
