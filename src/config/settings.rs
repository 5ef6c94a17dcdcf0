use crate::core::ConfigProvider;
use crate::utils::error::{Result, SoilError};
use crate::utils::validation::{
    validate_log_level, validate_positive_number, validate_url, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "https://rest.isric.org/soilgrids/v2.0/properties/query";
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const ENV_API_URL: &str = "SOILGRIDS_API_URL";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_TIMEOUT_SECONDS: &str = "SOILGRIDS_TIMEOUT_SECONDS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Settings {
    /// Defaults overlaid with environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(env_lookup)
    }

    /// Defaults overlaid with whatever `lookup` resolves for the override keys.
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        settings.apply_overrides(lookup)?;
        Ok(settings)
    }

    /// Loads a TOML file, then applies environment overrides.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_file_with(path, env_lookup)
    }

    /// Loads a TOML file, resolving `${VAR}` references and overrides through
    /// `lookup` instead of the process environment.
    pub fn from_file_with<P, F>(path: P, lookup: F) -> Result<Self>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml_str_with(&content, &lookup)?;
        settings.apply_overrides(&lookup)?;
        Ok(settings)
    }

    /// Parses TOML, expanding `${VAR}` references from the environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, env_lookup)
    }

    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = substitute_env_vars(content, lookup)?;

        toml::from_str(&processed_content).map_err(|e| SoilError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(env_lookup)
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENV_API_URL) {
            self.provider.endpoint = endpoint;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECONDS) {
            let seconds = raw
                .trim()
                .parse::<u64>()
                .map_err(|e| SoilError::InvalidConfigValueError {
                    field: ENV_TIMEOUT_SECONDS.to_string(),
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
            self.provider.timeout_seconds = Some(seconds);
        }
        Ok(())
    }
}

pub fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Unset variables are left as the literal `${NAME}`.
fn substitute_env_vars<F>(content: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SoilError::ConfigError {
        message: format!("Invalid substitution pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("provider.endpoint", &self.provider.endpoint)?;
        validate_log_level("logging.level", &self.logging.level)?;
        if let Some(timeout) = self.provider.timeout_seconds {
            validate_positive_number("provider.timeout_seconds", timeout, 1)?;
        }

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}

impl ConfigProvider for Settings {
    fn api_endpoint(&self) -> &str {
        &self.provider.endpoint
    }

    fn log_level(&self) -> &str {
        &self.logging.level
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.provider.timeout_seconds
    }
}
