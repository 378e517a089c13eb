use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub explorer: ExplorerConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

/// Explorer API client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerConfig {
    /// Explorer API endpoint URL
    pub base_url: String,
    /// Wallet address whose transactions are synced
    pub address: String,
    /// API authentication key; no default, must come from the
    /// environment or the config file
    #[serde(default)]
    pub api_key: String,
    /// Maximum records requested per run (explorer `offset` parameter)
    pub page_size: u32,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

/// Tabular store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store API endpoint URL
    pub base_url: String,
    /// Spreadsheet identifier holding both transaction logs
    pub spreadsheet_id: String,
    /// Service-account credential file, relative to the working directory
    pub credentials_path: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            explorer: ExplorerConfig::default(),
            store: StoreConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.cronoscan.com/api".to_string(),
            address: "0x0ca35bdf10f0f548857fe222760bf47761bbaf50".to_string(),
            api_key: String::new(),
            page_size: 10000,
            timeout_seconds: 30,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "https://sheets.googleapis.com".to_string(),
            spreadsheet_id: "1NCEZBA66B6SZO0oCJC8IZcU6M4lQ5wYI-OMkjm44TyE".to_string(),
            credentials_path: "./manecity.json".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables.
    /// Environment variables take precedence over file values.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from_file()?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file; an absent file yields defaults
    pub fn load_from_file() -> Result<Self, ConfigError> {
        let config_path = env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".to_string());

        if !Path::new(&config_path).exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| ConfigError::Parsing(format!("{}: {}", config_path, e)))?;
        let config: AppConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parsing(e.to_string()))?;
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = env::var("EXPLORER_URL") {
            self.explorer.base_url = url;
        }
        if let Ok(address) = env::var("WALLET_ADDRESS") {
            self.explorer.address = address;
        }
        if let Ok(key) = env::var("CRONOSCAN_API_KEY") {
            self.explorer.api_key = key;
        }
        if let Ok(id) = env::var("SPREADSHEET_ID") {
            self.store.spreadsheet_id = id;
        }
        if let Ok(path) = env::var("STORE_CREDENTIALS") {
            self.store.credentials_path = path;
        }
        if let Ok(level) = env::var("LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    /// Validate configuration values; fails fast before any network call
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.explorer.base_url.starts_with("http://")
            && !self.explorer.base_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidUrl(self.explorer.base_url.clone()));
        }
        if !self.store.base_url.starts_with("http://")
            && !self.store.base_url.starts_with("https://")
        {
            return Err(ConfigError::InvalidUrl(self.store.base_url.clone()));
        }

        // Basic hex check on the wallet address
        if !self.explorer.address.starts_with("0x") || self.explorer.address.len() != 42 {
            return Err(ConfigError::InvalidValue {
                key: "explorer.address".to_string(),
                value: self.explorer.address.clone(),
            });
        }

        if self.explorer.api_key.is_empty() {
            return Err(ConfigError::MissingEnvVar("CRONOSCAN_API_KEY".to_string()));
        }

        if self.explorer.page_size == 0 || self.explorer.page_size > 10000 {
            return Err(ConfigError::InvalidValue {
                key: "explorer.page_size".to_string(),
                value: self.explorer.page_size.to_string(),
            });
        }

        if self.explorer.timeout_seconds == 0 || self.explorer.timeout_seconds > 300 {
            return Err(ConfigError::InvalidValue {
                key: "explorer.timeout_seconds".to_string(),
                value: self.explorer.timeout_seconds.to_string(),
            });
        }

        if self.store.spreadsheet_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "store.spreadsheet_id".to_string(),
                value: self.store.spreadsheet_id.clone(),
            });
        }

        if !Path::new(&self.store.credentials_path).exists() {
            return Err(ConfigError::CredentialsNotFound(
                self.store.credentials_path.clone(),
            ));
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.level".to_string(),
                value: self.logging.level.clone(),
            });
        }

        Ok(())
    }
}
