use crate::error::{CheckError, Result};
use crate::types::MasterConfig;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Settings of the mastercheck command line tool
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Master configuration document to validate
    pub master_config: String,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
    /// Treat warnings as fatal
    pub fail_on_warnings: bool,
    /// Print findings as JSON instead of one line per error
    pub json_output: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            master_config: "master-config.yaml".to_string(),
            log_level: "mastercheck=info".to_string(),
            fail_on_warnings: false,
            json_output: false,
        }
    }
}

impl AppConfig {
    /// Load settings from files and environment variables
    pub fn load() -> Result<Self> {
        let mut config_builder = Config::builder()
            // Start with default values
            .add_source(Config::try_from(&AppConfig::default())?);

        // Add configuration files if they exist
        let config_files = [
            "config/default.toml",
            "config/local.toml",
            "/etc/mastercheck/config.toml",
        ];

        for config_file in &config_files {
            if Path::new(config_file).exists() {
                config_builder = config_builder.add_source(File::with_name(config_file));
            }
        }

        // Add environment variables with MASTERCHECK_ prefix
        config_builder = config_builder.add_source(
            Environment::with_prefix("MASTERCHECK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = config_builder.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        app_config.validate()?;

        Ok(app_config)
    }

    fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.master_config.is_empty() {
            return Err(ConfigError::Message(
                "master_config cannot be empty".to_string(),
            ));
        }

        if self.log_level.is_empty() {
            return Err(ConfigError::Message("log_level cannot be empty".to_string()));
        }

        Ok(())
    }
}

/// Load a master configuration document, format chosen by file extension
pub fn load_master_config(path: impl AsRef<Path>) -> Result<MasterConfig> {
    let path = path.as_ref();
    debug!("Loading master config from {}", path.display());

    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    match extension {
        "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
        "json" => Ok(serde_json::from_str(&content)?),
        "toml" => Ok(toml::from_str(&content)?),
        other => Err(CheckError::UnsupportedFormat(format!(
            "{} (extension {:?})",
            path.display(),
            other
        ))),
    }
}
