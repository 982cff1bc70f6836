//! Configuration Loader
//!
//! Layers an optional configuration file under `MONITOR__*` environment variables and
//! validates the result before handing it out.

use super::MonitorConfig;
use crate::constants::{CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR};
use crate::error::MonitorResult;
use config::{Config, Environment, File};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Default location searched when no explicit file is given
const DEFAULT_CONFIG_FILE: &str = "config/monitor";

pub struct ConfigManager {
    config: MonitorConfig,
    environment: String,
    config_file: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the default location (the file is optional)
    pub fn load() -> MonitorResult<Arc<ConfigManager>> {
        let config = Self::build(
            File::with_name(DEFAULT_CONFIG_FILE).required(false),
            Environment::with_prefix(CONFIG_ENV_PREFIX).separator(CONFIG_ENV_SEPARATOR),
        )?;
        Ok(Arc::new(Self::finish(config, None)))
    }

    /// Load configuration from a specific file; the file must exist
    pub fn load_from_file(path: impl AsRef<Path>) -> MonitorResult<Arc<ConfigManager>> {
        let path = path.as_ref();
        let config = Self::build(
            File::from(path).required(true),
            Environment::with_prefix(CONFIG_ENV_PREFIX).separator(CONFIG_ENV_SEPARATOR),
        )?;
        Ok(Arc::new(Self::finish(config, Some(path.to_path_buf()))))
    }

    /// Load configuration from a file with an explicit environment-variable source.
    /// Useful for testing without modifying the process environment.
    pub fn load_with_environment(
        path: Option<&Path>,
        environment: Environment,
    ) -> MonitorResult<Arc<ConfigManager>> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };
        let config = Self::build(file, environment)?;
        Ok(Arc::new(Self::finish(config, path.map(Path::to_path_buf))))
    }

    fn build<F>(file: F, environment: Environment) -> MonitorResult<MonitorConfig>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let config: MonitorConfig = Config::builder()
            .add_source(file)
            .add_source(
                environment
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("enrichment.sub_orchestration_event_types")
                    .with_list_parse_key("enrichment.last_event_fields"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    fn finish(config: MonitorConfig, config_file: Option<PathBuf>) -> ConfigManager {
        let environment = Self::detect_environment();
        debug!(
            environment = %environment,
            config_file = ?config_file,
            correlate_sub_orchestrations = config.enrichment.correlate_sub_orchestrations,
            "Configuration loaded successfully"
        );
        ConfigManager {
            config,
            environment,
            config_file,
        }
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Detect the deployment environment from environment variables
    pub fn detect_environment() -> String {
        env::var("MONITOR_ENV")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string())
    }
}
