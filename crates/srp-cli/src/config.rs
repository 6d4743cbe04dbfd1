//! Configuration loading for the srp CLI

use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;

use srp_rl::TrainingConfig;

/// Settings for a planning run
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub training: TrainingConfig,

    /// Seed for the training RNG; unseeded runs use thread randomness.
    pub seed: Option<u64>,
}

impl Settings {
    /// Load settings from file and environment
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file();

        let mut builder = ConfigBuilder::<config::builder::DefaultState>::default();

        // Add config file if it exists
        if let Some(path) = &config_path {
            tracing::info!("Loading config from: {:?}", path);
            builder = builder.add_source(File::from(path.clone()).required(false));
        } else {
            tracing::debug!("No config file found, using defaults");
        }

        // Add environment variables with SRP_ prefix
        builder = builder.add_source(
            Environment::with_prefix("SRP")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Find the configuration file
    fn find_config_file() -> Option<PathBuf> {
        // Check in order: SRP_CONFIG env, ./srp.toml, ~/.config/srp/srp.toml
        if let Ok(path) = std::env::var("SRP_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        let local = PathBuf::from("srp.toml");
        if local.exists() {
            return Some(local);
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".config").join("srp").join("srp.toml");
            if user_config.exists() {
                return Some(user_config);
            }
        }

        None
    }
}
