use std::path::PathBuf;

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Json, Toml, Yaml},
};

use super::Settings;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Layered configuration loader.
///
/// Priority, lowest first: embedded defaults, user config, project config
/// (or only the file given with `--config`), then `DIRSIFT_` env variables.
pub struct DirsiftConfig {
    figment: Figment,
}

impl DirsiftConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        tracing::trace!("Loading config (custom: {:?})", custom_config);

        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        if let Some(custom_path) = custom_config {
            if !std::path::Path::new(custom_path).is_file() {
                anyhow::bail!("Config file not found: {}", custom_path);
            }
            figment = match custom_path.rsplit('.').next() {
                Some("json") => figment.merge(Json::file(custom_path)),
                Some("yaml") | Some("yml") => figment.merge(Yaml::file(custom_path)),
                _ => figment.merge(Toml::file(custom_path)),
            };
        } else {
            if let Some(user_config) = Self::user_config_path() {
                figment = figment.merge(Toml::file(user_config));
            }
            figment = figment
                .merge(Toml::file("dirsift.toml"))
                .merge(Json::file("dirsift.json"))
                .merge(Yaml::file("dirsift.yaml"))
                .merge(Yaml::file("dirsift.yml"));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("DIRSIFT_").split("__"));

        Ok(DirsiftConfig { figment })
    }

    /// Extract the merged, typed settings
    pub fn settings(&self) -> Result<Settings> {
        self.figment
            .extract()
            .context("Invalid dirsift configuration")
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dirsift").join("config.toml"))
    }
}
