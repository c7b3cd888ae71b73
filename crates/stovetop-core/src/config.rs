//! Startup configuration for the recipe store and the plan generator.
//!
//! Settings are read once, from the environment and an optional JSON file at
//! `$XDG_CONFIG_HOME/stovetop/config.json`; the environment wins. Missing
//! credentials are a startup failure, never something discovered mid-session.
//!
//! | Environment variable            | File key               |
//! |---------------------------------|------------------------|
//! | `FIREBASE_API_KEY`              | `firebase_api_key`     |
//! | `FIREBASE_PROJECT_ID`           | `firebase_project_id`  |
//! | `FIREBASE_DATABASE`             | `firebase_database`    |
//! | `FIRESTORE_BASE_URL`            | `firestore_base_url`   |
//! | `GEMINI_API_KEY` (or `API_KEY`) | `gemini_api_key`       |
//! | `GEMINI_MODEL`                  | `gemini_model`         |
//! | `GEMINI_BASE_URL`               | `gemini_base_url`      |
//! | `STOVETOP_REQUEST_TIMEOUT_SECS` | `request_timeout_secs` |

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::debug;
use serde::Deserialize;

use crate::{
    error::{KitchenError, Result},
    generation::GeminiConfig,
    store::FirestoreConfig,
};

pub const ENV_FIREBASE_API_KEY: &str = "FIREBASE_API_KEY";
pub const ENV_FIREBASE_PROJECT_ID: &str = "FIREBASE_PROJECT_ID";
pub const ENV_FIREBASE_DATABASE: &str = "FIREBASE_DATABASE";
pub const ENV_FIRESTORE_BASE_URL: &str = "FIRESTORE_BASE_URL";
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_GEMINI_MODEL: &str = "GEMINI_MODEL";
pub const ENV_GEMINI_BASE_URL: &str = "GEMINI_BASE_URL";
pub const ENV_REQUEST_TIMEOUT: &str = "STOVETOP_REQUEST_TIMEOUT_SECS";

/// Settings as they appear in the optional config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub firebase_api_key: Option<String>,
    pub firebase_project_id: Option<String>,
    pub firebase_database: Option<String>,
    pub firestore_base_url: Option<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub gemini_base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

/// Where recipes come from.
#[derive(Debug)]
pub enum StoreSettings {
    /// The remote Firestore collection
    Firestore(FirestoreConfig),
    /// A local JSON file of recipes
    File(PathBuf),
}

/// Fully resolved startup configuration.
#[derive(Debug)]
pub struct Config {
    pub store: StoreSettings,
    pub generation: GeminiConfig,
}

/// Builder that resolves a [`Config`] from flags, environment and file.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    recipes_file: Option<PathBuf>,
    model: Option<String>,
    config_file: Option<PathBuf>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ConfigLoader {
    /// Creates a loader with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads recipes from a local JSON file instead of Firestore.
    pub fn with_recipes_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.recipes_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the generation model.
    pub fn with_model(mut self, model: Option<String>) -> Self {
        if let Some(model) = non_empty(model) {
            self.model = Some(model);
        }
        self
    }

    /// Uses an explicit config file instead of the XDG location.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.config_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Resolves the configuration from the process environment and the
    /// config file.
    ///
    /// # Errors
    ///
    /// Returns `KitchenError::Configuration` if a required credential is
    /// missing or the config file cannot be parsed.
    pub fn load(self) -> Result<Config> {
        let file = self.read_file_config()?;
        self.resolve(file, |key| std::env::var(key).ok())
    }

    fn read_file_config(&self) -> Result<FileConfig> {
        let path = match &self.config_file {
            Some(path) => Some(path.clone()),
            None => xdg::BaseDirectories::with_prefix("stovetop").find_config_file("config.json"),
        };
        let Some(path) = path else {
            return Ok(FileConfig::default());
        };

        debug!("Reading config file {}", path.display());
        let text = std::fs::read_to_string(&path).map_err(|e| {
            KitchenError::configuration(format!("Cannot read '{}': {e}", path.display()))
        })?;
        serde_json::from_str(&text).map_err(|e| {
            KitchenError::configuration(format!("Invalid config file '{}': {e}", path.display()))
        })
    }

    /// Resolves the configuration from `file` and an environment lookup.
    pub fn resolve<F>(self, file: FileConfig, env: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| non_empty(env(key));

        let timeout = match var(ENV_REQUEST_TIMEOUT) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                KitchenError::configuration(format!(
                    "{ENV_REQUEST_TIMEOUT} must be a whole number of seconds, got '{raw}'"
                ))
            })?),
            None => file.request_timeout_secs,
        }
        .map(Duration::from_secs);

        let store = match self.recipes_file {
            Some(path) => StoreSettings::File(path),
            None => {
                let project_id = var(ENV_FIREBASE_PROJECT_ID)
                    .or(non_empty(file.firebase_project_id))
                    .ok_or_else(|| missing(ENV_FIREBASE_PROJECT_ID, "firebase_project_id"))?;
                let api_key = var(ENV_FIREBASE_API_KEY)
                    .or(non_empty(file.firebase_api_key))
                    .ok_or_else(|| missing(ENV_FIREBASE_API_KEY, "firebase_api_key"))?;

                let mut firestore = FirestoreConfig::new(project_id, api_key);
                if let Some(database) =
                    var(ENV_FIREBASE_DATABASE).or(non_empty(file.firebase_database))
                {
                    firestore.database = database;
                }
                if let Some(base_url) =
                    var(ENV_FIRESTORE_BASE_URL).or(non_empty(file.firestore_base_url))
                {
                    firestore.base_url = base_url;
                }
                firestore.timeout = timeout;
                StoreSettings::Firestore(firestore)
            }
        };

        let api_key = var(ENV_GEMINI_API_KEY)
            .or_else(|| var(ENV_API_KEY))
            .or(non_empty(file.gemini_api_key))
            .ok_or_else(|| missing(ENV_GEMINI_API_KEY, "gemini_api_key"))?;

        let mut generation = GeminiConfig::new(api_key);
        if let Some(model) = self
            .model
            .or_else(|| var(ENV_GEMINI_MODEL))
            .or(non_empty(file.gemini_model))
        {
            generation.model = model;
        }
        if let Some(base_url) = var(ENV_GEMINI_BASE_URL).or(non_empty(file.gemini_base_url)) {
            generation.base_url = base_url;
        }
        generation.timeout = timeout;

        Ok(Config { store, generation })
    }
}

fn missing(env_key: &str, file_key: &str) -> KitchenError {
    KitchenError::configuration(format!(
        "{env_key} is not set (environment variable or '{file_key}' in config.json)"
    ))
}
