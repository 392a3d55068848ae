use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use crate::storage::{FileKeyValueStore, KeyValueStore, TextCodec, YamlCodec};
use super::Validate;

/// Loads, validates and caches a config record kept under one key of a store.
pub struct ConfigManager<TStore, TConfig, TCodec = YamlCodec>
where
    TStore: KeyValueStore,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TCodec: TextCodec<TConfig>,
{
    codec: TCodec,
    store: TStore,
    key: String,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileKeyValueStore, TConfig, YamlCodec>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        let path = Path::new(file_path);
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let key = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_path.to_string());
        Self::new(FileKeyValueStore::new(directory), key, YamlCodec)
    }
}

impl<TStore, TConfig, TCodec> ConfigManager<TStore, TConfig, TCodec>
where
    TStore: KeyValueStore,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TCodec: TextCodec<TConfig>,
{
    pub fn new(store: TStore, key: impl Into<String>, codec: TCodec) -> Self {
        Self {
            codec,
            store,
            key: key.into(),
            config: Arc::new(Mutex::new(None)),
        }
    }

    /// Returns the cached config, reading it on first use. A missing record
    /// yields `TConfig::default()`.
    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let content = self
            .store
            .get(&self.key)
            .map_err(|e| format!("Failed to read config {}: {}", self.key, e))?;

        let Some(content) = content else {
            return Ok(TConfig::default());
        };

        let config = self.codec.decode(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *current = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let encoded = self.codec.encode(config)?;
        self.store
            .set(&self.key, &encoded)
            .map_err(|e| format!("Failed to write config {}: {}", self.key, e))?;

        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);
        *current = Some(config.clone());
        Ok(())
    }
}
