use std::path::{Path, PathBuf};

use crate::error::{OrchestratorError, Result};
use crate::models::OrchestratorConfig;

pub const CONFIG_FILENAME: &str = ".slot-orchestrator.yaml";

pub fn load(config_path: &Path) -> Result<OrchestratorConfig> {
    if !config_path.exists() {
        return Err(OrchestratorError::ConfigNotFound(config_path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(config_path)?;
    let config: OrchestratorConfig = serde_yaml::from_str(&contents)
        .map_err(|e| OrchestratorError::InvalidConfig(e.to_string()))?;
    finish(apply_overrides(config, env_lookup))
}

/// Build a config purely from environment variables.
pub fn from_env() -> Result<OrchestratorConfig> {
    finish(apply_overrides(OrchestratorConfig::new("", ""), env_lookup))
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Apply `N8N_URL`, `N8N_API_KEY`, `API_BASE_URL` and `ORCHESTRATOR_DATA_PATH`
/// on top of file values.
pub fn apply_overrides<F>(mut config: OrchestratorConfig, lookup: F) -> OrchestratorConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("N8N_URL") {
        config.n8n_url = url;
    }
    if let Some(key) = lookup("N8N_API_KEY") {
        config.n8n_api_key = key;
    }
    if let Some(url) = lookup("API_BASE_URL") {
        config.api_base_url = url;
    }
    if let Some(path) = lookup("ORCHESTRATOR_DATA_PATH") {
        config.data_path = PathBuf::from(path);
    }
    config
}

fn finish(mut config: OrchestratorConfig) -> Result<OrchestratorConfig> {
    config.n8n_url = config.n8n_url.trim_end_matches('/').to_string();
    config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
    if config.n8n_url.is_empty() {
        return Err(OrchestratorError::InvalidConfig(
            "n8n_url field is required".into(),
        ));
    }
    if config.api_base_url.is_empty() {
        return Err(OrchestratorError::InvalidConfig(
            "api_base_url field is required".into(),
        ));
    }
    Ok(config)
}
