use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct OrchestratorConfig {
    pub n8n_url: String,
    #[serde(default)]
    pub n8n_api_key: String,
    pub api_base_url: String,
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// When set, assigning an agent releases it from any other slot.
    #[serde(default)]
    pub exclusive_assignments: bool,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("orchestrator-data.json")
}

impl OrchestratorConfig {
    pub fn new(n8n_url: &str, api_base_url: &str) -> Self {
        Self {
            n8n_url: n8n_url.to_string(),
            n8n_api_key: String::new(),
            api_base_url: api_base_url.to_string(),
            data_path: default_data_path(),
            request_timeout_secs: None,
            exclusive_assignments: false,
        }
    }
}
