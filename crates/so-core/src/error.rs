use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    #[error("slot '{0}' not found")]
    SlotNotFound(String),

    /// Non-2xx response from the workflow engine.
    #[error("workflow engine request failed ({status}): {body}")]
    EngineRequestFailed { status: u16, body: String },

    /// Non-2xx response from the domain API.
    #[error("domain API request failed ({status}): {body}")]
    ApiRequestFailed { status: u16, body: String },

    /// Carries the domain API's raw error text verbatim.
    #[error("{0}")]
    WorkCreationFailed(String),

    #[error("{0}")]
    CampaignCreationFailed(String),

    #[error("{0}")]
    CampaignTriggerFailed(String),

    #[error("config file not found at {0}")]
    ConfigNotFound(PathBuf),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("state persistence failed: {0}")]
    State(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl OrchestratorError {
    /// The text a caller should surface for a failed remote call: the raw
    /// response body when the remote sent one, otherwise this error's display.
    pub fn remote_message(&self) -> String {
        match self {
            Self::EngineRequestFailed { body, .. } | Self::ApiRequestFailed { body, .. }
                if !body.is_empty() =>
            {
                body.clone()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OrchestratorError>;
