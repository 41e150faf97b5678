use serde::{Deserialize, Serialize};

use super::workflow::Workflow;

/// Classification given to agents mirrored from the workflow engine.
pub const MIRRORED_AGENT_TYPE: &str = "Automation";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n8n_workflow_id: Option<String>,
}

impl Agent {
    pub fn from_workflow(workflow: &Workflow) -> Self {
        Self {
            id: workflow.id.clone(),
            name: workflow.name.clone(),
            kind: MIRRORED_AGENT_TYPE.to_string(),
            n8n_workflow_id: Some(workflow.id.clone()),
        }
    }
}

/// Input for creating an agent.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAgent {
    pub name: String,
    #[serde(rename = "type", default = "default_agent_type")]
    pub kind: String,
}

fn default_agent_type() -> String {
    MIRRORED_AGENT_TYPE.to_string()
}
