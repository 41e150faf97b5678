use serde::{Deserialize, Serialize};

/// Summary of a workflow as reported by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    #[serde(deserialize_with = "super::id::string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// The engine wraps list responses as `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
pub(crate) struct WorkflowList {
    #[serde(default)]
    pub data: Vec<Workflow>,
}
