use serde::{Deserialize, Serialize};

use super::{Agent, Campaign, Slot, Work};

/// Everything the orchestrator holds; also the persisted document shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrchestratorData {
    pub slots: Vec<Slot>,
    pub agents: Vec<Agent>,
    #[serde(default)]
    pub works: Vec<Work>,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    #[serde(default = "empty_analytics")]
    pub analytics: serde_json::Value,
}

fn empty_analytics() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

impl OrchestratorData {
    pub fn seeded(slots: Vec<Slot>) -> Self {
        Self {
            slots,
            agents: Vec::new(),
            works: Vec::new(),
            campaigns: Vec::new(),
            analytics: empty_analytics(),
        }
    }
}
