use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SlotStatus {
    Idle,
    Active,
}

/// Deployment phase a slot belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Foundation,
    Content,
    #[serde(rename = "AI & Scale")]
    AiAndScale,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: String,
    pub name: String,
    pub phase: Phase,
    pub assigned_agent_id: Option<String>,
    pub status: SlotStatus,
}

impl Slot {
    pub fn new(id: &str, name: &str, phase: Phase) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            phase,
            assigned_agent_id: None,
            status: SlotStatus::Idle,
        }
    }

    /// Point the slot at `agent_id`, or clear it. An empty id counts as a clear.
    pub fn assign(&mut self, agent_id: Option<&str>) {
        match agent_id.filter(|id| !id.is_empty()) {
            Some(id) => {
                self.assigned_agent_id = Some(id.to_string());
                self.status = SlotStatus::Active;
            }
            None => {
                self.assigned_agent_id = None;
                self.status = SlotStatus::Idle;
            }
        }
    }

    pub fn is_assigned(&self) -> bool {
        self.assigned_agent_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_slot_is_idle() {
        let slot = Slot::new("auth", "Auth Service", Phase::Foundation);
        assert_eq!(slot.status, SlotStatus::Idle);
        assert!(!slot.is_assigned());
    }

    #[test]
    fn assign_and_clear() {
        let mut slot = Slot::new("auth", "Auth Service", Phase::Foundation);
        slot.assign(Some("agent-1"));
        assert_eq!(slot.status, SlotStatus::Active);
        assert_eq!(slot.assigned_agent_id.as_deref(), Some("agent-1"));

        slot.assign(None);
        assert_eq!(slot.status, SlotStatus::Idle);
        assert_eq!(slot.assigned_agent_id, None);
    }

    #[test]
    fn empty_agent_id_clears() {
        let mut slot = Slot::new("auth", "Auth Service", Phase::Foundation);
        slot.assign(Some("agent-1"));
        slot.assign(Some(""));
        assert_eq!(slot.status, SlotStatus::Idle);
        assert_eq!(slot.assigned_agent_id, None);
    }

    #[test]
    fn serializes_camel_case_with_phase_label() {
        let slot = Slot::new("blockchain", "Blockchain Integration", Phase::AiAndScale);
        let json = serde_json::to_string(&slot).unwrap();
        assert!(json.contains("\"assignedAgentId\":null"));
        assert!(json.contains("\"phase\":\"AI & Scale\""));
        assert!(json.contains("\"status\":\"Idle\""));
    }
}
