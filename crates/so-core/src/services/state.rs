use std::path::{Path, PathBuf};

use crate::error::{OrchestratorError, Result};
use crate::models::OrchestratorData;

pub struct SnapshotStore {
    state_file_path: PathBuf,
}

impl SnapshotStore {
    pub fn new(state_file_path: &Path) -> Self {
        Self {
            state_file_path: state_file_path.to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.state_file_path
    }

    /// Read the persisted snapshot. `Ok(None)` when no file exists; an error
    /// when the file is unreadable or not shaped like a snapshot.
    pub async fn load(&self) -> Result<Option<OrchestratorData>> {
        if !self.state_file_path.exists() {
            return Ok(None);
        }
        let json = tokio::fs::read_to_string(&self.state_file_path)
            .await
            .map_err(|e| OrchestratorError::State(format!("failed to read state file: {e}")))?;
        let data: OrchestratorData = serde_json::from_str(&json)?;
        if data.slots.is_empty() {
            return Err(OrchestratorError::State(
                "state file has an empty slot list".into(),
            ));
        }
        Ok(Some(data))
    }

    /// Overwrite the snapshot in full.
    pub async fn save(&self, data: &OrchestratorData) -> Result<()> {
        if let Some(parent) = self.state_file_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    OrchestratorError::State(format!("failed to create state dir: {e}"))
                })?;
            }
        }
        let json = serde_json::to_string_pretty(data)?;
        tokio::fs::write(&self.state_file_path, json)
            .await
            .map_err(|e| OrchestratorError::State(format!("failed to write state file: {e}")))?;
        tracing::debug!(path = %self.state_file_path.display(), "state saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Agent;
    use crate::services::catalog;

    fn test_data() -> OrchestratorData {
        let mut data = OrchestratorData::seeded(catalog::seed_slots());
        data.slots[0].assign(Some("agent-1"));
        data.agents.push(Agent {
            id: "agent-1".into(),
            name: "Gatekeeper".into(),
            kind: "Security".into(),
            n8n_workflow_id: Some("wf-1".into()),
        });
        data
    }

    #[tokio::test]
    async fn round_trip_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(&dir.path().join("state.json"));

        let data = test_data();
        store.save(&data).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.slots, data.slots);
        assert_eq!(loaded.agents, data.agents);
    }

    #[tokio::test]
    async fn load_missing_file_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(&dir.path().join("state.json"));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(&dir.path().join("nested/deeper/state.json"));
        store.save(&test_data()).await.unwrap();
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn document_without_agents_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        tokio::fs::write(&path, r#"{"slots":[]}"#).await.unwrap();
        let store = SnapshotStore::new(&path);
        assert!(store.load().await.is_err());
    }

    #[tokio::test]
    async fn empty_slot_list_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        tokio::fs::write(&path, r#"{"slots":[],"agents":[]}"#)
            .await
            .unwrap();
        let store = SnapshotStore::new(&path);
        assert!(matches!(
            store.load().await,
            Err(OrchestratorError::State(_))
        ));
    }

    #[tokio::test]
    async fn state_uses_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        let store = SnapshotStore::new(&dir.path().join("state.json"));
        store.save(&test_data()).await.unwrap();

        let json = tokio::fs::read_to_string(store.path()).await.unwrap();
        assert!(json.contains("\"assignedAgentId\""));
        assert!(json.contains("\"n8nWorkflowId\""));
        assert!(json.contains("\"analytics\""));
        // Should NOT contain snake_case
        assert!(!json.contains("\"assigned_agent_id\""));
    }
}
