use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use tokio::sync::RwLock;

use crate::error::{OrchestratorError, Result};
use crate::models::{
    Agent, AudioUpload, Campaign, CampaignStatus, NewAgent, NewCampaign, NewWork,
    OrchestratorConfig, OrchestratorData, Slot, TriggerAck, Work, WorkStatus, Workflow,
};
use crate::services::{catalog, writers};

use super::domain_api::{DomainApiClient, WorkSubmission};
use super::state::SnapshotStore;
use super::workflow_engine::WorkflowEngineClient;

/// Records reconciled by id rather than appended blindly.
trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Work {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Campaign {
    fn key(&self) -> &str {
        &self.id
    }
}

fn upsert<T: Keyed>(items: &mut Vec<T>, item: T) {
    match items.iter().position(|existing| existing.key() == item.key()) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}

fn unique_agent_id(agents: &[Agent], millis: i64) -> String {
    let base = format!("agent-{millis}");
    let mut candidate = base.clone();
    let mut n = 1;
    while agents.iter().any(|a| a.id == candidate) {
        candidate = format!("{base}-{n}");
        n += 1;
    }
    candidate
}

/// Single owner of slot, agent, work, campaign and analytics state.
///
/// Every mutation holds the write lock across the in-memory change and the
/// snapshot write, so each operation persists atomically with respect to the
/// others. Remote calls are made before the lock is taken.
pub struct Orchestrator {
    state: RwLock<OrchestratorData>,
    state_store: SnapshotStore,
    engine: WorkflowEngineClient,
    api: DomainApiClient,
    exclusive_assignments: bool,
}

impl Orchestrator {
    /// Build an orchestrator holding the freshly seeded catalog. Call
    /// [`Orchestrator::load_state`] to apply a persisted snapshot, or use
    /// [`Orchestrator::open`] to do both.
    pub fn new(config: &OrchestratorConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(Self {
            state: RwLock::new(OrchestratorData::seeded(catalog::seed_slots())),
            state_store: SnapshotStore::new(&config.data_path),
            engine: WorkflowEngineClient::new(&config.n8n_url, &config.n8n_api_key, client.clone()),
            api: DomainApiClient::new(&config.api_base_url, client),
            exclusive_assignments: config.exclusive_assignments,
        })
    }

    pub async fn open(config: &OrchestratorConfig) -> Result<Self> {
        let orchestrator = Self::new(config)?;
        orchestrator.load_state().await;
        Ok(orchestrator)
    }

    /// Re-seed the catalog, then replace it with the persisted snapshot if one
    /// exists and is well formed. Returns whether a snapshot was applied.
    pub async fn load_state(&self) -> bool {
        let mut state = self.state.write().await;
        *state = OrchestratorData::seeded(catalog::seed_slots());

        match self.state_store.load().await {
            Ok(Some(data)) => {
                *state = data;
                tracing::info!(path = %self.state_store.path().display(), "state loaded");
                true
            }
            Ok(None) => {
                tracing::debug!("no state file; using seeded catalog");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unusable state file; using seeded catalog");
                false
            }
        }
    }

    /// Apply `f` to a copy of the state under the write lock, persist the
    /// copy, then commit it. When `f` or the write fails, memory and disk are
    /// both left as they were.
    async fn mutate<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut OrchestratorData) -> Result<T>,
    {
        let mut state = self.state.write().await;
        let mut next = state.clone();
        let out = f(&mut next)?;
        self.state_store.save(&next).await?;
        *state = next;
        Ok(out)
    }

    /// Current state without contacting any remote.
    pub async fn snapshot(&self) -> OrchestratorData {
        self.state.read().await.clone()
    }

    pub async fn get_slots(&self) -> Vec<Slot> {
        self.state.read().await.slots.clone()
    }

    pub async fn get_slot(&self, id: &str) -> Option<Slot> {
        let state = self.state.read().await;
        state.slots.iter().find(|s| s.id == id).cloned()
    }

    pub async fn get_agents(&self) -> Vec<Agent> {
        self.state.read().await.agents.clone()
    }

    /// Refresh works, campaigns, analytics and agents concurrently, then
    /// return everything. A failed refresh keeps the previous value.
    pub async fn get_orchestrator_data(&self) -> OrchestratorData {
        tokio::join!(
            self.fetch_works(),
            self.fetch_campaigns(),
            self.fetch_analytics(),
            self.fetch_agents(),
        );
        self.snapshot().await
    }

    pub async fn fetch_works(&self) -> bool {
        match self.api.list_works().await {
            Ok(works) => {
                let works = works.into_iter().map(|w| w.into_work()).collect();
                self.state.write().await.works = works;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch works");
                false
            }
        }
    }

    pub async fn fetch_campaigns(&self) -> bool {
        match self.api.list_campaigns().await {
            Ok(campaigns) => {
                self.state.write().await.campaigns = campaigns;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch campaigns");
                false
            }
        }
    }

    pub async fn fetch_analytics(&self) -> bool {
        match self.api.fetch_analytics().await {
            Ok(analytics) => {
                self.state.write().await.analytics = analytics;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch analytics");
                false
            }
        }
    }

    /// Mirror the engine's workflows as the agent list. This overwrites any
    /// agent created locally that the engine does not report. An empty list is
    /// indistinguishable from an unreachable engine and leaves agents as-is.
    pub async fn fetch_agents(&self) -> bool {
        let workflows = self.engine.list_workflows().await;
        if workflows.is_empty() {
            tracing::debug!("workflow list empty or unavailable; keeping agents");
            return false;
        }
        let agents: Vec<Agent> = workflows.iter().map(Agent::from_workflow).collect();
        tracing::debug!(count = agents.len(), "mirrored agents from workflows");
        self.state.write().await.agents = agents;
        true
    }

    /// Engine workflows, passed through unchanged.
    pub async fn workflows(&self) -> Vec<Workflow> {
        self.engine.list_workflows().await
    }

    pub async fn set_workflow_active(&self, workflow_id: &str, active: bool) -> bool {
        if active {
            self.engine.activate_workflow(workflow_id).await
        } else {
            self.engine.deactivate_workflow(workflow_id).await
        }
    }

    /// Create an agent, provisioning a backing workflow when the engine
    /// allows it. Provisioning failure is not an error.
    pub async fn create_agent(&self, input: NewAgent) -> Result<Agent> {
        let workflow = self.engine.create_workflow(&input.name).await;
        if workflow.is_none() {
            tracing::warn!(name = %input.name, "creating agent without a backing workflow");
        }

        let agent = self
            .mutate(|state| {
                let agent = Agent {
                    id: unique_agent_id(&state.agents, Utc::now().timestamp_millis()),
                    name: input.name,
                    kind: input.kind,
                    n8n_workflow_id: workflow.map(|w| w.id),
                };
                state.agents.push(agent.clone());
                Ok(agent)
            })
            .await?;

        tracing::info!(agent_id = %agent.id, "agent created");
        Ok(agent)
    }

    /// Point a slot at an agent, or clear it with `None`. The agent id is not
    /// checked against the agent list.
    pub async fn assign_agent(&self, slot_id: &str, agent_id: Option<&str>) -> Result<Slot> {
        let agent_id = agent_id.filter(|id| !id.is_empty());
        let exclusive = self.exclusive_assignments;

        let slot = self
            .mutate(|state| {
                let index = state
                    .slots
                    .iter()
                    .position(|s| s.id == slot_id)
                    .ok_or_else(|| OrchestratorError::SlotNotFound(slot_id.to_string()))?;

                if let (true, Some(id)) = (exclusive, agent_id) {
                    for (i, other) in state.slots.iter_mut().enumerate() {
                        if i != index && other.assigned_agent_id.as_deref() == Some(id) {
                            tracing::info!(slot_id = %other.id, agent_id = id, "releasing agent from previous slot");
                            other.assign(None);
                        }
                    }
                }

                state.slots[index].assign(agent_id);
                Ok(state.slots[index].clone())
            })
            .await?;

        tracing::info!(slot_id, agent_id = ?agent_id, status = ?slot.status, "slot assignment updated");
        Ok(slot)
    }

    /// Register a work with the domain API. The `writers` display string is
    /// parsed into shares for submission and kept verbatim locally.
    pub async fn create_work(&self, input: NewWork, audio: Option<AudioUpload>) -> Result<Work> {
        let shares = writers::parse_writers(&input.writers);
        let iswc = input.iswc.as_deref().unwrap_or_default();

        let saved = self
            .api
            .create_work(WorkSubmission {
                title: &input.title,
                iswc,
                writers: &shares,
                audio: audio.as_ref(),
            })
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, title = %input.title, "work registration failed");
                OrchestratorError::WorkCreationFailed(e.remote_message())
            })?;

        let work = Work {
            id: saved.id,
            title: if saved.title.is_empty() {
                input.title.clone()
            } else {
                saved.title
            },
            iswc: saved.iswc.unwrap_or_default(),
            writers: input.writers,
            status: WorkStatus::Registered,
            audio_url: saved.audio_url,
        };

        self.mutate(|state| {
            upsert(&mut state.works, work.clone());
            Ok(())
        })
        .await?;

        tracing::info!(work_id = %work.id, "work registered");
        Ok(work)
    }

    pub async fn create_campaign(&self, input: NewCampaign) -> Result<Campaign> {
        let campaign = self.api.create_campaign(&input).await.map_err(|e| {
            tracing::warn!(error = %e, name = %input.name, "campaign creation failed");
            OrchestratorError::CampaignCreationFailed(e.remote_message())
        })?;

        self.mutate(|state| {
            upsert(&mut state.campaigns, campaign.clone());
            Ok(())
        })
        .await?;

        tracing::info!(campaign_id = %campaign.id, "campaign created");
        Ok(campaign)
    }

    /// Trigger a campaign remotely and mark the local mirror `Active`. The
    /// remote state is trusted without a re-fetch.
    pub async fn trigger_campaign(&self, campaign_id: &str) -> Result<TriggerAck> {
        self.api.trigger_campaign(campaign_id).await.map_err(|e| {
            tracing::warn!(error = %e, campaign_id, "campaign trigger failed");
            OrchestratorError::CampaignTriggerFailed(e.remote_message())
        })?;

        self.mutate(|state| {
            match state.campaigns.iter_mut().find(|c| c.id == campaign_id) {
                Some(campaign) => campaign.status = CampaignStatus::Active,
                None => tracing::debug!(campaign_id, "triggered campaign not in local mirror"),
            }
            Ok(())
        })
        .await?;

        Ok(TriggerAck {
            success: true,
            message: "Campaign triggered".to_string(),
        })
    }
}
