pub mod agent;
pub mod campaign;
pub mod config;
pub(crate) mod id;
pub mod slot;
pub mod snapshot;
pub mod work;
pub mod workflow;

pub use agent::{Agent, NewAgent};
pub use campaign::{Campaign, CampaignStatus, NewCampaign, TriggerAck};
pub use config::OrchestratorConfig;
pub use slot::{Phase, Slot, SlotStatus};
pub use snapshot::OrchestratorData;
pub use work::{AudioUpload, NewWork, Work, WorkStatus, WriterShare};
pub use workflow::Workflow;
