pub mod error;
pub mod models;
pub mod services;

pub use error::{OrchestratorError, Result};
pub use services::orchestrator::Orchestrator;
