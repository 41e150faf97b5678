pub mod catalog;
pub mod config_loader;
pub mod domain_api;
pub(crate) mod endpoint;
pub mod orchestrator;
pub mod state;
pub mod workflow_engine;
pub mod writers;
