// Each test binary compiles this module independently and uses a different
// subset of helpers, so unused-function warnings are expected.
#![allow(dead_code)]

use std::path::PathBuf;

use mockito::{Mock, ServerGuard};
use so_core::models::OrchestratorConfig;
use so_core::Orchestrator;

/// Stub workflow engine, stub domain API and a scratch data directory.
pub struct Harness {
    pub engine: ServerGuard,
    pub api: ServerGuard,
    pub dir: tempfile::TempDir,
}

impl Harness {
    pub async fn new() -> Self {
        Self {
            engine: mockito::Server::new_async().await,
            api: mockito::Server::new_async().await,
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn data_path(&self) -> PathBuf {
        self.dir.path().join("orchestrator-data.json")
    }

    pub fn config(&self) -> OrchestratorConfig {
        let mut config = OrchestratorConfig::new(&self.engine.url(), &self.api.url());
        config.n8n_api_key = "test-key".into();
        config.data_path = self.data_path();
        config
    }

    pub async fn orchestrator(&self) -> Orchestrator {
        Orchestrator::open(&self.config()).await.unwrap()
    }

    /// Engine answers `GET /api/v1/workflows` with the given `(id, name)` pairs.
    pub async fn mock_workflows(&mut self, workflows: &[(&str, &str)]) -> Mock {
        let data: Vec<_> = workflows
            .iter()
            .map(|(id, name)| serde_json::json!({ "id": id, "name": name, "active": true }))
            .collect();
        self.engine
            .mock("GET", "/api/v1/workflows")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::json!({ "data": data }).to_string())
            .create_async()
            .await
    }

    /// Engine accepts workflow creation and returns `id`.
    pub async fn mock_create_workflow(&mut self, id: &str) -> Mock {
        self.engine
            .mock("POST", "/api/v1/workflows")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::json!({ "id": id, "name": "created", "active": true }).to_string())
            .create_async()
            .await
    }

    /// Domain API answers `method path` with a JSON body.
    pub async fn mock_api_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.api
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}
