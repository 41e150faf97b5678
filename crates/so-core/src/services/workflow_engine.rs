//! Client for the workflow engine's versioned REST API.
//!
//! Every request carries the API key header and a JSON content type. Non-2xx
//! responses become [`OrchestratorError::EngineRequestFailed`]. The public
//! operations are fail-soft: listing yields an empty list, creation yields
//! `None`, activation toggles yield `false`. Nothing is retried.

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::{OrchestratorError, Result};
use crate::models::workflow::{Workflow, WorkflowList};

use super::endpoint::endpoint;

const API_KEY_HEADER: &str = "X-N8N-API-KEY";

#[derive(Clone)]
pub struct WorkflowEngineClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl WorkflowEngineClient {
    pub fn new(base_url: &str, api_key: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &[&str],
        body: Option<&serde_json::Value>,
    ) -> Result<Response> {
        let segments: Vec<&str> = ["api", "v1"].iter().chain(path).copied().collect();
        let url = endpoint(&self.base_url, &segments)?;
        tracing::debug!(%method, %url, "workflow engine request");

        let mut req = self
            .client
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OrchestratorError::EngineRequestFailed {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &[&str],
        body: Option<&serde_json::Value>,
    ) -> Result<T> {
        let response = self.send(method, path, body).await?;
        Ok(response.json().await?)
    }

    /// List workflows, propagating failures.
    pub async fn try_list_workflows(&self) -> Result<Vec<Workflow>> {
        let list: WorkflowList = self.request(Method::GET, &["workflows"], None).await?;
        Ok(list.data)
    }

    /// List workflows. An empty result means "unknown", not "none exist".
    pub async fn list_workflows(&self) -> Vec<Workflow> {
        match self.try_list_workflows().await {
            Ok(workflows) => workflows,
            Err(e) => {
                tracing::warn!(error = %e, "failed to list workflows");
                Vec::new()
            }
        }
    }

    /// Create an active workflow with an empty graph.
    pub async fn create_workflow(&self, name: &str) -> Option<Workflow> {
        let payload = json!({
            "name": name,
            "nodes": [],
            "connections": {},
            "settings": {},
            "active": true,
        });
        match self
            .request(Method::POST, &["workflows"], Some(&payload))
            .await
        {
            Ok(workflow) => Some(workflow),
            Err(e) => {
                tracing::warn!(error = %e, name, "failed to create workflow");
                None
            }
        }
    }

    pub async fn activate_workflow(&self, id: &str) -> bool {
        self.toggle(id, "activate").await
    }

    pub async fn deactivate_workflow(&self, id: &str) -> bool {
        self.toggle(id, "deactivate").await
    }

    async fn toggle(&self, id: &str, action: &str) -> bool {
        match self.send(Method::POST, &["workflows", id, action], None).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!(error = %e, workflow_id = id, action, "workflow toggle failed");
                false
            }
        }
    }
}
