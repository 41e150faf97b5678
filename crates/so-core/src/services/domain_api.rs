use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::{OrchestratorError, Result};
use crate::models::campaign::CampaignPayload;
use crate::models::work::ApiWork;
use crate::models::{AudioUpload, Campaign, NewCampaign, WriterShare};

use super::endpoint::endpoint;

/// Client for the backend that owns works and campaigns.
#[derive(Clone)]
pub struct DomainApiClient {
    base_url: String,
    client: Client,
}

/// Fields of a work registration, already normalized for the wire.
pub(crate) struct WorkSubmission<'a> {
    pub title: &'a str,
    pub iswc: &'a str,
    pub writers: &'a [WriterShare],
    pub audio: Option<&'a AudioUpload>,
}

impl DomainApiClient {
    pub fn new(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn url(&self, segments: &[&str]) -> Result<Url> {
        endpoint(&self.base_url, segments)
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response> {
        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OrchestratorError::ApiRequestFailed {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let url = self.url(segments)?;
        tracing::debug!(%url, "domain API request");
        let response = self.send(self.client.get(url)).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn list_works(&self) -> Result<Vec<ApiWork>> {
        self.get_json(&["works"]).await
    }

    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>> {
        self.get_json(&["campaigns"]).await
    }

    pub async fn fetch_analytics(&self) -> Result<serde_json::Value> {
        self.get_json(&["campaigns", "analytics"]).await
    }

    pub(crate) async fn create_work(&self, work: WorkSubmission<'_>) -> Result<ApiWork> {
        let mut form = Form::new()
            .text("title", work.title.to_string())
            .text("iswc", work.iswc.to_string())
            .text("writers", serde_json::to_string(work.writers)?);

        if let Some(audio) = work.audio {
            match audio_part(audio) {
                Ok(part) => form = form.part("audioFile", part),
                Err(e) => {
                    tracing::warn!(error = %e, file = %audio.file_name, "skipping audio attachment")
                }
            }
        }

        let url = self.url(&["works"])?;
        tracing::debug!(%url, title = work.title, "registering work");
        let response = self.send(self.client.post(url).multipart(form)).await?;
        Ok(response.json().await?)
    }

    pub async fn create_campaign(&self, campaign: &NewCampaign) -> Result<Campaign> {
        let url = self.url(&["campaigns"])?;
        let payload = CampaignPayload::from(campaign);
        let response = self.send(self.client.post(url).json(&payload)).await?;
        Ok(response.json().await?)
    }

    pub async fn trigger_campaign(&self, campaign_id: &str) -> Result<()> {
        let url = self.url(&["campaigns", campaign_id, "trigger"])?;
        self.send(self.client.post(url)).await?;
        Ok(())
    }
}

fn audio_part(audio: &AudioUpload) -> Result<Part> {
    let part = Part::bytes(audio.bytes.clone()).file_name(audio.file_name.clone());
    match &audio.mime_type {
        Some(mime) => Ok(part.mime_str(mime)?),
        None => Ok(part),
    }
}
