use serde::{Deserialize, Serialize};

/// Campaign lifecycle as reported by the domain API. Values this crate does
/// not act on are kept verbatim in `Other`; a missing or null status reads as
/// `Draft`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Option<String>", into = "String")]
pub enum CampaignStatus {
    #[default]
    Draft,
    Active,
    Other(String),
}

impl From<Option<String>> for CampaignStatus {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            None | Some("Draft") => Self::Draft,
            Some("Active") => Self::Active,
            Some(_) => Self::Other(value.unwrap_or_default()),
        }
    }
}

impl From<CampaignStatus> for String {
    fn from(status: CampaignStatus) -> Self {
        match status {
            CampaignStatus::Draft => "Draft".to_string(),
            CampaignStatus::Active => "Active".to_string(),
            CampaignStatus::Other(s) => s,
        }
    }
}

/// Mirror of a campaign record owned by the domain API. Fields this crate
/// does not model are carried through untouched in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(deserialize_with = "super::id::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_strategy: Option<String>,
    #[serde(default)]
    pub status: CampaignStatus,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Input for creating a campaign.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub name: String,
    pub platform: String,
    pub content_strategy: String,
}

/// Body posted to the domain API; new campaigns always start as drafts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CampaignPayload<'a> {
    pub name: &'a str,
    pub platform: &'a str,
    pub content_strategy: &'a str,
    pub status: CampaignStatus,
}

impl<'a> From<&'a NewCampaign> for CampaignPayload<'a> {
    fn from(c: &'a NewCampaign) -> Self {
        Self {
            name: &c.name,
            platform: &c.platform,
            content_strategy: &c.content_strategy,
            status: CampaignStatus::Draft,
        }
    }
}

/// Acknowledgement returned after a campaign trigger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TriggerAck {
    pub success: bool,
    pub message: String,
}
