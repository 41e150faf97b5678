use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WorkStatus {
    Registered,
}

/// Local projection of a work record owned by the domain API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Work {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub iswc: String,
    /// Display form, e.g. `"Jane Doe (50%), John Roe (50%)"`.
    #[serde(default)]
    pub writers: String,
    pub status: WorkStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

/// A writer's share as submitted to the domain API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WriterShare {
    pub name: String,
    pub performance_split: u32,
    pub mechanical_split: u32,
}

/// Input for registering a work.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewWork {
    pub title: String,
    #[serde(default)]
    pub iswc: Option<String>,
    #[serde(default)]
    pub writers: String,
}

/// Optional audio attached to a work registration.
#[derive(Debug, Clone)]
pub struct AudioUpload {
    pub file_name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// A work as returned by the domain API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiWork {
    #[serde(deserialize_with = "super::id::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub iswc: Option<String>,
    #[serde(default)]
    pub writers: Option<Vec<ApiWriter>>,
    #[serde(default)]
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiWriter {
    pub name: String,
    #[serde(default)]
    pub performance_split: f64,
}

impl ApiWork {
    /// Project into the local shape, rendering writers as display text.
    pub fn into_work(self) -> Work {
        let writers = self
            .writers
            .unwrap_or_default()
            .iter()
            .map(|w| format!("{} ({}%)", w.name, w.performance_split))
            .collect::<Vec<_>>()
            .join(", ");
        Work {
            id: self.id,
            title: self.title,
            iswc: self.iswc.unwrap_or_default(),
            writers,
            status: WorkStatus::Registered,
            audio_url: self.audio_url,
        }
    }
}
