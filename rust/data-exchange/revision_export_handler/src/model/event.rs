use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

use crate::error::ExportError;

/// The EventBridge notification Data Exchange emits when a provider publishes a new revision.
///
/// Only `resources` and `detail.RevisionIds` are used. The envelope fields are kept so they show up
/// in logs. Missing, null or mistyped lists deserialize as empty so the handler can reject them
/// with a typed error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionPublishedEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        default,
        rename = "detail-type",
        skip_serializing_if = "Option::is_none"
    )]
    pub detail_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// The first resource is the data set the revision belongs to
    #[serde(default, deserialize_with = "or_default")]
    pub resources: Vec<String>,
    #[serde(default, deserialize_with = "or_default")]
    pub detail: RevisionPublishedDetail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionPublishedDetail {
    /// The first id is the published revision
    #[serde(rename = "RevisionIds", default, deserialize_with = "or_default")]
    pub revision_ids: Vec<String>,
}

/// Reads any json value, falling back to `T::default()` when it is null or of the wrong shape
fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default())
}

/// Identifies the revision being exported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRef {
    pub dataset_id: String,
    pub revision_id: String,
}

impl RevisionRef {
    /// The key prefix every exported asset of this revision is written under
    pub fn key_prefix(&self, prefix_start: &str) -> String {
        format!(
            "{}/{}/{}",
            prefix_start, self.dataset_id, self.revision_id
        )
    }
}

impl RevisionPublishedEvent {
    /// Takes the data set id from `resources[0]` and the revision id from `detail.RevisionIds[0]`
    pub fn revision_ref(&self) -> Result<RevisionRef, ExportError> {
        let dataset_id = self
            .resources
            .first()
            .ok_or(ExportError::MalformedEvent("event has no resources"))?;

        let revision_id = self
            .detail
            .revision_ids
            .first()
            .ok_or(ExportError::MalformedEvent("event detail has no RevisionIds"))?;

        Ok(RevisionRef {
            dataset_id: dataset_id.clone(),
            revision_id: revision_id.clone(),
        })
    }
}
