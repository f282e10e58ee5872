// src/models/notification.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Notification {
    #[serde(deserialize_with = "deserialize_opaque_id")]
    pub id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,   // Assigned by the store, never by the client
}

// Request/Response Models
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NewNotification {
    pub message: String,             // Raw form value, not trimmed
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct NotificationForm {
    pub message: Option<String>,
}

impl NotificationForm {
    /// First `message` value among the submitted fields; repeats are ignored.
    pub fn from_fields(fields: Vec<(String, String)>) -> Self {
        Self {
            message: fields
                .into_iter()
                .find(|(name, _)| name == "message")
                .map(|(_, value)| value),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OpaqueId {
    Text(String),
    Integer(i64),
}

/// Tables keyed by a uuid report ids as strings, identity columns as integers.
fn deserialize_opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OpaqueId::deserialize(deserializer)? {
        OpaqueId::Text(id) => id,
        OpaqueId::Integer(id) => id.to_string(),
    })
}
