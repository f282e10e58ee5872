// src/services/store.rs
use async_trait::async_trait;
use thiserror::Error;

use crate::models::notification::{NewNotification, Notification};

/// Failure reported by a notification store. Displays as the store's own
/// message so callers can surface it unchanged.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Decode(String),
}

impl StoreError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        StoreError::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        StoreError::Transport(message.into())
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Transport(err.to_string())
        }
    }
}

#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// All rows, newest `created_at` first.
    async fn list_recent(&self) -> Result<Vec<Notification>, StoreError>;

    /// Insert one row. The store assigns `id` and `created_at`.
    async fn insert(&self, notification: NewNotification) -> Result<(), StoreError>;
}

/// Store double whose every call fails with the given message.
#[cfg(test)]
pub(crate) struct FailingStore(pub &'static str);

#[cfg(test)]
#[async_trait]
impl NotificationStore for FailingStore {
    async fn list_recent(&self) -> Result<Vec<Notification>, StoreError> {
        Err(StoreError::rejected(500, self.0))
    }

    async fn insert(&self, _notification: NewNotification) -> Result<(), StoreError> {
        Err(StoreError::rejected(500, self.0))
    }
}
