// src/services/memory_store.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing;

use crate::{
    models::notification::{NewNotification, Notification},
    services::store::{NotificationStore, StoreError},
    utils::id_generator::IdGenerator,
};

/// In-process store for development and testing
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: RwLock<Vec<Notification>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing rows, e.g. ones with fixed timestamps.
    #[cfg(test)]
    pub(crate) fn with_rows(rows: Vec<Notification>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

// Strictly after every existing row, even if the wall clock stalls or steps back
fn next_created_at(rows: &[Notification], now: DateTime<Utc>) -> DateTime<Utc> {
    match rows.iter().map(|row| row.created_at).max() {
        Some(latest) if latest >= now => latest + Duration::microseconds(1),
        _ => now,
    }
}

#[async_trait]
impl NotificationStore for MemoryStore {
    async fn list_recent(&self) -> Result<Vec<Notification>, StoreError> {
        let mut rows = self.rows.read().await.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn insert(&self, notification: NewNotification) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        let created_at = next_created_at(&rows, Utc::now());
        let row = Notification {
            id: IdGenerator::generate_with_timestamp(created_at),
            message: notification.message,
            created_at,
        };

        tracing::debug!("[MEMORY] Stored notification {}", row.id);
        rows.push(row);
        Ok(())
    }
}
