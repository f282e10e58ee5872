// src/services/notification_service.rs
use async_trait::async_trait;
use std::sync::Arc;
use tracing;

use crate::{
    errors::NotificationsError as AppError,
    models::notification::{NewNotification, Notification, NotificationForm},
    services::store::NotificationStore,
};

#[async_trait]
pub trait NotificationOperations: Send + Sync {
    async fn list_notifications(&self) -> Result<Vec<Notification>, AppError>;
    async fn create_notification(&self, form: NotificationForm) -> Result<(), AppError>;
}

/// Accepts the raw form value if it has any non-whitespace content.
/// The value is returned as submitted; trimming only decides acceptance.
pub fn validate_message(message: Option<&str>) -> Result<&str, AppError> {
    match message {
        Some(message) if !message.trim().is_empty() => Ok(message),
        _ => Err(AppError::MessageRequired),
    }
}

pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
}

impl NotificationService {
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl NotificationOperations for NotificationService {
    async fn list_notifications(&self) -> Result<Vec<Notification>, AppError> {
        let notifications = self.store.list_recent().await.map_err(|e| {
            tracing::error!("Notification query failed: {}", e);
            AppError::store_query(e)
        })?;

        tracing::debug!("Fetched {} notifications", notifications.len());
        Ok(notifications)
    }

    async fn create_notification(&self, form: NotificationForm) -> Result<(), AppError> {
        let message = match validate_message(form.message.as_deref()) {
            Ok(message) => message.to_string(),
            Err(e) => {
                tracing::warn!("Rejected notification: {}", e);
                return Err(e);
            }
        };

        self.store
            .insert(NewNotification { message })
            .await
            .map_err(|e| {
                tracing::error!("Notification insert failed: {}", e);
                AppError::store_insert(e)
            })?;

        tracing::info!("Notification created");
        Ok(())
    }
}
