// src/services/supabase_store.rs
use async_trait::async_trait;
use serde::Deserialize;
use tracing;

use crate::{
    models::notification::{NewNotification, Notification},
    services::store::{NotificationStore, StoreError},
};

pub const NOTIFICATIONS_TABLE: &str = "notifications";
const SELECT_COLUMNS: &str = "id,message,created_at";
const ORDER_NEWEST_FIRST: &str = "created_at.desc";

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    pub table: String,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            anon_key: anon_key.into(),
            table: NOTIFICATIONS_TABLE.to_string(),
        }
    }

    /// Reads `SUPABASE_URL` and `SUPABASE_ANON_KEY`; `None` unless both are set.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("SUPABASE_URL").ok().filter(|v| !v.trim().is_empty())?;
        let anon_key = std::env::var("SUPABASE_ANON_KEY").ok().filter(|v| !v.trim().is_empty())?;
        Some(Self::new(url, anon_key))
    }

    pub fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), self.table)
    }
}

/// Error body returned by PostgREST on a rejected request.
#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
}

pub struct SupabaseStore {
    config: SupabaseConfig,
    client: reqwest::Client,
}

impl SupabaseStore {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn request(&self, method: reqwest::Method) -> reqwest::RequestBuilder {
        self.client
            .request(method, self.config.table_url())
            .header("apikey", &self.config.anon_key)
            .header("Authorization", format!("Bearer {}", self.config.anon_key))
    }

    fn list_request(&self) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::GET)
            .query(&[("select", SELECT_COLUMNS), ("order", ORDER_NEWEST_FIRST)])
    }

    fn insert_request(&self, notification: NewNotification) -> reqwest::RequestBuilder {
        self.request(reqwest::Method::POST)
            .header("Prefer", "return=minimal")
            .json(&[notification])
    }

    async fn rejection(response: reqwest::Response) -> StoreError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        StoreError::rejected(status, error_message(&body, status))
    }
}

/// The PostgREST `message` field when present, else the raw body.
fn error_message(body: &str, status: u16) -> String {
    match serde_json::from_str::<PostgrestError>(body) {
        Ok(err) => err.message,
        Err(_) if !body.trim().is_empty() => body.to_string(),
        Err(_) => format!("Store request failed with status {}", status),
    }
}

#[async_trait]
impl NotificationStore for SupabaseStore {
    async fn list_recent(&self) -> Result<Vec<Notification>, StoreError> {
        tracing::debug!("Querying {} newest first", self.config.table);

        let response = self.list_request().send().await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        Ok(response.json::<Vec<Notification>>().await?)
    }

    async fn insert(&self, notification: NewNotification) -> Result<(), StoreError> {
        tracing::debug!("Inserting into {}", self.config.table);

        let response = self.insert_request(notification).send().await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        Ok(())
    }
}
