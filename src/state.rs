// src/state.rs
use std::net::SocketAddr;
use std::sync::Arc;

use crate::{
    errors::{NotificationsError, NotificationsResult},
    services::{
        memory_store::MemoryStore,
        notification_service::NotificationService,
        store::NotificationStore,
        supabase_store::{SupabaseConfig, SupabaseStore},
    },
    views::NotificationsPage,
};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

pub struct AppState {
    pub notification_service: Arc<NotificationService>,
    pub notifications_page: NotificationsPage,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub supabase: Option<SupabaseConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            supabase: None,
        }
    }
}

impl AppConfig {
    /// Reads `BIND_ADDR`, `SUPABASE_URL` and `SUPABASE_ANON_KEY`.
    pub fn from_env() -> NotificationsResult<Self> {
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            bind_addr: parse_bind_addr(&bind_addr)?,
            supabase: SupabaseConfig::from_env(),
        })
    }
}

pub fn parse_bind_addr(value: &str) -> NotificationsResult<SocketAddr> {
    value
        .trim()
        .parse()
        .map_err(|e| NotificationsError::invalid_configuration(format!("BIND_ADDR '{}': {}", value, e)))
}

impl AppState {
    pub fn new(config: &AppConfig) -> NotificationsResult<Self> {
        let store: Arc<dyn NotificationStore> = match config.supabase.clone() {
            Some(supabase) => {
                tracing::info!("Using Supabase store at {}", supabase.url);
                Arc::new(SupabaseStore::new(supabase))
            }
            None => {
                tracing::warn!("SUPABASE_URL or SUPABASE_ANON_KEY not set, using in-memory notification store");
                Arc::new(MemoryStore::new())
            }
        };

        Self::with_store(store)
    }

    pub fn with_store(store: Arc<dyn NotificationStore>) -> NotificationsResult<Self> {
        Ok(Self {
            notification_service: Arc::new(NotificationService::new(store)),
            notifications_page: NotificationsPage::new()?,
        })
    }
}
