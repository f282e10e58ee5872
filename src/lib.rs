pub mod errors;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Re-export commonly used types
pub use errors::{NotificationsError, NotificationsResult};
pub use state::{AppConfig, AppState};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification_handler::list_notifications)
                .post(handlers::notification_handler::create_notification),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
