// src/handlers/notification_handler.rs
use axum::{
    Form, Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::{
    errors::NotificationsResult,
    models::notification::{NotificationForm, NotificationsResponse},
    services::notification_service::NotificationOperations,
    state::AppState,
};

/// True when the client asked for the data rather than the page.
pub fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(|accept| accept.contains("application/json"))
        .unwrap_or(false)
}

/// GET /notifications
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> NotificationsResult<Response> {
    let notifications = state.notification_service.list_notifications().await?;

    if wants_json(&headers) {
        return Ok(Json(NotificationsResponse { notifications }).into_response());
    }

    let page = state.notifications_page.render(Some(&notifications))?;
    Ok(Html(page).into_response())
}

/// POST /notifications
///
/// The body is read as raw field pairs so repeated fields and bodies that
/// are not form-encoded fall through to message validation.
pub async fn create_notification(
    State(state): State<Arc<AppState>>,
    fields: Option<Form<Vec<(String, String)>>>,
) -> NotificationsResult<StatusCode> {
    let form = fields
        .map(|Form(fields)| NotificationForm::from_fields(fields))
        .unwrap_or_default();

    state.notification_service.create_notification(form).await?;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{
        memory_store::MemoryStore,
        store::{FailingStore, NotificationStore},
    };
    use axum::{
        body::Body,
        extract::{FromRequest, Request},
        http::HeaderValue,
    };

    const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

    fn state_with(store: Arc<dyn NotificationStore>) -> Arc<AppState> {
        Arc::new(AppState::with_store(store).unwrap())
    }

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers
    }

    /// Runs a raw POST body through the extractor, then the handler.
    async fn submit(state: Arc<AppState>, content_type: &str, body: &'static str) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri("/notifications")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body))
            .unwrap();

        let fields = Option::<Form<Vec<(String, String)>>>::from_request(request, &()).await.unwrap();
        create_notification(State(state), fields).await.into_response()
    }

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn list_json(state: Arc<AppState>) -> NotificationsResponse {
        let response = list_notifications(State(state), json_headers()).await.unwrap();
        serde_json::from_str(&body_string(response).await).unwrap()
    }

    #[test]
    fn test_wants_json() {
        assert!(wants_json(&json_headers()));

        let mut browser = HeaderMap::new();
        browser.insert(header::ACCEPT, HeaderValue::from_static("text/html,application/xhtml+xml"));
        assert!(!wants_json(&browser));
        assert!(!wants_json(&HeaderMap::new()));
    }

    #[tokio::test]
    async fn test_empty_table_lists_empty_collection() {
        let state = state_with(Arc::new(MemoryStore::new()));

        let response = list_notifications(State(state), json_headers()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body, serde_json::json!({ "notifications": [] }));
    }

    #[tokio::test]
    async fn test_empty_table_renders_no_items() {
        let state = state_with(Arc::new(MemoryStore::new()));

        let response = list_notifications(State(state), HeaderMap::new()).await.unwrap();
        let page = body_string(response).await;
        assert!(page.contains("Weekly Notifications"));
        assert!(!page.contains("<li"));
    }

    #[tokio::test]
    async fn test_page_lists_submitted_message() {
        let state = state_with(Arc::new(MemoryStore::new()));
        submit(state.clone(), FORM_CONTENT_TYPE, "message=Build+passed").await;

        let response = list_notifications(State(state), HeaderMap::new()).await.unwrap();
        let page = body_string(response).await;
        assert_eq!(page.matches("<li").count(), 1);
        assert!(page.contains("Build passed"));
    }

    #[tokio::test]
    async fn test_create_then_list_newest_first() {
        let state = state_with(Arc::new(MemoryStore::new()));

        let response = submit(state.clone(), FORM_CONTENT_TYPE, "message=Deploy+started").await;
        assert_eq!(response.status(), StatusCode::OK);
        let response = submit(state.clone(), FORM_CONTENT_TYPE, "message=Build%20passed").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.is_empty());

        let body = list_json(state).await;
        assert_eq!(body.notifications.len(), 2);
        assert_eq!(body.notifications[0].message, "Build passed");
        assert_eq!(body.notifications[1].message, "Deploy started");
        assert!(body.notifications[0].created_at > body.notifications[1].created_at);
    }

    #[tokio::test]
    async fn test_repeated_message_field_uses_first_value() {
        let state = state_with(Arc::new(MemoryStore::new()));

        let response = submit(state.clone(), FORM_CONTENT_TYPE, "message=first&message=second").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.is_empty());

        let body = list_json(state).await;
        assert_eq!(body.notifications.len(), 1);
        assert_eq!(body.notifications[0].message, "first");
    }

    #[tokio::test]
    async fn test_submitted_whitespace_is_stored_as_is() {
        let state = state_with(Arc::new(MemoryStore::new()));

        let response = submit(state.clone(), FORM_CONTENT_TYPE, "message=%20%20spaced%20%20").await;
        assert_eq!(response.status(), StatusCode::OK);

        assert_eq!(list_json(state).await.notifications[0].message, "  spaced  ");
    }

    #[tokio::test]
    async fn test_blank_or_missing_messages_are_rejected() {
        let store = Arc::new(MemoryStore::new());
        let state = state_with(store.clone());

        let bodies = [
            (FORM_CONTENT_TYPE, ""),
            (FORM_CONTENT_TYPE, "other=1"),
            (FORM_CONTENT_TYPE, "message="),
            (FORM_CONTENT_TYPE, "message=%20%20%20"),
            (FORM_CONTENT_TYPE, "message=+++&message=later"),
            ("text/plain", "message=hello"),
        ];

        for (content_type, body) in bodies {
            let response = submit(state.clone(), content_type, body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {:?}", body);

            let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
            assert_eq!(body, serde_json::json!({ "error": "Message is required" }));
        }

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_read_failure_returns_store_message() {
        let state = state_with(Arc::new(FailingStore("JWT expired")));

        let response = list_notifications(State(state), json_headers()).await.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, "JWT expired");
    }

    #[tokio::test]
    async fn test_write_failure_returns_json_error() {
        let state = state_with(Arc::new(FailingStore("new row violates row-level security policy")));

        let response = submit(state, FORM_CONTENT_TYPE, "message=hello").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body["error"], "new row violates row-level security policy");
    }
}
