// src/views/notifications_page.rs
use chrono::{DateTime, Utc};
use handlebars::Handlebars;
use serde::Serialize;

use crate::{
    errors::{NotificationsError, NotificationsResult},
    models::notification::Notification,
};

const PAGE_TEMPLATE: &str = "notifications";
const PAGE_TITLE: &str = "Weekly Notifications";

/// en-US locale rendering, e.g. `3/4/2024, 9:15:00 AM`.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}

#[derive(Debug, Serialize)]
struct PageContext<'a> {
    title: &'a str,
    notifications: Vec<ItemContext<'a>>,
}

#[derive(Debug, Serialize)]
struct ItemContext<'a> {
    id: &'a str,
    message: &'a str,
    created_at: String,
}

/// The page shell: submission form followed by one list item per
/// notification. Values are HTML-escaped by the template engine.
#[derive(Debug)]
pub struct NotificationsPage {
    template_engine: Handlebars<'static>,
}

impl NotificationsPage {
    pub fn new() -> NotificationsResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars
            .register_template_string(PAGE_TEMPLATE, include_str!("templates/notifications.hbs"))
            .map_err(|e| NotificationsError::render(format!("Failed to register page template: {}", e)))?;

        Ok(Self {
            template_engine: handlebars,
        })
    }

    /// Renders items in the order given. `None` renders an empty list.
    pub fn render(&self, notifications: Option<&[Notification]>) -> NotificationsResult<String> {
        let context = PageContext {
            title: PAGE_TITLE,
            notifications: notifications
                .unwrap_or_default()
                .iter()
                .map(|n| ItemContext {
                    id: &n.id,
                    message: &n.message,
                    created_at: format_timestamp(&n.created_at),
                })
                .collect(),
        };

        self.template_engine
            .render(PAGE_TEMPLATE, &context)
            .map_err(|e| NotificationsError::render(e.to_string()))
    }
}
