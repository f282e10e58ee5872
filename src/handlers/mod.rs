// src/handlers/mod.rs
pub mod notification_handler;
