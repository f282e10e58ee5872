// src/services/mod.rs
pub mod memory_store;
pub mod notification_service;
pub mod store;
pub mod supabase_store;
