// src/models/mod.rs
pub mod notification;

pub use notification::*;
