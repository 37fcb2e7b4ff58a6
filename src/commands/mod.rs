//! Tauri IPC command layer.
//!
//! Thin wrappers over the repository and the interaction core: open the
//! database, call in, map errors to strings for the frontend. Decisions
//! about prompting or blocking stay on the frontend side; commands only
//! return data.

pub mod interactions;
pub mod medications;
pub mod schedule;
pub mod state;

use serde::Serialize;

use crate::config;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Liveness probe for the frontend splash screen.
#[tauri::command]
pub fn health_check() -> HealthStatus {
    HealthStatus {
        status: "ok",
        version: config::APP_VERSION,
    }
}
