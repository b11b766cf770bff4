//! Baro client core: the request/response pipeline of an emergency
//! medical assistance assistant.
//!
//! The UI shell collects a free-text emergency description, optionally
//! acquires the device position through [`location::LocationAcquirer`],
//! and submits both through [`emergency::EmergencyApiClient`], rendering
//! the typed responses in [`models`]. All user-facing failure text comes
//! from the error types' `Display` output.

pub mod chat; // Conversation log for the chat view
pub mod config; // Runtime mode + endpoint resolution
pub mod emergency; // Remote guidance/hospital operations
pub mod location; // Geolocation acquisition state machine
pub mod models;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the embedding shell. Call once at startup.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} client core v{}", config::APP_NAME, config::APP_VERSION);
}
