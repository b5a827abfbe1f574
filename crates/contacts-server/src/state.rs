//! Application state with a shared `ContactService` for concurrent access.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>`. The server
//! runs on the multi-threaded runtime, so requests are handled in parallel;
//! the mutex serializes every store operation, which keeps id assignment
//! unique and updates from being lost. Handlers await the lock without
//! blocking the runtime.

use std::sync::Arc;

use crate::config::StoreBackend;
use crate::service::ContactService;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared contact service (async Mutex -- non-blocking await).
    pub service: Arc<tokio::sync::Mutex<ContactService>>,
}

impl AppState {
    /// Creates a new `AppState` over an empty store of the given backend.
    pub fn new(backend: StoreBackend) -> Self {
        AppState::from_service(ContactService::new(backend))
    }

    /// Creates a new `AppState` with the default in-memory store.
    pub fn in_memory() -> Self {
        AppState::new(StoreBackend::Memory)
    }

    pub fn from_service(service: ContactService) -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        }
    }
}
