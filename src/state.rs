//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::domain::store::KeyValueStore;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub store: Arc<dyn KeyValueStore>,
    /// Public base URL used to render full short links, if configured.
    pub base_url: Option<String>,
}

impl AppState {
    /// Builds the state around a single store shared by the engine and health checks.
    pub fn new(store: Arc<dyn KeyValueStore>, base_url: Option<String>) -> Self {
        Self {
            shortener: Arc::new(ShortenerService::new(store.clone())),
            store,
            base_url,
        }
    }
}
