#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use kv_shortener::AppState;
use kv_shortener::domain::keys;
use kv_shortener::domain::store::KeyValueStore;
use kv_shortener::infrastructure::store::MemoryStore;
use kv_shortener::routes::router;

pub fn create_test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(store.clone(), None);
    (state, store)
}

pub fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    let (state, store) = create_test_state();
    let server = TestServer::new(router(state)).unwrap();
    (server, store)
}

/// Writes a link directly into the store, bypassing the engine.
pub async fn create_test_link(store: &MemoryStore, code: &str, url: &str) {
    store.set(&keys::short_link(code), url, None).await.unwrap();
    let detail = serde_json::json!({
        "url": url,
        "create_at": "2024-05-01T10:00:00Z",
        "expired": 0
    });
    store
        .set(&keys::short_link_detail(code), &detail.to_string(), None)
        .await
        .unwrap();
}
