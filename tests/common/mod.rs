//! Shared helpers for integration tests

#![allow(dead_code)]

use carefinder::api::ApiClient;
use carefinder::mock_server;
use carefinder::storage::{MemoryStore, SharedStore};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Mock API on an ephemeral port; aborted when dropped
pub struct MockApi {
    pub addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl MockApi {
    pub async fn start() -> Self {
        let (addr, handle) = mock_server::spawn(([127, 0, 0, 1], 0).into())
            .await
            .expect("mock server should bind");
        Self { addr, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Client plus the store it keeps its token in
    pub fn client(&self) -> (Arc<ApiClient>, MemoryStore) {
        let store = MemoryStore::new();
        let shared: SharedStore = Arc::new(store.clone());
        let client = ApiClient::new(&self.base_url(), Duration::from_secs(5), shared)
            .expect("client should build");
        (Arc::new(client), store)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Serve an arbitrary axum router on an ephemeral port
pub async fn serve_router(router: axum::Router) -> (String, JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stub server should bind");
    let addr = listener.local_addr().expect("bound address");
    let handle = tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    (format!("http://{addr}/api"), handle)
}
