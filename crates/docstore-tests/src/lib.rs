//! Integration tests for the document store server
//!
//! This crate contains end-to-end tests that exercise the full stack:
//! - HTTP API layer (router, multipart handling, error bodies)
//! - Filesystem document store
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p docstore-tests
//! ```
//!
//! Each test spins up its own in-process server over a fresh temporary
//! storage directory, so tests are independent and can run in parallel.
//!
//! # Test Structure
//!
//! - `http_contract_test.rs` - the exact HTTP surface (status codes and
//!   response bodies) plus round-trip and overwrite behavior

use std::sync::Arc;

use docstore_api::{create_router, AppState};
use docstore_client::testing::TestServer;
use docstore_core::FsDocumentStore;
use tempfile::TempDir;

/// An in-process server over a fresh temporary storage directory.
///
/// The temp directory is held so tests can inspect what landed on disk;
/// both it and the server are torn down on drop.
pub struct TestHarness {
    pub server: TestServer,
    pub storage: TempDir,
}

impl TestHarness {
    pub async fn new() -> Self {
        let storage = tempfile::tempdir().expect("temp dir");
        let store = FsDocumentStore::new(storage.path()).expect("store");
        let state = AppState::new(Arc::new(store));
        let server = TestServer::start(create_router(state))
            .await
            .expect("test server");

        Self { server, storage }
    }

    /// Absolute URL for a server path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.base_url(), path)
    }

    /// Names of the files currently in the storage directory
    pub fn stored_names(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.storage.path())
            .expect("read storage dir")
            .map(|e| e.expect("dir entry").file_name().into_string().unwrap())
            .collect();
        names.sort();
        names
    }
}
