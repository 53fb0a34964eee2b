//! docstore-core - Core traits and types for the document store
//!
//! This crate provides the fundamental abstraction that allows the HTTP API
//! layer to serve documents without knowing where they live, plus the
//! filesystem-backed implementation used in production.
//!
//! # Usage
//!
//! ```ignore
//! use docstore_core::FsDocumentStore;
//!
//! let store = FsDocumentStore::new("./uploads")?;
//! store.put("report.txt", b"hello".as_ref().into()).await?;
//! let content = store.get("report.txt").await?;
//! ```

pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{validate_name, DocumentBackend, FsDocumentStore};
