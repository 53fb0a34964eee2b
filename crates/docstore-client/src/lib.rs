//! Document Store Client Library
//!
//! Provides a typed HTTP client for communicating with the document store
//! server.
//!
//! # Example
//!
//! ```rust,no_run
//! use docstore_client::DocStoreClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DocStoreClient::new("http://localhost:5000")?;
//!
//!     // Upload a document
//!     let message = client.upload("report.txt", b"hello".to_vec()).await?;
//!     println!("{message}");
//!
//!     // Fetch it back
//!     let content = client.fetch("report.txt").await?;
//!     assert_eq!(&content[..], b"hello");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Testing
//!
//! The `testing` module provides an in-process server for integration tests:
//!
//! ```rust,ignore
//! use docstore_client::testing::TestServer;
//! use docstore_api::{create_router, AppState};
//!
//! let server = TestServer::start(create_router(state)).await?;
//! let content = server.client.fetch("report.txt").await?;
//! ```

mod client;
mod error;
pub mod testing;

pub use client::DocStoreClient;
pub use error::{ClientError, Result};
