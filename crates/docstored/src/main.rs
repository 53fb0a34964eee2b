//! docstored - Document Store Daemon
//!
//! HTTP server that accepts document uploads and serves them back by name.
//!
//! Usage:
//!   docstored [OPTIONS] [config.toml]
//!
//! Options:
//!   -b, --bind <ADDR>         Host to listen on (default: 0.0.0.0)
//!   -p, --port <PORT>         TCP port (default: 5000)
//!   -s, --storage-dir <DIR>   Document directory (default: ./uploads)
//!
//! Command-line flags override values from the config file.

mod config;

use std::net::SocketAddr;
use std::sync::Arc;

use docstore_api::{create_router, AppState};
use docstore_core::FsDocumentStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;

/// Parsed command-line arguments
struct Args {
    /// Server config file (TOML)
    config_path: Option<String>,
    bind_address: Option<String>,
    port: Option<u16>,
    storage_dir: Option<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let mut args = Args {
        config_path: None,
        bind_address: None,
        port: None,
        storage_dir: None,
    };

    let mut i = 0;
    while i < argv.len() {
        match argv[i].as_str() {
            "--bind" | "-b" => {
                if i + 1 < argv.len() {
                    args.bind_address = Some(argv[i + 1].clone());
                    i += 2;
                } else {
                    anyhow::bail!("Missing argument for --bind");
                }
            }
            "--port" | "-p" => {
                if i + 1 < argv.len() {
                    args.port = Some(argv[i + 1].parse()?);
                    i += 2;
                } else {
                    anyhow::bail!("Missing argument for --port");
                }
            }
            "--storage-dir" | "-s" => {
                if i + 1 < argv.len() {
                    args.storage_dir = Some(argv[i + 1].clone());
                    i += 2;
                } else {
                    anyhow::bail!("Missing argument for --storage-dir");
                }
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if !other.starts_with('-') => {
                args.config_path = Some(other.to_string());
                i += 1;
            }
            other => anyhow::bail!("Unknown argument: {}", other),
        }
    }

    Ok(args)
}

fn print_usage() {
    eprintln!(
        r#"docstored - Document Store Daemon

Usage: docstored [OPTIONS] [config.toml]

Options:
  -b, --bind <ADDR>         Host to listen on (default: 0.0.0.0)
  -p, --port <PORT>         TCP port (default: 5000)
  -s, --storage-dir <DIR>   Document directory (default: ./uploads)
  -h, --help                Print this help message

Examples:
  # Defaults (0.0.0.0:5000, ./uploads)
  docstored

  # Custom port and storage location
  docstored -p 8080 -s /var/lib/docstore

  # Config file with flag override
  docstored -p 8080 server.toml
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "docstored=info,docstore_api=info,docstore_core=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting docstored (document store daemon)");

    let args = parse_args()?;

    let mut config = if let Some(ref path) = args.config_path {
        tracing::info!("Loading config from: {}", path);
        ServerConfig::load(path)?
    } else {
        ServerConfig::default()
    };
    if let Some(bind) = args.bind_address {
        config.bind_address = bind;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(dir) = args.storage_dir {
        config.storage_dir = dir.into();
    }

    // Open the store (creates the storage directory if absent)
    let store = FsDocumentStore::new(&config.storage_dir)?;

    // Create the app state and router
    let state = AppState::new(Arc::new(store));
    let app = create_router(state);

    // Bind to address
    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port).parse()?;
    tracing::info!("Listening on http://{}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
