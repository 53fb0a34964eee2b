//! Document Store CLI - upload and fetch documents from the command line

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docstore_client::DocStoreClient;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "docstore-cli")]
#[command(author, version, about = "Document Store CLI")]
#[command(propagate_version = true)]
struct Cli {
    /// Server URL
    #[arg(
        short,
        long,
        env = "DOCSTORE_SERVER",
        default_value = "http://localhost:5000"
    )]
    server: String,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a local file as a document
    Upload {
        /// Path of the file to upload
        path: PathBuf,

        /// Document name (defaults to the file's basename)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Fetch a document
    Fetch {
        /// Document name
        name: String,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check server health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "docstore_cli=debug,docstore_client=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().without_time())
        .init();

    let client = DocStoreClient::new(&cli.server)?;

    match cli.command {
        Commands::Upload { path, name } => {
            let content = std::fs::read(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let name = match name {
                Some(name) => name,
                None => path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(str::to_owned)
                    .context("Cannot derive a document name from the path; pass --name")?,
            };

            let message = client.upload(&name, content).await?;
            println!("{}", message);
        }
        Commands::Fetch { name, output } => {
            let content = client.fetch(&name).await?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &content)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {} bytes to {}", content.len(), path.display());
                }
                None => {
                    use std::io::Write;
                    std::io::stdout().write_all(&content)?;
                }
            }
        }
        Commands::Health => {
            let status = client.health().await?;
            println!("{}", status);
        }
    }

    Ok(())
}
