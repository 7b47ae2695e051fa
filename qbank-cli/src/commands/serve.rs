//! HTTP server command
//!
//! Connects the store, seeds an empty collection, then serves /questions
//! until Ctrl+C or SIGTERM.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use qbank_server::{run_server, MemoryStore, MongoStore, ServerConfig};

use super::StoreArgs;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = 3000)]
    pub port: u16,

    #[command(flatten)]
    pub store: StoreArgs,

    /// Serve from a throwaway in-memory store instead of MongoDB
    #[arg(long)]
    pub in_memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: SocketAddr::new(args.host, args.port),
    };

    if args.in_memory {
        tracing::warn!("Serving from in-memory store; questions are lost on exit");
        let store = Arc::new(MemoryStore::new());
        run_server(store, config).await.context("Server error")?;
        return Ok(());
    }

    let store_config = args.store.store_config()?;

    // A store that cannot be reached at boot is fatal.
    let store = Arc::new(
        MongoStore::connect(&store_config)
            .await
            .context("Failed to connect to MongoDB")?,
    );

    // Seeds, then serves (blocks until shutdown); then release the client
    let result = run_server(store.clone(), config).await;
    store.shutdown().await;
    result.context("Server error")?;

    Ok(())
}

