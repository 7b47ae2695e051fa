//! Command implementations for qbank CLI

pub mod seed;
pub mod serve;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use qbank_server::StoreConfig;

pub use seed::run_seed;
pub use serve::run_serve;

/// Connection string variable used by older deployments.
const LEGACY_URI_VAR: &str = "EXPO_PUBLIC_MONGODB_URI";

/// MongoDB connection options shared by commands that touch the store
#[derive(Args, Debug)]
pub struct StoreArgs {
    /// MongoDB connection string (falls back to EXPO_PUBLIC_MONGODB_URI)
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    pub mongodb_uri: Option<String>,

    /// Per-operation database timeout in seconds
    #[arg(long, env = "QBANK_DB_TIMEOUT_SECS", default_value_t = 10)]
    pub db_timeout: u64,
}

impl StoreArgs {
    /// Resolve the connection string from args, env, or legacy env.
    pub fn store_config(&self) -> Result<StoreConfig> {
        let uri = self
            .mongodb_uri
            .clone()
            .or_else(|| std::env::var(LEGACY_URI_VAR).ok())
            .context("MONGODB_URI not set. Set via --mongodb-uri, MONGODB_URI env, or .env")?;

        Ok(StoreConfig::new(uri).with_op_timeout(Duration::from_secs(self.db_timeout)))
    }
}
