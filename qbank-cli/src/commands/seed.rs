//! One-shot seed command
//!
//! Inserts the sample questions into an empty collection and exits.
//! Unlike `serve`, a seed failure here is an error exit.

use anyhow::{Context, Result};
use clap::Parser;
use qbank_server::{ensure_seeded, MongoStore, SeedOutcome};

use super::StoreArgs;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

pub async fn run_seed(args: SeedArgs) -> Result<()> {
    let store_config = args.store.store_config()?;
    let store = MongoStore::connect(&store_config)
        .await
        .context("Failed to connect to MongoDB")?;

    let outcome = ensure_seeded(&store).await;
    store.shutdown().await;

    match outcome.context("Failed to seed questions")? {
        SeedOutcome::Inserted { count } => {
            println!("Inserted {} sample questions", count);
        }
        SeedOutcome::AlreadySeeded { existing } => {
            println!(
                "Collection already holds {} questions, nothing inserted",
                existing
            );
        }
    }

    Ok(())
}
