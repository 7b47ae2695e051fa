//! qbank CLI - question bank HTTP service
//!
//! Entry point for running the question/answer API:
//! - `serve`: connect to MongoDB, seed an empty collection, serve /questions
//! - `seed`: insert the sample questions into an empty collection and exit
//!
//! A `.env` file in the working directory is loaded before arguments are parsed.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "qbank",
    author,
    version,
    about = "Question bank HTTP service backed by MongoDB"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server (GET/POST /questions)
    Serve(commands::serve::ServeArgs),
    /// Insert sample questions into an empty collection
    Seed(commands::seed::SeedArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // dotenvy doesn't overwrite existing vars
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Seed(args) => commands::run_seed(args).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults() {
        let cli = Cli::try_parse_from(["qbank", "serve", "--in-memory"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert!(args.in_memory);
        assert_eq!(args.store.db_timeout, 10);
    }

    #[test]
    fn explicit_uri_wins() {
        let cli = Cli::try_parse_from([
            "qbank",
            "seed",
            "--mongodb-uri",
            "mongodb://db.internal:27017",
            "--db-timeout",
            "3",
        ])
        .unwrap();
        let Commands::Seed(args) = cli.command else {
            panic!("expected seed");
        };

        let config = args.store.store_config().unwrap();
        assert_eq!(config.uri, "mongodb://db.internal:27017");
        assert_eq!(config.database, "interview-app");
        assert_eq!(config.op_timeout, std::time::Duration::from_secs(3));
    }
}
