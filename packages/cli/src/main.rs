// ABOUTME: CLI entry point for the todo service
// ABOUTME: Parses flags, initializes logging, and dispatches to the serve/seed commands

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod db;

#[derive(Parser)]
#[command(name = "todo", about = "Todo service CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Starts the todo restful server
    Serve(ServeArgs),
    /// Seeds the todo database with a set of base todo items (developer use only)
    Seed(SeedArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Address for the rest server to listen on
    #[arg(long, default_value = "0.0.0.0")]
    addr: String,

    /// Port for the server to listen on
    #[arg(long, default_value_t = 9000)]
    port: u16,

    /// Log level of the application: error, warn, info, debug
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Path to the SQLite database file
    #[arg(long, default_value = "todo.db")]
    db_path: PathBuf,

    /// Base path the todo routes are mounted under
    #[arg(long, default_value = "/api")]
    prefix: String,
}

#[derive(Args)]
struct SeedArgs {
    /// Path to the SQLite database file
    #[arg(long, default_value = "todo.db")]
    db_path: PathBuf,

    /// Log level of the application: error, warn, info, debug
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(level)?;
    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve(args) => {
            init_logging(&args.log_level)?;
            commands::serve::run(args).await
        }
        Commands::Seed(args) => {
            init_logging(&args.log_level)?;
            commands::seed::run(args).await
        }
    }
}
