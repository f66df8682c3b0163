//! Roster CLI
//!
//! Serves the employee directory over HTTP, or runs a single directory
//! operation against the upstream provider and prints the result.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use roster_core::logging_facility;
use roster_upstream::{HttpUpstreamClient, UpstreamClient};

mod commands;
mod config;

use config::RosterConfig;

#[derive(Debug, Parser)]
#[command(name = "roster")]
#[command(about = "Roster - employee directory facade", long_about = None)]
struct Cli {
    /// Configuration file (defaults to ./roster.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Upstream provider base URL, overriding configuration
    #[arg(long, global = true)]
    upstream_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve(commands::serve::ServeArgs),
    /// List every employee
    List,
    /// Employees whose name contains FRAGMENT (case-insensitive)
    Search { fragment: String },
    /// One employee by id
    Get { id: String },
    /// Highest salary in the directory
    HighestSalary,
    /// Names of the ten best-paid employees
    TopEarners,
    /// Create an employee
    Create(commands::mutation::CreateArgs),
    /// Delete an employee by id
    Delete { id: String },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = RosterConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.upstream_url {
        config.upstream.base_url = url;
    }
    logging_facility::init(config.log.profile);

    let upstream: Arc<dyn UpstreamClient> = Arc::new(
        HttpUpstreamClient::new(&config.upstream).context("invalid upstream configuration")?,
    );

    match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, &config, upstream).await,
        Commands::List => commands::directory::list(upstream.as_ref()).await,
        Commands::Search { fragment } => {
            commands::directory::search(upstream.as_ref(), fragment).await
        }
        Commands::Get { id } => commands::directory::get(upstream.as_ref(), id).await,
        Commands::HighestSalary => commands::directory::highest_salary(upstream.as_ref()).await,
        Commands::TopEarners => commands::directory::top_earners(upstream.as_ref()).await,
        Commands::Create(args) => commands::mutation::create(upstream.as_ref(), args).await,
        Commands::Delete { id } => commands::mutation::delete(upstream.as_ref(), id).await,
    }
}
