//! agents-manage - console for the agents management API
//!
//! Main entry point for the CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::Style;

mod commands;

use commands::{agents, api_keys, artifacts, config, credentials};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// agents-manage - manage agents, credentials, API keys and artifact components
#[derive(Parser)]
#[command(name = "agents-manage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// Management API URL (default: http://localhost:3002)
    #[arg(long, global = true, env = "INKEEP_AGENTS_MANAGE_API_URL")]
    pub server: Option<String>,

    /// Tenant to operate in
    #[arg(long, global = true, env = "AGENTS_MANAGE_TENANT")]
    pub tenant: Option<String>,

    /// Project to operate in
    #[arg(long, global = true, env = "AGENTS_MANAGE_PROJECT")]
    pub project: Option<String>,

    /// Branch ref passed to the API as `?ref=`
    #[arg(long = "ref", global = true)]
    pub git_ref: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Agent management
    Agents(agents::AgentsArgs),

    /// Credential management
    Credentials(credentials::CredentialsArgs),

    /// API key management
    ApiKeys(api_keys::ApiKeysArgs),

    /// Artifact component management
    Artifacts(artifacts::ArtifactsArgs),

    /// Show resolved configuration
    Config(config::ConfigArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Console (human-readable) + rotating JSON file
    let filter = if cli.verbose {
        "agents_manage=debug,agents_manage_client=debug,agents_manage_config=debug,info"
    } else {
        "agents_manage=info,agents_manage_client=warn,agents_manage_config=warn,warn"
    };

    let log_dir = agents_manage_config::config_dir()
        .map(|d| d.join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));
    let file_appender = tracing_appender::rolling::daily(&log_dir, "agents-manage.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    "agents_manage=trace,agents_manage_client=trace,agents_manage_config=trace,info",
                )),
        )
        .init();

    if let Err(e) = run(cli).await {
        let red = Style::new().red();
        eprintln!("{} {:#}", red.apply_to("Error:"), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = commands::Context::new(
        cli.server,
        cli.tenant,
        cli.project,
        cli.git_ref,
        cli.json,
        cli.verbose,
    )?;

    match cli.command {
        Commands::Agents(args) => agents::run(args, &ctx).await,
        Commands::Credentials(args) => credentials::run(args, &ctx).await,
        Commands::ApiKeys(args) => api_keys::run(args, &ctx).await,
        Commands::Artifacts(args) => artifacts::run(args, &ctx).await,
        Commands::Config(args) => config::run(args, &ctx).await,
    }
}
