//! API keys command - agent API key management.

use agents_manage_client::{Agent, ApiKey, create_lookup};
use anyhow::{Context as _, Result};
use clap::Args;
use console::{Style, style};

use super::Context;
use super::resource::{self, ListRow, ResourceCommand};

/// Arguments for the api-keys command.
#[derive(Args, Debug)]
pub struct ApiKeysArgs {
    #[command(subcommand)]
    pub command: ResourceCommand,
}

impl ListRow for ApiKey {
    fn row(&self) -> String {
        let dim = Style::new().dim();
        format!(
            "{} {:<20} {:<16} {}",
            dim.apply_to(format!("[{}]", self.id)),
            self.name.as_deref().unwrap_or("(unnamed)"),
            self.key_prefix.as_deref().unwrap_or_default(),
            dim.apply_to(format!("agent {}", self.agent_id))
        )
    }
}

/// Run the api-keys command.
pub async fn run(args: ApiKeysArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ResourceCommand::List { page: None, .. } if !ctx.json_output => list_with_agents(ctx).await,
        command => resource::run(ctx.client.api_keys(), command, ctx, "API keys").await,
    }
}

/// List keys alongside the names of the agents they grant access to.
async fn list_with_agents(ctx: &Context) -> Result<()> {
    let (tenant, project) = ctx.scope()?;
    let api_keys = ctx.client.api_keys().with_options(ctx.request_options());
    let agents = ctx.client.agents().with_options(ctx.request_options());

    let (keys, agents): (Vec<ApiKey>, Vec<Agent>) = tokio::try_join!(
        api_keys.list(tenant, project),
        agents.list(tenant, project),
    )
    .context("failed to load API keys")?;
    let lookup = create_lookup(&agents);

    let dim = Style::new().dim();
    println!("{}", style("API keys").bold());
    println!("{}", dim.apply_to("─".repeat(50)));
    if keys.is_empty() {
        println!("{}", dim.apply_to("No API keys found"));
    }
    for key in &keys {
        let agent = lookup
            .get(key.agent_id.as_str())
            .map_or(key.agent_id.as_str(), |a| a.name.as_str());
        println!(
            "{} {:<20} {:<16} {}",
            dim.apply_to(format!("[{}]", key.id)),
            key.name.as_deref().unwrap_or("(unnamed)"),
            key.key_prefix.as_deref().unwrap_or_default(),
            agent
        );
    }
    Ok(())
}
