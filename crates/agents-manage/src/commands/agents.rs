//! Agents command - agent management.

use agents_manage_client::{Agent, TeamAgent, select_options};
use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use console::Style;

use super::Context;
use super::resource::{self, ListRow, ResourceCommand, print_list, truncate};

/// Arguments for the agents command.
#[derive(Args, Debug)]
pub struct AgentsArgs {
    #[command(subcommand)]
    pub command: AgentsCommand,
}

#[derive(Subcommand, Debug)]
pub enum AgentsCommand {
    #[command(flatten)]
    Resource(ResourceCommand),

    /// List agents as id/name/description for team-agent relations
    Team,

    /// List agents as value/label pairs for selection inputs
    Options,
}

impl ListRow for Agent {
    fn row(&self) -> String {
        let dim = Style::new().dim();
        format!(
            "{} {:<24} {}",
            dim.apply_to(format!("[{}]", self.id)),
            self.name,
            truncate(self.description.as_deref().unwrap_or_default(), 50)
        )
    }
}

impl ListRow for TeamAgent {
    fn row(&self) -> String {
        let dim = Style::new().dim();
        format!(
            "{} {:<24} {}",
            dim.apply_to(format!("[{}]", self.id)),
            self.name,
            truncate(&self.description, 50)
        )
    }
}

/// Run the agents command.
pub async fn run(args: AgentsArgs, ctx: &Context) -> Result<()> {
    let api = ctx.client.agents();

    match args.command {
        AgentsCommand::Resource(command) => resource::run(api, command, ctx, "agents").await,
        AgentsCommand::Team => {
            let (tenant, project) = ctx.scope()?;
            let team = api
                .with_options(ctx.request_options())
                .team_agents(tenant, project)
                .await
                .context("failed to load agents")?;
            print_list(&team, "team agents", ctx)
        }
        AgentsCommand::Options => {
            let (tenant, project) = ctx.scope()?;
            let agents = api
                .with_options(ctx.request_options())
                .list(tenant, project)
                .await
                .context("failed to load agents")?;
            println!("{}", serde_json::to_string_pretty(&select_options(&agents))?);
            Ok(())
        }
    }
}
