//! Artifacts command - artifact component management.

use agents_manage_client::ArtifactComponent;
use anyhow::Result;
use clap::Args;
use console::Style;

use super::Context;
use super::resource::{self, ListRow, ResourceCommand, truncate};

/// Arguments for the artifacts command.
#[derive(Args, Debug)]
pub struct ArtifactsArgs {
    #[command(subcommand)]
    pub command: ResourceCommand,
}

impl ListRow for ArtifactComponent {
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

/// Run the artifacts command.
pub async fn run(args: ArtifactsArgs, ctx: &Context) -> Result<()> {
    resource::run(ctx.client.artifact_components(), args.command, ctx, "artifact components").await
}
