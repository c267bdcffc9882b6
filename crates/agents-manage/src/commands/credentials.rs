//! Credentials command - credential reference management.

use agents_manage_client::Credential;
use anyhow::Result;
use clap::Args;
use console::Style;

use super::Context;
use super::resource::{self, ListRow, ResourceCommand};

/// Arguments for the credentials command.
#[derive(Args, Debug)]
pub struct CredentialsArgs {
    #[command(subcommand)]
    pub command: ResourceCommand,
}

impl ListRow for Credential {
    fn row(&self) -> String {
        let dim = Style::new().dim();
        let store = serde_json::to_value(&self.store_type)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();
        let usage = self.tools.as_ref().map_or(0, Vec::len)
            + self.external_agents.as_ref().map_or(0, Vec::len);
        format!(
            "{} {:<24} {:<10} {}",
            dim.apply_to(format!("[{}]", self.id)),
            self.name.as_deref().unwrap_or(&self.id),
            store,
            dim.apply_to(format!("{} ({} users)", self.credential_store_id, usage))
        )
    }
}

/// Run the credentials command.
pub async fn run(args: CredentialsArgs, ctx: &Context) -> Result<()> {
    resource::run(ctx.client.credentials(), args.command, ctx, "credentials").await
}
