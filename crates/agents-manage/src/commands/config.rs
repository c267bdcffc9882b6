//! Config command - inspect resolved configuration.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::{Style, style};

use super::Context;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the resolved API URL, auth and default scope
    Show,

    /// Show configuration file path
    Path,
}

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Path => {
            match agents_manage_config::config_path() {
                Some(path) => println!("{}", path.display()),
                None => println!("(no config directory available)"),
            }
            Ok(())
        }
    }
}

fn show(ctx: &Context) -> Result<()> {
    let config = ctx.client.config();
    let base_url = ctx.client.base_url();
    let bypass = config.bypass_secret().is_some();

    if ctx.json_output {
        let value = serde_json::json!({
            "apiUrl": base_url,
            "apiUrlConfigured": config.is_configured(),
            "bypassSecret": bypass,
            "tenant": ctx.tenant,
            "project": ctx.project,
            "ref": ctx.git_ref,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let dim = Style::new().dim();
    let unset = || dim.apply_to("(not set)").to_string();

    println!("{}", style("Configuration").bold());
    println!("{}", dim.apply_to("─".repeat(50)));
    println!(
        "API URL:        {}{}",
        base_url,
        if config.is_configured() {
            String::new()
        } else {
            dim.apply_to(" (default)").to_string()
        }
    );
    println!(
        "Bypass secret:  {}",
        if bypass { "set".to_string() } else { unset() }
    );
    println!("Tenant:         {}", ctx.tenant.clone().unwrap_or_else(unset));
    println!("Project:        {}", ctx.project.clone().unwrap_or_else(unset));
    if let Some(git_ref) = &ctx.git_ref {
        println!("Ref:            {}", git_ref);
    }
    Ok(())
}
