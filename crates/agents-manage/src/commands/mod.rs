//! CLI command handlers.

pub mod agents;
pub mod api_keys;
pub mod artifacts;
pub mod config;
pub mod credentials;
pub mod resource;

use agents_manage_client::{ManageApiConfig, ManageClient, RequestOptions};
use anyhow::{Result, bail};

/// Shared context for all commands.
pub struct Context {
    /// Client for the management API.
    pub client: ManageClient,
    /// Tenant from the command line or config defaults.
    pub tenant: Option<String>,
    /// Project from the command line or config defaults.
    pub project: Option<String>,
    /// Branch ref forwarded as a query parameter.
    pub git_ref: Option<String>,
    /// Output as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Resolve configuration (flags > env > config file > defaults) and build the client.
    pub fn new(
        server: Option<String>,
        tenant: Option<String>,
        project: Option<String>,
        git_ref: Option<String>,
        json_output: bool,
        verbose: bool,
    ) -> Result<Self> {
        let file = agents_manage_config::load_user_config()?.unwrap_or_default();

        let mut config = ManageApiConfig::from_env().or_file(&file);
        if let Some(server) = server {
            config = config.with_base_url(server);
        }
        let client = ManageClient::builder().config(config).build()?;

        Ok(Self {
            client,
            tenant: tenant.or(file.defaults.tenant),
            project: project.or(file.defaults.project),
            git_ref,
            json_output,
            verbose,
        })
    }

    /// The tenant/project pair commands operate in.
    pub fn scope(&self) -> Result<(&str, &str)> {
        let Some(tenant) = self.tenant.as_deref() else {
            bail!("no tenant given; pass --tenant or set [defaults] tenant in the config file");
        };
        let Some(project) = self.project.as_deref() else {
            bail!("no project given; pass --project or set [defaults] project in the config file");
        };
        Ok((tenant, project))
    }

    /// Options attached to every resource request.
    pub fn request_options(&self) -> RequestOptions {
        RequestOptions::new().query_opt("ref", self.git_ref.as_deref())
    }
}
