//! Agents API.

use super::resource::{Resource, ResourceApi};
use crate::error::Result;
use crate::types::{Agent, FullAgentDefinition, TeamAgent};

/// Agents: listed under `agents`, managed as full definitions under `agent`.
pub struct AgentResource;

impl Resource for AgentResource {
    const NAME: &'static str = "agent";
    const LIST_PATH: &'static str = "agents";
    const CREATE_PATH: &'static str = "agent";
    const ITEM_PATH: &'static str = "agent";

    type Summary = Agent;
    type Detail = FullAgentDefinition;
    type Create = FullAgentDefinition;
    type Created = FullAgentDefinition;
    type Update = FullAgentDefinition;
}

/// Agents API client.
pub type AgentsApi = ResourceApi<AgentResource>;

impl ResourceApi<AgentResource> {
    /// List agents as `{id, name, description}` for team-agent relations.
    ///
    /// A missing, null or empty description becomes `""`.
    pub async fn team_agents(&self, tenant_id: &str, project_id: &str) -> Result<Vec<TeamAgent>> {
        let agents = self.list(tenant_id, project_id).await?;
        Ok(agents.into_iter().map(TeamAgent::from).collect())
    }
}
