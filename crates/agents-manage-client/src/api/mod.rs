//! API endpoint implementations.

mod agents;
mod api_keys;
mod artifact_components;
mod credentials;
mod resource;

pub use agents::{AgentResource, AgentsApi};
pub use api_keys::{ApiKeyResource, ApiKeysApi};
pub use artifact_components::{ArtifactComponentResource, ArtifactComponentsApi};
pub use credentials::{CredentialResource, CredentialsApi};
pub use resource::{Resource, ResourceApi};
