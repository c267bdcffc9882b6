//! Typed client for the agents management API.
//!
//! Every resource lives inside a tenant/project scope and is reached through
//! the same pipeline: identifiers are validated, a URL is built against the
//! configured base address, default and bypass-auth headers are attached, and
//! the response is classified into a payload or a normalized [`Error`].
//!
//! # Example
//!
//! ```no_run
//! use agents_manage_client::{ManageClient, RequestOptions, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = ManageClient::from_env()?;
//!
//! // List agents on a branch ref
//! let agents = client
//!     .agents()
//!     .with_options(RequestOptions::new().query("ref", "main"))
//!     .list("acme", "proj1")
//!     .await?;
//!
//! for agent in &agents {
//!     println!("{} {}", agent.id, agent.name);
//! }
//!
//! // Delete a credential
//! client.credentials().delete("acme", "proj1", "github-token").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Agents**: list, get/create/update/delete full definitions, team-agent projection
//! - **Credentials**: paginated list, CRUD
//! - **API keys**: list, CRUD (the secret is returned once, on create)
//! - **Artifact components**: list, CRUD

pub mod api;
pub mod client;
pub mod error;
pub mod lookup;
pub mod request;
pub mod types;
pub mod validation;

pub use agents_manage_config::ManageApiConfig;
pub use api::{
    AgentsApi, ApiKeysApi, ArtifactComponentsApi, CredentialsApi, Resource, ResourceApi,
};
pub use client::{ClientBuilder, ManageClient};
pub use error::{Error, Result};
pub use lookup::{SelectOption, create_lookup, select_options};
pub use request::RequestOptions;
pub use types::*;
