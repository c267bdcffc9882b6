//! Configuration for the agents management API client.
//!
//! Resolves the management API base address and the optional bypass secret
//! used to authenticate outbound calls. Sources, highest precedence first:
//!
//! - Explicit values (CLI flags, builder calls)
//! - Environment variables (`INKEEP_AGENTS_MANAGE_API_URL`,
//!   `INKEEP_AGENTS_MANAGE_API_BYPASS_SECRET`)
//! - The user config file (`~/.config/agents-manage/config.toml`)
//! - The built-in default base URL, with a one-time warning

pub mod api;
pub mod discovery;
pub mod error;

pub use api::{
    BYPASS_SECRET_ENV, DEFAULT_MANAGE_API_URL, MANAGE_API_URL_ENV, ManageApiConfig,
};
pub use discovery::{
    ConfigFile, DefaultsSection, ManageApiSection, config_dir, config_path, load_config_file,
    load_user_config,
};
pub use error::{ConfigError, Result};
