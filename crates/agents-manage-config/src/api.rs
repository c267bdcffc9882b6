//! Management API connection settings.

use std::fmt;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::discovery::{ConfigFile, load_user_config};
use crate::Result;

/// Environment variable holding the management API base URL.
pub const MANAGE_API_URL_ENV: &str = "INKEEP_AGENTS_MANAGE_API_URL";

/// Environment variable holding the optional bearer bypass secret.
pub const BYPASS_SECRET_ENV: &str = "INKEEP_AGENTS_MANAGE_API_BYPASS_SECRET";

/// Base URL used when none is configured.
pub const DEFAULT_MANAGE_API_URL: &str = "http://localhost:3002";

/// Resolved connection settings for the management API.
///
/// Built once at startup and shared by reference. The base URL is resolved
/// lazily on first use; if nothing was configured the default is used and a
/// warning is logged exactly once per config instance.
pub struct ManageApiConfig {
    configured_url: Option<String>,
    base_url: OnceLock<String>,
    warned: AtomicBool,
    bypass_secret: Option<String>,
}

impl ManageApiConfig {
    /// Create a config from explicit values. Empty strings count as unset.
    pub fn new(base_url: Option<String>, bypass_secret: Option<String>) -> Self {
        Self {
            configured_url: non_empty(base_url),
            base_url: OnceLock::new(),
            warned: AtomicBool::new(false),
            bypass_secret: non_empty(bypass_secret),
        }
    }

    /// Read both values from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read both values through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::new(lookup(MANAGE_API_URL_ENV), lookup(BYPASS_SECRET_ENV))
    }

    /// Environment first, then the user config file for anything still unset.
    pub fn load() -> Result<Self> {
        let config = Self::from_env();
        Ok(match load_user_config()? {
            Some(file) => config.or_file(&file),
            None => config,
        })
    }

    /// Fill unset values from a parsed config file.
    pub fn or_file(self, file: &ConfigFile) -> Self {
        let base_url = self.configured_url.or_else(|| file.manage_api.url.clone());
        let bypass_secret = self
            .bypass_secret
            .or_else(|| file.manage_api.bypass_secret.clone());
        Self::new(base_url, bypass_secret)
    }

    /// Override the base URL.
    pub fn with_base_url(self, url: impl Into<String>) -> Self {
        Self::new(Some(url.into()), self.bypass_secret)
    }

    /// Override the bypass secret.
    pub fn with_bypass_secret(self, secret: impl Into<String>) -> Self {
        Self::new(self.configured_url, Some(secret.into()))
    }

    /// The management API base URL, resolved on first call.
    pub fn base_url(&self) -> &str {
        self.base_url.get_or_init(|| match &self.configured_url {
            Some(url) => url.clone(),
            None => {
                if !self.warned.swap(true, Ordering::Relaxed) {
                    tracing::warn!(
                        "{} is not set, falling back to: {}",
                        MANAGE_API_URL_ENV,
                        DEFAULT_MANAGE_API_URL
                    );
                }
                DEFAULT_MANAGE_API_URL.to_string()
            }
        })
    }

    /// The bearer bypass secret, if configured.
    pub fn bypass_secret(&self) -> Option<&str> {
        self.bypass_secret.as_deref()
    }

    /// Whether the base URL was explicitly configured.
    pub fn is_configured(&self) -> bool {
        self.configured_url.is_some()
    }

    /// Whether the fallback warning has been emitted.
    pub fn has_warned(&self) -> bool {
        self.warned.load(Ordering::Relaxed)
    }
}

impl Default for ManageApiConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

impl fmt::Debug for ManageApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManageApiConfig")
            .field("base_url", &self.configured_url)
            .field("bypass_secret", &self.bypass_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
