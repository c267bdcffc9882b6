//! Config file discovery and loading.
//!
//! The user config lives at `~/.config/agents-manage/config.toml` on Linux
//! (`~/Library/Application Support/agents-manage/config.toml` on macOS):
//!
//! ```toml
//! [manage_api]
//! url = "https://manage.example.com"
//! bypass_secret = "..."
//!
//! [defaults]
//! tenant = "acme"
//! project = "proj1"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{ConfigError, Result};

/// Config filename inside the config directory.
const USER_CONFIG_FILE: &str = "config.toml";

/// Application directory name.
const APP_NAME: &str = "agents-manage";

/// Environment variable to override the config directory.
///
/// When set, this takes precedence over the platform default.
const CONFIG_DIR_ENV: &str = "AGENTS_MANAGE_CONFIG_DIR";

/// Parsed contents of the user config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Management API connection settings.
    pub manage_api: ManageApiSection,
    /// Default scope for CLI commands.
    pub defaults: DefaultsSection,
}

/// `[manage_api]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ManageApiSection {
    /// Base URL of the management API.
    pub url: Option<String>,
    /// Bearer secret attached to every outbound request.
    pub bypass_secret: Option<String>,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DefaultsSection {
    /// Tenant used when none is given on the command line.
    pub tenant: Option<String>,
    /// Project used when none is given on the command line.
    pub project: Option<String>,
}

/// Get the config directory.
///
/// Checks `AGENTS_MANAGE_CONFIG_DIR` first, then falls back to the platform default.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Get the user config file path.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(USER_CONFIG_FILE))
}

/// Load and parse a config file.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(toml::from_str(&contents)?)
}

/// Load the user config file if one exists.
///
/// A missing file is not an error; a present but malformed file is.
pub fn load_user_config() -> Result<Option<ConfigFile>> {
    let Some(path) = config_path() else {
        return Ok(None);
    };
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no user config file");
        return Ok(None);
    }
    tracing::debug!(path = %path.display(), "loading user config");
    load_config_file(&path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_path_file_name() {
        if let Some(p) = config_path() {
            assert!(p.ends_with(USER_CONFIG_FILE));
        }
    }

    #[test]
    fn test_load_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[manage_api]
url = "https://manage.example.com"
bypass_secret = "s3cret"

[defaults]
tenant = "acme"
"#,
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(
            config.manage_api.url.as_deref(),
            Some("https://manage.example.com")
        );
        assert_eq!(config.manage_api.bypass_secret.as_deref(), Some("s3cret"));
        assert_eq!(config.defaults.tenant.as_deref(), Some("acme"));
        assert!(config.defaults.project.is_none());
    }

    #[test]
    fn test_load_empty_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(load_config_file(&path).unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_config_file_not_found() {
        let err = load_config_file(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "this is not valid toml {{{{").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
