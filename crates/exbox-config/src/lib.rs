//! Configuration management for exbox.
//!
//! Parses `exbox.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `server.host`
//! - `project.repo`

mod expand;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
    /// Override repository identifier.
    pub repo: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "exbox.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Repository and site identity.
    pub project: ProjectConfig,
    /// Documentation version to branch mapping.
    pub versions: VersionsConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 7979,
        }
    }
}

/// Project configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Repository identifier on the code host (`owner/name`).
    pub repo: String,
    /// Library slug, used as the route prefix and in page titles.
    pub library: String,
    /// Site name appended to page titles.
    pub site_name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            repo: "tanstack/query".to_owned(),
            library: "query".to_owned(),
            site_name: "TanStack Query Docs".to_owned(),
        }
    }
}

/// Version configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct VersionsConfig {
    /// Latest documentation version (also reachable as `latest`).
    pub latest: String,
    /// Branch holding the latest version.
    pub latest_branch: String,
    /// Branches whose examples are not grouped by framework.
    pub legacy_branches: Vec<String>,
    /// Explicit version to branch overrides.
    pub branches: BTreeMap<String, String>,
}

impl Default for VersionsConfig {
    fn default() -> Self {
        Self {
            latest: "v5".to_owned(),
            latest_branch: "main".to_owned(),
            legacy_branches: vec!["v3".to_owned()],
            branches: BTreeMap::new(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`project.repo`").
        field: String,
        /// Error message (e.g., "${`EXBOX_REPO`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a repository identifier of the form `owner/name`.
fn require_repo(repo: &str, field: &str) -> Result<(), ConfigError> {
    let valid = repo
        .split_once('/')
        .is_some_and(|(owner, name)| !owner.is_empty() && !name.is_empty() && !name.contains('/'))
        && !repo.contains(char::is_whitespace);
    if !valid {
        return Err(ConfigError::Validation(format!(
            "{field} must have the form owner/name, got '{repo}'"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `exbox.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading, allowing CLI arguments to take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
        if let Some(repo) = &settings.repo {
            self.project.repo.clone_from(repo);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_config_from(current)
    }

    /// Search for config file starting at `start` and walking up.
    fn discover_config_from(mut current: PathBuf) -> Option<PathBuf> {
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_project()?;
        self.validate_versions()?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 is technically valid (OS assigns a random port), but it's
        // unlikely to be intentional in a config file
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate project configuration.
    fn validate_project(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.project.repo, "project.repo")?;
        require_repo(&self.project.repo, "project.repo")?;
        require_non_empty(&self.project.library, "project.library")?;
        if self.project.library.contains('/') {
            return Err(ConfigError::Validation(
                "project.library cannot contain '/'".to_owned(),
            ));
        }
        require_non_empty(&self.project.site_name, "project.site_name")?;
        Ok(())
    }

    /// Validate version configuration.
    fn validate_versions(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.versions.latest_branch, "versions.latest_branch")?;
        for (version, branch) in &self.versions.branches {
            require_non_empty(branch, &format!("versions.branches.{version}"))?;
        }
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.server.host = expand::expand_env(&self.server.host, "server.host")?;
        self.project.repo = expand::expand_env(&self.project.repo, "project.repo")?;
        Ok(())
    }
}
