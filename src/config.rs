// Configuration loading and parsing (dashboard.toml).
//
// The config file is optional: every command can be driven entirely from
// CLI flags, and flags always win over file values. The file exists so a
// league/team/sport does not have to be retyped on every invocation.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DashboardConfig {
    #[serde(default)]
    pub league: LeagueSection,
    #[serde(default)]
    pub tui: TuiSection,
    #[serde(default)]
    pub web: WebSection,
}

/// League identity defaults; all optional, CLI flags override.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LeagueSection {
    pub id: Option<String>,
    pub team: Option<String>,
    pub sport: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TuiSection {
    /// Seconds between dashboard refreshes.
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,
}

impl Default for TuiSection {
    fn default() -> Self {
        TuiSection {
            refresh_secs: default_refresh_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebSection {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for WebSection {
    fn default() -> Self {
        WebSection {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

fn default_refresh_secs() -> u64 {
    10
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8787
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

impl DashboardConfig {
    /// Parse a config from TOML text and validate it.
    pub fn from_toml_str(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: DashboardConfig =
            toml::from_str(text).map_err(|source| ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config file.
    ///
    /// With an explicit path, the file must exist. Without one,
    /// `dashboard.toml` in the working directory is used when present and
    /// defaults apply otherwise.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match explicit_path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(_) if !required => return Ok(DashboardConfig::default()),
            Err(_) => return Err(ConfigError::FileNotFound { path }),
        };
        Self::from_toml_str(&text, &path)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tui.refresh_secs == 0 {
            return Err(ConfigError::ValidationError {
                field: "tui.refresh_secs".into(),
                message: "must be greater than 0".into(),
            });
        }
        if self.web.port == 0 {
            return Err(ConfigError::ValidationError {
                field: "web.port".into(),
                message: "must be greater than 0".into(),
            });
        }
        if let Some(sport) = &self.league.sport {
            if sport.is_empty() {
                return Err(ConfigError::ValidationError {
                    field: "league.sport".into(),
                    message: "must not be empty".into(),
                });
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
