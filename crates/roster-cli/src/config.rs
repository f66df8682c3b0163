//! Layered configuration: built-in defaults, then an optional TOML file,
//! then `ROSTER__*` environment variables.

use std::path::Path;

use anyhow::Context;
use config::{Config, Environment, File};
use roster_core::logging_facility::Profile;
use roster_upstream::UpstreamConfig;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "roster";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub profile: Profile,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    pub upstream: UpstreamConfig,
    pub server: ServerConfig,
    pub log: LogConfig,
}

impl RosterConfig {
    /// Load configuration. An explicit `path` must exist; otherwise
    /// `roster.toml` in the working directory is used when present.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_from(path, environment())
    }

    fn load_from(path: Option<&Path>, env: Environment) -> anyhow::Result<Self> {
        let file = match path {
            Some(p) => File::from(p).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config: Self = Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("failed to parse configuration")?;

        config.upstream.validate()?;
        Ok(config)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("ROSTER")
        .separator("__")
        .try_parsing(true)
}
