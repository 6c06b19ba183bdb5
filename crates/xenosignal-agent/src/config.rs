//! Agent configuration — optional TOML file resolved against defaults.

use std::time::Duration;

use serde::Deserialize;

pub const CONFIG_VERSION: u32 = 1;

/// Which platform adapter the agent simulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    #[default]
    Android,
    Ios,
}

/// Raw config file shape. Every field optional; absent fields fall back
/// to defaults during `resolve`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AgentConfigInput {
    pub version: u32,
    pub platform: Option<Platform>,
    pub interval_s: Option<u64>,
    pub count: Option<u32>,
}

/// Resolved agent configuration.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub platform: Platform,
    pub interval: Duration,
    /// Number of probe rounds; `None` runs until interrupted.
    pub count: Option<u32>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            platform: Platform::Android,
            interval: Duration::from_secs(5),
            count: None,
        }
    }
}

impl AgentConfigInput {
    pub fn parse(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| format!("invalid agent config: {e}"))
    }

    pub fn resolve(self) -> Result<AgentConfig, String> {
        let version = if self.version == 0 {
            CONFIG_VERSION
        } else {
            self.version
        };
        if version != CONFIG_VERSION {
            return Err(format!(
                "unsupported config version {version} (expected {CONFIG_VERSION})"
            ));
        }
        let defaults = AgentConfig::default();
        Ok(AgentConfig {
            platform: self.platform.unwrap_or(defaults.platform),
            interval: self
                .interval_s
                .map(Duration::from_secs)
                .unwrap_or(defaults.interval),
            count: self.count.or(defaults.count),
        })
    }
}
