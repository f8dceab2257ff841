//! Demo configuration loading.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Driver settings, loaded from `.aima/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of percepts fed to the agent
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Pause between percepts, for watching the trace
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// RNG seed; seeded from entropy when absent
    pub seed: Option<u64>,

    /// Print a trace line per program call
    #[serde(default = "default_true")]
    pub trace: bool,
}

fn default_steps() -> usize {
    5
}
fn default_delay_ms() -> u64 {
    500
}
fn default_true() -> bool {
    true
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            delay_ms: default_delay_ms(),
            seed: None,
            trace: default_true(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    /// Load from a project root (looks for .aima/config.yaml)
    pub fn load_from_project(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join(".aima/config.yaml");
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
