//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the assessment delay
const DELAY_ENV_VAR: &str = "DIABETES_RISK_SUBMIT_DELAY_MS";

const DEFAULT_SUBMIT_DELAY_MS: u64 = 1500;
const DEFAULT_TOAST_DURATION_MS: u64 = 4000;
const DEFAULT_HISTORY_LIMIT: usize = 10;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Simulated assessment delay in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// How long a toast stays on screen in milliseconds
    pub toast_duration_ms: Option<u64>,
    /// Number of completed assessments kept for the session
    pub history_limit: Option<usize>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "diabetes-risk", "diabetes-risk-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration, falling back to defaults on error, then apply
    /// environment overrides
    pub fn load_or_default() -> Self {
        let mut config = Self::load().unwrap_or_else(|err| {
            tracing::warn!("Failed to load config, using defaults: {err:#}");
            Self::default()
        });
        config.apply_env_override(std::env::var(DELAY_ENV_VAR).ok().as_deref());
        config
    }

    fn apply_env_override(&mut self, delay_ms: Option<&str>) {
        let Some(raw) = delay_ms else {
            return;
        };
        match raw.trim().parse::<u64>() {
            Ok(ms) => self.submit_delay_ms = Some(ms),
            Err(_) => tracing::warn!("Ignoring invalid {DELAY_ENV_VAR}={raw:?}"),
        }
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS))
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms.unwrap_or(DEFAULT_TOAST_DURATION_MS))
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit.unwrap_or(DEFAULT_HISTORY_LIMIT)
    }
}
