//! Configuration handling for the lead form

use crate::state::{FieldId, LeadSource, StepLayout};
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the webhook URL
pub const ENDPOINT_ENV: &str = "LEAD_CAPTURE_ENDPOINT";
/// Environment variable overriding the lead source
pub const SOURCE_ENV: &str = "LEAD_CAPTURE_SOURCE";

/// How the fields are split into steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    #[default]
    MultiStep,
    SingleStep,
}

/// Deployment configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// Webhook URL receiving leads
    pub endpoint: Option<String>,
    /// Provenance tag attached to every lead
    pub lead_source: Option<LeadSource>,
    /// Built-in step layout
    pub layout: Option<LayoutMode>,
    /// Custom grouping of fields into steps, overrides `layout`
    pub steps: Option<Vec<Vec<FieldId>>>,
    /// Request timeout in seconds; none waits indefinitely
    pub timeout_secs: Option<u64>,
    /// Treat any webhook response as delivered
    pub opaque_delivery: Option<bool>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "leadcapture", "lead-capture")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("Invalid config file {}", path.display()))?
            }
            _ => Self::default(),
        };
        config.apply_env(
            std::env::var(ENDPOINT_ENV).ok(),
            std::env::var(SOURCE_ENV).ok(),
        )?;
        Ok(config)
    }

    fn apply_env(&mut self, endpoint: Option<String>, source: Option<String>) -> Result<()> {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.endpoint = Some(endpoint.trim().to_string());
        }
        if let Some(source) = source.filter(|s| !s.trim().is_empty()) {
            let source = source
                .parse::<LeadSource>()
                .map_err(|e| anyhow!("{SOURCE_ENV}: {e}"))?;
            self.lead_source = Some(source);
        }
        Ok(())
    }

    /// Webhook URL, which must be configured
    pub fn endpoint(&self) -> Result<&str> {
        self.endpoint
            .as_deref()
            .ok_or_else(|| anyhow!("No webhook endpoint; set `endpoint` or {ENDPOINT_ENV}"))
    }

    pub fn lead_source(&self) -> LeadSource {
        self.lead_source.unwrap_or_default()
    }

    /// Resolve the step layout, validating a custom grouping
    pub fn step_layout(&self) -> Result<StepLayout> {
        if let Some(steps) = &self.steps {
            return StepLayout::new(steps.clone()).context("Invalid `steps` in config");
        }
        Ok(match self.layout.unwrap_or_default() {
            LayoutMode::MultiStep => StepLayout::multi_step(),
            LayoutMode::SingleStep => StepLayout::single_step(),
        })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn opaque_delivery(&self) -> bool {
        self.opaque_delivery.unwrap_or(false)
    }
}
