//! Serde model of the subset of a serverless service file this tool reads.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use logfwd_core::ResourceMap;

use crate::settings::RawForwardingSettings;

/// Declarative service description, as loaded from `serverless.yml`.
///
/// Unknown keys elsewhere in the file are ignored; only the sections the
/// synthesizer consumes are modeled. Function order is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDescription {
    /// Service name, used in default function physical names.
    pub service: String,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomSection>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub functions: IndexMap<String, FunctionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<TemplateSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_stage")]
    pub stage: String,
    #[serde(default = "default_region")]
    pub region: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            stage: default_stage(),
            region: default_region(),
        }
    }
}

fn default_stage() -> String {
    "dev".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

/// `custom` section; only the log-forwarding extension block is modeled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomSection {
    #[serde(rename = "logForwarding", skip_serializing_if = "Option::is_none")]
    pub log_forwarding: Option<RawForwardingSettings>,
}

/// One declared function.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionConfig {
    /// Explicit physical name; when absent the provider's
    /// `<service>-<stage>-<name>` convention applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        rename = "logForwarding",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub log_forwarding: Option<LogForwardingOverride>,
}

/// Per-function forwarding override. `enabled` absent means enabled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogForwardingOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// `resources` section of the service file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateSection {
    #[serde(rename = "Resources", default)]
    pub resources: ResourceMap,
}

impl ServiceDescription {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read service file: {}", path.display()))?;
        let service: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse service file: {}", path.display()))?;
        Ok(service)
    }

    /// The raw extension block, if the file carries one.
    pub fn forwarding_settings(&self) -> Option<&RawForwardingSettings> {
        self.custom.as_ref().and_then(|c| c.log_forwarding.as_ref())
    }

    /// A non-empty override wins over the provider default.
    pub fn effective_stage<'a>(&'a self, stage_override: Option<&'a str>) -> &'a str {
        match stage_override {
            Some(stage) if !stage.is_empty() => stage,
            _ => &self.provider.stage,
        }
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
