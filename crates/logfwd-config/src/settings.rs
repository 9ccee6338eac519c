//! Log-forwarding settings: raw extension block -> resolved value object.
//!
//! Defaults are applied here, once, so downstream code never re-checks
//! optional fields.

use serde::{Deserialize, Serialize};

use logfwd_core::ForwardingError;

/// Raw `custom.logForwarding` block as written in the service file.
///
/// Every field is optional at this layer; validation and defaulting happen
/// in [`ForwardingSettings::resolve`]. Field names follow the serverless
/// file format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawForwardingSettings {
    #[serde(rename = "destinationARN", skip_serializing_if = "Option::is_none")]
    pub destination_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    #[serde(rename = "normalizedFilterID", skip_serializing_if = "Option::is_none")]
    pub normalized_filter_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_lambda_permission: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<String>>,
}

/// Resolved log-forwarding settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForwardingSettings {
    pub destination_arn: String,
    pub filter_pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
    pub normalized_filter_id: bool,
    pub create_lambda_permission: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<String>>,
}

impl ForwardingSettings {
    /// Validate and normalize the raw extension block.
    ///
    /// A missing block or a missing `destinationARN` is a hard error; every
    /// other field defaults independently.
    pub fn resolve(raw: Option<&RawForwardingSettings>) -> Result<Self, ForwardingError> {
        let raw = raw.ok_or(ForwardingError::SettingsNotConfigured)?;
        let destination_arn = raw
            .destination_arn
            .clone()
            .ok_or(ForwardingError::MissingDestination)?;
        Ok(Self {
            destination_arn,
            filter_pattern: raw.filter_pattern.clone().unwrap_or_default(),
            role_arn: raw.role_arn.clone(),
            normalized_filter_id: raw.normalized_filter_id.unwrap_or(true),
            create_lambda_permission: raw.create_lambda_permission.unwrap_or(true),
            stages: raw.stages.clone(),
        })
    }

    /// Stage gate: true when a non-empty stage list is configured and the
    /// active stage is not in it.
    pub fn skips_stage(&self, stage: &str) -> bool {
        match &self.stages {
            Some(stages) if !stages.is_empty() => !stages.iter().any(|s| s == stage),
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
