//! CloudFormation declaration model and resource-map merge.
//!
//! Synthesized declarations are typed; the template's resource section they
//! merge into is an untyped JSON map, so pre-existing declarations of any
//! shape survive the round-trip.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Resource type tag of the invoke-permission declaration.
pub const LAMBDA_PERMISSION_TYPE: &str = "AWS::Lambda::Permission";
/// Resource type tag of the log-subscription declaration.
pub const SUBSCRIPTION_FILTER_TYPE: &str = "AWS::Logs::SubscriptionFilter";

/// Resource section of a service template: logical id -> declaration body.
///
/// Ordered so serialized output is deterministic across runs.
pub type ResourceMap = BTreeMap<String, Value>;

/// One unit of desired infrastructure state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    #[serde(rename = "Type")]
    pub resource_type: String,
    #[serde(rename = "Properties")]
    pub properties: DeclarationProperties,
    /// Logical ids that must be created before this declaration.
    #[serde(rename = "DependsOn", default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

impl Declaration {
    pub fn lambda_permission(properties: LambdaPermissionProperties) -> Self {
        Self {
            resource_type: LAMBDA_PERMISSION_TYPE.to_string(),
            properties: DeclarationProperties::LambdaPermission(properties),
            depends_on: Vec::new(),
        }
    }

    pub fn subscription_filter(
        properties: SubscriptionFilterProperties,
        depends_on: Vec<String>,
    ) -> Self {
        Self {
            resource_type: SUBSCRIPTION_FILTER_TYPE.to_string(),
            properties: DeclarationProperties::SubscriptionFilter(properties),
            depends_on,
        }
    }
}

/// Property bag of a declaration, keyed by its resource type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DeclarationProperties {
    LambdaPermission(LambdaPermissionProperties),
    SubscriptionFilter(SubscriptionFilterProperties),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LambdaPermissionProperties {
    /// Destination ARN the permission is granted on.
    pub function_name: String,
    pub action: String,
    pub principal: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SubscriptionFilterProperties {
    pub destination_arn: String,
    pub filter_pattern: String,
    pub log_group_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,
}

/// Merge a synthesized fragment into the template's resource section.
///
/// Fragment keys overwrite same-keyed entries already present; entries the
/// fragment does not name are left untouched.
pub fn merge_resources(target: &mut ResourceMap, fragment: ResourceMap) {
    for (logical_id, body) in fragment {
        target.insert(logical_id, body);
    }
}

#[cfg(test)]
#[path = "resources_tests.rs"]
mod tests;
