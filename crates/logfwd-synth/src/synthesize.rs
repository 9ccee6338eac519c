//! Pure synthesis of log-forwarding declarations.

use std::collections::BTreeMap;

use tracing::{debug, info};

use logfwd_config::ForwardingSettings;
use logfwd_core::{
    Declaration, ForwardingError, LambdaPermissionProperties, SubscriptionFilterProperties,
};

use crate::naming;

/// Logical id of the single invoke-permission declaration.
pub const PERMISSION_LOGICAL_ID: &str = "LogForwardingLambdaPermission";

const INVOKE_ACTION: &str = "lambda:InvokeFunction";

/// Deployment context supplied by the host.
#[derive(Debug, Clone)]
pub struct DeploymentContext {
    pub stage: String,
    pub region: String,
}

/// One declared function, as seen by the synthesizer.
///
/// Log-group identifiers are supplied by the naming helpers; the
/// synthesizer never derives them itself.
#[derive(Debug, Clone)]
pub struct FunctionDescriptor {
    /// Logical name as declared in the service file.
    pub name: String,
    /// Per-function override; absent or `true` means eligible.
    pub enabled: Option<bool>,
    pub log_group_name: String,
    pub log_group_logical_id: String,
}

impl FunctionDescriptor {
    fn is_eligible(&self) -> bool {
        self.enabled != Some(false)
    }
}

/// Synthesize the declaration mapping for one deployment.
///
/// Pure: no I/O, no host state. The only failure mode is two functions
/// claiming the same filter id; everything else (stage mismatch, disabled
/// functions, empty function set) shrinks the output instead.
pub fn synthesize(
    settings: &ForwardingSettings,
    ctx: &DeploymentContext,
    functions: &[FunctionDescriptor],
) -> Result<BTreeMap<String, Declaration>, ForwardingError> {
    let mut declarations = BTreeMap::new();

    if settings.skips_stage(&ctx.stage) {
        info!(stage = %ctx.stage, "Log forwarding is ignored for this stage");
        return Ok(declarations);
    }

    // A configured cross-account role already carries invoke permission, so
    // the resource-based grant is suppressed. Evaluated once; both the
    // permission declaration and every DependsOn edge use this value.
    let create_permission = settings.create_lambda_permission && settings.role_arn.is_none();
    if create_permission {
        declarations.insert(
            PERMISSION_LOGICAL_ID.to_string(),
            Declaration::lambda_permission(LambdaPermissionProperties {
                function_name: settings.destination_arn.clone(),
                action: INVOKE_ACTION.to_string(),
                principal: format!("logs.{}.amazonaws.com", ctx.region),
            }),
        );
    }

    // filter id -> function that claimed it, for collision reporting
    let mut claimed: BTreeMap<String, String> = BTreeMap::new();
    for function in functions {
        if !function.is_eligible() {
            debug!(function = %function.name, "Log forwarding disabled for function");
            continue;
        }

        let filter_id = filter_logical_id(settings, &function.name);
        if let Some(previous) = claimed.insert(filter_id.clone(), function.name.clone()) {
            return Err(ForwardingError::DuplicateFilterId {
                filter_id,
                function: function.name.clone(),
                previous,
            });
        }

        let mut depends_on = Vec::with_capacity(2);
        if create_permission {
            depends_on.push(PERMISSION_LOGICAL_ID.to_string());
        }
        depends_on.push(function.log_group_logical_id.clone());

        declarations.insert(
            filter_id,
            Declaration::subscription_filter(
                SubscriptionFilterProperties {
                    destination_arn: settings.destination_arn.clone(),
                    filter_pattern: settings.filter_pattern.clone(),
                    log_group_name: function.log_group_name.clone(),
                    role_arn: settings.role_arn.clone(),
                },
                depends_on,
            ),
        );
    }

    Ok(declarations)
}

/// `SubscriptionFilter<suffix>`: suffix is the normalized function name
/// unless `normalizedFilterID: false` keeps the raw declared name.
pub fn filter_logical_id(settings: &ForwardingSettings, function_name: &str) -> String {
    if settings.normalized_filter_id {
        format!(
            "SubscriptionFilter{}",
            naming::normalized_function_name(function_name)
        )
    } else {
        format!("SubscriptionFilter{function_name}")
    }
}

#[cfg(test)]
#[path = "synthesize_tests.rs"]
mod tests;
