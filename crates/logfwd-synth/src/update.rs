//! The update pipeline: resolve settings, synthesize declarations, merge
//! them into the service's resource template.

use anyhow::Result;
use tracing::info;

use logfwd_config::{ForwardingSettings, ServiceDescription, TemplateSection};
use logfwd_core::{ResourceMap, merge_resources};

use crate::naming;
use crate::synthesize::{DeploymentContext, FunctionDescriptor, synthesize};

/// Outcome of one update pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Declarations were merged into the template.
    Updated { declarations: usize },
    /// The active stage is not in the configured stage list; the template
    /// was left untouched.
    SkippedStage,
}

/// Resolve, synthesize, and merge for one deployment preparation.
///
/// Settings validation errors propagate uncaught; a stage-gate miss returns
/// without touching (or initializing) the resource template.
pub fn update_resources(
    service: &mut ServiceDescription,
    stage_override: Option<&str>,
) -> Result<UpdateOutcome> {
    let settings = ForwardingSettings::resolve(service.forwarding_settings())?;
    let stage = service.effective_stage(stage_override).to_string();

    if settings.skips_stage(&stage) {
        info!(stage = %stage, "Log forwarding is ignored for this stage");
        return Ok(UpdateOutcome::SkippedStage);
    }

    info!("Updating log forwarding resources");
    let ctx = DeploymentContext {
        stage: stage.clone(),
        region: service.provider.region.clone(),
    };
    let functions = function_descriptors(service, &stage);
    let declarations = synthesize(&settings, &ctx, &functions)?;
    let count = declarations.len();

    let mut fragment = ResourceMap::new();
    for (logical_id, declaration) in declarations {
        fragment.insert(logical_id, serde_json::to_value(declaration)?);
    }

    let resources = &mut service
        .resources
        .get_or_insert_with(TemplateSection::default)
        .resources;
    merge_resources(resources, fragment);

    info!(declarations = count, "Log forwarding resources updated");
    Ok(UpdateOutcome::Updated { declarations: count })
}

/// One descriptor per declared function, in declared order, with log-group
/// identifiers from the naming helpers.
fn function_descriptors(service: &ServiceDescription, stage: &str) -> Vec<FunctionDescriptor> {
    service
        .functions
        .iter()
        .map(|(name, config)| {
            let physical = naming::physical_function_name(
                &service.service,
                stage,
                name,
                config.name.as_deref(),
            );
            FunctionDescriptor {
                name: name.clone(),
                enabled: config.log_forwarding.as_ref().and_then(|o| o.enabled),
                log_group_name: naming::log_group_name(&physical),
                log_group_logical_id: naming::log_group_logical_id(name),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
