use anyhow::Result;
use std::path::Path;

use logfwd_config::{ForwardingSettings, ServiceDescription};

/// Resolve the settings block and print the resolved values. Exits through
/// the normal error path when the configuration is invalid.
pub fn run(service_path: &Path) -> Result<()> {
    let service = ServiceDescription::load(service_path)?;
    let settings = ForwardingSettings::resolve(service.forwarding_settings())?;
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}
