use anyhow::Result;
use std::path::Path;

use logfwd_config::{ServiceDescription, TemplateSection};
use logfwd_core::OutputFormat;
use logfwd_synth::{UpdateOutcome, update_resources};

pub fn run(service_path: &Path, stage: Option<&str>, format: OutputFormat) -> Result<()> {
    let mut service = ServiceDescription::load(service_path)?;
    let outcome = update_resources(&mut service, stage)?;
    if outcome == UpdateOutcome::SkippedStage {
        eprintln!("Log forwarding skipped for this stage; template unchanged");
    }

    let template = service.resources.unwrap_or_default();
    print!("{}", render(&template, format)?);
    Ok(())
}

fn render(template: &TemplateSection, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml::to_string(template)?,
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(template)?),
    })
}
