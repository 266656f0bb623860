// ABOUTME: Command implementations for the service-url CLI
// ABOUTME: Evaluates templates, checks template syntax and reports active bindings

use anyhow::Result;
use tracing::{debug, info};

use super::Config;
use crate::template::{TemplateEngine, UndefinedVariables};

/// Overrides applied on top of the loaded configuration for `eval`
#[derive(Debug, Default)]
pub struct EvalOverrides {
    pub endpoint_host: Option<String>,
    pub endpoint_base: Option<String>,
    pub strict: bool,
}

/// Evaluate a template and return the resolved url
pub fn eval_template(
    template: &str,
    service_version: Option<&str>,
    overrides: EvalOverrides,
    config: &Config,
) -> Result<String> {
    let mut config = config.clone();
    if let Some(host) = overrides.endpoint_host {
        config.endpoint.host = Some(host);
    }
    if let Some(base) = overrides.endpoint_base {
        config.endpoint.base = Some(base);
    }
    if overrides.strict {
        config.undefined_variables = UndefinedVariables::Error;
    }

    let evaluator = config.evaluator();
    debug!(
        endpoint = ?evaluator.endpoint(),
        policy = %evaluator.undefined_variables(),
        "Evaluator configured"
    );

    let url = evaluator.evaluate(template, service_version)?;
    info!("Resolved service url: {}", url);
    Ok(url)
}

/// Check template syntax
pub fn check_template(template: &str) -> Result<()> {
    let engine = TemplateEngine::new();
    engine.validate_template(template)?;

    if !engine.has_templates(template) {
        info!("Template contains no placeholders");
    }
    Ok(())
}

/// Render the bindings that `eval` would use, as pretty JSON
pub fn show_variables(service_version: Option<&str>, config: &Config) -> Result<String> {
    let bindings = config.evaluator().bindings(service_version);
    debug!(
        bound = ?bindings.names().collect::<Vec<_>>(),
        "Collected template variables"
    );
    Ok(serde_json::to_string_pretty(&bindings.to_json())?)
}
