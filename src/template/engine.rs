// ABOUTME: Handlebars-backed substitution engine for service url templates
// ABOUTME: Renders `{{name}}` placeholders verbatim against a set of url bindings

use handlebars::Handlebars;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::context::UrlBindings;
use super::error::{Result, TemplateError};

/// What happens when a template references a variable that is not bound
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UndefinedVariables {
    /// Render the placeholder as an empty string (Handlebars' default)
    #[default]
    Empty,
    /// Fail the evaluation (Handlebars strict mode)
    Error,
}

impl FromStr for UndefinedVariables {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "empty" => Ok(UndefinedVariables::Empty),
            "error" | "strict" => Ok(UndefinedVariables::Error),
            other => Err(format!(
                "Unknown undefined variable policy '{}'. Expected 'empty' or 'error'",
                other
            )),
        }
    }
}

impl fmt::Display for UndefinedVariables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndefinedVariables::Empty => write!(f, "empty"),
            UndefinedVariables::Error => write!(f, "error"),
        }
    }
}

#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
    undefined_variables: UndefinedVariables,
}

impl TemplateEngine {
    /// Create an engine that renders unbound variables as empty strings
    pub fn new() -> Self {
        Self::with_undefined_variables(UndefinedVariables::default())
    }

    /// Create an engine that fails on unbound variables
    pub fn strict() -> Self {
        Self::with_undefined_variables(UndefinedVariables::Error)
    }

    pub fn with_undefined_variables(policy: UndefinedVariables) -> Self {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(policy == UndefinedVariables::Error);
        handlebars.set_dev_mode(false);

        // URLs carry `&`, `=` and `/`, which must come through untouched
        handlebars.register_escape_fn(handlebars::no_escape);

        Self {
            handlebars,
            undefined_variables: policy,
        }
    }

    pub fn undefined_variables(&self) -> UndefinedVariables {
        self.undefined_variables
    }

    /// Render a template string against the given bindings
    pub fn render(&self, template: &str, bindings: &UrlBindings) -> Result<String> {
        self.handlebars
            .render_template(template, bindings)
            .map_err(|e| TemplateError::evaluation(template, e))
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, template: &str) -> Result<()> {
        handlebars::Template::compile(template)
            .map(|_| ())
            .map_err(|e| TemplateError::evaluation(template, e.into()))
    }

    /// Check if a string contains template expressions
    pub fn has_templates(&self, text: &str) -> bool {
        text.contains("{{") && text.contains("}}")
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("undefined_variables", &self.undefined_variables)
            .finish()
    }
}
