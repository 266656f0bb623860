// ABOUTME: Error types for service url template evaluation
// ABOUTME: Every substitution failure is reported as a single evaluation error kind

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    /// Substitution could not complete: bad syntax, a strict-mode unbound
    /// variable, or any other engine fault.
    #[error("Problems with service url template evaluation: {template}")]
    Evaluation {
        template: String,
        #[source]
        source: handlebars::RenderError,
    },
}

impl TemplateError {
    pub(crate) fn evaluation(template: &str, source: handlebars::RenderError) -> Self {
        TemplateError::Evaluation {
            template: template.to_string(),
            source,
        }
    }

    /// The template text that failed to evaluate
    pub fn template(&self) -> &str {
        match self {
            TemplateError::Evaluation { template, .. } => template,
        }
    }
}

pub type Result<T> = std::result::Result<T, TemplateError>;
