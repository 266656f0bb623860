// ABOUTME: Service url evaluator binding endpoint configuration into url templates
// ABOUTME: Derives the combined endpoint once and substitutes it per call with a service version

use tracing::debug;

use super::context::{UrlBindings, ENDPOINT, ENDPOINT_BASE, ENDPOINT_HOST, SERVICE_VERSION};
use super::engine::{TemplateEngine, UndefinedVariables};
use super::error::Result;

/// Resolves service url templates against a fixed endpoint host and base path.
///
/// Templates use Handlebars placeholders and may reference four variables:
///
/// | Name              | Bound when                                         |
/// |-------------------|----------------------------------------------------|
/// | `endpoint-base`   | an endpoint base is configured                     |
/// | `endpoint-host`   | an endpoint host is configured                     |
/// | `endpoint`        | an endpoint host is configured (host + base)       |
/// | `service-version` | the caller passes a version to [`evaluate`]        |
///
/// Unbound variables render as empty strings unless the evaluator was built
/// with [`UndefinedVariables::Error`].
///
/// [`evaluate`]: ServiceUrlEvaluator::evaluate
#[derive(Debug, Clone)]
pub struct ServiceUrlEvaluator {
    endpoint_host: Option<String>,
    endpoint_base: Option<String>,
    endpoint: Option<String>,
    engine: TemplateEngine,
}

impl ServiceUrlEvaluator {
    pub fn new(endpoint_host: Option<String>, endpoint_base: Option<String>) -> Self {
        let endpoint = endpoint_host.as_ref().map(|host| match &endpoint_base {
            Some(base) => format!("{}{}", host, base),
            None => host.clone(),
        });

        Self {
            endpoint_host,
            endpoint_base,
            endpoint,
            engine: TemplateEngine::new(),
        }
    }

    /// Switch how references to unbound variables are treated
    pub fn with_undefined_variables(mut self, policy: UndefinedVariables) -> Self {
        self.engine = TemplateEngine::with_undefined_variables(policy);
        self
    }

    pub fn endpoint_host(&self) -> Option<&str> {
        self.endpoint_host.as_deref()
    }

    pub fn endpoint_base(&self) -> Option<&str> {
        self.endpoint_base.as_deref()
    }

    /// Host followed by base; present exactly when a host is configured
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn undefined_variables(&self) -> UndefinedVariables {
        self.engine.undefined_variables()
    }

    /// Build the variable bindings for one evaluation
    pub fn bindings(&self, service_version: Option<&str>) -> UrlBindings {
        let mut bindings = UrlBindings::new();
        bindings.bind(ENDPOINT_BASE, self.endpoint_base());
        bindings.bind(ENDPOINT_HOST, self.endpoint_host());
        bindings.bind(ENDPOINT, self.endpoint());
        bindings.bind(SERVICE_VERSION, service_version);
        bindings
    }

    /// Substitute the configured endpoint values and `service_version` into `template`
    pub fn evaluate(&self, template: &str, service_version: Option<&str>) -> Result<String> {
        let bindings = self.bindings(service_version);
        debug!(
            template,
            bound = bindings.len(),
            "Evaluating service url template"
        );

        self.engine.render(template, &bindings)
    }
}
