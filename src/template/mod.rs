// ABOUTME: Template module for service url resolution
// ABOUTME: Provides the evaluator, its variable bindings and the underlying Handlebars engine

pub mod context;
pub mod engine;
pub mod error;
pub mod evaluator;

pub use context::{UrlBindings, ENDPOINT, ENDPOINT_BASE, ENDPOINT_HOST, SERVICE_VERSION};
pub use engine::{TemplateEngine, UndefinedVariables};
pub use error::{Result, TemplateError};
pub use evaluator::ServiceUrlEvaluator;
