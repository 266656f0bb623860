// ABOUTME: Main library module for the service url template evaluator
// ABOUTME: Exports the template evaluation core and the command line front end

pub mod cli;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use template::{ServiceUrlEvaluator, TemplateError, UndefinedVariables, UrlBindings};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
