// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for service-url

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "service-url")]
#[command(about = "Resolve service endpoint URLs from templates")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a service url template and print the result
    Eval {
        #[arg(help = "Template text, e.g. '{{endpoint}}/run/{{service-version}}'")]
        template: String,

        #[arg(short, long, help = "Service version bound to {{service-version}}")]
        service_version: Option<String>,

        #[arg(long, help = "Override the configured endpoint host")]
        endpoint_host: Option<String>,

        #[arg(long, help = "Override the configured endpoint base path")]
        endpoint_base: Option<String>,

        #[arg(long, help = "Fail on references to unbound variables")]
        strict: bool,
    },

    /// Check template syntax without evaluating
    Check {
        #[arg(help = "Template text to check")]
        template: String,
    },

    /// Print the variables that would be bound, as JSON
    Vars {
        #[arg(short, long, help = "Service version bound to {{service-version}}")]
        service_version: Option<String>,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
