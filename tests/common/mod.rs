// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides evaluator fixtures and an isolated environment for running the CLI binary

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use service_url_template::ServiceUrlEvaluator;

pub const HOST: &str = "https://api.example.org";
pub const BASE: &str = "/services";

const ENV_VARS: [&str; 6] = [
    "SERVICE_URL_ENDPOINT_HOST",
    "SERVICE_URL_ENDPOINT_BASE",
    "SERVICE_URL_UNDEFINED_VARIABLES",
    "SERVICE_URL_LOG_LEVEL",
    "SERVICE_URL_LOG_FORMAT",
    "RUST_LOG",
];

pub fn evaluator(host: Option<&str>, base: Option<&str>) -> ServiceUrlEvaluator {
    ServiceUrlEvaluator::new(host.map(str::to_string), base.map(str::to_string))
}

/// Scratch directory the CLI runs in, so no stray config file is picked up
pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.path().join("service-url.yaml");
        std::fs::write(&path, contents).expect("Failed to write config file");
        path
    }

    pub fn command(&self) -> Command {
        let mut command = Command::new(env!("CARGO_BIN_EXE_service-url"));
        command.current_dir(self.path()).env("HOME", self.path());
        for var in ENV_VARS {
            command.env_remove(var);
        }
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .output()
            .expect("Failed to execute service-url")
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}
