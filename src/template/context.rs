// ABOUTME: Per-call variable bindings for service url templates
// ABOUTME: Only variables whose value is present are ever bound

use serde::Serialize;
use std::collections::BTreeMap;

pub const ENDPOINT_BASE: &str = "endpoint-base";
pub const ENDPOINT_HOST: &str = "endpoint-host";
pub const ENDPOINT: &str = "endpoint";
pub const SERVICE_VERSION: &str = "service-version";

/// Variable name to value mapping handed to the engine for a single evaluation.
///
/// Serializes as a flat JSON object, so `{{endpoint-host}}` resolves against
/// the top-level key of the same name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UrlBindings {
    values: BTreeMap<&'static str, String>,
}

impl UrlBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value` if the value is present; absent values stay unbound
    pub fn bind(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(value) = value {
            self.values.insert(name, value.to_string());
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Convert bindings to JSON for display
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.values
                .iter()
                .map(|(name, value)| (name.to_string(), serde_json::Value::from(value.as_str())))
                .collect(),
        )
    }
}
