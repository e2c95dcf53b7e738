use super::{ensure_trailing_newline, render_error};
use crate::error::Result;

pub const FORMAT: &str = "yaml";

/// A YAML document built from a structured value.
#[derive(Debug, Clone)]
pub struct YamlFile {
    name: String,
    value: serde_json::Value,
}

impl YamlFile {
    pub fn new(name: impl Into<String>, value: serde_json::Value) -> Self {
        Self { name: name.into(), value }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut serde_json::Value {
        &mut self.value
    }

    pub fn render(&self) -> Result<String> {
        let text = serde_yaml::to_string(&self.value)
            .map_err(|e| render_error(&self.name, FORMAT, e.to_string()))?;
        Ok(ensure_trailing_newline(&text))
    }
}
