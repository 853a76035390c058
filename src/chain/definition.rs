use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// One render step of a chain.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Step {
    /// Registry name of the template to render.
    pub template: String,
    /// Local variable name to expression. Expressions are rendered against
    /// the chain's variables before the step runs.
    #[serde(default)]
    pub vars: IndexMap<String, String>,
    /// Name under which this step's output is captured.
    #[serde(default)]
    pub output_var: Option<String>,
}

impl Step {
    pub fn new(template: impl Into<String>) -> Self {
        Self { template: template.into(), vars: IndexMap::new(), output_var: None }
    }

    pub fn var(mut self, name: impl Into<String>, expression: impl Into<String>) -> Self {
        self.vars.insert(name.into(), expression.into());
        self
    }

    pub fn output(mut self, name: impl Into<String>) -> Self {
        self.output_var = Some(name.into());
        self
    }
}

/// An ordered, non-empty list of steps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChainDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl ChainDefinition {
    /// Builds a definition in code, rejecting an empty step list.
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Result<Self> {
        Self { name: name.into(), steps }.checked()
    }

    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let def: Self = serde_yaml::from_str(source)
            .map_err(|e| Error::ChainParseError(e.to_string()))?;
        def.checked()
    }

    pub fn from_json_str(source: &str) -> Result<Self> {
        let def: Self = serde_json::from_str(source)
            .map_err(|e| Error::ChainParseError(e.to_string()))?;
        def.checked()
    }

    /// Reads a chain file; `.json` files are parsed as JSON, anything else
    /// as YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading chain definition from '{}'.", path.display());
        let content = std::fs::read_to_string(path)?;
        let is_json = path.extension().and_then(|ext| ext.to_str()) == Some("json");
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    fn checked(self) -> Result<Self> {
        if self.steps.is_empty() {
            return Err(Error::EmptyChainError { name: self.name });
        }
        Ok(self)
    }
}
