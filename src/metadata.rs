use serde::{Deserialize, Serialize};

/// Declared properties of a template, read from its frontmatter.
///
/// Every key is optional and unknown keys are ignored, so an empty
/// frontmatter block produces `TemplateMetadata::default()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateMetadata {
    /// Display name; also the registry key when non-empty.
    pub name: String,
    pub description: String,
    /// Variables that must be present before the template renders.
    /// Order is preserved, uniqueness is not enforced.
    pub required_vars: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_hint: Option<String>,
}

impl TemplateMetadata {
    /// The declared name, if it is non-empty.
    pub fn declared_name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(self.name.as_str())
        }
    }

    pub fn has_required_vars(&self) -> bool {
        !self.required_vars.is_empty()
    }
}
