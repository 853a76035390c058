use crate::{
    error::Result,
    metadata::TemplateMetadata,
    variables::{IncludeSet, VariableSet},
};

/// Output of a single render call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult {
    pub output: String,
    /// Metadata in effect for this render; default when the content had
    /// no frontmatter.
    pub metadata: TemplateMetadata,
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders full template content (frontmatter included) with the given
    /// variables and include fragments.
    ///
    /// # Arguments
    /// * `content` - Template content; frontmatter is split off again here
    /// * `vars` - Variables visible to the body
    /// * `includes` - Fragments the body may include by name
    ///
    /// # Returns
    /// * `Result<RenderResult>` - Rendered text and the template's metadata
    fn render(
        &self,
        content: &str,
        vars: &VariableSet,
        includes: &IncludeSet,
    ) -> Result<RenderResult>;
}
