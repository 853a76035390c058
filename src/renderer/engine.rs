use super::{
    helpers,
    interface::{RenderResult, TemplateRenderer},
};
use crate::{
    constants::BODY_TEMPLATE_NAME,
    error::{Error, Result},
    frontmatter,
    variables::{IncludeSet, VariableSet},
};
use log::trace;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// MiniJinja-based prompt renderer.
///
/// Undefined variables, unknown filters and syntax errors all fail the
/// render; nothing is returned on failure.
#[derive(Clone)]
pub struct PromptRenderer {
    /// Base environment with helpers installed; cloned per render call.
    env: Environment<'static>,
}

impl PromptRenderer {
    /// Creates a new PromptRenderer with the helper surface installed.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // Prompts are plain text.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        helpers::register(&mut env);

        Self { env }
    }

    /// Renders an already split template body.
    pub fn render_body(
        &self,
        body: &str,
        vars: &VariableSet,
        includes: &IncludeSet,
    ) -> Result<String> {
        let mut env = self.env.clone();

        for (name, source) in includes.iter() {
            env.add_template_owned(name.to_string(), source.to_string()).map_err(
                |source| Error::IncludeParseError { name: name.to_string(), source },
            )?;
        }

        env.add_template_owned(BODY_TEMPLATE_NAME, body.to_string())?;
        let tmpl = env.get_template(BODY_TEMPLATE_NAME)?;
        Ok(tmpl.render(vars.to_context())?)
    }
}

impl Default for PromptRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for PromptRenderer {
    fn render(
        &self,
        content: &str,
        vars: &VariableSet,
        includes: &IncludeSet,
    ) -> Result<RenderResult> {
        let (metadata, body) = frontmatter::split(content)?.into_parts();
        trace!(
            "Rendering '{}' with {} variables and {} includes",
            metadata.declared_name().unwrap_or(BODY_TEMPLATE_NAME),
            vars.len(),
            includes.len()
        );
        let output = self.render_body(&body, vars, includes)?;
        Ok(RenderResult { output, metadata })
    }
}

/// Renders `content` with a default [`PromptRenderer`].
pub fn render(
    content: &str,
    vars: &VariableSet,
    includes: &IncludeSet,
) -> Result<RenderResult> {
    PromptRenderer::new().render(content, vars, includes)
}
