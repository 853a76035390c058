use super::definition::{ChainDefinition, Step};
use crate::{
    error::{Error, Result},
    registry::TemplateRegistry,
    renderer::{PromptRenderer, TemplateRenderer},
    validation::validate,
    variables::{IncludeSet, VariableSet},
};
use indexmap::IndexMap;
use log::{debug, info, warn};

/// Outcome of a completed chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChainResult {
    /// Output of the last step.
    pub output: String,
    /// Output of every step that declared an `output_var`, keyed by it.
    pub intermediates: IndexMap<String, String>,
}

/// Runs chain definitions against a registry.
pub struct ChainExecutor<'a> {
    registry: &'a TemplateRegistry,
    engine: &'a dyn TemplateRenderer,
    strict_resolution: bool,
}

impl<'a> ChainExecutor<'a> {
    pub fn new(registry: &'a TemplateRegistry, engine: &'a dyn TemplateRenderer) -> Self {
        Self { registry, engine, strict_resolution: false }
    }

    /// When set, a step variable whose expression fails to render aborts the
    /// chain. Otherwise the expression text is used as the value.
    pub fn strict_resolution(mut self, strict: bool) -> Self {
        self.strict_resolution = strict;
        self
    }

    /// Runs every step in order.
    ///
    /// `initial_vars` seeds the chain's variables and is left untouched.
    /// Each step's captured output becomes visible to the variable
    /// expressions of the steps after it.
    ///
    /// # Errors
    /// * `Error::StepError` wrapping the lookup, resolution, validation or
    ///   render failure of the first step that fails. Outputs of earlier
    ///   steps are discarded.
    pub fn execute(
        &self,
        def: &ChainDefinition,
        initial_vars: &VariableSet,
    ) -> Result<ChainResult> {
        info!("Running chain '{}' ({} steps).", def.name, def.steps.len());

        let mut vars = initial_vars.clone();
        let mut result = ChainResult::default();

        for (index, step) in def.steps.iter().enumerate() {
            let number = index + 1;
            let fail = |source: Error| Error::StepError {
                step: number,
                template: step.template.clone(),
                source: Box::new(source),
            };

            let record = self.registry.get(&step.template).map_err(fail)?;
            let step_vars = self.resolve_vars(number, step, &vars).map_err(fail)?;

            if record.metadata.has_required_vars() {
                validate(&record.metadata.required_vars, &step_vars)
                    .map_err(|missing| fail(missing.into()))?;
            }

            let rendered = self
                .engine
                .render(&record.content, &step_vars, self.registry.includes())
                .map_err(fail)?;
            debug!(
                "Step {number} ({}) rendered {} characters.",
                step.template,
                rendered.output.len()
            );

            if let Some(name) = &step.output_var {
                vars.insert(name.clone(), rendered.output.clone());
                result.intermediates.insert(name.clone(), rendered.output.clone());
            }
            result.output = rendered.output;
        }

        Ok(result)
    }

    /// Renders each of the step's expressions against the chain variables.
    /// Includes are not available to expressions.
    fn resolve_vars(
        &self,
        number: usize,
        step: &Step,
        ambient: &VariableSet,
    ) -> Result<VariableSet> {
        let no_includes = IncludeSet::new();
        let mut resolved = VariableSet::new();

        for (name, expression) in &step.vars {
            let value = match self.engine.render(expression, ambient, &no_includes) {
                Ok(rendered) => rendered.output,
                Err(err) if !self.strict_resolution => {
                    warn!(
                        "Step {number}: cannot resolve '{name}' ({err}); using the expression as written."
                    );
                    expression.clone()
                }
                Err(err) => {
                    return Err(Error::VariableResolutionError {
                        name: name.clone(),
                        source: Box::new(err),
                    })
                }
            };
            resolved.insert(name.clone(), value);
        }

        Ok(resolved)
    }
}

/// Runs `def` with a default [`PromptRenderer`] and lenient variable
/// resolution.
pub fn execute(
    def: &ChainDefinition,
    registry: &TemplateRegistry,
    initial_vars: &VariableSet,
) -> Result<ChainResult> {
    let engine = PromptRenderer::new();
    ChainExecutor::new(registry, &engine).execute(def, initial_vars)
}
