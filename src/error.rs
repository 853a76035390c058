use std::path::PathBuf;
use thiserror::Error;

use crate::validation::MissingVariables;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to walk template directory. Original error: {0}")]
    WalkError(#[from] walkdir::Error),

    /// Frontmatter text between the delimiters is not valid metadata.
    #[error("Failed to parse frontmatter. Original error: {0}")]
    FrontmatterError(#[from] serde_yaml::Error),

    /// Read or frontmatter failure while loading a specific file.
    #[error("Failed to load template '{}'. Original error: {source}", .path.display())]
    TemplateLoadError { path: PathBuf, source: Box<Error> },

    #[error("Cannot proceed: template directory '{template_dir}' does not exist.")]
    TemplateDirNotFoundError { template_dir: String },

    #[error("Failed to parse JSON. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse chain definition. Original error: {0}")]
    ChainParseError(String),

    #[error("Chain '{name}' has no steps.")]
    EmptyChainError { name: String },

    #[error("Template '{name}' not found.")]
    TemplateNotFoundError { name: String },

    #[error(transparent)]
    MissingVariables(#[from] MissingVariables),

    #[error("Failed to parse include '{name}'. Original error: {source}")]
    IncludeParseError { name: String, source: minijinja::Error },

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Cannot resolve variable '{name}'. Original error: {source}")]
    VariableResolutionError { name: String, source: Box<Error> },

    /// A chain step failed; `step` is 1-based.
    #[error("Step {step} ({template}): {source}")]
    StepError { step: usize, template: String, source: Box<Error> },

    #[error("No usable configuration in '{template_dir}': {reason}.")]
    ConfigError { template_dir: String, reason: String },

    #[error("Invalid configuration: {0}.")]
    ConfigValidation(String),

    #[error("Invalid variable '{0}': expected key=value.")]
    InvalidVariable(String),
}

impl Error {
    /// Returns the missing variable names if this error, or the step error it
    /// wraps, is a validation failure.
    pub fn missing_variables(&self) -> Option<&[String]> {
        match self {
            Error::MissingVariables(missing) => Some(&missing.missing),
            Error::StepError { source, .. } => source.missing_variables(),
            _ => None,
        }
    }

    /// Returns the 1-based step number for chain step failures.
    pub fn step(&self) -> Option<usize> {
        match self {
            Error::StepError { step, .. } => Some(*step),
            _ => None,
        }
    }
}

/// Convenience type alias for Results with promptkit's Error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variables_reaches_through_step_errors() {
        let err = Error::StepError {
            step: 2,
            template: "summarize".to_string(),
            source: Box::new(Error::MissingVariables(MissingVariables {
                missing: vec!["a".to_string(), "c".to_string()],
            })),
        };
        assert_eq!(err.step(), Some(2));
        assert_eq!(
            err.missing_variables(),
            Some(&["a".to_string(), "c".to_string()][..])
        );
    }

    #[test]
    fn step_error_message_names_step_and_template() {
        let err = Error::StepError {
            step: 1,
            template: "ghost".to_string(),
            source: Box::new(Error::TemplateNotFoundError { name: "ghost".to_string() }),
        };
        assert_eq!(err.to_string(), "Step 1 (ghost): Template 'ghost' not found.");
    }
}
