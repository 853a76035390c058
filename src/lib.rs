/// Handles argument parsing and command execution.
pub mod cli;

/// Defines custom error types.
pub mod error;

/// Constants shared across modules.
pub mod constants;

/// Template directory configuration.
pub mod config;

/// Extension traits for standard library types.
pub mod ext;

/// Splits YAML frontmatter from template bodies.
pub mod frontmatter;

/// Template metadata declared in frontmatter.
pub mod metadata;

/// Variables and include fragments passed to renders.
pub mod variables;

/// Required variable validation.
pub mod validation;

/// Loads templates and includes from a directory.
pub mod registry;

/// Template rendering and helper functions.
pub mod renderer;

/// Multi-step prompt chains.
pub mod chain;

/// Helpers for reading input.
pub mod ioutils;

pub use chain::{ChainDefinition, ChainExecutor, ChainResult, Step};
pub use error::{Error, Result};
pub use metadata::TemplateMetadata;
pub use registry::{TemplateRecord, TemplateRegistry};
pub use renderer::{render, PromptRenderer, RenderResult, TemplateRenderer};
pub use variables::{IncludeSet, VariableSet};
