//! Template rendering: the minijinja-backed engine and its helper surface.

pub mod engine;
pub mod helpers;
pub mod interface;

pub use engine::{render, PromptRenderer};
pub use interface::{RenderResult, TemplateRenderer};
