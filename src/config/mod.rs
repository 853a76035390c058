//! Configuration management for template directories
//!
//! A template root may carry a `promptkit.json`, `promptkit.yaml` or
//! `promptkit.yml` file; without one the defaults apply.

pub mod loader;

pub use loader::Config;
