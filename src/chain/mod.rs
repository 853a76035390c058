//! Multi-step prompt chains
//!
//! - `definition`: chain file format and parsing
//! - `executor`: runs steps in order, threading captured outputs forward

pub mod definition;
pub mod executor;

pub use definition::{ChainDefinition, Step};
pub use executor::{execute, ChainExecutor, ChainResult};
