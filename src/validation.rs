use crate::variables::VariableSet;
use thiserror::Error;

/// Required variables that were absent from a variable set, in the order
/// the template declares them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing required variables: {}", .missing.join(", "))]
pub struct MissingVariables {
    pub missing: Vec<String>,
}

/// Checks that every name in `required` is a key of `vars`.
///
/// All missing names are collected, not just the first. An empty
/// `required` list always passes.
pub fn validate(required: &[String], vars: &VariableSet) -> Result<(), MissingVariables> {
    let missing: Vec<String> =
        required.iter().filter(|name| !vars.contains(name)).cloned().collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingVariables { missing })
    }
}
