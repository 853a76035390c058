use crate::constants::STDIN_INDICATOR;
use crate::error::{Error, Result};
use crate::variables::VariableSet;

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}

/// Parses a JSON object into variables. Anything other than an object
/// yields an empty set.
pub fn parse_string_to_vars(buf: &str) -> Result<VariableSet> {
    let value: serde_json::Value = serde_json::from_str(buf)?;

    match value {
        serde_json::Value::Object(map) => Ok(map.into()),
        _ => Ok(VariableSet::new()),
    }
}

/// Reads variables from a JSON string, or from stdin when `source` is `-`.
pub fn read_vars_json(source: &str) -> Result<VariableSet> {
    if source == STDIN_INDICATOR {
        let buf = read_from(std::io::stdin())?;
        parse_string_to_vars(&buf)
    } else {
        parse_string_to_vars(source)
    }
}

/// Parses `key=value` pairs into string variables. Later pairs win.
pub fn parse_key_values<S: AsRef<str>>(pairs: &[S]) -> Result<VariableSet> {
    let mut vars = VariableSet::new();
    for pair in pairs {
        let pair = pair.as_ref();
        match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                vars.insert(key, value);
            }
            _ => return Err(Error::InvalidVariable(pair.to_string())),
        }
    }
    Ok(vars)
}
