//! Text helpers exposed to templates.
//!
//! Each helper is registered twice: as a filter taking the piped value
//! first (`{{ text | truncate(20) }}`) and as a function with the
//! argument order `truncate(20, text)`.

use crate::constants::{CHARS_PER_TOKEN, ELLIPSIS};
use minijinja::{Environment, Error, ErrorKind, Value};

/// Cuts `text` to at most `max_chars` characters.
///
/// Text that already fits is returned unchanged. When `max_chars` is 3 or
/// less the text is hard cut; otherwise it is cut to `max_chars - 3`
/// characters followed by `"..."`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= ELLIPSIS.len() {
        return text.chars().take(max_chars).collect();
    }
    let mut cut: String = text.chars().take(max_chars - ELLIPSIS.len()).collect();
    cut.push_str(ELLIPSIS);
    cut
}

/// Serializes a value as compact JSON.
pub fn json_encode(value: &Value) -> Result<String, Error> {
    serde_json::to_string(value).map_err(|err| {
        Error::new(ErrorKind::InvalidOperation, "value cannot be encoded as JSON")
            .with_source(err)
    })
}

/// Number of whitespace-delimited words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Rough token count: one token per four characters, rounded up.
pub fn token_estimate(text: &str) -> usize {
    text.chars().count().div_ceil(CHARS_PER_TOKEN)
}

pub fn upper(text: &str) -> String {
    text.to_uppercase()
}

pub fn lower(text: &str) -> String {
    text.to_lowercase()
}

pub fn join(items: Vec<String>, sep: &str) -> String {
    items.join(sep)
}

/// Returns `fallback` when `value` is the empty string (or undefined),
/// otherwise `value` itself.
pub fn default_value(value: &Value, fallback: &str) -> Value {
    if value.is_undefined() || value.as_str() == Some("") {
        Value::from(fallback)
    } else {
        value.clone()
    }
}

fn truncate_fn(max_chars: usize, text: &str) -> String {
    truncate(text, max_chars)
}

fn join_fn(sep: &str, items: Vec<String>) -> String {
    join(items, sep)
}

fn default_fn(fallback: &str, value: &Value) -> Value {
    default_value(value, fallback)
}

/// Installs every helper into `env` as both a filter and a function.
pub fn register(env: &mut Environment<'static>) {
    env.add_filter("truncate", truncate);
    env.add_filter("json_encode", json_encode);
    env.add_filter("word_count", word_count);
    env.add_filter("token_estimate", token_estimate);
    env.add_filter("upper", upper);
    env.add_filter("lower", lower);
    env.add_filter("join", join);
    env.add_filter("default", default_value);

    env.add_function("truncate", truncate_fn);
    env.add_function("json_encode", json_encode);
    env.add_function("word_count", word_count);
    env.add_function("token_estimate", token_estimate);
    env.add_function("upper", upper);
    env.add_function("lower", lower);
    env.add_function("join", join_fn);
    env.add_function("default", default_fn);
}
