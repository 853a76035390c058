//! Splits an optional YAML frontmatter block from a template body.
//!
//! A frontmatter block opens with a line that is exactly `---` (leading
//! whitespace before it is ignored) and closes with the next such line.
//! Content without a complete block is a plain template, not an error.

use crate::{constants::FRONTMATTER_DELIMITER, error::Result, metadata::TemplateMetadata};

/// Outcome of splitting template content.
#[derive(Debug, Clone, PartialEq)]
pub enum Split {
    /// Both delimiters were found and the metadata parsed.
    Present { metadata: TemplateMetadata, body: String },
    /// The content does not open with a delimiter line.
    Absent { body: String },
    /// An opening delimiter without a closing one. Treated like `Absent`
    /// so a forgotten `---` does not make the template unrenderable.
    Unterminated { body: String },
}

impl Split {
    pub fn has_frontmatter(&self) -> bool {
        matches!(self, Split::Present { .. })
    }

    pub fn metadata(&self) -> Option<&TemplateMetadata> {
        match self {
            Split::Present { metadata, .. } => Some(metadata),
            _ => None,
        }
    }

    pub fn body(&self) -> &str {
        match self {
            Split::Present { body, .. } | Split::Absent { body } | Split::Unterminated { body } => {
                body
            }
        }
    }

    /// Metadata (default when there was no frontmatter) and body.
    pub fn into_parts(self) -> (TemplateMetadata, String) {
        match self {
            Split::Present { metadata, body } => (metadata, body),
            Split::Absent { body } | Split::Unterminated { body } => {
                (TemplateMetadata::default(), body)
            }
        }
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end_matches(['\r', '\n']) == FRONTMATTER_DELIMITER
}

/// Splits `content` into metadata and body.
///
/// # Errors
/// * `Error::FrontmatterError` if the text between the delimiters is not
///   valid metadata. A missing block is reported as `Split::Absent` or
///   `Split::Unterminated`, never as an error.
pub fn split(content: &str) -> Result<Split> {
    let leading = content.len() - content.trim_start().len();
    let rest = &content[leading..];

    let Some((opening, after_open)) = rest.split_once('\n') else {
        return Ok(if is_delimiter(rest) {
            Split::Unterminated { body: content.to_string() }
        } else {
            Split::Absent { body: content.to_string() }
        });
    };
    if !is_delimiter(opening) {
        return Ok(Split::Absent { body: content.to_string() });
    }

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if is_delimiter(line) {
            let raw = &after_open[..offset];
            let body = after_open[offset + line.len()..].trim_start_matches(['\r', '\n']);
            let metadata = parse_metadata(raw)?;
            return Ok(Split::Present { metadata, body: body.to_string() });
        }
        offset += line.len();
    }

    Ok(Split::Unterminated { body: content.to_string() })
}

fn parse_metadata(raw: &str) -> Result<TemplateMetadata> {
    if raw.trim().is_empty() {
        return Ok(TemplateMetadata::default());
    }
    let metadata: Option<TemplateMetadata> = serde_yaml::from_str(raw)?;
    Ok(metadata.unwrap_or_default())
}
