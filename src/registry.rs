//! Loads templates and include fragments from a directory and indexes
//! them by name.

use crate::{
    config::Config,
    error::{Error, Result},
    ext::PathExt,
    frontmatter::{self, Split},
    metadata::TemplateMetadata,
    variables::IncludeSet,
};
use indexmap::IndexMap;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A loaded template.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateRecord {
    /// Registry key: the declared metadata name, else the file stem.
    pub name: String,
    /// Empty when the frontmatter block is missing, unterminated or malformed.
    pub metadata: TemplateMetadata,
    /// Renderable text after the frontmatter.
    pub body: String,
    /// Full original file content. The renderer splits it again itself.
    pub content: String,
    pub path: PathBuf,
}

/// Templates and include fragments of one template root.
///
/// Read-only once loaded; lookups never mutate it.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
    templates: IndexMap<String, TemplateRecord>,
    includes: IncludeSet,
}

impl TemplateRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `dir` with the default configuration.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Self::load_with_config(dir, &Config::default())
    }

    /// Loads include fragments first, then every top-level template file.
    ///
    /// Files are visited in file-name order. When two files resolve to the
    /// same name the later one replaces the earlier and a warning is logged.
    ///
    /// # Errors
    /// * `Error::TemplateDirNotFoundError` if `dir` is not a directory
    /// * `Error::TemplateLoadError` if a file cannot be read. A file with
    ///   malformed frontmatter is loaded under its stem with empty metadata.
    pub fn load_with_config<P: AsRef<Path>>(dir: P, config: &Config) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::TemplateDirNotFoundError {
                template_dir: dir.display().to_string(),
            });
        }

        let mut registry = Self::new();

        let includes_dir = dir.join(&config.includes_dir);
        if includes_dir.is_dir() {
            registry.includes = load_includes(&includes_dir, &config.template_suffix)?;
        } else {
            debug!("No includes directory at '{}'.", includes_dir.display());
        }

        for path in template_files(dir, &config.template_suffix)? {
            let record = load_template(&path, &config.template_suffix)?;
            registry.insert(record);
        }

        info!(
            "Loaded {} templates and {} includes from '{}'.",
            registry.templates.len(),
            registry.includes.len(),
            dir.display()
        );
        Ok(registry)
    }

    fn insert(&mut self, record: TemplateRecord) {
        if let Some(previous) = self.templates.get(&record.name) {
            warn!(
                "Template '{}' from '{}' replaces the one loaded from '{}'.",
                record.name,
                record.path.display(),
                previous.path.display()
            );
        }
        self.templates.insert(record.name.clone(), record);
    }

    /// Looks a template up by its resolved name.
    pub fn get(&self, name: &str) -> Result<&TemplateRecord> {
        self.templates
            .get(name)
            .ok_or_else(|| Error::TemplateNotFoundError { name: name.to_string() })
    }

    /// Every loaded template, in load order.
    pub fn list(&self) -> Vec<&TemplateRecord> {
        self.templates.values().collect()
    }

    pub fn includes(&self) -> &IncludeSet {
        &self.includes
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Top-level files of `dir` carrying `suffix`, sorted by file name.
fn template_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.has_template_suffix(suffix) {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}

fn load_includes(dir: &Path, suffix: &str) -> Result<IncludeSet> {
    let mut includes = IncludeSet::new();
    for path in template_files(dir, suffix)? {
        let Some(name) = path.template_stem(suffix) else { continue };
        debug!("Adding include: {name}");
        let body = fs::read_to_string(&path).map_err(|e| Error::TemplateLoadError {
            path: path.clone(),
            source: Box::new(e.into()),
        })?;
        includes.insert(name, body);
    }
    Ok(includes)
}

fn load_template(path: &Path, suffix: &str) -> Result<TemplateRecord> {
    let wrap = |e: Error| Error::TemplateLoadError { path: path.to_path_buf(), source: Box::new(e) };

    let content = fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
    let (metadata, body) = match frontmatter::split(&content) {
        Ok(split) => {
            if let Split::Unterminated { .. } = split {
                warn!(
                    "Frontmatter in '{}' is never closed; loading it as a plain template.",
                    path.display()
                );
            }
            split.into_parts()
        }
        // Rendering re-splits `content` and reports the parse error then.
        Err(Error::FrontmatterError(err)) => {
            warn!(
                "Malformed frontmatter in '{}' ({err}); loading it with empty metadata.",
                path.display()
            );
            (TemplateMetadata::default(), content.clone())
        }
        Err(err) => return Err(wrap(err)),
    };

    let name = match metadata.declared_name() {
        Some(name) => name.to_string(),
        None => path.template_stem(suffix).unwrap_or_default().to_string(),
    };
    debug!("Adding template: {name} ({})", path.display());

    Ok(TemplateRecord { name, metadata, body, content, path: path.to_path_buf() })
}
