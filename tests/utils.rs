#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Template root checked into the repository for integration tests.
pub const BASIC_TEMPLATES: &str = "tests/templates/basic";

/// Template root holding the two-step chain fixture and its definition.
pub const CHAIN_TEMPLATES: &str = "tests/templates/chain";

/// Creates a temporary template root from `(relative path, content)` pairs.
/// Parent directories (such as `includes/`) are created as needed.
pub fn template_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (rel_path, content) in files {
        write_file(dir.path(), rel_path, content);
    }
    dir
}

pub fn write_file(root: &Path, rel_path: &str, content: &str) {
    let path = root.join(rel_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
