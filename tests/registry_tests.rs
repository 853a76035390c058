mod utils;

use promptkit::{render, Error, TemplateRegistry, VariableSet};
use test_log::test;
use utils::{template_dir, BASIC_TEMPLATES};

#[test]
fn test_load_dir() {
    let registry = TemplateRegistry::load(BASIC_TEMPLATES).unwrap();
    assert_eq!(registry.len(), 4);

    let names: Vec<&str> = registry.list().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["farewell", "greet", "plain", "summarize"]);
}

#[test]
fn test_get_by_name() {
    let registry = TemplateRegistry::load(BASIC_TEMPLATES).unwrap();
    let record = registry.get("greet").unwrap();
    assert_eq!(record.metadata.description, "A greeting");
    assert_eq!(record.metadata.required_vars, vec!["name"]);

    let farewell = registry.get("farewell").unwrap();
    assert_eq!(farewell.metadata.model_hint.as_deref(), Some("small"));
}

#[test]
fn test_get_missing() {
    let registry = TemplateRegistry::load(BASIC_TEMPLATES).unwrap();
    let err = registry.get("nonexistent").unwrap_err();
    assert!(matches!(err, Error::TemplateNotFoundError { ref name } if name == "nonexistent"));
}

#[test]
fn test_includes_loaded_verbatim() {
    let registry = TemplateRegistry::load(BASIC_TEMPLATES).unwrap();
    assert_eq!(registry.includes().len(), 1);
    assert_eq!(registry.includes().get("header"), Some("=== HEADER ==="));
}

#[test]
fn test_plain_template() {
    let registry = TemplateRegistry::load(BASIC_TEMPLATES).unwrap();
    let record = registry.get("plain").unwrap();
    assert_eq!(record.metadata.name, "");
    assert_eq!(record.body, "Just plain text.");
    assert_eq!(record.content, record.body);
}

#[test]
fn test_missing_includes_dir_is_not_an_error() {
    let dir = template_dir(&[("only.tmpl", "only")]);
    let registry = TemplateRegistry::load(dir.path()).unwrap();
    assert!(registry.includes().is_empty());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_missing_directory_is_error() {
    let err = TemplateRegistry::load("tests/templates/does-not-exist").unwrap_err();
    assert!(matches!(err, Error::TemplateDirNotFoundError { .. }));
}

#[test]
fn test_duplicate_names_last_file_wins() {
    let dir = template_dir(&[
        ("a_first.tmpl", "---\nname: shared\ndescription: first\n---\none"),
        ("b_second.tmpl", "---\nname: shared\ndescription: second\n---\ntwo"),
        ("other.tmpl", "other"),
    ]);

    let registry = TemplateRegistry::load(dir.path()).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.list().len(), 2);
    let shared = registry.get("shared").unwrap();
    assert_eq!(shared.metadata.description, "second");
    assert_eq!(shared.body, "two");
}

#[test]
fn test_declared_name_collides_with_file_stem() {
    let dir = template_dir(&[
        ("alpha.tmpl", "---\nname: beta\n---\nfrom alpha"),
        ("beta.tmpl", "from beta"),
    ]);

    let registry = TemplateRegistry::load(dir.path()).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("beta").unwrap().body, "from beta");
}

#[test]
fn test_empty_declared_name_falls_back_to_file_stem() {
    let dir = template_dir(&[("stem.tmpl", "---\nname: \"\"\ndescription: d\n---\nbody")]);
    let registry = TemplateRegistry::load(dir.path()).unwrap();
    assert_eq!(registry.get("stem").unwrap().metadata.description, "d");
}

#[test]
fn test_rerendering_record_reproduces_metadata() {
    let registry = TemplateRegistry::load(BASIC_TEMPLATES).unwrap();
    let record = registry.get("greet").unwrap();
    let vars: VariableSet = [("name", "World")].into_iter().collect();

    let result = render(&record.content, &vars, registry.includes()).unwrap();
    assert_eq!(result.output, "Hello, World!\n");
    assert_eq!(result.metadata, record.metadata);
    assert_eq!(
        promptkit::frontmatter::split(&record.content).unwrap().metadata(),
        Some(&result.metadata)
    );
}
