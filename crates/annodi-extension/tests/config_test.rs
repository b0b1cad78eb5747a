//! Configuration tree ingestion tests

use std::io::Write;
use std::sync::Arc;

use annodi_domain::AnnotationRegistry;
use annodi_extension::{load_tree, AnnotationsExtension};

#[test]
fn tree_loads_from_toml_and_feeds_the_extension() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(
        file,
        r#"
[annotations]
ignore = ["persistent"]
cache = "memory"
debug = true

[doctrine]
ignoredAnnotations = ["legacy"]
"#
    )
    .unwrap();

    let tree = load_tree(file.path()).unwrap();
    let extension =
        AnnotationsExtension::with_registry(false, Arc::new(AnnotationRegistry::new()));
    let local = tree.get(extension.name()).cloned().unwrap_or_default();
    let (config, notices) = extension.resolve_config(&local, &tree).unwrap();

    assert_eq!(config.ignore, vec!["persistent", "legacy"]);
    assert_eq!(config.cache, "memory");
    assert!(config.debug);
    assert_eq!(notices.len(), 1);
}

#[test]
fn missing_extension_section_falls_back_to_defaults() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(file, "[other]\nkey = 1").unwrap();

    let tree = load_tree(file.path()).unwrap();
    let extension =
        AnnotationsExtension::with_registry(false, Arc::new(AnnotationRegistry::new()));
    let local = tree.get(extension.name()).cloned().unwrap_or_default();
    let (config, notices) = extension.resolve_config(&local, &tree).unwrap();

    assert_eq!(config.ignore, vec!["persistent", "serializationVersion"]);
    assert_eq!(config.cache, "default");
    assert!(notices.is_empty());
}
