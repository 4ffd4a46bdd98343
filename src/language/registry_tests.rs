use std::path::Path;

use super::*;
use crate::config::LanguageDefinition;

#[test]
fn comment_syntax_construction() {
    let syntax = CommentSyntax::new(vec!["//"], vec![("/*", "*/")]);
    assert_eq!(syntax.line_comments, vec!["//"]);
    assert_eq!(
        syntax.block_comments,
        vec![("/*".to_string(), "*/".to_string())]
    );
}

#[test]
fn primary_tokens_are_first_entries() {
    let syntax = CommentSyntax::new(vec!["//", "#"], vec![("{", "}"), ("(*", "*)")]);
    assert_eq!(syntax.primary_line_comment(), Some("//"));
    assert_eq!(syntax.primary_block_comment(), Some(("{", "}")));
}

#[test]
fn primary_tokens_absent_when_unconfigured() {
    let syntax = CommentSyntax::default();
    assert_eq!(syntax.primary_line_comment(), None);
    assert_eq!(syntax.primary_block_comment(), None);
}

#[test]
fn empty_tokens_are_treated_as_absent() {
    let syntax = CommentSyntax::new(vec![""], vec![("/*", "")]);
    assert_eq!(syntax.primary_line_comment(), None);
    assert_eq!(syntax.primary_block_comment(), None);
}

#[test]
fn language_construction_normalizes_extensions() {
    let lang = Language::new("Test", vec!["TST", ".Foo"], CommentSyntax::default());
    assert_eq!(lang.name, "Test");
    assert_eq!(lang.extensions, vec![".tst", ".foo"]);
    assert!(lang.filenames.is_empty());
}

#[test]
fn file_suffix_rules() {
    assert_eq!(file_suffix("main.go").as_deref(), Some(".go"));
    assert_eq!(file_suffix("Main.JAVA").as_deref(), Some(".java"));
    assert_eq!(file_suffix("archive.tar.gz").as_deref(), Some(".gz"));
    assert_eq!(file_suffix(".bashrc").as_deref(), Some(".bashrc"));
    assert_eq!(file_suffix("Dockerfile"), None);
}

#[test]
fn registry_register_and_lookup() {
    let mut registry = LanguageRegistry::new();
    let syntax = CommentSyntax::new(vec!["#"], vec![]);
    registry.register(Language::new("Shell", vec![".sh", ".bash"], syntax));

    assert!(registry.lookup_by_extension(".sh").is_some());
    assert!(registry.lookup_by_extension(".bash").is_some());
    assert_eq!(registry.lookup_by_extension(".sh").unwrap().name, "Shell");
}

#[test]
fn extension_lookup_is_exact() {
    let registry = LanguageRegistry::default();
    assert!(registry.lookup_by_extension(".go").is_some());
    assert!(registry.lookup_by_extension("go").is_none());
    assert!(registry.lookup_by_extension(".GO").is_none());
    assert!(registry.lookup_by_extension(".xyz123").is_none());
}

#[test]
fn default_registry_has_dockerfile_by_name() {
    let registry = LanguageRegistry::default();
    let docker = registry.lookup_by_filename("Dockerfile").unwrap();
    assert_eq!(docker.name, "Dockerfile");
    assert_eq!(docker.comment_syntax.primary_line_comment(), Some("#"));
}

fn name_of<'a>(registry: &'a LanguageRegistry, path: &str) -> Option<&'a str> {
    let language = registry.lookup_path(Path::new(path))?;
    Some(language.name.as_str())
}

#[test]
fn lookup_path_prefers_extension_then_filename() {
    let registry = LanguageRegistry::default();

    assert_eq!(name_of(&registry, "/repo/cmd/main.go"), Some("Go"));
    assert_eq!(name_of(&registry, "/repo/Dockerfile"), Some("Dockerfile"));
    assert_eq!(name_of(&registry, "/repo/LICENSE"), None);
    assert_eq!(name_of(&registry, "/repo/data.xyz123"), None);
}

#[test]
fn lookup_path_with_suffix_never_falls_back_to_filename() {
    let mut registry = LanguageRegistry::new();
    registry.register(
        Language::new("Docker", vec![], CommentSyntax::new(vec!["#"], vec![]))
            .with_filenames(vec!["Dockerfile.dev"]),
    );

    assert!(registry.lookup_path(Path::new("Dockerfile.dev")).is_none());
}

#[test]
fn last_registered_extension_wins() {
    let mut registry = LanguageRegistry::new();
    registry.register(Language::new(
        "First",
        vec![".x"],
        CommentSyntax::new(vec!["#"], vec![]),
    ));
    registry.register(Language::new(
        "Second",
        vec![".x"],
        CommentSyntax::new(vec!["//"], vec![]),
    ));

    assert_eq!(registry.lookup_by_extension(".x").unwrap().name, "Second");
    assert_eq!(registry.len(), 2);
}

#[test]
fn redefining_language_replaces_its_claims() {
    let mut registry = LanguageRegistry::new();
    registry.register(Language::new("Lang", vec![".a"], CommentSyntax::default()));
    registry.register(Language::new("Other", vec![".o"], CommentSyntax::default()));
    registry.register(Language::new("Lang", vec![".b"], CommentSyntax::default()));

    assert!(registry.lookup_by_extension(".a").is_none());
    assert_eq!(registry.lookup_by_extension(".b").unwrap().name, "Lang");
    assert_eq!(registry.lookup_by_extension(".o").unwrap().name, "Other");

    // Redefinition keeps the original position.
    let names: Vec<_> = registry.list_all().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Lang", "Other"]);
}

#[test]
fn list_all_preserves_registration_order() {
    let registry = LanguageRegistry::from_languages(vec![
        Language::new("Zeta", vec![".z"], CommentSyntax::default()),
        Language::new("Alpha", vec![".a"], CommentSyntax::default()),
        Language::new("Mid", vec![".m"], CommentSyntax::default()),
    ]);

    let names: Vec<_> = registry.list_all().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn language_from_definition() {
    let def = LanguageDefinition {
        name: "Haskell".to_string(),
        extensions: vec!["HS".to_string(), ".lhs".to_string()],
        filenames: vec![],
        line_comments: vec!["--".to_string()],
        block_comments: vec![("{-".to_string(), "-}".to_string())],
    };

    let lang = Language::from(def);
    assert_eq!(lang.extensions, vec![".hs", ".lhs"]);
    assert_eq!(lang.comment_syntax.primary_line_comment(), Some("--"));
    assert_eq!(
        lang.comment_syntax.primary_block_comment(),
        Some(("{-", "-}"))
    );
}
