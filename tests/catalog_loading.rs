use std::fs;

use tempfile::tempdir;

use helpline_core::knowledge::{CatalogError, FaqCatalog};

#[test]
fn builtin_catalog_loads() {
    let catalog = FaqCatalog::builtin().unwrap();

    assert_eq!(catalog.len(), 56);
    assert_eq!(
        catalog.entries()[0].question,
        "How do I reset my password?"
    );
    assert!(catalog
        .entries()
        .iter()
        .all(|entry| !entry.question.is_empty() && !entry.answer.is_empty()));
}

#[test]
fn loads_a_catalog_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("faqs.json");
    fs::write(
        &path,
        r#"[
            {"question": "q1", "answer": "a1", "tags": ["t1", "t2"]},
            {"question": "q2", "answer": "a2"}
        ]"#,
    )
    .unwrap();

    let catalog = FaqCatalog::load(&path).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.entries()[0].tags, vec!["t1", "t2"]);
    // Missing tags default to empty.
    assert!(catalog.entries()[1].tags.is_empty());
}

#[test]
fn malformed_catalog_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "not json at all").unwrap();

    assert!(matches!(
        FaqCatalog::load(&path),
        Err(CatalogError::Parse(_))
    ));
}

#[test]
fn missing_catalog_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nowhere.json");

    assert!(matches!(FaqCatalog::load(&path), Err(CatalogError::Io(_))));
}
