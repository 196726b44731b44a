//! Unit tests for the bundled sources.

use super::{
    DocumentFormat, DocumentSource, HierarchicalSource, MapSource, MemoryStore, Source,
    SourceError, StoreError,
};
use crate::{BindError, KeyPath, RawValue};
use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};

fn path(segments: &[&str]) -> KeyPath {
    KeyPath::from_segments(segments.iter().copied())
}

#[fixture]
fn store() -> MemoryStore {
    MemoryStore::new()
        .with_secret(
            "kv/data/app/database",
            [("host", RawValue::from("db.internal")), ("port", RawValue::Integer(5432))],
        )
        .with_failure("kv/data/broken", "connection refused")
}

#[rstest]
fn map_source_reports_missing_paths() {
    let source = MapSource::new().with("a/b", 1_i64);
    assert_eq!(source.get(&path(&["a", "b"])).ok(), Some(RawValue::Integer(1)));
    assert!(matches!(
        source.get(&path(&["a", "c"])),
        Err(SourceError::NotFound { path, .. }) if path == "a/c"
    ));
}

#[rstest]
fn map_source_honours_custom_separators() {
    let source = MapSource::with_separator(".").with("a.b", "x");
    assert_eq!(source.get(&path(&["a", "b"])).ok(), Some(RawValue::from("x")));
}

#[rstest]
fn hierarchical_source_reads_group_and_key(store: MemoryStore) {
    let source = HierarchicalSource::new(store, "kv");
    assert_eq!(
        source.get(&path(&["app", "database", "host"])).ok(),
        Some(RawValue::from("db.internal"))
    );
    assert_eq!(
        source.get(&path(&["app", "database", "port"])).ok(),
        Some(RawValue::Integer(5432))
    );
}

#[rstest]
#[case::missing_key(&["app", "database", "user"])]
#[case::missing_secret(&["app", "cache", "host"])]
#[case::empty_group(&["host"])]
#[case::root(&[])]
fn hierarchical_absence_is_not_found(store: MemoryStore, #[case] segments: &[&str]) {
    let source = HierarchicalSource::new(store, "kv");
    let result = source.get(&path(segments));
    assert!(
        matches!(result, Err(SourceError::NotFound { .. })),
        "unexpected result {result:?}"
    );
}

#[rstest]
fn hierarchical_read_failures_are_fetch_errors(store: MemoryStore) -> Result<()> {
    let source = HierarchicalSource::new(store, "kv");
    match source.get(&path(&["broken", "key"])) {
        Err(SourceError::Fetch { path, source: cause }) => {
            ensure!(path == "broken/key", "unexpected path {path}");
            let store_error = cause
                .downcast_ref::<StoreError>()
                .ok_or_else(|| anyhow!("expected a store error"))?;
            ensure!(matches!(store_error, StoreError::Unavailable { .. }));
            Ok(())
        }
        other => Err(anyhow!("expected fetch error, got {other:?}")),
    }
}

#[rstest]
fn secret_path_uses_mount_and_group(store: MemoryStore) {
    let source = HierarchicalSource::new(store, "kv");
    assert_eq!(
        source.secret_path(&path(&["app", "database", "host"])),
        Some("kv/data/app/database".to_owned())
    );
    assert_eq!(source.secret_path(&path(&["host"])), None);
}

const YAML: &str = "\
server:
  host: example.org
  port: 8080
  tags: [a, b]
  debug: yes
  missing: ~
";

#[rstest]
#[case::yaml(YAML, DocumentFormat::Yaml)]
#[case::toml("[server]\nhost = \"example.org\"\nport = 8080\ntags = [\"a\", \"b\"]\n", DocumentFormat::Toml)]
#[case::json(r#"{"server": {"host": "example.org", "port": 8080, "tags": ["a", "b"]}}"#, DocumentFormat::Json)]
fn document_source_navigates_tables(
    #[case] text: &str,
    #[case] format: DocumentFormat,
) -> Result<()> {
    let source = DocumentSource::parse(text, format)?;
    ensure!(source.get(&path(&["server", "host"])).ok() == Some(RawValue::from("example.org")));
    ensure!(source.get(&path(&["server", "port"])).ok() == Some(RawValue::Integer(8080)));
    ensure!(
        source.get(&path(&["server", "tags"])).ok()
            == Some(RawValue::List(vec![RawValue::from("a"), RawValue::from("b")]))
    );
    Ok(())
}

#[rstest]
#[case::absent(&["server", "user"])]
#[case::through_a_leaf(&["server", "port", "inner"])]
#[case::null(&["server", "missing"])]
#[case::root(&[])]
fn document_absence_is_not_found(#[case] segments: &[&str]) -> Result<()> {
    let source = DocumentSource::parse(YAML, DocumentFormat::Yaml)?;
    let result = source.get(&path(segments));
    ensure!(
        matches!(result, Err(SourceError::NotFound { .. })),
        "unexpected result {result:?}"
    );
    Ok(())
}

#[rstest]
#[case::tilde("name: ~\n")]
#[case::word("name: null\n")]
#[case::capitalised("name: Null\n")]
#[case::empty("name:\n")]
fn yaml_nulls_read_as_absent(#[case] text: &str) -> Result<()> {
    let source = DocumentSource::parse(text, DocumentFormat::Yaml)?;
    let result = source.get(&path(&["name"]));
    ensure!(
        matches!(result, Err(SourceError::NotFound { .. })),
        "unexpected result {result:?}"
    );
    Ok(())
}

#[rstest]
fn yaml_documents_keep_non_canonical_booleans_as_text() -> Result<()> {
    let source = DocumentSource::parse(YAML, DocumentFormat::Yaml)?;
    ensure!(source.get(&path(&["server", "debug"])).ok() == Some(RawValue::from("yes")));
    Ok(())
}

#[rstest]
#[case(DocumentFormat::Yaml, "server: [unclosed")]
#[case(DocumentFormat::Toml, "server = ")]
#[case(DocumentFormat::Json, "{")]
fn malformed_documents_are_rejected(#[case] format: DocumentFormat, #[case] text: &str) {
    assert!(matches!(
        DocumentSource::parse(text, format),
        Err(BindError::Document { format: reported, .. }) if reported == format
    ));
}

#[rstest]
fn sources_work_through_references_and_boxes() {
    let source = MapSource::new().with("k", true);
    let boxed: Box<dyn Source> = Box::new(source.clone());
    let by_ref = &source;
    assert_eq!(boxed.get(&path(&["k"])).ok(), Some(RawValue::Bool(true)));
    assert_eq!(by_ref.get(&path(&["k"])).ok(), Some(RawValue::Bool(true)));
}
