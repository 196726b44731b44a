//! Tests for diagnostic sinks and completeness checks.

use super::{Diagnostic, DiagnosticSink, Diagnostics, FieldError, TracingSink};
use crate::{BindError, CoercionError, ScalarKind, SourceError};
use rstest::{fixture, rstest};

#[fixture]
fn missing() -> Diagnostic {
    Diagnostic::new(
        "db/host",
        "host",
        SourceError::not_found("db/host", "path is not set"),
    )
}

#[fixture]
fn unparsable() -> Diagnostic {
    Diagnostic::new(
        "db/port",
        "port",
        CoercionError::Parse {
            value: "http".into(),
            kind: ScalarKind::Integer,
        },
    )
}

#[rstest]
fn empty_collector_passes_completeness_check() {
    assert!(Diagnostics::new().into_result().is_ok());
}

#[rstest]
fn collector_preserves_recording_order(missing: Diagnostic, unparsable: Diagnostic) {
    let mut diagnostics = Diagnostics::new();
    diagnostics.record(missing);
    diagnostics.record(unparsable);
    let fields: Vec<_> = diagnostics.iter().map(|d| d.field).collect();
    assert_eq!(fields, ["host", "port"]);
}

#[rstest]
fn incomplete_error_lists_every_field(missing: Diagnostic, unparsable: Diagnostic) {
    let mut diagnostics = Diagnostics::new();
    diagnostics.record(missing);
    diagnostics.record(unparsable);
    match diagnostics.into_result() {
        Err(BindError::Incomplete(aggregated)) => {
            assert_eq!(aggregated.len(), 2);
            let message = aggregated.to_string();
            assert!(message.contains("1: `db/host` (field `host`)"), "{message}");
            assert!(message.contains("2: `db/port` (field `port`)"), "{message}");
        }
        other => panic!("expected incomplete error, got {other:?}"),
    }
}

#[rstest]
fn classifies_absence(missing: Diagnostic, unparsable: Diagnostic) {
    assert!(missing.is_not_found());
    assert!(!unparsable.is_not_found());
}

fn record_into(mut sink: impl DiagnosticSink, diagnostic: Diagnostic) {
    sink.record(diagnostic);
}

#[rstest]
fn vec_and_reborrowed_sinks_collect(missing: Diagnostic, unparsable: Diagnostic) {
    let mut collected: Vec<Diagnostic> = Vec::new();
    collected.record(missing);
    record_into(&mut collected, unparsable);
    assert_eq!(collected.len(), 2);
}

#[rstest]
fn tracing_sink_accepts_diagnostics(missing: Diagnostic) {
    TracingSink.record(missing);
}

#[rstest]
fn unsupported_kind_names_the_type() {
    let error = FieldError::UnsupportedKind {
        kind: "Option<String>",
    };
    assert_eq!(error.to_string(), "unsupported field type `Option<String>`");
}
