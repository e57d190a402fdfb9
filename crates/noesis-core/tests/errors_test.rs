use noesis_core::errors::*;
use noesis_core::models::Phase;

#[test]
fn noesis_error_config_carries_reason() {
    let err = NoesisError::Config {
        reason: "unknown key `foo`".into(),
    };
    assert!(err.to_string().contains("unknown key `foo`"));
}

// --- From impls ---

#[test]
fn source_error_converts_to_noesis_error() {
    let src_err = SourceError::CatalogUnavailable {
        reason: "connection refused".into(),
    };
    let err: NoesisError = src_err.into();
    assert!(matches!(err, NoesisError::Source(_)));
}

#[test]
fn phase_error_converts_to_noesis_error() {
    let phase_err = PhaseError::Cancelled {
        phase: Phase::Analyzing,
    };
    let err: NoesisError = phase_err.into();
    assert!(matches!(err, NoesisError::Phase(_)));
}

#[test]
fn synthesis_error_converts_to_noesis_error() {
    let synth_err = SynthesisError::NothingToExport;
    let err: NoesisError = synth_err.into();
    assert!(matches!(err, NoesisError::Synthesis(_)));
}

#[test]
fn persist_error_converts_to_noesis_error() {
    let persist_err = PersistError::DecodeFailed {
        reason: "truncated".into(),
    };
    let err: NoesisError = persist_err.into();
    assert!(matches!(err, NoesisError::Persist(_)));
}

#[test]
fn serialization_error_converts_to_noesis_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: NoesisError = json_err.into();
    assert!(matches!(err, NoesisError::Serialization(_)));
}

// --- Sub-error variants carry context ---

#[test]
fn source_error_book_fetch_failed_carries_id() {
    let err = SourceError::BookFetchFailed {
        id: "walden".into(),
        reason: "404".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("walden"));
    assert!(msg.contains("404"));
}

#[test]
fn source_error_fetch_timeout_carries_attempts() {
    let err = SourceError::FetchTimeout {
        resource: "catalog.json".into(),
        attempts: 3,
    };
    let msg = err.to_string();
    assert!(msg.contains("catalog.json"));
    assert!(msg.contains("3"));
}

#[test]
fn phase_error_cancelled_carries_phase_name() {
    let err = PhaseError::Cancelled {
        phase: Phase::Meditating,
    };
    assert!(err.to_string().contains("meditating"));
}

#[test]
fn phase_error_failed_carries_reason() {
    let err = PhaseError::Failed {
        phase: Phase::Ingesting,
        reason: "no books loaded".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("ingesting"));
    assert!(msg.contains("no books loaded"));
}

#[test]
fn synthesis_error_chapter_failed_carries_label() {
    let err = SynthesisError::ChapterFailed {
        label: "Part II".into(),
        reason: "theme missing".into(),
    };
    assert!(err.to_string().contains("Part II"));
}

#[test]
fn persist_error_version_mismatch_carries_versions() {
    let err = PersistError::VersionMismatch {
        found: 7,
        expected: 1,
    };
    let msg = err.to_string();
    assert!(msg.contains("7"));
    assert!(msg.contains("1"));
}

#[test]
fn persist_error_write_failed_carries_path() {
    let err = PersistError::WriteFailed {
        path: "/var/lib/noesis/state.json".into(),
        reason: "permission denied".into(),
    };
    assert!(err.to_string().contains("/var/lib/noesis/state.json"));
}
