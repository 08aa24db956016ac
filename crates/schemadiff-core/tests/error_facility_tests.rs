use schemadiff_core::errors::{ExError, ExErrorKind, SchemaError};
use schemadiff_core::{load_str, CompatibilityPolicy};

#[test]
fn test_invalid_document_verifiable_by_kind() {
    let err = load_str("{not json", None).unwrap_err();
    assert!(matches!(err, SchemaError::InvalidDocument { .. }));

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::InvalidDocument);
    assert_eq!(ex_err.code(), "ERR_INVALID_DOCUMENT");
    assert!(ex_err.message().contains("Invalid JSON schema"));
}

#[test]
fn test_invalid_pattern_carries_pointer() {
    let err = load_str(
        r#"{"type":"object","patternProperties":{"a(":{"type":"string"}}}"#,
        None,
    )
    .unwrap_err();

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::InvalidPattern);
    assert_eq!(ex_err.op(), Some("load_schema"));
    assert_eq!(ex_err.pointer(), Some("/patternProperties/a("));
}

#[test]
fn test_nesting_limit_conversion() {
    let err = SchemaError::NestingTooDeep {
        pointer: "/not/not".to_string(),
        limit: 256,
    };

    let ex_err: ExError = err.into();

    assert_eq!(ex_err.kind(), ExErrorKind::NestingTooDeep);
    assert_eq!(ex_err.code(), "ERR_NESTING_TOO_DEEP");
    assert_eq!(ex_err.pointer(), Some("/not/not"));
    assert!(ex_err.message().contains("256"));
}

#[test]
fn test_unknown_difference_kind_from_policy() {
    let err = CompatibilityPolicy::from_toml_str(r#"compatible = ["PROPERTY_RENAMED"]"#)
        .unwrap_err();
    assert_eq!(
        err,
        SchemaError::UnknownDifferenceKind {
            name: "PROPERTY_RENAMED".to_string()
        }
    );

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.code(), "ERR_UNKNOWN_DIFFERENCE_KIND");
}

#[test]
fn test_malformed_policy_conversion() {
    let err = CompatibilityPolicy::from_toml_str("extends = ").unwrap_err();
    assert!(matches!(err, SchemaError::InvalidPolicy { .. }));

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::InvalidPolicy);
    assert_eq!(ex_err.op(), Some("load_policy"));
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "policy.toml");
    let err: SchemaError = io.into();

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Io);
    assert!(ex_err.message().contains("policy.toml"));
}

#[test]
fn test_serialization_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
    let err: SchemaError = json_err.into();

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::Serialization);
    assert_eq!(ex_err.code(), "ERR_SERIALIZATION");
}

#[test]
fn test_ex_error_builder_pattern() {
    let ex_err = ExError::new(ExErrorKind::InvalidPattern)
        .with_op("load_schema")
        .with_pointer("/patternProperties/(")
        .with_message("unclosed group");

    assert_eq!(ex_err.kind(), ExErrorKind::InvalidPattern);
    assert_eq!(ex_err.op(), Some("load_schema"));
    assert_eq!(ex_err.pointer(), Some("/patternProperties/("));
    assert!(ex_err.message().contains("unclosed"));
    assert!(ex_err.source_error().is_none());
}

#[test]
fn test_ex_error_display() {
    let ex_err = ExError::new(ExErrorKind::UnknownDraftVersion)
        .with_op("parse_draft")
        .with_message("draft-99");

    let display_str = format!("{}", ex_err);

    assert!(display_str.contains("ERR_UNKNOWN_DRAFT_VERSION"));
    assert!(display_str.contains("parse_draft"));
    assert!(display_str.contains("draft-99"));
}

#[test]
fn test_all_error_kinds_have_unique_codes() {
    use std::collections::HashSet;

    let kinds = vec![
        ExErrorKind::InvalidDocument,
        ExErrorKind::InvalidPattern,
        ExErrorKind::NestingTooDeep,
        ExErrorKind::UnknownDraftVersion,
        ExErrorKind::InvalidPolicy,
        ExErrorKind::UnknownDifferenceKind,
        ExErrorKind::Io,
        ExErrorKind::Serialization,
        ExErrorKind::Internal,
    ];

    let codes: HashSet<_> = kinds.iter().map(|k| k.code()).collect();

    assert_eq!(codes.len(), kinds.len());
    for code in codes {
        assert!(code.starts_with("ERR_"));
    }
}
