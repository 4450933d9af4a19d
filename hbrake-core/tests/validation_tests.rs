use hbrake_core::{CoreError, SchemaValidator};
use serde_json::json;
use std::fs;

fn example_config() -> serde_json::Value {
    json!({
        "source": "cool_video.mkv",
        "output_file": "output.mkv",
        "video_options": {
            "encoder": "x265_10bit",
            "encoder_preset": "slow",
            "quality": 19
        },
        "audio_options": {
            "audio": [1, 3],
            "aencoder": ["opus", "opus"],
            "ab": [128, 192],
            "mixdown": ["stereo", "5_2_lfe"]
        },
        "subtitles_options": {
            "subtitle": [1, 2],
            "subname": ["Signs and Songs", "Full Subtitles"]
        }
    })
}

#[test]
fn test_bundled_schema_accepts_example_config() -> Result<(), Box<dyn std::error::Error>> {
    let validator = SchemaValidator::bundled()?;
    validator.validate(&example_config())?;
    Ok(())
}

#[test]
fn test_validated_wraps_the_document_unchanged() -> Result<(), Box<dyn std::error::Error>> {
    let validator = SchemaValidator::bundled()?;
    let config = validator.validated(example_config())?;

    assert_eq!(config.source()?, "cool_video.mkv");
    assert_eq!(config.output_file()?, "output.mkv");
    let sections: Vec<&str> = config.sections().map(|(key, _)| key).collect();
    assert_eq!(
        sections,
        vec!["video_options", "audio_options", "subtitles_options"]
    );
    Ok(())
}

#[test]
fn test_missing_required_field_fails_validation() {
    let validator = SchemaValidator::bundled().unwrap();
    let err = validator
        .validate(&json!({"source": "in.mkv"}))
        .unwrap_err();

    match err {
        CoreError::Validation { message, .. } => {
            assert!(
                message.contains("output_file"),
                "message should name the missing field: {message}"
            );
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn test_unknown_section_fails_with_its_own_path() {
    let validator = SchemaValidator::bundled().unwrap();
    let err = validator
        .validate(&json!({
            "source": "in.mkv",
            "output_file": "out.mkv",
            "codec_options": {"x": 1}
        }))
        .unwrap_err();

    match err {
        CoreError::Validation { path, .. } => assert_eq!(path, "/codec_options"),
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn test_type_violation_reports_a_pointer_path() {
    let validator = SchemaValidator::bundled().unwrap();
    let err = validator
        .validate(&json!({
            "source": "in.mkv",
            "output_file": "out.mkv",
            "video_options": {"quality": "nineteen"}
        }))
        .unwrap_err();

    match err {
        CoreError::Validation { path, .. } => assert_eq!(path, "/video_options/quality"),
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn test_malformed_schema_document_is_a_schema_error() {
    let err = SchemaValidator::from_value(&json!({"type": 42})).unwrap_err();
    assert!(matches!(err, CoreError::Schema { .. }));
}

#[test]
fn test_explicit_schema_overrides_the_bundled_one() -> Result<(), Box<dyn std::error::Error>> {
    // A stricter schema that forbids every section.
    let validator = SchemaValidator::from_value(&json!({
        "type": "object",
        "required": ["source", "output_file"],
        "properties": {
            "source": {"type": "string"},
            "output_file": {"type": "string"}
        },
        "additionalProperties": false
    }))?;

    validator.validate(&json!({"source": "a.mkv", "output_file": "b.mkv"}))?;
    let err = validator
        .validate(&json!({
            "source": "a.mkv",
            "output_file": "b.mkv",
            "video_options": {}
        }))
        .unwrap_err();
    assert!(matches!(err, CoreError::Validation { .. }));
    Ok(())
}

#[test]
fn test_schema_and_config_load_from_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;

    let schema_path = dir.path().join("schema.json");
    fs::write(
        &schema_path,
        serde_json::to_string(&json!({
            "type": "object",
            "required": ["source", "output_file"]
        }))?,
    )?;

    let config_path = dir.path().join("config.json");
    fs::write(
        &config_path,
        serde_json::to_string(&example_config())?,
    )?;

    let validator = SchemaValidator::from_file(&schema_path)?;
    let config = validator.validated_from_file(&config_path)?;
    assert_eq!(config.source()?, "cool_video.mkv");

    dir.close()?;
    Ok(())
}
