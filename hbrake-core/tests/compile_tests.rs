use hbrake_core::{CommandCompiler, CoreError, EncodeConfig};
use serde_json::json;

const HANDBRAKE: &str = "/usr/bin/HandBrakeCLI";

fn config(value: serde_json::Value) -> EncodeConfig {
    EncodeConfig::from_value(value).expect("config should be a JSON object")
}

fn compile_tokens(value: serde_json::Value) -> Vec<String> {
    CommandCompiler::new(HANDBRAKE)
        .compile(&config(value))
        .expect("compile should succeed")
        .into_tokens()
}

#[test]
fn test_encopts_scenario() {
    let tokens = compile_tokens(json!({
        "source": "in.mkv",
        "output_file": "out.mkv",
        "video_options": {
            "encoder": "x265_10bit",
            "encopts": {"profile": "slow", "b-frames": "100"}
        }
    }));

    assert_eq!(
        tokens,
        vec![
            HANDBRAKE,
            "--input",
            "in.mkv",
            "--output",
            "out.mkv",
            "--encoder",
            "x265_10bit",
            "--encopts",
            "profile=slow:b-frames=100",
        ]
    );
}

#[test]
fn test_full_example_config() {
    let tokens = compile_tokens(json!({
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
    }));

    assert_eq!(
        tokens,
        vec![
            HANDBRAKE,
            "--input",
            "cool_video.mkv",
            "--output",
            "output.mkv",
            "--encoder",
            "x265_10bit",
            "--encoder-preset",
            "slow",
            "--quality",
            "19",
            "--audio",
            "1,3",
            "--aencoder",
            "opus,opus",
            "--ab",
            "128,192",
            "--mixdown",
            "stereo,5_2_lfe",
            "--subtitle",
            "1,2",
            "--subname",
            "Signs and Songs,Full Subtitles",
        ]
    );
}

#[test]
fn test_compile_is_deterministic() {
    let value = json!({
        "source": "a.mkv",
        "output_file": "b.mkv",
        "picture_options": {"crop": {"left": 8, "top": 4}, "max_width": 1920},
        "filters_options": {
            "comb_detect": {"settings": {"mode": 3, "spatial_metric": 2}},
            "deinterlace": {"preset": "bob"}
        }
    });

    let first = compile_tokens(value.clone());
    let second = compile_tokens(value);
    assert_eq!(first, second, "identical input must compile identically");
}

#[test]
fn test_missing_source_fails_before_sections() {
    // The bogus section would be fatal on its own; the missing source must
    // win because required fields are checked first.
    let result = CommandCompiler::new(HANDBRAKE).compile(&config(json!({
        "output_file": "out.mkv",
        "codec_options": {"x": 1}
    })));

    match result {
        Err(CoreError::MissingField(field)) => assert_eq!(field, "source"),
        other => panic!("expected MissingField(\"source\"), got {other:?}"),
    }
}

#[test]
fn test_missing_output_file_fails() {
    let result = CommandCompiler::new(HANDBRAKE)
        .compile(&config(json!({"source": "in.mkv"})));

    match result {
        Err(CoreError::MissingField(field)) => assert_eq!(field, "output_file"),
        other => panic!("expected MissingField(\"output_file\"), got {other:?}"),
    }
}

#[test]
fn test_unknown_section_is_fatal() {
    let result = CommandCompiler::new(HANDBRAKE).compile(&config(json!({
        "source": "in.mkv",
        "output_file": "out.mkv",
        "codec_options": {"x": 1}
    })));

    match result {
        Err(CoreError::UnknownSection(name)) => assert_eq!(name, "codec_options"),
        other => panic!("expected UnknownSection, got {other:?}"),
    }
}

#[test]
fn test_shell_string_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let command = CommandCompiler::new(HANDBRAKE).compile(&config(json!({
        "source": "My Movie (2019).mkv",
        "output_file": "out dir/movie.mkv",
        "subtitles_options": {"subname": ["Signs & Songs", "Full Subtitles"]}
    })))?;

    let rendered = command.to_shell_string();
    let reparsed = shell_words::split(&rendered)?;
    assert_eq!(reparsed, command.tokens(), "quoting must be reversible");
    Ok(())
}

#[test]
fn test_sections_emit_in_authored_order() {
    let audio_first = compile_tokens(json!({
        "source": "in.mkv",
        "output_file": "out.mkv",
        "audio_options": {"ab": [160]},
        "video_options": {"quality": 20}
    }));
    let video_first = compile_tokens(json!({
        "source": "in.mkv",
        "output_file": "out.mkv",
        "video_options": {"quality": 20},
        "audio_options": {"ab": [160]}
    }));

    let ab_pos = |tokens: &[String]| tokens.iter().position(|t| t == "--ab").unwrap();
    let quality_pos = |tokens: &[String]| tokens.iter().position(|t| t == "--quality").unwrap();

    assert!(ab_pos(&audio_first) < quality_pos(&audio_first));
    assert!(quality_pos(&video_first) < ab_pos(&video_first));
}

#[test]
fn test_filters_section_end_to_end() {
    let tokens = compile_tokens(json!({
        "source": "in.mkv",
        "output_file": "out.mkv",
        "filters_options": {
            "comb_detect": {"settings": {"mode": 3, "spatial_metric": 2}},
            "deinterlace": {"preset": "bob"},
            "grayscale": true
        }
    }));

    assert_eq!(
        &tokens[5..],
        &[
            "--comb-detect",
            "mode=3:spatial-metric=2",
            "--deinterlace",
            "bob",
            "--grayscale",
        ]
    );
}
