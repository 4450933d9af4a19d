//! Section dispatch and command compilation.
//!
//! [`CommandCompiler`] walks an [`EncodeConfig`] section by section and
//! emits HandBrakeCLI tokens through the formatting rules in
//! [`format`](crate::command::format). Dispatch is an exhaustive match over
//! the closed [`Section`] enum; a top-level key that names no known section
//! is a fatal error rather than a skipped entry.

use std::path::{Path, PathBuf};

use crate::command::format;
use crate::command::value::OptionValue;
use crate::command::CompiledCommand;
use crate::config::EncodeConfig;
use crate::error::{CoreError, CoreResult};

/// The configuration sections the compiler knows how to translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// `source_options`: input selection, including `start_at`/`stop_at`.
    Source,
    /// `destination_options`: container and output switches.
    Destination,
    /// `video_options`: encoder settings, including `encopts`.
    Video,
    /// `audio_options`: per-track audio settings, often list-valued.
    Audio,
    /// `picture_options`: geometry settings, including `crop`.
    Picture,
    /// `filters_options`: filter toggles and custom filter strings.
    Filters,
    /// `subtitles_options`: per-track subtitle settings, often list-valued.
    Subtitles,
}

impl Section {
    /// Maps a top-level configuration key to its section, if any.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "source_options" => Some(Self::Source),
            "destination_options" => Some(Self::Destination),
            "video_options" => Some(Self::Video),
            "audio_options" => Some(Self::Audio),
            "picture_options" => Some(Self::Picture),
            "filters_options" => Some(Self::Filters),
            "subtitles_options" => Some(Self::Subtitles),
            _ => None,
        }
    }

    /// The configuration key this section is spelled as.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Source => "source_options",
            Self::Destination => "destination_options",
            Self::Video => "video_options",
            Self::Audio => "audio_options",
            Self::Picture => "picture_options",
            Self::Filters => "filters_options",
            Self::Subtitles => "subtitles_options",
        }
    }
}

/// Compiles encoding configurations into HandBrakeCLI invocations.
#[derive(Debug, Clone)]
pub struct CommandCompiler {
    binary: PathBuf,
}

impl CommandCompiler {
    /// Creates a compiler that targets the given HandBrakeCLI binary.
    ///
    /// A relative path is made absolute against the working directory when
    /// the command is compiled; whether the binary actually exists on the
    /// host is the caller's concern.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// The binary path this compiler was configured with.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Translates a configuration into an ordered token sequence.
    ///
    /// Token 0 is the binary path, absolutized lexically (no filesystem
    /// access) when the configured path is relative. The required
    /// `source`/`output_file` fields are checked before any section is
    /// processed. Sections are then emitted in authored order, options
    /// within a section in authored order, so identical input always
    /// yields an identical command.
    pub fn compile(&self, config: &EncodeConfig) -> CoreResult<CompiledCommand> {
        let binary = std::path::absolute(&self.binary)?;
        let mut tokens = vec![binary.to_string_lossy().into_owned()];
        tokens.push("--input".to_string());
        tokens.push(config.source()?.to_string());
        tokens.push("--output".to_string());
        tokens.push(config.output_file()?.to_string());

        for (key, value) in config.sections() {
            let section = Section::from_key(key)
                .ok_or_else(|| CoreError::UnknownSection(key.to_string()))?;
            log::info!("Processing '{key}'");

            let converted = OptionValue::from_json(key, value)?;
            let OptionValue::Map(entries) = converted else {
                return Err(CoreError::Format {
                    option: key.to_string(),
                    reason: format!(
                        "section must be a map of options, got a {}",
                        converted.type_name()
                    ),
                });
            };
            emit_section(section, &entries, &mut tokens)?;
        }

        Ok(CompiledCommand::new(tokens))
    }
}

/// Emits the tokens for one section's options, in authored order.
fn emit_section(
    section: Section,
    entries: &[(String, OptionValue)],
    out: &mut Vec<String>,
) -> CoreResult<()> {
    match section {
        Section::Source => {
            for (option, value) in entries {
                match option.as_str() {
                    "start_at" | "stop_at" => format::time_range(option, value, out)?,
                    _ => format::simple_option(option, value, out)?,
                }
            }
        }
        Section::Destination => {
            for (option, value) in entries {
                format::simple_option(option, value, out)?;
            }
        }
        Section::Video => {
            for (option, value) in entries {
                if option == "encopts" {
                    let OptionValue::Map(settings) = value else {
                        return Err(CoreError::Format {
                            option: option.clone(),
                            reason: format!(
                                "encopts must be a map of encoder settings, got a {}",
                                value.type_name()
                            ),
                        });
                    };
                    out.push(format::flag_name(option));
                    out.push(format::custom_format(option, settings)?);
                } else {
                    format::simple_option(option, value, out)?;
                }
            }
        }
        Section::Audio | Section::Subtitles => {
            for (option, value) in entries {
                if let OptionValue::List(items) = value {
                    out.push(format::flag_name(option));
                    out.push(format::list_format(option, items)?);
                } else {
                    format::simple_option(option, value, out)?;
                }
            }
        }
        Section::Picture => {
            for (option, value) in entries {
                if option == "crop" {
                    let OptionValue::Map(sides) = value else {
                        return Err(CoreError::Format {
                            option: option.clone(),
                            reason: format!(
                                "crop must be a map of sides, got a {}",
                                value.type_name()
                            ),
                        });
                    };
                    out.push(format::flag_name(option));
                    out.push(format::crop_format(option, sides)?);
                } else {
                    format::simple_option(option, value, out)?;
                }
            }
        }
        Section::Filters => {
            for (option, value) in entries {
                match value {
                    // A map-valued filter holds grouped settings. The group
                    // key itself is never emitted; the flag always comes
                    // from the filter name.
                    OptionValue::Map(groups) => {
                        for (_, inner) in groups {
                            if let OptionValue::Map(settings) = inner {
                                out.push(format::flag_name(option));
                                out.push(format::custom_format(option, settings)?);
                            } else {
                                format::simple_option(option, inner, out)?;
                            }
                        }
                    }
                    other => format::simple_option(option, other, out)?,
                }
            }
        }
    }
    Ok(())
}
