//! Option-to-flag formatting rules for HandBrakeCLI.
//!
//! These routines turn semantic option names and [`OptionValue`]s into the
//! token shapes HandBrakeCLI expects: bare flags, `--no-` negations,
//! comma-delimited lists, colon-delimited `key=value` custom strings, the
//! fixed-order crop quad, and the `unit:value` time-range pair. They are
//! pure functions over the closed value type; anything unrenderable is a
//! `Format` error, never a panic.

use crate::command::value::OptionValue;
use crate::error::{CoreError, CoreResult};

/// Boolean options HandBrakeCLI has no negated spelling for.
///
/// A `false` for one of these means "omit the flag entirely"; emitting
/// `--no-subtitle-forced` and friends would be rejected by the tool.
const IGNORE_FALSE: &[&str] = &[
    "inline_parameter_sets",
    "non_anamorphic",
    "auto_anamorphic",
    "loose_anamorphic",
    "custom_anamorphic",
    "subtitle_forced",
    "subtitle_burned",
    "subtitle_default",
    "srt_default",
    "srt_burn",
    "ssa_lang",
    "ssa_default",
    "ssa_burn",
];

/// Flag spellings that break the underscore-to-hyphen rule.
const FLAG_EXCEPTIONS: &[(&str, &str)] = &[
    ("max_height", "--maxHeight"),
    ("max_width", "--maxWidth"),
];

/// The order HandBrakeCLI expects crop sides in, regardless of how the
/// configuration authored them.
const CROP_ORDER: [&str; 4] = ["top", "bottom", "left", "right"];

/// Maps a semantic option name to its HandBrakeCLI flag.
///
/// Underscores become hyphens behind a `--` prefix, except for the handful
/// of camelCase flags listed in [`FLAG_EXCEPTIONS`].
pub fn flag_name(option: &str) -> String {
    for (name, flag) in FLAG_EXCEPTIONS {
        if option == *name {
            return (*flag).to_string();
        }
    }
    format!("--{}", option.replace('_', "-"))
}

/// Appends a simple key/value option to `out`.
///
/// Booleans control flag presence: `true` emits the bare flag, `false`
/// emits the `--no-` negation unless the option is in [`IGNORE_FALSE`],
/// in which case nothing is emitted. Any other scalar emits the flag
/// followed by its textual value.
pub fn simple_option(option: &str, value: &OptionValue, out: &mut Vec<String>) -> CoreResult<()> {
    match value {
        OptionValue::Boolean(true) => out.push(flag_name(option)),
        OptionValue::Boolean(false) => {
            if !IGNORE_FALSE.contains(&option) {
                out.push(flag_name(&format!("no_{option}")));
            }
        }
        other => {
            out.push(flag_name(option));
            out.push(other.scalar_text(option)?);
        }
    }
    Ok(())
}

/// Renders a list value as one comma-delimited token.
///
/// Booleans become `1`/`0` inside lists; element order is preserved.
pub fn list_format(option: &str, items: &[OptionValue]) -> CoreResult<String> {
    let mut parts = Vec::with_capacity(items.len());
    for item in items {
        match item {
            OptionValue::Boolean(b) => parts.push(if *b { "1" } else { "0" }.to_string()),
            other => parts.push(other.scalar_text(option)?),
        }
    }
    Ok(parts.join(","))
}

/// Renders map entries as a colon-joined `key=value` token.
///
/// This is the shape HandBrakeCLI uses for `encopts` and for custom filter
/// settings. Entry keys get underscores replaced with hyphens; entry order
/// follows the authored order.
pub fn custom_format(option: &str, entries: &[(String, OptionValue)]) -> CoreResult<String> {
    let mut parts = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        parts.push(format!(
            "{}={}",
            key.replace('_', "-"),
            value.scalar_text(option)?
        ));
    }
    Ok(parts.join(":"))
}

/// Renders crop settings as the `top:bottom:left:right` quad.
///
/// Sides are emitted in that fixed order whatever order they were authored
/// in; an absent side contributes `0`.
pub fn crop_format(option: &str, entries: &[(String, OptionValue)]) -> CoreResult<String> {
    let mut parts = Vec::with_capacity(CROP_ORDER.len());
    for side in CROP_ORDER {
        match entries.iter().find(|(key, _)| key == side) {
            Some((_, value)) => parts.push(value.scalar_text(option)?),
            None => parts.push("0".to_string()),
        }
    }
    Ok(parts.join(":"))
}

/// Appends a time-range option (`start_at`/`stop_at`) to `out`.
///
/// The value is a single-entry map `{unit: amount}` rendered as the flag
/// followed by one `unit:amount` token. The unit key is passed through
/// verbatim, with no flag-name mapping applied. A map with several entries
/// uses the first authored entry.
pub fn time_range(option: &str, value: &OptionValue, out: &mut Vec<String>) -> CoreResult<()> {
    let OptionValue::Map(entries) = value else {
        return Err(CoreError::Format {
            option: option.to_string(),
            reason: format!(
                "expected a map of the form {{unit: value}}, got a {}",
                value.type_name()
            ),
        });
    };
    let Some((unit, amount)) = entries.first() else {
        return Err(CoreError::Format {
            option: option.to_string(),
            reason: "expected a unit entry, got an empty map".to_string(),
        });
    };
    out.push(flag_name(option));
    out.push(format!("{}:{}", unit, amount.scalar_text(option)?));
    Ok(())
}
