//! Shape checks for untyped (JSON/YAML/JSON5) input.
//!
//! Typed callers build [`UserEntry`] values directly. Everything read from a document goes
//! through here instead: malformed pieces are dropped with a [`Finding`] rather than failing
//! the whole document.

use crate::Result;
use crate::config::RenderConfig;
use crate::model::{Progress, StyleOverrides, UserEntry};
use crate::scale::ColorScale;
use crate::slug::SideQualifier;
use crate::validate::{Finding, FindingKind};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedEntries {
    pub entries: Vec<UserEntry>,
    pub findings: Vec<Finding>,
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads an entry list. A non-array document is reported at error level and yields no entries.
pub fn entries_from_value(value: &Value) -> ParsedEntries {
    let mut out = ParsedEntries::default();
    let Value::Array(items) = value else {
        out.findings.push(Finding::error(
            FindingKind::NotASequence,
            Some("entries".to_string()),
            format!("entries must be an array, got {}", json_type(value)),
        ));
        return out;
    };

    for (index, item) in items.iter().enumerate() {
        let Value::Object(map) = item else {
            out.findings.push(Finding::warning(
                FindingKind::MalformedEntry,
                Some(format!("entries[{index}]")),
                format!("entry must be an object, got {}", json_type(item)),
            ));
            continue;
        };
        if let Some(entry) = entry_from_map(index, map, &mut out.findings) {
            out.entries.push(entry);
        }
    }
    out
}

fn entry_from_map(
    index: usize,
    map: &Map<String, Value>,
    findings: &mut Vec<Finding>,
) -> Option<UserEntry> {
    let field = |name: &str| Some(format!("entries[{index}].{name}"));

    let Some(slug) = map.get("slug").and_then(Value::as_str) else {
        findings.push(Finding::warning(
            FindingKind::MalformedEntry,
            field("slug"),
            "entry has no string `slug` and will be ignored",
        ));
        return None;
    };
    let mut entry = UserEntry::new(slug);

    match map.get("intensity") {
        None | Some(Value::Null) => {}
        Some(Value::Number(n)) => match n.as_i64() {
            Some(i) => entry.intensity = Some(i),
            None => {
                let is_whole = n.as_f64().is_some_and(|f| f.fract() == 0.0);
                findings.push(Finding::warning(
                    FindingKind::InvalidIntensity,
                    field("intensity"),
                    if is_whole {
                        format!("intensity {n} is out of range")
                    } else {
                        format!("intensity {n} is not an integer and selects no palette color")
                    },
                ));
            }
        },
        Some(other) => findings.push(Finding::warning(
            FindingKind::InvalidIntensity,
            field("intensity"),
            format!("intensity must be a number, got {}", json_type(other)),
        )),
    }

    match map.get("progress") {
        None | Some(Value::Null) => {}
        Some(Value::Object(p)) => match p.get("value").and_then(Value::as_f64) {
            Some(value) => {
                entry.progress = Some(Progress {
                    value,
                    color: p.get("color").and_then(Value::as_str).map(str::to_string),
                });
            }
            None => findings.push(Finding::warning(
                FindingKind::InvalidProgress,
                field("progress.value"),
                "progress needs a numeric `value`",
            )),
        },
        Some(other) => findings.push(Finding::warning(
            FindingKind::InvalidProgress,
            field("progress"),
            format!("progress must be an object, got {}", json_type(other)),
        )),
    }

    if let Some(color) = map.get("color").and_then(Value::as_str) {
        entry.color = Some(color.to_string());
    }

    match map.get("side") {
        None | Some(Value::Null) => {}
        Some(Value::String(s)) => match s.parse::<SideQualifier>() {
            Ok(side) => entry.side = Some(side),
            Err(()) => findings.push(Finding::warning(
                FindingKind::InvalidSide,
                field("side"),
                format!("side `{s}` must be one of left, right, both"),
            )),
        },
        Some(other) => findings.push(Finding::warning(
            FindingKind::InvalidSide,
            field("side"),
            format!("side must be a string, got {}", json_type(other)),
        )),
    }

    if let Some(Value::Object(s)) = map.get("styles") {
        entry.styles = Some(StyleOverrides {
            fill: s.get("fill").and_then(Value::as_str).map(str::to_string),
            stroke: s.get("stroke").and_then(Value::as_str).map(str::to_string),
            stroke_width: s.get("strokeWidth").and_then(Value::as_f64),
        });
    }

    Some(entry)
}

const LIST_KEYS: &[&str] = &["colors", "disabledParts", "hiddenParts"];

/// Drops a `colorScale` that cannot be read so the default scale applies.
fn check_color_scale(map: &mut Map<String, Value>, findings: &mut Vec<Finding>) {
    let Some(scale) = map.get("colorScale") else {
        return;
    };
    let finding = match scale {
        Value::Null => return,
        Value::Object(obj) => match obj.get("stops") {
            None | Some(Value::Null) => Finding::error(
                FindingKind::TooFewStops,
                Some("colorScale.stops".to_string()),
                "color scale has no `stops`; using the default scale",
            ),
            Some(Value::Array(_)) => match serde_json::from_value::<ColorScale>(scale.clone()) {
                Ok(_) => return,
                Err(err) => Finding::error(
                    FindingKind::MalformedScale,
                    Some("colorScale".to_string()),
                    format!("color scale is malformed ({err}); using the default scale"),
                ),
            },
            Some(other) => Finding::error(
                FindingKind::NotASequence,
                Some("colorScale.stops".to_string()),
                format!(
                    "`colorScale.stops` must be an array, got {}; using the default scale",
                    json_type(other)
                ),
            ),
        },
        other => Finding::error(
            FindingKind::MalformedScale,
            Some("colorScale".to_string()),
            format!(
                "`colorScale` must be an object, got {}; using the default scale",
                json_type(other)
            ),
        ),
    };
    findings.push(finding);
    map.remove("colorScale");
}

/// Reads a render config, replacing non-array list fields with their defaults and an
/// unreadable color scale with the default scale.
///
/// Structural problems in the remaining fields are still hard errors.
pub fn config_from_value(mut value: Value) -> Result<(RenderConfig, Vec<Finding>)> {
    let mut findings = Vec::new();
    if let Value::Object(map) = &mut value {
        check_color_scale(map, &mut findings);
        for key in LIST_KEYS {
            let Some(v) = map.get(*key) else {
                continue;
            };
            if !v.is_array() {
                findings.push(Finding::error(
                    FindingKind::NotASequence,
                    Some((*key).to_string()),
                    format!("`{key}` must be an array, got {}", json_type(v)),
                ));
                map.remove(*key);
            }
        }
    }
    Ok((RenderConfig::from_value(value)?, findings))
}
