//! Advisory input checks.
//!
//! Nothing in this module changes what gets rendered. Each check returns a list of
//! [`Finding`]s; [`report_findings`] forwards them to `tracing` when diagnostics are enabled.

use crate::catalog::SlugCatalog;
use crate::color::is_css_color;
use crate::config::RenderConfig;
use crate::merge::build_side_buckets;
use crate::model::UserEntry;
use crate::scale::{ColorScale, PROGRESS_MAX, PROGRESS_MIN};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FindingKind {
    NotASequence,
    MalformedEntry,
    EmptySlug,
    UnknownSlug,
    InvalidIntensity,
    InvalidProgress,
    InvalidSide,
    NegativeStrokeWidth,
    DuplicateEntry,
    EmptyPalette,
    InvalidColor,
    TooFewStops,
    MalformedScale,
    StopOutOfRange,
    UnbalancedScale,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub kind: FindingKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl Finding {
    pub fn warning(kind: FindingKind, field: Option<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            field,
            message: message.into(),
        }
    }

    pub fn error(kind: FindingKind, field: Option<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            kind,
            field,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

pub fn has_errors(findings: &[Finding]) -> bool {
    findings.iter().any(Finding::is_error)
}

/// Whether findings reach the diagnostic channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticsMode {
    Off,
    Development,
}

impl Default for DiagnosticsMode {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Off
        }
    }
}

/// Emits findings as `tracing` events (warnings at `WARN`, errors at `ERROR`).
pub fn report_findings(findings: &[Finding], mode: DiagnosticsMode) {
    if mode == DiagnosticsMode::Off {
        return;
    }
    for finding in findings {
        let field = finding.field.as_deref().unwrap_or("-");
        match finding.severity {
            Severity::Warning => tracing::warn!(
                kind = ?finding.kind,
                field,
                "{}",
                finding.message
            ),
            Severity::Error => tracing::error!(
                kind = ?finding.kind,
                field,
                "{}",
                finding.message
            ),
        }
    }
}

fn entry_field(index: usize, name: &str) -> Option<String> {
    Some(format!("entries[{index}].{name}"))
}

/// Checks caller entries against the catalog and the palette size.
pub fn validate_entries(
    entries: &[UserEntry],
    intensity_ceiling: usize,
    catalog: &SlugCatalog,
) -> Vec<Finding> {
    let mut out = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        if entry.slug.is_empty() {
            out.push(Finding::warning(
                FindingKind::EmptySlug,
                entry_field(index, "slug"),
                "entry has an empty slug and will be ignored",
            ));
        } else if !catalog.recognizes(&entry.slug) {
            out.push(Finding::warning(
                FindingKind::UnknownSlug,
                entry_field(index, "slug"),
                format!(
                    "unknown slug `{}` (expected a known region, or `<region>-left` / `<region>-right` for a bilateral one)",
                    entry.slug
                ),
            ));
        }

        if let Some(intensity) = entry.intensity {
            let in_range =
                intensity >= 1 && usize::try_from(intensity).is_ok_and(|i| i <= intensity_ceiling);
            if !in_range {
                out.push(Finding::warning(
                    FindingKind::InvalidIntensity,
                    entry_field(index, "intensity"),
                    format!(
                        "intensity {intensity} is outside 1..={intensity_ceiling} and selects no palette color"
                    ),
                ));
            }
        }

        if let Some(progress) = &entry.progress {
            let value = progress.value;
            if !value.is_finite() {
                out.push(Finding::warning(
                    FindingKind::InvalidProgress,
                    entry_field(index, "progress.value"),
                    format!("progress value {value} is not finite"),
                ));
            } else if !(PROGRESS_MIN..=PROGRESS_MAX).contains(&value) {
                out.push(Finding::warning(
                    FindingKind::InvalidProgress,
                    entry_field(index, "progress.value"),
                    format!("progress value {value} is outside -100..=100 and will be clamped"),
                ));
            }
        }

        if let Some(width) = entry.styles.as_ref().and_then(|s| s.stroke_width) {
            if width.is_nan() || width < 0.0 {
                out.push(Finding::warning(
                    FindingKind::NegativeStrokeWidth,
                    entry_field(index, "styles.strokeWidth"),
                    format!("stroke width {width} must be a non-negative number"),
                ));
            }
        }
    }

    for collision in build_side_buckets(entries).collisions() {
        out.push(Finding::warning(
            FindingKind::DuplicateEntry,
            entry_field(collision.replaced, "slug"),
            format!(
                "entries[{}] replaces entries[{}] for `{}` ({} side)",
                collision.kept,
                collision.replaced,
                collision.base,
                collision.side.as_str()
            ),
        ));
    }

    out
}

/// Checks the intensity palette.
pub fn validate_color_list(colors: &[String]) -> Vec<Finding> {
    let mut out = Vec::new();
    if colors.is_empty() {
        out.push(Finding::warning(
            FindingKind::EmptyPalette,
            Some("colors".to_string()),
            "palette is empty; intensity entries will render with the default fill",
        ));
    }
    for (index, color) in colors.iter().enumerate() {
        if !is_css_color(color) {
            out.push(Finding::warning(
                FindingKind::InvalidColor,
                Some(format!("colors[{index}]")),
                format!("`{color}` is not a valid CSS color"),
            ));
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScaleValidation {
    pub valid: bool,
    pub findings: Vec<Finding>,
}

/// Structural check for a caller-supplied color scale.
///
/// A scale needs at least two stops. Scales whose stops do not cover both negative and
/// positive values are accepted but flagged.
pub fn validate_color_scale(scale: &ColorScale) -> ScaleValidation {
    let mut findings = Vec::new();

    if scale.stops.len() < 2 {
        findings.push(Finding::error(
            FindingKind::TooFewStops,
            Some("colorScale.stops".to_string()),
            format!(
                "color scale needs at least 2 stops, got {}",
                scale.stops.len()
            ),
        ));
        return ScaleValidation {
            valid: false,
            findings,
        };
    }

    for (index, stop) in scale.stops.iter().enumerate() {
        if !(PROGRESS_MIN..=PROGRESS_MAX).contains(&stop.value) {
            findings.push(Finding::warning(
                FindingKind::StopOutOfRange,
                Some(format!("colorScale.stops[{index}].value")),
                format!("stop value {} is outside -100..=100", stop.value),
            ));
        }
    }

    let has_negative = scale.stops.iter().any(|s| s.value < 0.0);
    let has_positive = scale.stops.iter().any(|s| s.value > 0.0);
    if !(has_negative && has_positive) {
        findings.push(Finding::warning(
            FindingKind::UnbalancedScale,
            Some("colorScale.stops".to_string()),
            "color scale does not span both negative and positive values",
        ));
    }

    ScaleValidation {
        valid: true,
        findings,
    }
}

/// Runs every check that applies to one render call: entries, palette and (when set) the
/// custom color scale.
pub fn validate_render_input(
    entries: &[UserEntry],
    config: &RenderConfig,
    catalog: &SlugCatalog,
) -> Vec<Finding> {
    let mut out = validate_entries(entries, config.intensity_ceiling(), catalog);
    out.extend(validate_color_list(&config.colors));
    if let Some(scale) = &config.color_scale {
        out.extend(validate_color_scale(scale).findings);
    }
    out
}
