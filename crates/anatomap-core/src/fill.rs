use crate::catalog::{is_hair, is_skin};
use crate::config::RenderConfig;
use crate::merge::MergedSegment;
use serde::Serialize;

/// Picks the fill for one merged variant. First match wins:
///
/// 1. disabled slug
/// 2. hair
/// 3. other skin regions (hands, feet, head)
/// 4. style fill override
/// 5. explicit color
/// 6. intensity palette color
/// 7. progress color
///
/// `None` means the caller should use its default fill.
pub fn resolve_fill(segment: &MergedSegment<'_>, config: &RenderConfig) -> Option<String> {
    let slug = segment.slug;
    if config.is_disabled(slug) {
        return Some(config.region_colors.disabled.clone());
    }
    if is_hair(slug) {
        return Some(config.region_colors.hair.clone());
    }
    if is_skin(slug) {
        return Some(config.region_colors.skin.clone());
    }
    if let Some(fill) = segment.style_fill() {
        return Some(fill.to_string());
    }
    if let Some(color) = &segment.color {
        return Some(color.clone());
    }
    if segment.intensity.is_some_and(|i| i > 0) {
        if let Some(color) = &segment.intensity_color {
            return Some(color.clone());
        }
    }
    segment.progress_color.clone()
}

/// Fully resolved paint attributes for one path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
}

impl ResolvedStyle {
    /// Default fill with the segment's stroke settings; used for the untargeted half of a
    /// bilateral region.
    pub fn unfilled(segment: &MergedSegment<'_>, config: &RenderConfig) -> Self {
        let mut style = resolve_style(segment, config);
        style.fill = config.default_fill.clone();
        style
    }
}

pub fn resolve_style(segment: &MergedSegment<'_>, config: &RenderConfig) -> ResolvedStyle {
    let styles = segment.styles.as_ref();
    ResolvedStyle {
        fill: resolve_fill(segment, config).unwrap_or_else(|| config.default_fill.clone()),
        stroke: styles
            .and_then(|s| s.stroke.clone())
            .unwrap_or_else(|| config.border.clone()),
        stroke_width: styles
            .and_then(|s| s.stroke_width)
            .unwrap_or(config.default_stroke_width),
    }
}
