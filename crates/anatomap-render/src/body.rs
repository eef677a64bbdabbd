//! The render orchestrator: asset set + entries + config → draw instructions.

use crate::model::{BodyDrawing, DrawInstruction, Interaction, PathGroup};
use crate::{Error, Result};
use anatomap_core::validate::{report_findings, validate_render_input};
use anatomap_core::{
    AssetLibrary, AssetSet, DiagnosticsMode, MergeContext, MergedSegment, RenderConfig,
    ResolvedStyle, SideBuckets, SlugCatalog, UserEntry, build_side_buckets, resolve_style,
};

pub(crate) fn select_set<'a>(
    assets: &'a AssetLibrary,
    config: &RenderConfig,
) -> Result<&'a AssetSet> {
    assets.get(config.gender, config.view).ok_or(Error::MissingAssetSet {
        gender: config.gender,
        view: config.view,
    })
}

pub(crate) fn report_diagnostics(
    assets: &AssetLibrary,
    entries: &[UserEntry],
    config: &RenderConfig,
) {
    if config.diagnostics == DiagnosticsMode::Off {
        return;
    }
    let catalog = if assets.is_empty() {
        SlugCatalog::default()
    } else {
        SlugCatalog::from_assets(assets)
    };
    report_findings(
        &validate_render_input(entries, config, &catalog),
        config.diagnostics,
    );
}

/// Renders the configured gender/view.
///
/// Findings for `entries` and `config` are reported through `tracing` first when diagnostics
/// are enabled; they never change the output.
pub fn render_body<'a>(
    assets: &'a AssetLibrary,
    entries: &[UserEntry],
    config: &RenderConfig,
) -> Result<BodyDrawing<'a>> {
    let set = select_set(assets, config)?;
    report_diagnostics(assets, entries, config);
    let buckets = build_side_buckets(entries);
    Ok(render_set(set, &buckets, config))
}

/// Emits draw instructions for one asset set from pre-built buckets.
///
/// Hidden segments are skipped before merging. For every other segment, in declaration order,
/// the common paths use the `both` variant and each lateral group uses its own side's variant.
pub fn render_set<'a>(
    set: &'a AssetSet,
    buckets: &SideBuckets,
    config: &RenderConfig,
) -> BodyDrawing<'a> {
    let scale = config.effective_scale();
    let ctx = MergeContext::new(&config.colors, &scale);
    let mut instructions = Vec::new();

    for asset in set.segments.iter().filter(|s| !config.is_hidden(&s.slug)) {
        let variants = ctx.merge_for_segment(asset, buckets);
        let disabled = config.is_disabled(&asset.slug);

        let groups = [
            (PathGroup::Common, &asset.path.common, &variants.both),
            (PathGroup::Left, &asset.path.left, &variants.left),
            (PathGroup::Right, &asset.path.right, &variants.right),
        ];
        for (group, paths, variant) in groups {
            if paths.is_empty() {
                continue;
            }
            let style = group_style(group, variant, disabled, config);
            let interaction = (!disabled).then(|| Interaction {
                segment: variant.clone(),
                side: group.side(),
            });
            for path in paths {
                instructions.push(DrawInstruction {
                    slug: &asset.slug,
                    group,
                    path,
                    fill: style.fill.clone(),
                    stroke: style.stroke.clone(),
                    stroke_width: style.stroke_width,
                    interaction: interaction.clone(),
                });
            }
        }
    }

    BodyDrawing {
        gender: config.gender,
        view: config.view,
        view_box: set.view_box,
        instructions,
    }
}

/// A lateral variant whose data targets only the other side is drawn unfilled. Disabled
/// regions keep the disabled color on both sides.
fn group_style(
    group: PathGroup,
    variant: &MergedSegment<'_>,
    disabled: bool,
    config: &RenderConfig,
) -> ResolvedStyle {
    match group.side() {
        Some(side) if !disabled && variant.targets_only(side.opposite()) => {
            ResolvedStyle::unfilled(variant, config)
        }
        _ => resolve_style(variant, config),
    }
}
