//! Overlaying caller entries onto static asset segments.
//!
//! Entries are first grouped by base slug into [`SideBuckets`] (one slot each for `both`,
//! `left` and `right`). Each asset segment is then merged three ways: the `both` entry is laid
//! over the asset, and the `left` / `right` entries are laid over that result. A bilateral
//! muscle can therefore show two different colors while still inheriting shared data.

use crate::model::{AssetSegment, PathGroups, Progress, StyleOverrides, UserEntry};
use crate::scale::ColorScale;
use crate::slug::{Side, SideQualifier, parse_slug};
use rustc_hash::FxHashMap;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SideBucket {
    pub both: Option<UserEntry>,
    pub left: Option<UserEntry>,
    pub right: Option<UserEntry>,
}

impl SideBucket {
    pub fn get(&self, side: SideQualifier) -> Option<&UserEntry> {
        match side {
            SideQualifier::Both => self.both.as_ref(),
            SideQualifier::Left => self.left.as_ref(),
            SideQualifier::Right => self.right.as_ref(),
        }
    }

    fn slot_mut(&mut self, side: SideQualifier) -> &mut Option<UserEntry> {
        match side {
            SideQualifier::Both => &mut self.both,
            SideQualifier::Left => &mut self.left,
            SideQualifier::Right => &mut self.right,
        }
    }
}

/// A later entry replaced an earlier one in the same `(base, side)` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketCollision {
    pub base: String,
    pub side: SideQualifier,
    /// Position of the entry that was dropped.
    pub replaced: usize,
    /// Position of the entry that was kept.
    pub kept: usize,
}

#[derive(Debug, Clone, Default)]
pub struct SideBuckets {
    buckets: FxHashMap<String, SideBucket>,
    collisions: Vec<BucketCollision>,
}

impl SideBuckets {
    pub fn get(&self, base: &str) -> Option<&SideBucket> {
        self.buckets.get(base)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn collisions(&self) -> &[BucketCollision] {
        &self.collisions
    }
}

/// Groups entries by base slug and effective side.
///
/// The effective side is the slug suffix if present, then the entry's `side` field, then
/// `both`. Stored entries have their slug normalized to the base and `side` set to the
/// effective side. Entries with an empty slug are skipped. When two entries land in the same
/// slot the later one wins; the overwrite is recorded in [`SideBuckets::collisions`].
pub fn build_side_buckets(entries: &[UserEntry]) -> SideBuckets {
    let mut out = SideBuckets::default();
    let mut slot_owner: FxHashMap<(String, SideQualifier), usize> = FxHashMap::default();

    for (index, entry) in entries.iter().enumerate() {
        if entry.slug.is_empty() {
            continue;
        }
        let parsed = parse_slug(&entry.slug);
        let effective = parsed
            .side
            .map(SideQualifier::from)
            .or(entry.side)
            .unwrap_or_default();
        let base = parsed.base.to_string();

        let mut normalized = entry.clone();
        normalized.slug = base.clone();
        normalized.side = Some(effective);

        if let Some(replaced) = slot_owner.insert((base.clone(), effective), index) {
            out.collisions.push(BucketCollision {
                base: base.clone(),
                side: effective,
                replaced,
                kept: index,
            });
        }
        *out.buckets.entry(base).or_default().slot_mut(effective) = Some(normalized);
    }

    out
}

/// An asset segment with caller data applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedSegment<'a> {
    #[serde(skip)]
    pub asset: &'a AssetSegment,
    pub slug: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleOverrides>,
    /// Side of the most recently applied entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<SideQualifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_color: Option<String>,
}

impl<'a> MergedSegment<'a> {
    pub fn from_asset(asset: &'a AssetSegment) -> Self {
        Self {
            asset,
            slug: &asset.slug,
            color: asset.color.clone(),
            intensity: None,
            progress: None,
            styles: None,
            side: None,
            intensity_color: None,
            progress_color: None,
        }
    }

    pub fn path(&self) -> &'a PathGroups {
        &self.asset.path
    }

    pub fn style_fill(&self) -> Option<&str> {
        self.styles.as_ref()?.fill.as_deref()
    }

    /// True when the last applied entry targets exactly `side` (not `both`).
    pub fn targets_only(&self, side: Side) -> bool {
        self.side.and_then(SideQualifier::side) == Some(side)
    }
}

/// The three render variants of one segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedVariants<'a> {
    pub both: MergedSegment<'a>,
    pub left: MergedSegment<'a>,
    pub right: MergedSegment<'a>,
}

impl<'a> MergedVariants<'a> {
    pub fn get(&self, side: SideQualifier) -> &MergedSegment<'a> {
        match side {
            SideQualifier::Both => &self.both,
            SideQualifier::Left => &self.left,
            SideQualifier::Right => &self.right,
        }
    }
}

/// Inputs needed to derive colors while merging.
#[derive(Debug, Clone, Copy)]
pub struct MergeContext<'c> {
    pub palette: &'c [String],
    pub scale: &'c ColorScale,
}

impl<'c> MergeContext<'c> {
    pub fn new(palette: &'c [String], scale: &'c ColorScale) -> Self {
        Self { palette, scale }
    }

    /// Intensity is 1-indexed. Non-positive or out-of-range values select nothing.
    pub fn palette_color(&self, intensity: i64) -> Option<String> {
        let index = usize::try_from(intensity.checked_sub(1)?).ok()?;
        self.palette.get(index).cloned()
    }

    /// Lays `entry` over `base` and re-derives the intensity and progress colors.
    ///
    /// Without an entry the base is returned as-is. The result is a fresh value, so merges that
    /// share a base never observe each other's derived colors.
    pub fn merge_one<'a>(
        &self,
        base: &MergedSegment<'a>,
        entry: Option<&UserEntry>,
    ) -> MergedSegment<'a> {
        let Some(entry) = entry else {
            return base.clone();
        };

        let mut out = base.clone();
        if let Some(styles) = &entry.styles {
            out.styles = Some(styles.clone());
        }
        if let Some(intensity) = entry.intensity {
            out.intensity = Some(intensity);
        }
        if let Some(progress) = &entry.progress {
            out.progress = Some(progress.clone());
        }
        if let Some(color) = &entry.color {
            out.color = Some(color.clone());
        }
        out.side = entry.side;

        out.intensity_color = match out.intensity {
            Some(intensity) if out.style_fill().is_none() && out.color.is_none() => {
                self.palette_color(intensity)
            }
            _ => None,
        };
        out.progress_color = out.progress.as_ref().and_then(|progress| {
            progress
                .color
                .clone()
                .or_else(|| self.scale.resolve_hex(progress.value))
        });

        out
    }

    pub fn merge_for_segment<'a>(
        &self,
        asset: &'a AssetSegment,
        buckets: &SideBuckets,
    ) -> MergedVariants<'a> {
        let base = MergedSegment::from_asset(asset);
        let bucket = buckets.get(&asset.slug);
        let both = self.merge_one(&base, bucket.and_then(|b| b.both.as_ref()));
        let left = self.merge_one(&both, bucket.and_then(|b| b.left.as_ref()));
        let right = self.merge_one(&both, bucket.and_then(|b| b.right.as_ref()));
        MergedVariants { both, left, right }
    }
}
