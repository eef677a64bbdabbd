use crate::Result;
use crate::body::{report_diagnostics, select_set};
use crate::model::BodyDrawing;
use anatomap_core::{AssetLibrary, RenderConfig, SideBuckets, UserEntry, build_side_buckets};
use std::sync::Arc;

/// Caches the side buckets for the most recent entry list.
///
/// Identity is the `Arc` allocation, not its contents: passing the same `Arc` again reuses the
/// buckets, while a fresh `Arc` with equal entries rebuilds them.
#[derive(Debug, Default)]
pub struct BucketMemo {
    cached: Option<(Arc<[UserEntry]>, SideBuckets)>,
    rebuilds: usize,
}

impl BucketMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, entries: &Arc<[UserEntry]>) -> &SideBuckets {
        let stale = match &self.cached {
            Some((key, _)) => !Arc::ptr_eq(key, entries),
            None => true,
        };
        if stale {
            self.rebuilds += 1;
            self.cached = None;
        }
        let (_, buckets) = self
            .cached
            .get_or_insert_with(|| (Arc::clone(entries), build_side_buckets(entries)));
        buckets
    }

    /// How many times the buckets have been built.
    pub fn rebuilds(&self) -> usize {
        self.rebuilds
    }

    pub fn clear(&mut self) {
        self.cached = None;
    }
}

/// [`crate::render_body`] with bucket reuse across calls that pass the same entry list.
///
/// Diagnostics are only reported when the buckets are rebuilt.
pub fn render_body_memoized<'a>(
    memo: &mut BucketMemo,
    assets: &'a AssetLibrary,
    entries: &Arc<[UserEntry]>,
    config: &RenderConfig,
) -> Result<BodyDrawing<'a>> {
    let set = select_set(assets, config)?;
    let before = memo.rebuilds();
    let buckets = memo.get(entries);
    let drawing = crate::body::render_set(set, buckets, config);
    if memo.rebuilds() != before {
        report_diagnostics(assets, entries, config);
    }
    Ok(drawing)
}
