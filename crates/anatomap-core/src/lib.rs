#![forbid(unsafe_code)]

//! Muscle-map data model (headless).
//!
//! Turns caller data (intensity or signed progress per muscle, optionally per side) into fully
//! resolved per-segment colors for a static anatomical asset set. Everything here is pure and
//! synchronous; rendering lives in `anatomap-render`.
//!
//! Pipeline:
//! - [`input`]: shape-check untyped documents into [`UserEntry`] values
//! - [`merge`]: bucket entries by slug and side, then merge each asset segment three ways
//! - [`fill`]: pick the fill for each merged variant
//! - [`validate`]: advisory findings, reported through `tracing` in development mode

pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod fill;
pub mod input;
pub mod merge;
pub mod model;
pub mod scale;
pub mod slug;
pub mod validate;

pub use catalog::SlugCatalog;
pub use color::Color;
pub use config::{DocumentFormat, RegionColors, RenderConfig};
pub use error::{Error, Result};
pub use fill::{ResolvedStyle, resolve_fill, resolve_style};
pub use merge::{
    MergeContext, MergedSegment, MergedVariants, SideBucket, SideBuckets, build_side_buckets,
};
pub use model::{
    AssetLibrary, AssetSegment, AssetSet, Gender, PathGroups, Progress, StyleOverrides,
    UserEntry, View, ViewBox,
};
pub use scale::{ColorScale, ColorStop, Interpolation};
pub use slug::{ParsedSlug, Side, SideQualifier, parse_slug};
pub use validate::{DiagnosticsMode, Finding, FindingKind, Severity};

#[cfg(test)]
mod tests;
