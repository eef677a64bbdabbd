#![forbid(unsafe_code)]

//! `anatomap` renders muscle maps headlessly: caller data (intensity or signed progress per
//! region, optionally per side) painted onto static male/female front/back anatomy assets.
//!
//! # Features
//!
//! - `render`: enable draw-instruction orchestration + SVG output (`anatomap::render`)
//! - `raster`: enable PNG/JPG/PDF output via pure-Rust SVG rasterization/conversion

pub use anatomap_core::*;

#[cfg(feature = "render")]
pub mod render {
    use anatomap_core::validate::validate_render_input;
    use anatomap_core::{AssetLibrary, Finding, RenderConfig, SlugCatalog, UserEntry};
    use std::sync::Arc;

    pub use anatomap_render::Error as RenderError;
    pub use anatomap_render::svg::svg_view_box;
    pub use anatomap_render::{
        BodyDrawing, BucketMemo, DrawInstruction, Interaction, PathGroup, PressHandler,
        SvgRenderOptions, render_body, render_body_memoized, render_svg as render_drawing_svg,
    };

    #[cfg(feature = "raster")]
    pub mod raster;

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Load(#[from] anatomap_core::Error),
        #[error(transparent)]
        Render(#[from] anatomap_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Converts an arbitrary string into a conservative SVG `id` token, so several rendered
    /// bodies can be inlined in one document without colliding.
    ///
    /// This helper:
    /// - trims whitespace
    /// - replaces unsupported characters with `-`
    /// - ensures the id starts with an ASCII letter by prefixing `a-` when needed
    pub fn sanitize_svg_id(raw: &str) -> String {
        const FALLBACK: &str = "a-untitled";
        let raw = raw.trim();
        if raw.is_empty() {
            return FALLBACK.to_string();
        }

        let mut out = String::with_capacity(raw.len() + 2);
        for ch in raw.chars() {
            let ok = ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | ':' | '.');
            out.push(if ok { ch } else { '-' });
        }
        if !out.starts_with(|c: char| c.is_ascii_alphabetic()) {
            out.insert_str(0, "a-");
        }
        while out.contains("--") {
            out = out.replace("--", "-");
        }
        let out = out.trim_matches('-');
        if out.is_empty() || out == "a" {
            return FALLBACK.to_string();
        }
        out.to_string()
    }

    /// Synchronous SVG render helper (executor-free).
    pub fn render_svg_sync(
        assets: &AssetLibrary,
        entries: &[UserEntry],
        config: &RenderConfig,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        let drawing = render_body(assets, entries, config)?;
        Ok(anatomap_render::render_svg(&drawing, svg_options))
    }

    pub async fn render_svg(
        assets: &AssetLibrary,
        entries: &[UserEntry],
        config: &RenderConfig,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        render_svg_sync(assets, entries, config, svg_options)
    }

    /// Bundles loaded assets with a render config and SVG options.
    ///
    /// Assets are shared behind an `Arc`, so cloning a renderer (e.g. per UI view) is cheap. All
    /// work is CPU-bound and performs no I/O.
    #[derive(Debug, Clone)]
    pub struct HeadlessRenderer {
        pub assets: Arc<AssetLibrary>,
        pub config: RenderConfig,
        pub svg: SvgRenderOptions,
    }

    impl HeadlessRenderer {
        pub fn new(assets: impl Into<Arc<AssetLibrary>>) -> Self {
            Self {
                assets: assets.into(),
                config: RenderConfig::default(),
                svg: SvgRenderOptions::default(),
            }
        }

        pub fn from_assets_json(text: &str) -> Result<Self> {
            Ok(Self::new(AssetLibrary::from_json_str(text)?))
        }

        pub fn with_config(mut self, config: RenderConfig) -> Self {
            self.config = config;
            self
        }

        pub fn with_svg_options(mut self, svg: SvgRenderOptions) -> Self {
            self.svg = svg;
            self
        }

        /// Slugs known to the loaded assets (the built-in list when no assets are loaded).
        pub fn catalog(&self) -> SlugCatalog {
            if self.assets.is_empty() {
                SlugCatalog::default()
            } else {
                SlugCatalog::from_assets(&self.assets)
            }
        }

        /// Advisory findings for `entries` under this renderer's config.
        pub fn validate(&self, entries: &[UserEntry]) -> Vec<Finding> {
            validate_render_input(entries, &self.config, &self.catalog())
        }

        pub fn render_sync(&self, entries: &[UserEntry]) -> Result<BodyDrawing<'_>> {
            Ok(render_body(&self.assets, entries, &self.config)?)
        }

        pub async fn render(&self, entries: &[UserEntry]) -> Result<BodyDrawing<'_>> {
            self.render_sync(entries)
        }

        pub fn render_svg_sync(&self, entries: &[UserEntry]) -> Result<String> {
            render_svg_sync(&self.assets, entries, &self.config, &self.svg)
        }

        pub async fn render_svg(&self, entries: &[UserEntry]) -> Result<String> {
            self.render_svg_sync(entries)
        }

        pub fn render_svg_sync_with(
            &self,
            entries: &[UserEntry],
            svg: &SvgRenderOptions,
        ) -> Result<String> {
            render_svg_sync(&self.assets, entries, &self.config, svg)
        }

        pub fn render_svg_sync_with_diagram_id(
            &self,
            entries: &[UserEntry],
            diagram_id: &str,
        ) -> Result<String> {
            let mut svg = self.svg.clone();
            svg.diagram_id = Some(sanitize_svg_id(diagram_id));
            self.render_svg_sync_with(entries, &svg)
        }

        #[cfg(feature = "raster")]
        pub fn render_png_sync(
            &self,
            entries: &[UserEntry],
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            raster::svg_to_png(&self.render_svg_sync(entries)?, raster)
        }

        #[cfg(feature = "raster")]
        pub fn render_jpeg_sync(
            &self,
            entries: &[UserEntry],
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            raster::svg_to_jpeg(&self.render_svg_sync(entries)?, raster)
        }

        #[cfg(feature = "raster")]
        pub fn render_pdf_sync(&self, entries: &[UserEntry]) -> raster::Result<Vec<u8>> {
            raster::svg_to_pdf(&self.render_svg_sync(entries)?)
        }
    }
}
