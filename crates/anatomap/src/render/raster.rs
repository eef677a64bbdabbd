#![forbid(unsafe_code)]

use crate::render::{HeadlessError, SvgRenderOptions};
use anatomap_core::{AssetLibrary, RenderConfig, UserEntry};

#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error(transparent)]
    Headless(#[from] HeadlessError),
    #[error("failed to parse SVG")]
    SvgParse,
    #[error("failed to allocate pixmap for raster rendering")]
    PixmapAlloc,
    #[error("failed to encode PNG")]
    PngEncode,
    #[error("invalid background color: {0}")]
    InvalidBackground(String),
    #[error("JPG rendering requires an opaque background color (e.g. white)")]
    JpegOpaqueBackgroundRequired,
    #[error("failed to encode JPG")]
    JpegEncode,
    #[error("failed to convert SVG to PDF")]
    PdfConvert,
}

pub type Result<T> = std::result::Result<T, RasterError>;

#[derive(Debug, Clone)]
pub struct RasterOptions {
    pub scale: f32,
    pub background: Option<String>,
    pub jpeg_quality: u8,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: None,
            jpeg_quality: 90,
        }
    }
}

pub fn render_png_sync(
    assets: &AssetLibrary,
    entries: &[UserEntry],
    config: &RenderConfig,
    svg_options: &SvgRenderOptions,
    raster: &RasterOptions,
) -> Result<Vec<u8>> {
    let svg = super::render_svg_sync(assets, entries, config, svg_options)?;
    svg_to_png(&svg, raster)
}

pub fn render_jpeg_sync(
    assets: &AssetLibrary,
    entries: &[UserEntry],
    config: &RenderConfig,
    svg_options: &SvgRenderOptions,
    raster: &RasterOptions,
) -> Result<Vec<u8>> {
    let svg = super::render_svg_sync(assets, entries, config, svg_options)?;
    svg_to_jpeg(&svg, raster)
}

pub fn render_pdf_sync(
    assets: &AssetLibrary,
    entries: &[UserEntry],
    config: &RenderConfig,
    svg_options: &SvgRenderOptions,
) -> Result<Vec<u8>> {
    let svg = super::render_svg_sync(assets, entries, config, svg_options)?;
    svg_to_pdf(&svg)
}

pub fn svg_to_png(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    let background = options
        .background
        .as_deref()
        .map(parse_background)
        .transpose()?;
    let pixmap = svg_to_pixmap(svg, options.scale, background)?;
    pixmap.encode_png().map_err(|_| RasterError::PngEncode)
}

pub fn svg_to_jpeg(svg: &str, options: &RasterOptions) -> Result<Vec<u8>> {
    let color = parse_background(options.background.as_deref().unwrap_or("white"))?;
    if !color.is_opaque() {
        return Err(RasterError::JpegOpaqueBackgroundRequired);
    }

    let pixmap = svg_to_pixmap(svg, options.scale, Some(color))?;
    let (w, h) = (pixmap.width(), pixmap.height());

    // The background is opaque, so every pixel has alpha 255 and the channel can be dropped.
    let rgb: Vec<u8> = pixmap
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    let mut out = Vec::new();
    let mut enc =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, options.jpeg_quality);
    enc.encode(&rgb, w, h, image::ExtendedColorType::Rgb8)
        .map_err(|_| RasterError::JpegEncode)?;
    Ok(out)
}

pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    let opt = svg2pdf::usvg::Options::default();
    let tree = svg2pdf::usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|_| RasterError::PdfConvert)
}

fn svg_to_pixmap(
    svg: &str,
    scale: f32,
    background: Option<tiny_skia::Color>,
) -> Result<tiny_skia::Pixmap> {
    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    // The root `width`/`height` already include the SVG scale; `usvg` maps the viewBox onto them.
    let scale = if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    };
    let size = tree.size();
    let width_px = (size.width() * scale).ceil().max(1.0) as u32;
    let height_px = (size.height() * scale).ceil().max(1.0) as u32;

    let mut pixmap = tiny_skia::Pixmap::new(width_px, height_px).ok_or(RasterError::PixmapAlloc)?;
    if let Some(color) = background {
        pixmap.fill(color);
    }

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap)
}

/// Any CSS color `svgtypes` understands, including `transparent` and `#rrggbbaa`.
fn parse_background(text: &str) -> Result<tiny_skia::Color> {
    let color = text
        .trim()
        .parse::<svgtypes::Color>()
        .map_err(|_| RasterError::InvalidBackground(text.to_string()))?;
    Ok(tiny_skia::Color::from_rgba8(
        color.red,
        color.green,
        color.blue,
        color.alpha,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10" width="10" height="10"><rect width="10" height="10" fill="black"/></svg>"#;

    #[test]
    fn svg_to_png_produces_png_signature() {
        let bytes = svg_to_png(SQUARE, &RasterOptions::default()).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn svg_to_jpeg_produces_jpeg_signature() {
        let bytes = svg_to_jpeg(SQUARE, &RasterOptions::default()).unwrap();
        assert!(bytes.starts_with(&[0xFF, 0xD8, 0xFF]));
    }

    #[test]
    fn jpeg_rejects_transparent_background() {
        let options = RasterOptions {
            background: Some("transparent".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            svg_to_jpeg(SQUARE, &options),
            Err(RasterError::JpegOpaqueBackgroundRequired)
        ));
    }

    #[test]
    fn invalid_background_is_reported() {
        let options = RasterOptions {
            background: Some("not-a-color".to_string()),
            ..Default::default()
        };
        let err = svg_to_png(SQUARE, &options).unwrap_err();
        assert_eq!(err.to_string(), "invalid background color: not-a-color");
    }

    #[test]
    fn svg_to_pdf_produces_pdf_signature() {
        let bytes = svg_to_pdf(SQUARE).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn scale_multiplies_pixel_size() {
        let options = RasterOptions {
            scale: 2.5,
            ..Default::default()
        };
        let pixmap = svg_to_pixmap(SQUARE, options.scale, None).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (25, 25));
    }
}
