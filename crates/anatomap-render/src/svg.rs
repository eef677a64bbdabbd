//! Standalone SVG output for a [`BodyDrawing`].

mod bounds;
mod util;

pub use bounds::{PathBounds, drawing_bounds, path_bounds};

use crate::model::BodyDrawing;
use anatomap_core::ViewBox;
use std::fmt::Write as _;
use util::{escape_xml, escape_xml_into, fmt_into};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Root `<svg id="...">`.
    pub diagram_id: Option<String>,
    /// Multiplies the view box size for the `width`/`height` attributes.
    pub scale: f64,
    /// Adds extra space around the view box.
    pub viewbox_padding: f64,
    /// Optional full-canvas background fill.
    pub background: Option<String>,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            diagram_id: None,
            scale: 1.0,
            viewbox_padding: 8.0,
            background: None,
        }
    }
}

impl SvgRenderOptions {
    pub fn with_diagram_id(mut self, id: impl Into<String>) -> Self {
        self.diagram_id = Some(id.into());
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }
}

/// The asset set's view box, or the drawn paths' bounds, grown by `padding` on every side.
pub fn svg_view_box(drawing: &BodyDrawing<'_>, padding: f64) -> ViewBox {
    let base = drawing
        .view_box
        .or_else(|| drawing_bounds(drawing).map(PathBounds::to_view_box))
        .unwrap_or(ViewBox {
            min_x: 0.0,
            min_y: 0.0,
            width: 0.0,
            height: 0.0,
        });
    let padding = if padding.is_finite() { padding.max(0.0) } else { 0.0 };
    ViewBox {
        min_x: base.min_x - padding,
        min_y: base.min_y - padding,
        width: (base.width + padding * 2.0).max(1.0),
        height: (base.height + padding * 2.0).max(1.0),
    }
}

pub fn render_svg(drawing: &BodyDrawing<'_>, options: &SvgRenderOptions) -> String {
    let vb = svg_view_box(drawing, options.viewbox_padding);
    let scale = if options.scale.is_finite() && options.scale > 0.0 {
        options.scale
    } else {
        1.0
    };

    let mut buf = ryu_js::Buffer::new();
    let mut out = String::with_capacity(256 + drawing.instructions.len() * 160);

    out.push_str("<svg");
    if let Some(id) = options.diagram_id.as_deref() {
        let _ = write!(&mut out, r#" id="{}""#, escape_xml(id));
    }
    let _ = write!(&mut out, r#" xmlns="{SVG_NS}" viewBox=""#);
    fmt_into(&mut out, vb.min_x, &mut buf);
    out.push(' ');
    fmt_into(&mut out, vb.min_y, &mut buf);
    out.push(' ');
    fmt_into(&mut out, vb.width, &mut buf);
    out.push(' ');
    fmt_into(&mut out, vb.height, &mut buf);
    out.push_str(r#"" width=""#);
    fmt_into(&mut out, vb.width * scale, &mut buf);
    out.push_str(r#"" height=""#);
    fmt_into(&mut out, vb.height * scale, &mut buf);
    let _ = write!(
        &mut out,
        r#"" data-gender="{}" data-view="{}">"#,
        drawing.gender.as_str(),
        drawing.view.as_str()
    );

    if let Some(background) = options.background.as_deref() {
        out.push_str(r#"<rect x=""#);
        fmt_into(&mut out, vb.min_x, &mut buf);
        out.push_str(r#"" y=""#);
        fmt_into(&mut out, vb.min_y, &mut buf);
        out.push_str(r#"" width=""#);
        fmt_into(&mut out, vb.width, &mut buf);
        out.push_str(r#"" height=""#);
        fmt_into(&mut out, vb.height, &mut buf);
        out.push_str(r#"" fill=""#);
        escape_xml_into(&mut out, background);
        out.push_str(r#""/>"#);
    }

    out.push_str(r#"<g class="anatomap-body">"#);
    for instruction in &drawing.instructions {
        out.push_str(r#"<path d=""#);
        escape_xml_into(&mut out, instruction.path);
        out.push_str(r#"" fill=""#);
        escape_xml_into(&mut out, &instruction.fill);
        out.push_str(r#"" stroke=""#);
        escape_xml_into(&mut out, &instruction.stroke);
        out.push_str(r#"" stroke-width=""#);
        fmt_into(&mut out, instruction.stroke_width.max(0.0), &mut buf);
        out.push_str(r#"" data-slug=""#);
        escape_xml_into(&mut out, instruction.slug);
        out.push('"');
        if let Some(side) = instruction.group.side() {
            let _ = write!(&mut out, r#" data-side="{}""#, side.as_str());
        }
        if instruction.is_interactive() {
            out.push_str(r#" data-interactive="true""#);
        }
        out.push_str("/>");
    }
    out.push_str("</g></svg>");
    out
}
