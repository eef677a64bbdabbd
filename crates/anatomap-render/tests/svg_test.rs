use anatomap_core::{AssetLibrary, DiagnosticsMode, Gender, RenderConfig, UserEntry, View};
use anatomap_render::svg::svg_view_box;
use anatomap_render::{SvgRenderOptions, render_body, render_svg};
use std::path::PathBuf;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn load_assets() -> AssetLibrary {
    let path = workspace_root()
        .join("fixtures")
        .join("assets")
        .join("body.json");
    let text = std::fs::read_to_string(&path).expect("fixture");
    AssetLibrary::from_json_str(&text).expect("assets parse")
}

fn config() -> RenderConfig {
    RenderConfig::default().with_diagnostics(DiagnosticsMode::Off)
}

#[test]
fn svg_has_one_path_per_instruction() {
    let assets = load_assets();
    let entries = vec![
        UserEntry::new("chest-left").with_intensity(1),
        UserEntry::new("abs").with_progress(100.0),
    ];
    let config = config().with_disabled(["neck"]);
    let drawing = render_body(&assets, &entries, &config).unwrap();
    let svg = render_svg(&drawing, &SvgRenderOptions::default().with_scale(2.0));

    let doc = roxmltree::Document::parse(&svg).expect("svg parses");
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg");
    assert_eq!(root.tag_name().namespace(), Some("http://www.w3.org/2000/svg"));
    assert_eq!(root.attribute("viewBox"), Some("-8 -8 216 326"));
    assert_eq!(root.attribute("width"), Some("432"));
    assert_eq!(root.attribute("height"), Some("652"));
    assert_eq!(root.attribute("data-gender"), Some("male"));
    assert_eq!(root.attribute("data-view"), Some("front"));
    assert_eq!(root.attribute("id"), None);

    let paths: Vec<_> = doc
        .descendants()
        .filter(|n| n.has_tag_name(("http://www.w3.org/2000/svg", "path")))
        .collect();
    assert_eq!(paths.len(), drawing.instructions.len());

    for (node, instruction) in paths.iter().zip(&drawing.instructions) {
        assert_eq!(node.attribute("d"), Some(instruction.path));
        assert_eq!(node.attribute("fill"), Some(instruction.fill.as_str()));
        assert_eq!(node.attribute("data-slug"), Some(instruction.slug));
        assert_eq!(
            node.attribute("data-side"),
            instruction.group.side().map(|s| s.as_str())
        );
    }

    let chest_left = paths
        .iter()
        .find(|n| {
            n.attribute("data-slug") == Some("chest") && n.attribute("data-side") == Some("left")
        })
        .unwrap();
    assert_eq!(chest_left.attribute("fill"), Some("#0984e3"));
    assert_eq!(chest_left.attribute("stroke-width"), Some("1"));
    assert_eq!(chest_left.attribute("data-interactive"), Some("true"));

    let abs = paths
        .iter()
        .find(|n| n.attribute("data-slug") == Some("abs"))
        .unwrap();
    assert_eq!(abs.attribute("fill"), Some("#22c55e"));
    assert_eq!(abs.attribute("data-side"), None);

    let neck = paths
        .iter()
        .find(|n| n.attribute("data-slug") == Some("neck"))
        .unwrap();
    assert_eq!(neck.attribute("fill"), Some("#ebebe4"));
    assert_eq!(neck.attribute("data-interactive"), None);
}

#[test]
fn view_box_falls_back_to_path_bounds() {
    let assets = load_assets();
    let config = config().with_gender(Gender::Female).with_view(View::Back);
    let drawing = render_body(&assets, &[], &config).unwrap();
    let svg = render_svg(&drawing, &SvgRenderOptions::default());
    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert_eq!(doc.root_element().attribute("viewBox"), Some("52 -6 96 314"));

    let vb = svg_view_box(&drawing, 0.0);
    assert_eq!((vb.min_x, vb.min_y, vb.width, vb.height), (60.0, 2.0, 80.0, 298.0));
}

#[test]
fn id_and_background_are_escaped() {
    let assets = load_assets();
    let drawing = render_body(&assets, &[], &config()).unwrap();
    let options = SvgRenderOptions::default()
        .with_diagram_id(r#"body "one" <&>"#)
        .with_background("white");
    let svg = render_svg(&drawing, &options);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let root = doc.root_element();
    assert_eq!(root.attribute("id"), Some(r#"body "one" <&>"#));

    let rect = root.first_element_child().unwrap();
    assert!(rect.has_tag_name(("http://www.w3.org/2000/svg", "rect")));
    assert_eq!(rect.attribute("fill"), Some("white"));
    assert_eq!(rect.attribute("x"), Some("-8"));
    assert_eq!(rect.attribute("width"), Some("216"));
}

#[test]
fn style_values_are_escaped() {
    let assets = load_assets();
    let mut entry = UserEntry::new("abs");
    entry.color = Some(r##"url("#grad")"##.to_string());
    let drawing = render_body(&assets, &[entry], &config()).unwrap();
    let svg = render_svg(&drawing, &SvgRenderOptions::default());
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let abs = doc
        .descendants()
        .find(|n| n.attribute("data-slug") == Some("abs"))
        .unwrap();
    assert_eq!(abs.attribute("fill"), Some(r##"url("#grad")"##));
}

#[test]
fn empty_drawing_still_has_a_positive_view_box() {
    let assets = load_assets();
    let set = assets.get(Gender::Female, View::Back).unwrap();
    let mut hidden_all = config().with_gender(Gender::Female).with_view(View::Back);
    hidden_all.hidden_parts = set.segments.iter().map(|s| s.slug.clone()).collect();
    let drawing = render_body(&assets, &[], &hidden_all).unwrap();
    assert!(drawing.instructions.is_empty());

    let options = SvgRenderOptions {
        viewbox_padding: 0.0,
        ..Default::default()
    };
    let svg = render_svg(&drawing, &options);
    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert_eq!(doc.root_element().attribute("viewBox"), Some("0 0 1 1"));
}
