use crate::catalog::{DEFAULT_SLUGS, SlugCatalog};
use crate::color::{Color, is_css_color};
use crate::config::{DocumentFormat, RenderConfig};
use crate::model::{AssetLibrary, Gender, View, ViewBox};
use crate::scale::{ColorScale, Interpolation};
use crate::validate::DiagnosticsMode;

#[test]
fn defaults() {
    let config = RenderConfig::default();
    assert_eq!(config.gender, Gender::Male);
    assert_eq!(config.view, View::Front);
    assert_eq!(config.intensity_ceiling(), 2);
    assert_eq!(config.default_fill, "#3f3f3f");
    assert_eq!(config.border, "#dfdfdf");
    assert_eq!(config.default_stroke_width, 1.0);
    assert_eq!(*config.effective_scale(), ColorScale::default());
}

#[test]
fn partial_json_config() {
    let text = r##"{ "view": "back", "disabledParts": ["abs"], "defaultFill": "#000000" }"##;
    let config = RenderConfig::from_str_with_format(text, DocumentFormat::Json).unwrap();
    assert_eq!(config.view, View::Back);
    assert_eq!(config.gender, Gender::Male);
    assert!(config.is_disabled("abs"));
    assert!(!config.is_disabled("chest"));
    assert_eq!(config.default_fill, "#000000");
    assert_eq!(config.colors.len(), 2);
}

#[test]
fn yaml_config_with_custom_scale() {
    let text = r##"
gender: female
view: back
colors: ["#111111", "#222222", "#333333"]
diagnostics: "off"
colorScale:
  interpolation: step
  stops:
    - { value: -100, color: "#ff0000" }
    - { value: 100, color: "#00ff00" }
"##;
    let config = RenderConfig::from_str_with_format(text, DocumentFormat::Yaml).unwrap();
    assert_eq!(config.gender, Gender::Female);
    assert_eq!(config.intensity_ceiling(), 3);
    assert_eq!(config.diagnostics, DiagnosticsMode::Off);
    let scale = config.effective_scale();
    assert_eq!(scale.interpolation, Interpolation::Step);
    assert_eq!(scale.resolve_hex(99.0).as_deref(), Some("#ff0000"));
}

#[test]
fn json5_config() {
    let text = "{ gender: 'female', hiddenParts: ['hair',], /* trailing */ }";
    let config = RenderConfig::from_str_with_format(text, DocumentFormat::Json5).unwrap();
    assert_eq!(config.gender, Gender::Female);
    assert!(config.is_hidden("hair"));
}

#[test]
fn null_document_is_default_config() {
    let config = RenderConfig::from_str_with_format("~", DocumentFormat::Yaml).unwrap();
    assert_eq!(config, RenderConfig::default());
}

#[test]
fn invalid_custom_scale_falls_back_to_default() {
    let config = RenderConfig::default()
        .with_color_scale(ColorScale::new(Vec::new(), Interpolation::Step));
    assert_eq!(*config.effective_scale(), ColorScale::default());
}

#[test]
fn parse_errors_carry_context() {
    let err = RenderConfig::from_str_with_format("{", DocumentFormat::Json)
        .unwrap_err()
        .to_string();
    assert!(err.starts_with("Invalid JSON (render config)"), "{err}");

    let err = RenderConfig::from_str_with_format("{", DocumentFormat::Json5)
        .unwrap_err()
        .to_string();
    assert!(err.starts_with("Invalid JSON5 (render config)"), "{err}");
}

#[test]
fn document_format_from_extension() {
    assert_eq!(DocumentFormat::from_extension(Some("yaml")), DocumentFormat::Yaml);
    assert_eq!(DocumentFormat::from_extension(Some("YML")), DocumentFormat::Yaml);
    assert_eq!(DocumentFormat::from_extension(Some("json5")), DocumentFormat::Json5);
    assert_eq!(DocumentFormat::from_extension(Some("txt")), DocumentFormat::Json);
    assert_eq!(DocumentFormat::from_extension(None), DocumentFormat::Json);
}

#[test]
fn gender_and_view_parse() {
    assert_eq!(" Female ".parse::<Gender>().unwrap(), Gender::Female);
    assert_eq!("BACK".parse::<View>().unwrap(), View::Back);
    assert!("side".parse::<View>().is_err());
    assert!("x".parse::<Gender>().is_err());
}

#[test]
fn color_literals() {
    assert_eq!("#FFF".parse::<Color>().unwrap(), Color::rgb(255, 255, 255));
    assert_eq!(Color::rgb(9, 132, 227).to_hex(), "#0984e3");
    assert!("fff".parse::<Color>().is_err());
    assert!("#ggg".parse::<Color>().is_err());
    assert!(Color::parse_hex("#éé").is_none());
    assert_eq!(Color::parse_hex(" #0984E3 "), Some(Color::rgb(9, 132, 227)));
    assert!(is_css_color("rgb(1, 2, 3)"));
    for literal in ["red", "rgb(1, 2, 3)", "#f0f8", "#0984e3ff", "#12 4"] {
        assert!(Color::parse_hex(literal).is_none(), "{literal}");
    }
    assert!(is_css_color("rebeccapurple"));
    assert!(!is_css_color("nope"));
}

#[test]
fn asset_library_and_catalog() {
    let text = r##"{
        "male": {
            "front": {
                "viewBox": [0, 0, 100, 200],
                "segments": [
                    { "slug": "chest", "path": { "left": ["M0 0 L1 1"], "right": ["M2 0 L3 1"] } },
                    { "slug": "head", "path": { "common": ["M0 0 L4 0 L2 2 Z"] } }
                ]
            }
        },
        "female": {
            "back": { "segments": [ { "slug": "gluteal", "color": "#010101" } ] }
        }
    }"##;
    let library = AssetLibrary::from_json_str(text).unwrap();
    let front = library.get(Gender::Male, View::Front).unwrap();
    assert_eq!(
        front.view_box,
        Some(ViewBox {
            min_x: 0.0,
            min_y: 0.0,
            width: 100.0,
            height: 200.0
        })
    );
    assert_eq!(front.segments.len(), 2);
    assert!(library.get(Gender::Male, View::Back).is_none());
    let back = library.get(Gender::Female, View::Back).unwrap();
    assert_eq!(back.segments[0].color.as_deref(), Some("#010101"));
    assert!(back.segments[0].path.iter().next().is_none());

    let catalog = SlugCatalog::from_assets(&library);
    assert!(catalog.recognizes("chest-left"));
    assert!(catalog.recognizes("head"));
    assert!(!catalog.recognizes("head-left"));
    assert!(!catalog.recognizes("biceps"));
    assert!(catalog.recognizes("gluteal"));
    assert!(!catalog.recognizes("gluteal-right"));
}

#[test]
fn default_catalog_covers_standard_regions() {
    let catalog = SlugCatalog::default();
    assert_eq!(catalog.known().count(), DEFAULT_SLUGS.len());
    assert!(catalog.recognizes("lower-back-left"));
    assert!(catalog.recognizes("hair"));
    assert!(!catalog.recognizes("hair-right"));
}
