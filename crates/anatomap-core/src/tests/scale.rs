use crate::color::Color;
use crate::scale::{ColorScale, ColorStop, Interpolation, clamp_progress};

fn hex(s: &str) -> Color {
    Color::parse_hex(s).unwrap()
}

#[test]
fn default_scale_anchor_colors() {
    let scale = ColorScale::default();
    assert_eq!(scale.resolve_hex(-100.0).as_deref(), Some("#ef4444"));
    assert_eq!(scale.resolve_hex(-50.0).as_deref(), Some("#ef4444"));
    assert_eq!(scale.resolve_hex(0.0).as_deref(), Some("#9ca3af"));
    assert_eq!(scale.resolve_hex(50.0).as_deref(), Some("#22c55e"));
    assert_eq!(scale.resolve_hex(100.0).as_deref(), Some("#22c55e"));
}

#[test]
fn default_scale_interpolates_between_gray_and_green() {
    let scale = ColorScale::default();
    let mid = scale.resolve_hex(25.0).unwrap();
    assert_eq!(mid.len(), 7);
    assert!(mid.starts_with('#'));
    assert!(mid[1..].chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(mid, "#9ca3af");
    assert_ne!(mid, "#22c55e");
    // (156,163,175) -> (34,197,94) at factor 0.5; 134.5 rounds up.
    assert_eq!(mid, "#5fb487");
}

#[test]
fn resolve_clamps_out_of_range_values() {
    let scale = ColorScale::default();
    for v in [-1000.0, -100.5, 100.5, 250.0, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(scale.resolve(v), scale.resolve(clamp_progress(v)));
    }
    assert_eq!(scale.resolve_hex(1e9).as_deref(), Some("#22c55e"));
    assert_eq!(scale.resolve_hex(-1e9).as_deref(), Some("#ef4444"));
}

#[test]
fn nan_resolves_like_zero() {
    let scale = ColorScale::default();
    assert_eq!(scale.resolve(f64::NAN), scale.resolve(0.0));
}

#[test]
fn step_scale_keeps_lower_color_across_interval() {
    let scale = ColorScale::step(vec![
        ColorStop::new(-100.0, hex("#ff0000")),
        ColorStop::new(0.0, hex("#808080")),
        ColorStop::new(100.0, hex("#00ff00")),
    ]);
    assert_eq!(scale.resolve(50.0), scale.resolve(0.0));
    assert_eq!(scale.resolve_hex(99.9).as_deref(), Some("#808080"));
    assert_eq!(scale.resolve_hex(-0.1).as_deref(), Some("#ff0000"));
    assert_eq!(scale.resolve_hex(100.0).as_deref(), Some("#00ff00"));
}

#[test]
fn unsorted_stops_are_sorted_before_lookup() {
    let scale = ColorScale::new(
        vec![
            ColorStop::new(100.0, hex("#ffffff")),
            ColorStop::new(-100.0, hex("#000000")),
        ],
        Interpolation::Linear,
    );
    assert_eq!(scale.resolve_hex(0.0).as_deref(), Some("#808080"));
    assert_eq!(scale.resolve_hex(-100.0).as_deref(), Some("#000000"));
}

#[test]
fn values_outside_partial_scale_use_nearest_end_stop() {
    let scale = ColorScale::new(
        vec![
            ColorStop::new(10.0, hex("#111111")),
            ColorStop::new(20.0, hex("#222222")),
        ],
        Interpolation::Linear,
    );
    assert_eq!(scale.resolve_hex(-50.0).as_deref(), Some("#111111"));
    assert_eq!(scale.resolve_hex(90.0).as_deref(), Some("#222222"));
}

#[test]
fn duplicate_stop_values_do_not_divide_by_zero() {
    let scale = ColorScale::new(
        vec![
            ColorStop::new(-100.0, hex("#000000")),
            ColorStop::new(0.0, hex("#123456")),
            ColorStop::new(0.0, hex("#abcdef")),
            ColorStop::new(100.0, hex("#ffffff")),
        ],
        Interpolation::Linear,
    );
    // Exact match returns the first stop at that value (stable sort).
    assert_eq!(scale.resolve_hex(0.0).as_deref(), Some("#123456"));
    assert!(scale.resolve(50.0).is_some());
}

#[test]
fn empty_and_single_stop_scales_do_not_panic() {
    let empty = ColorScale::new(Vec::new(), Interpolation::Linear);
    assert_eq!(empty.resolve(10.0), None);

    let single = ColorScale::new(vec![ColorStop::new(0.0, hex("#abcdef"))], Interpolation::Step);
    assert_eq!(single.resolve_hex(75.0).as_deref(), Some("#abcdef"));
}

#[test]
fn color_scale_deserializes_from_json() {
    let scale: ColorScale = serde_json::from_value(serde_json::json!({
        "stops": [
            { "value": -100, "color": "#F00" },
            { "value": 100, "color": "#00ff00" }
        ],
        "interpolation": "step"
    }))
    .unwrap();
    assert_eq!(scale.interpolation, Interpolation::Step);
    assert_eq!(scale.stops[0].color, Color::rgb(255, 0, 0));

    let err = serde_json::from_value::<ColorScale>(serde_json::json!({
        "stops": [{ "value": 0, "color": "red" }]
    }))
    .unwrap_err()
    .to_string();
    assert!(err.contains("Invalid color literal: red"), "{err}");
}
