//! Progress → color mapping.
//!
//! A [`ColorScale`] is an unordered list of `(value, color)` stops over `[-100, 100]`. Values are
//! clamped, the bracketing stop pair is located, and the color is either the lower stop's
//! (`step`) or a per-channel RGB blend (`linear`).

use crate::color::Color;
use serde::{Deserialize, Serialize};

pub const PROGRESS_MIN: f64 = -100.0;
pub const PROGRESS_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub value: f64,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(value: f64, color: Color) -> Self {
        Self { value, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    #[default]
    Linear,
    Step,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    pub stops: Vec<ColorStop>,
    #[serde(default)]
    pub interpolation: Interpolation,
}

pub const RED_500: Color = Color::rgb(0xef, 0x44, 0x44);
pub const GRAY_400: Color = Color::rgb(0x9c, 0xa3, 0xaf);
pub const GREEN_500: Color = Color::rgb(0x22, 0xc5, 0x5e);

impl Default for ColorScale {
    /// Red for regressions, gray around zero, green for gains.
    fn default() -> Self {
        Self {
            stops: vec![
                ColorStop::new(-100.0, RED_500),
                ColorStop::new(-50.0, RED_500),
                ColorStop::new(0.0, GRAY_400),
                ColorStop::new(50.0, GREEN_500),
                ColorStop::new(100.0, GREEN_500),
            ],
            interpolation: Interpolation::Linear,
        }
    }
}

/// Clamps a progress value into `[-100, 100]`. NaN maps to 0.
pub fn clamp_progress(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(PROGRESS_MIN, PROGRESS_MAX)
}

impl ColorScale {
    pub fn new(stops: Vec<ColorStop>, interpolation: Interpolation) -> Self {
        Self {
            stops,
            interpolation,
        }
    }

    pub fn step(stops: Vec<ColorStop>) -> Self {
        Self::new(stops, Interpolation::Step)
    }

    /// Stops in ascending value order. The sort is stable, so equal values keep caller order.
    pub fn sorted_stops(&self) -> Vec<ColorStop> {
        let mut stops = self.stops.clone();
        stops.sort_by(|a, b| a.value.total_cmp(&b.value));
        stops
    }

    /// Resolves `value` to a color.
    ///
    /// The scale is assumed to have been validated at the boundary (see
    /// [`crate::validate::validate_color_scale`]); an empty scale yields `None` and a single
    /// stop always yields that stop's color.
    pub fn resolve(&self, value: f64) -> Option<Color> {
        let value = clamp_progress(value);
        let stops = self.sorted_stops();
        let first = stops.first()?;
        let last = stops.last()?;

        if let Some(exact) = stops.iter().find(|s| s.value == value) {
            return Some(exact.color);
        }
        if value <= first.value {
            return Some(first.color);
        }
        if value >= last.value {
            return Some(last.color);
        }

        let (lower, upper) = stops
            .windows(2)
            .map(|w| (w[0], w[1]))
            .find(|(lo, hi)| lo.value <= value && value <= hi.value)?;

        match self.interpolation {
            Interpolation::Step => Some(lower.color),
            Interpolation::Linear => {
                let span = upper.value - lower.value;
                if span == 0.0 {
                    return Some(lower.color);
                }
                let factor = (value - lower.value) / span;
                Some(lower.color.lerp(upper.color, factor))
            }
        }
    }

    /// Convenience wrapper returning the `#rrggbb` string.
    pub fn resolve_hex(&self, value: f64) -> Option<String> {
        self.resolve(value).map(Color::to_hex)
    }
}
