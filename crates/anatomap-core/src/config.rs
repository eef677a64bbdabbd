use crate::model::{Gender, View};
use crate::scale::ColorScale;
use crate::validate::{DiagnosticsMode, validate_color_scale};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;

pub const DEFAULT_PALETTE: &[&str] = &["#0984e3", "#74b9ff"];
pub const DEFAULT_FILL: &str = "#3f3f3f";
pub const DEFAULT_BORDER: &str = "#dfdfdf";
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
pub const DISABLED_COLOR: &str = "#ebebe4";
pub const HAIR_COLOR: &str = "#dfdfdf";
pub const SKIN_COLOR: &str = "#f1c27d";

/// Fixed colors for regions that never take caller data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegionColors {
    pub disabled: String,
    pub hair: String,
    pub skin: String,
}

impl Default for RegionColors {
    fn default() -> Self {
        Self {
            disabled: DISABLED_COLOR.to_string(),
            hair: HAIR_COLOR.to_string(),
            skin: SKIN_COLOR.to_string(),
        }
    }
}

/// Per-call render configuration.
///
/// Every field has a default, so partial JSON/YAML documents are accepted. The caller owns this
/// value and passes it to each render; nothing here is global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    pub gender: Gender,
    pub view: View,
    /// Intensity palette; intensity `n` selects `colors[n - 1]`.
    pub colors: Vec<String>,
    pub color_scale: Option<ColorScale>,
    pub disabled_parts: Vec<String>,
    pub hidden_parts: Vec<String>,
    pub default_fill: String,
    pub border: String,
    pub default_stroke_width: f64,
    pub region_colors: RegionColors,
    pub diagnostics: DiagnosticsMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            gender: Gender::default(),
            view: View::default(),
            colors: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            color_scale: None,
            disabled_parts: Vec::new(),
            hidden_parts: Vec::new(),
            default_fill: DEFAULT_FILL.to_string(),
            border: DEFAULT_BORDER.to_string(),
            default_stroke_width: DEFAULT_STROKE_WIDTH,
            region_colors: RegionColors::default(),
            diagnostics: DiagnosticsMode::default(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_view(mut self, view: View) -> Self {
        self.view = view;
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_color_scale(mut self, scale: ColorScale) -> Self {
        self.color_scale = Some(scale);
        self
    }

    pub fn with_disabled<I, S>(mut self, slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled_parts = slugs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_hidden<I, S>(mut self, slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hidden_parts = slugs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_diagnostics(mut self, mode: DiagnosticsMode) -> Self {
        self.diagnostics = mode;
        self
    }

    /// Highest valid intensity for the configured palette.
    pub fn intensity_ceiling(&self) -> usize {
        self.colors.len()
    }

    pub fn is_disabled(&self, slug: &str) -> bool {
        self.disabled_parts.iter().any(|s| s == slug)
    }

    pub fn is_hidden(&self, slug: &str) -> bool {
        self.hidden_parts.iter().any(|s| s == slug)
    }

    /// The caller's scale when it passes validation, otherwise the built-in scale.
    pub fn effective_scale(&self) -> Cow<'_, ColorScale> {
        match &self.color_scale {
            Some(scale) if validate_color_scale(scale).valid => Cow::Borrowed(scale),
            _ => Cow::Owned(ColorScale::default()),
        }
    }

    pub fn from_value(value: Value) -> Result<Self> {
        // An empty YAML document parses to `null`.
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(|source| Error::Json {
            context: "render config",
            source,
        })
    }

    pub fn from_str_with_format(text: &str, format: DocumentFormat) -> Result<Self> {
        Self::from_value(format.parse_value(text, "render config")?)
    }
}

/// Text formats accepted for configuration and entry documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
    Json5,
}

impl DocumentFormat {
    /// Picks a format from a file extension; unknown extensions are read as JSON.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext.map(str::to_ascii_lowercase).as_deref() {
            Some("yaml" | "yml") => Self::Yaml,
            Some("json5") => Self::Json5,
            _ => Self::Json,
        }
    }

    pub fn parse_value(self, text: &str, context: &'static str) -> Result<Value> {
        match self {
            Self::Json => {
                serde_json::from_str(text).map_err(|source| Error::Json { context, source })
            }
            Self::Yaml => {
                serde_yaml::from_str(text).map_err(|source| Error::Yaml { context, source })
            }
            Self::Json5 => json5::from_str(text).map_err(|err| Error::Json5 {
                context,
                message: err.to_string(),
            }),
        }
    }
}
