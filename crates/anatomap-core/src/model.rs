use crate::slug::SideQualifier;
use crate::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(Error::UnknownGender {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Front,
    Back,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            _ => Err(Error::UnknownView {
                value: s.to_string(),
            }),
        }
    }
}

/// Path strings for one region, split into the parts that can be colored independently.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathGroups {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub common: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub left: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub right: Vec<String>,
}

impl PathGroups {
    pub fn is_bilateral(&self) -> bool {
        !self.left.is_empty() || !self.right.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.common
            .iter()
            .chain(&self.left)
            .chain(&self.right)
            .map(String::as_str)
    }
}

/// One pre-drawn anatomical region for a given gender and view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSegment {
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub path: PathGroups,
}

impl AssetSegment {
    pub fn new(slug: impl Into<String>, path: PathGroups) -> Self {
        Self {
            slug: slug.into(),
            color: None,
            path,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<[f64; 4]> for ViewBox {
    fn from([min_x, min_y, width, height]: [f64; 4]) -> Self {
        Self {
            min_x,
            min_y,
            width,
            height,
        }
    }
}

impl From<ViewBox> for [f64; 4] {
    fn from(value: ViewBox) -> Self {
        [value.min_x, value.min_y, value.width, value.height]
    }
}

/// The segments drawn for one `(gender, view)`, in paint order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_box: Option<ViewBox>,
    #[serde(default)]
    pub segments: Vec<AssetSegment>,
}

#[derive(Debug, Default, Deserialize)]
struct GenderDoc {
    front: Option<AssetSet>,
    back: Option<AssetSet>,
}

#[derive(Debug, Default, Deserialize)]
struct LibraryDoc {
    male: Option<GenderDoc>,
    female: Option<GenderDoc>,
}

/// Static path assets for every gender/view combination that the host provides.
///
/// Loaded once and shared by reference across renders.
#[derive(Debug, Clone, Default)]
pub struct AssetLibrary {
    sets: IndexMap<(Gender, View), AssetSet>,
}

impl AssetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_set(mut self, gender: Gender, view: View, set: AssetSet) -> Self {
        self.insert(gender, view, set);
        self
    }

    pub fn insert(&mut self, gender: Gender, view: View, set: AssetSet) {
        self.sets.insert((gender, view), set);
    }

    pub fn get(&self, gender: Gender, view: View) -> Option<&AssetSet> {
        self.sets.get(&(gender, view))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Gender, View, &AssetSet)> {
        self.sets.iter().map(|(&(g, v), set)| (g, v, set))
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Parses `{"male": {"front": {...}, "back": {...}}, "female": {...}}`.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let doc: LibraryDoc = serde_json::from_str(text).map_err(|source| Error::Json {
            context: "asset library",
            source,
        })?;
        Ok(Self::from_doc(doc))
    }

    fn from_doc(doc: LibraryDoc) -> Self {
        let mut out = Self::new();
        for (gender, gender_doc) in [(Gender::Male, doc.male), (Gender::Female, doc.female)] {
            let Some(gender_doc) = gender_doc else {
                continue;
            };
            for (view, set) in [(View::Front, gender_doc.front), (View::Back, gender_doc.back)] {
                if let Some(set) = set {
                    out.insert(gender, view, set);
                }
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub value: f64,
    /// Replaces the scale-derived color when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Progress {
    pub fn new(value: f64) -> Self {
        Self { value, color: None }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// Caller-supplied data for one region (or one side of it).
///
/// The slug may carry a `-left` / `-right` suffix, which takes precedence over `side`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserEntry {
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<Progress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<SideQualifier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<StyleOverrides>,
}

impl UserEntry {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Default::default()
        }
    }

    pub fn with_intensity(mut self, intensity: i64) -> Self {
        self.intensity = Some(intensity);
        self
    }

    pub fn with_progress(mut self, value: f64) -> Self {
        self.progress = Some(Progress::new(value));
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_side(mut self, side: SideQualifier) -> Self {
        self.side = Some(side);
        self
    }

    pub fn with_styles(mut self, styles: StyleOverrides) -> Self {
        self.styles = Some(styles);
        self
    }
}
