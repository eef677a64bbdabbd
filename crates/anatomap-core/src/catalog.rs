use crate::model::AssetLibrary;
use crate::slug::parse_slug;
use indexmap::IndexSet;

/// Regions shipped by the standard male/female front/back asset sets.
pub const DEFAULT_SLUGS: &[&str] = &[
    "abs",
    "adductors",
    "ankles",
    "biceps",
    "calves",
    "chest",
    "deltoids",
    "feet",
    "forearm",
    "gluteal",
    "hair",
    "hamstring",
    "hands",
    "head",
    "knees",
    "lower-back",
    "neck",
    "obliques",
    "quadriceps",
    "tibialis",
    "trapezius",
    "triceps",
    "upper-back",
];

/// Regions drawn as a single shape with no left/right split.
const MIDLINE_SLUGS: &[&str] = &["hair", "head"];

pub const HAIR_SLUG: &str = "hair";

/// Non-muscle regions painted with the skin color. Hair has its own color and is not listed.
pub const SKIN_SLUGS: &[&str] = &["hands", "feet", "head"];

pub fn is_hair(slug: &str) -> bool {
    slug == HAIR_SLUG
}

pub fn is_skin(slug: &str) -> bool {
    SKIN_SLUGS.contains(&slug)
}

/// The identifiers accepted by validation.
#[derive(Debug, Clone)]
pub struct SlugCatalog {
    known: IndexSet<String>,
    bilateral: IndexSet<String>,
}

impl Default for SlugCatalog {
    fn default() -> Self {
        let known: IndexSet<String> = DEFAULT_SLUGS.iter().map(|s| s.to_string()).collect();
        let bilateral = known
            .iter()
            .filter(|s| !MIDLINE_SLUGS.contains(&s.as_str()))
            .cloned()
            .collect();
        Self { known, bilateral }
    }
}

impl SlugCatalog {
    /// Derives the catalog from loaded assets: every segment slug is known, and a slug is
    /// bilateral when any of its segments carries a left or right path group.
    pub fn from_assets(library: &AssetLibrary) -> Self {
        let mut known = IndexSet::new();
        let mut bilateral = IndexSet::new();
        for (_, _, set) in library.iter() {
            for segment in &set.segments {
                known.insert(segment.slug.clone());
                if segment.path.is_bilateral() {
                    bilateral.insert(segment.slug.clone());
                }
            }
        }
        Self { known, bilateral }
    }

    pub fn is_known(&self, base: &str) -> bool {
        self.known.contains(base)
    }

    pub fn is_bilateral(&self, base: &str) -> bool {
        self.bilateral.contains(base)
    }

    /// A plain known slug, or a side-suffixed form of a bilateral one.
    pub fn recognizes(&self, slug: &str) -> bool {
        if self.is_known(slug) {
            return true;
        }
        let parsed = parse_slug(slug);
        parsed.side.is_some() && self.is_bilateral(parsed.base)
    }

    pub fn known(&self) -> impl Iterator<Item = &str> {
        self.known.iter().map(String::as_str)
    }
}
