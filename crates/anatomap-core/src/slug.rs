//! Lexical slug parsing.
//!
//! A slug names an anatomical region (`biceps`, `lower-back`, ...). Callers may target one half
//! of a bilateral region by appending `-left` or `-right`; the suffix is only recognized at the
//! very end of the string, so `lower-back` stays a plain slug.

use serde::{Deserialize, Serialize};

const LEFT_SUFFIX: &str = "-left";
const RIGHT_SUFFIX: &str = "-right";

/// One half of a bilateral region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which part of a region an entry applies to. `Both` covers the common paths and both lateral
/// path groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideQualifier {
    Left,
    Right,
    #[default]
    Both,
}

impl SideQualifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Both => "both",
        }
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Self::Left => Some(Side::Left),
            Self::Right => Some(Side::Right),
            Self::Both => None,
        }
    }
}

impl From<Side> for SideQualifier {
    fn from(value: Side) -> Self {
        match value {
            Side::Left => Self::Left,
            Side::Right => Self::Right,
        }
    }
}

impl std::str::FromStr for SideQualifier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "both" => Ok(Self::Both),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedSlug<'a> {
    pub base: &'a str,
    pub side: Option<Side>,
}

/// Splits a trailing `-left` / `-right` off `slug`.
///
/// Any string is accepted, including the empty string. No slug names are special-cased.
pub fn parse_slug(slug: &str) -> ParsedSlug<'_> {
    if let Some(base) = slug.strip_suffix(LEFT_SUFFIX) {
        return ParsedSlug {
            base,
            side: Some(Side::Left),
        };
    }
    if let Some(base) = slug.strip_suffix(RIGHT_SUFFIX) {
        return ParsedSlug {
            base,
            side: Some(Side::Right),
        };
    }
    ParsedSlug { base: slug, side: None }
}
