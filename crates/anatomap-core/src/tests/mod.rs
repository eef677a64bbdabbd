use crate::model::{AssetSegment, PathGroups};

mod config;
mod scale;

fn bilateral_segment(slug: &str) -> AssetSegment {
    AssetSegment::new(
        slug,
        PathGroups {
            common: Vec::new(),
            left: vec![format!("M0 0 L1 1 Z /* {slug} left */")],
            right: vec![format!("M2 0 L3 1 Z /* {slug} right */")],
        },
    )
}

fn midline_segment(slug: &str) -> AssetSegment {
    AssetSegment::new(
        slug,
        PathGroups {
            common: vec!["M0 0 L4 0 L2 2 Z".to_string()],
            left: Vec::new(),
            right: Vec::new(),
        },
    )
}
