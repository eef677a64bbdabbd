#![forbid(unsafe_code)]

//! Turns merged muscle-map data into draw instructions, and draw instructions into SVG.

pub mod body;
pub mod memo;
pub mod model;
pub mod svg;

use anatomap_core::{Gender, View};

pub use body::{render_body, render_set};
pub use memo::{BucketMemo, render_body_memoized};
pub use model::{BodyDrawing, DrawInstruction, Interaction, PathGroup, PressHandler};
pub use svg::{SvgRenderOptions, render_svg};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no asset set for {gender} {view}")]
    MissingAssetSet { gender: Gender, view: View },
}

pub type Result<T> = std::result::Result<T, Error>;
