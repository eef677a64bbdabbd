use anatomap_core::{Gender, MergedSegment, Side, View, ViewBox};
use serde::Serialize;

/// Which path group of a segment an instruction draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathGroup {
    Common,
    Left,
    Right,
}

impl PathGroup {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Self::Common => None,
            Self::Left => Some(Side::Left),
            Self::Right => Some(Side::Right),
        }
    }
}

/// What a press on a drawn path reports back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction<'a> {
    pub segment: MergedSegment<'a>,
    /// `None` for common paths.
    pub side: Option<Side>,
}

/// Receives presses on interactive paths.
///
/// Implemented for any `FnMut(&MergedSegment, Option<Side>)` closure.
pub trait PressHandler<'a> {
    fn on_press(&mut self, segment: &MergedSegment<'a>, side: Option<Side>);
}

impl<'a, F> PressHandler<'a> for F
where
    F: FnMut(&MergedSegment<'a>, Option<Side>),
{
    fn on_press(&mut self, segment: &MergedSegment<'a>, side: Option<Side>) {
        self(segment, side)
    }
}

/// One filled path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawInstruction<'a> {
    pub slug: &'a str,
    pub group: PathGroup,
    pub path: &'a str,
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    /// Absent for disabled regions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction<'a>>,
}

impl<'a> DrawInstruction<'a> {
    pub fn is_interactive(&self) -> bool {
        self.interaction.is_some()
    }

    /// Forwards a press to `handler`. Returns false (and does nothing) for non-interactive
    /// paths.
    pub fn press(&self, handler: &mut impl PressHandler<'a>) -> bool {
        let Some(interaction) = &self.interaction else {
            return false;
        };
        handler.on_press(&interaction.segment, interaction.side);
        true
    }
}

/// Everything needed to paint one body view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyDrawing<'a> {
    pub gender: Gender,
    pub view: View,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_box: Option<ViewBox>,
    pub instructions: Vec<DrawInstruction<'a>>,
}

impl<'a> BodyDrawing<'a> {
    pub fn instructions_for<'s>(
        &'s self,
        slug: &'s str,
    ) -> impl Iterator<Item = &'s DrawInstruction<'a>> + 's {
        self.instructions.iter().filter(move |i| i.slug == slug)
    }

    pub fn contains_slug(&self, slug: &str) -> bool {
        self.instructions.iter().any(|i| i.slug == slug)
    }
}
