use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::Border;

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub fill: Option<Color>,
    pub border: Option<Border>,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, fill: Option<Color>, border: Option<Border>) -> Self {
        Self { rect, fill, border }
    }
}

impl DrawList {
    /// Records a rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, fill: Option<Color>, border: Option<Border>) {
        self.push(DrawCmd::Rect(RectCmd::new(rect, fill, border)));
    }

    /// Records a solid rectangle draw command.
    #[inline]
    pub fn push_solid_rect(&mut self, rect: Rect, color: Color) {
        self.push_rect(rect, Some(color), None);
    }

    /// Records an outlined rectangle with a transparent interior.
    #[inline]
    pub fn push_stroked_rect(&mut self, rect: Rect, border: Border) {
        self.push_rect(rect, None, Some(border));
    }
}
