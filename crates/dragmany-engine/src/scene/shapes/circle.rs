use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::Border;

/// Circle draw payload.
///
/// `fill = None` leaves the interior untouched, which together with a border
/// gives an outlined circle.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Option<Color>,
    pub border: Option<Border>,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, fill: Option<Color>, border: Option<Border>) -> Self {
        Self { center, radius, fill, border }
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(
        &mut self,
        center: Vec2,
        radius: f32,
        fill: Option<Color>,
        border: Option<Border>,
    ) {
        self.push(DrawCmd::Circle(CircleCmd::new(center, radius, fill, border)));
    }

    /// Records a solid circle.
    #[inline]
    pub fn push_solid_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push_circle(center, radius, Some(color), None);
    }

    /// Records an outlined circle with a transparent interior.
    #[inline]
    pub fn push_stroked_circle(&mut self, center: Vec2, radius: f32, border: Border) {
        self.push_circle(center, radius, None, Some(border));
    }
}
