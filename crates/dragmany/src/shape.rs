//! A single draggable shape.

use dragmany_engine::coords::{Rect, Vec2};
use dragmany_engine::paint::Color;
use dragmany_engine::scene::{Border, DrawList};

/// Outline thickness for unfilled shapes, in logical pixels.
const OUTLINE_WIDTH: f32 = 1.0;

/// Integer pixel coordinate.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Snaps a logical pointer position to the pixel under it.
    #[inline]
    pub fn from_logical(pos: Vec2) -> Self {
        let (x, y) = pos.to_pixel();
        Self { x, y }
    }

    /// Per-axis offset from `from` to `self`, wrapping on overflow like the
    /// anchor arithmetic in [`Shape::translate`].
    #[inline]
    pub fn delta(self, from: Point) -> (i32, i32) {
        (self.x.wrapping_sub(from.x), self.y.wrapping_sub(from.y))
    }
}

/// sRGB byte triple.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn to_color(self) -> Color {
        Color::from_srgb_u8(self.r, self.g, self.b, 255)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
}

/// One shape on the canvas.
///
/// Everything except the anchor is fixed at construction. The anchor is the
/// top-left corner of the `size × size` bounding box and is never clamped, so
/// a shape may be dragged partly or fully off the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    filled: bool,
    size: u32,
    anchor: Point,
    color: Rgb,
}

impl Shape {
    /// Creates a shape. `size` must be positive.
    pub fn new(kind: ShapeKind, filled: bool, size: u32, anchor: Point, color: Rgb) -> Self {
        debug_assert!(size > 0, "shape size must be positive");
        Self { kind, filled, size, anchor, color }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Moves the shape by a relative offset. No bounds checking.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.anchor.x = self.anchor.x.wrapping_add(dx);
        self.anchor.y = self.anchor.y.wrapping_add(dy);
    }

    /// Hit test.
    ///
    /// Circles use the integer-halved size for both the center offset and the
    /// radius, so odd sizes get a hit area slightly smaller than the drawn
    /// circle. Squares include both edges: `[x, x + size]` on each axis.
    pub fn contains(&self, p: Point) -> bool {
        let x = i64::from(self.anchor.x);
        let y = i64::from(self.anchor.y);
        let size = i64::from(self.size);
        let (px, py) = (i64::from(p.x), i64::from(p.y));

        match self.kind {
            ShapeKind::Circle => {
                let r = size / 2;
                let dx = px - (x + r);
                let dy = py - (y + r);
                dx * dx + dy * dy <= r * r
            }
            ShapeKind::Square => px >= x && px <= x + size && py >= y && py <= y + size,
        }
    }

    /// Records this shape into `list`, on top of anything already there.
    pub fn render(&self, list: &mut DrawList) {
        let color = self.color.to_color();
        let origin = Vec2::new(self.anchor.x as f32, self.anchor.y as f32);
        let edge = self.size as f32;

        match (self.kind, self.filled) {
            (ShapeKind::Circle, filled) => {
                let radius = edge * 0.5;
                let center = origin + Vec2::splat(radius);
                if filled {
                    list.push_solid_circle(center, radius, color);
                } else {
                    list.push_stroked_circle(center, radius, Border::new(OUTLINE_WIDTH, color));
                }
            }
            (ShapeKind::Square, true) => list.push_solid_rect(Rect::square(origin, edge), color),
            (ShapeKind::Square, false) => {
                list.push_stroked_rect(Rect::square(origin, edge), Border::new(OUTLINE_WIDTH, color))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragmany_engine::scene::DrawCmd;

    fn circle(x: i32, y: i32, size: u32) -> Shape {
        Shape::new(ShapeKind::Circle, true, size, Point::new(x, y), Rgb::new(10, 20, 30))
    }

    fn square(x: i32, y: i32, size: u32) -> Shape {
        Shape::new(ShapeKind::Square, false, size, Point::new(x, y), Rgb::new(10, 20, 30))
    }

    // ── contains: circle ──────────────────────────────────────────────────

    #[test]
    fn circle_contains_its_center() {
        for size in 25..100 {
            let s = circle(-7, 300, size);
            let half = size as i32 / 2;
            assert!(s.contains(Point::new(-7 + half, 300 + half)), "size {size}");
        }
    }

    #[test]
    fn circle_boundary_is_inclusive() {
        // size 50: center (25, 25), radius 25.
        let s = circle(0, 0, 50);
        assert!(s.contains(Point::new(50, 25)));
        assert!(s.contains(Point::new(25, 0)));
        assert!(!s.contains(Point::new(51, 25)));
    }

    #[test]
    fn circle_corner_of_bounding_box_is_outside() {
        let s = circle(0, 0, 50);
        assert!(!s.contains(Point::new(0, 0)));
        assert!(!s.contains(Point::new(50, 50)));
    }

    #[test]
    fn circle_odd_size_uses_integer_halves() {
        // size 51: center (25, 25), radius 25, not 25.5.
        let s = circle(0, 0, 51);
        assert!(s.contains(Point::new(50, 25)));
        assert!(!s.contains(Point::new(51, 25)));
        // (43, 43) is 25.46 px from the center: outside radius 25 even though
        // a true 25.5-radius circle around (25.5, 25.5) would include it.
        assert!(!s.contains(Point::new(43, 43)));
    }

    #[test]
    fn circle_far_off_canvas_does_not_overflow() {
        let s = circle(i32::MAX - 10, i32::MIN + 10, 99);
        assert!(!s.contains(Point::new(0, 0)));
    }

    // ── contains: square ──────────────────────────────────────────────────

    #[test]
    fn square_edges_are_inclusive() {
        let s = square(10, 20, 30);
        assert!(s.contains(Point::new(10, 20)));
        assert!(s.contains(Point::new(40, 50)));
        assert!(s.contains(Point::new(25, 35)));
    }

    #[test]
    fn square_rejects_points_just_outside() {
        let s = square(10, 20, 30);
        assert!(!s.contains(Point::new(9, 30)));
        assert!(!s.contains(Point::new(41, 30)));
        assert!(!s.contains(Point::new(20, 19)));
        assert!(!s.contains(Point::new(20, 51)));
    }

    // ── translate ─────────────────────────────────────────────────────────

    #[test]
    fn translate_round_trip_restores_anchor() {
        let mut s = square(100, 200, 40);
        s.translate(-350, 17);
        assert_eq!(s.anchor(), Point::new(-250, 217));
        s.translate(350, -17);
        assert_eq!(s.anchor(), Point::new(100, 200));
    }

    #[test]
    fn translate_by_zero_is_noop() {
        let mut s = circle(3, 4, 30);
        let before = s.clone();
        s.translate(0, 0);
        assert_eq!(s, before);
    }

    #[test]
    fn translate_moves_hit_area_with_it() {
        let mut s = square(0, 0, 10);
        s.translate(100, 0);
        assert!(!s.contains(Point::new(5, 5)));
        assert!(s.contains(Point::new(105, 5)));
    }

    #[test]
    fn anchor_is_copied_not_aliased() {
        let mut p = Point::new(1, 2);
        let s = Shape::new(ShapeKind::Square, true, 30, p, Rgb::default());
        p.x = 99;
        assert_eq!(s.anchor(), Point::new(1, 2));
        assert_eq!(p.x, 99);
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn filled_circle_renders_inscribed_solid_circle() {
        let mut list = DrawList::new();
        circle(10, 20, 50).render(&mut list);
        let DrawCmd::Circle(cmd) = &list.items()[0] else { panic!("expected circle") };
        assert_eq!(cmd.center, Vec2::new(35.0, 45.0));
        assert_eq!(cmd.radius, 25.0);
        assert!(cmd.fill.is_some());
        assert!(cmd.border.is_none());
    }

    #[test]
    fn outlined_square_renders_border_only() {
        let mut list = DrawList::new();
        square(-5, 5, 40).render(&mut list);
        let DrawCmd::Rect(cmd) = &list.items()[0] else { panic!("expected rect") };
        assert_eq!(cmd.rect, Rect::new(-5.0, 5.0, 40.0, 40.0));
        assert!(cmd.fill.is_none());
        assert_eq!(cmd.border.map(|b| b.width), Some(OUTLINE_WIDTH));
    }

    #[test]
    fn point_delta() {
        assert_eq!(Point::new(10, 5).delta(Point::new(3, 9)), (7, -4));
    }

    #[test]
    fn point_from_logical_floors() {
        assert_eq!(Point::from_logical(Vec2::new(12.7, -0.2)), Point::new(12, -1));
    }
}
