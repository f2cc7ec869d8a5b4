//! Pointer-driven drag state machine.

use crate::scene::Scene;
use crate::shape::Point;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Index of the dragged shape in the scene.
        index: usize,
        /// Pointer position at the last press/move.
        last: Point,
    },
}

/// Moves one shape at a time in response to press / move / release.
///
/// The controller does not own the scene; the caller lends it on every event.
/// Each method returns `true` when the scene changed and needs repainting.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Index of the shape being dragged, if any.
    pub fn dragged_index(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { index, .. } => Some(index),
            DragState::Idle => None,
        }
    }

    /// Starts a drag on the topmost shape under `p` and promotes it to the top
    /// of the paint order. A press on empty canvas ends any session.
    pub fn press(&mut self, scene: &mut Scene, p: Point) -> bool {
        self.state = DragState::Idle;

        let Some(hit) = scene.hit_test(p) else {
            log::debug!("press at ({}, {}) hit nothing", p.x, p.y);
            return false;
        };

        let index = scene.bring_to_front(hit);
        log::debug!("press at ({}, {}) picked shape {hit}, now on top", p.x, p.y);

        self.state = DragState::Dragging { index, last: p };
        true
    }

    /// Moves the dragged shape by the pointer delta since the last event.
    pub fn drag(&mut self, scene: &mut Scene, p: Point) -> bool {
        let DragState::Dragging { index, last } = self.state else {
            return false;
        };

        translate(scene, index, p.delta(last));
        self.state = DragState::Dragging { index, last: p };
        true
    }

    /// Applies the final delta and ends the session.
    pub fn release(&mut self, scene: &mut Scene, p: Point) -> bool {
        let DragState::Dragging { index, last } = self.state else {
            return false;
        };

        translate(scene, index, p.delta(last));
        self.state = DragState::Idle;

        if let Some(shape) = scene.get(index) {
            let a = shape.anchor();
            log::debug!("released shape {index} at ({}, {})", a.x, a.y);
        }
        true
    }

    /// Ends the session without moving anything, e.g. when the release will
    /// never arrive because the window lost focus.
    pub fn cancel(&mut self) {
        if let DragState::Dragging { index, .. } = self.state {
            log::debug!("drag of shape {index} cancelled");
        }
        self.state = DragState::Idle;
    }
}

fn translate(scene: &mut Scene, index: usize, (dx, dy): (i32, i32)) {
    log::trace!("drag shape {index} by ({dx}, {dy})");
    if let Some(shape) = scene.get_mut(index) {
        shape.translate(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{Rgb, Shape, ShapeKind};

    fn square(x: i32, y: i32, size: u32, tag: u8) -> Shape {
        Shape::new(ShapeKind::Square, true, size, Point::new(x, y), Rgb::new(tag, 0, 0))
    }

    fn two_overlapping() -> Scene {
        Scene::from_shapes(vec![square(0, 0, 50, 1), square(25, 25, 50, 2)])
    }

    fn tags(scene: &Scene) -> Vec<u8> {
        scene.shapes().iter().map(|s| s.color().r).collect()
    }

    #[test]
    fn press_on_overlap_selects_topmost() {
        let mut scene = two_overlapping();
        let mut ctl = DragController::new();
        assert!(ctl.press(&mut scene, Point::new(30, 30)));
        assert_eq!(ctl.dragged_index(), Some(1));
        assert_eq!(tags(&scene), [1, 2]);
    }

    #[test]
    fn press_promotes_hit_shape_to_end() {
        let mut scene = two_overlapping();
        let mut ctl = DragController::new();
        assert!(ctl.press(&mut scene, Point::new(5, 5)));
        assert_eq!(tags(&scene), [2, 1]);
        assert_eq!(ctl.dragged_index(), Some(scene.len() - 1));
    }

    #[test]
    fn press_on_empty_space_changes_nothing() {
        let mut scene = two_overlapping();
        let before = scene.clone();
        let mut ctl = DragController::new();

        assert!(!ctl.press(&mut scene, Point::new(500, 500)));
        assert!(!ctl.is_dragging());
        assert!(!ctl.drag(&mut scene, Point::new(10, 10)));
        assert!(!ctl.release(&mut scene, Point::new(20, 20)));
        assert_eq!(scene, before);
    }

    #[test]
    fn drag_translates_by_relative_delta() {
        let mut scene = two_overlapping();
        let mut ctl = DragController::new();
        ctl.press(&mut scene, Point::new(5, 5));

        assert!(ctl.drag(&mut scene, Point::new(15, 8)));
        assert_eq!(scene.shapes()[1].anchor(), Point::new(10, 3));

        assert!(ctl.drag(&mut scene, Point::new(12, 8)));
        assert_eq!(scene.shapes()[1].anchor(), Point::new(7, 3));
        assert!(ctl.is_dragging());
    }

    #[test]
    fn release_applies_final_delta_and_ends_session() {
        let mut scene = two_overlapping();
        let mut ctl = DragController::new();
        ctl.press(&mut scene, Point::new(5, 5));
        ctl.drag(&mut scene, Point::new(6, 6));

        assert!(ctl.release(&mut scene, Point::new(16, 1)));
        assert_eq!(scene.shapes()[1].anchor(), Point::new(11, -4));
        assert!(!ctl.is_dragging());

        // Later movement without a press is ignored.
        assert!(!ctl.drag(&mut scene, Point::new(100, 100)));
        assert_eq!(scene.shapes()[1].anchor(), Point::new(11, -4));
    }

    #[test]
    fn click_without_movement_leaves_anchor_in_place() {
        let mut scene = two_overlapping();
        let mut ctl = DragController::new();
        ctl.press(&mut scene, Point::new(60, 60));
        ctl.release(&mut scene, Point::new(60, 60));
        assert_eq!(scene.shapes()[1].anchor(), Point::new(25, 25));
    }

    #[test]
    fn cancel_keeps_position_and_ignores_later_moves() {
        let mut scene = two_overlapping();
        let mut ctl = DragController::new();
        ctl.press(&mut scene, Point::new(5, 5));
        ctl.drag(&mut scene, Point::new(8, 9));
        ctl.cancel();

        assert!(!ctl.is_dragging());
        assert!(!ctl.drag(&mut scene, Point::new(300, 300)));
        assert!(!ctl.release(&mut scene, Point::new(300, 300)));
        assert_eq!(scene.shapes()[1].anchor(), Point::new(3, 4));
    }

    #[test]
    fn drag_may_leave_the_canvas() {
        let mut scene = Scene::from_shapes(vec![square(10, 10, 30, 1)]);
        let mut ctl = DragController::new();
        ctl.press(&mut scene, Point::new(20, 20));
        ctl.drag(&mut scene, Point::new(-500, 900));
        assert_eq!(scene.shapes()[0].anchor(), Point::new(-510, 890));
    }

    #[test]
    fn press_elsewhere_restarts_session_on_new_shape() {
        let mut scene = Scene::from_shapes(vec![square(0, 0, 20, 1), square(100, 100, 20, 2)]);
        let mut ctl = DragController::new();
        ctl.press(&mut scene, Point::new(110, 110));
        ctl.press(&mut scene, Point::new(5, 5));
        assert_eq!(tags(&scene), [2, 1]);
        ctl.drag(&mut scene, Point::new(6, 5));
        assert_eq!(scene.shapes()[1].anchor(), Point::new(1, 0));
        assert_eq!(scene.shapes()[0].anchor(), Point::new(100, 100));
    }
}
