//! Glue between the engine runtime and the drag demo.

use dragmany_engine::core::{App, AppControl, FrameCtx};
use dragmany_engine::input::{
    InputEvent, InputState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};
use dragmany_engine::paint::Color;
use dragmany_engine::render::shapes::ShapeRenderer;
use dragmany_engine::scene::DrawList;

use crate::drag::DragController;
use crate::scene::Scene;
use crate::shape::Point;

/// Panel background, the usual light gray of a desktop widget.
const BACKGROUND: (u8, u8, u8) = (238, 238, 238);

/// Owns the scene and the drag controller for the lifetime of the window.
pub struct DragApp {
    scene:      Scene,
    drag:       DragController,
    draw_list:  DrawList,
    renderer:   ShapeRenderer,
}

impl DragApp {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            drag:      DragController::new(),
            draw_list: DrawList::new(),
            renderer:  ShapeRenderer::new(),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Routes one input event to the drag controller.
    ///
    /// `input` is the state after `event` was applied. Only the primary
    /// button starts, continues or ends a drag; moves count only while it is
    /// held, including outside the window. Losing focus ends the session in
    /// place since the release will not be delivered.
    pub fn handle_input(&mut self, input: &InputState, event: &InputEvent) -> AppControl {
        let changed = match event {
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state,
                pos,
            }) => {
                let p = Point::from_logical(*pos);
                match state {
                    MouseButtonState::Pressed => self.drag.press(&mut self.scene, p),
                    MouseButtonState::Released => self.drag.release(&mut self.scene, p),
                }
            }
            InputEvent::PointerMoved(PointerMoveEvent { pos })
                if input.button_down(MouseButton::Left) =>
            {
                self.drag.drag(&mut self.scene, Point::from_logical(*pos))
            }
            InputEvent::Focused(false) => {
                self.drag.cancel();
                false
            }
            _ => false,
        };

        if changed { AppControl::Redraw } else { AppControl::Continue }
    }
}

impl App for DragApp {
    fn on_input(&mut self, input: &InputState, event: &InputEvent) -> AppControl {
        self.handle_input(input, event)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        self.draw_list.clear();
        self.scene.render(&mut self.draw_list);

        if ctx.frame_index == 0 {
            log::debug!("first frame: {} shapes", self.draw_list.len());
        }

        let (r, g, b) = BACKGROUND;
        let dl = &self.draw_list;
        let renderer = &mut self.renderer;

        ctx.render(Color::from_srgb_u8(r, g, b, 255), |rctx, target| {
            renderer.render(rctx, target, dl);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dragmany_engine::coords::Vec2;

    use crate::shape::{Rgb, Shape, ShapeKind};

    /// Feeds events through an `InputState` the way the runtime does.
    struct Harness {
        app:   DragApp,
        input: InputState,
    }

    impl Harness {
        fn new() -> Self {
            let app = DragApp::new(Scene::from_shapes(vec![
                Shape::new(ShapeKind::Square, true, 40, Point::new(0, 0), Rgb::new(1, 0, 0)),
                Shape::new(ShapeKind::Circle, false, 40, Point::new(100, 100), Rgb::new(2, 0, 0)),
            ]));
            Self { app, input: InputState::default() }
        }

        fn send(&mut self, event: InputEvent) -> AppControl {
            self.input.apply_event(&event);
            self.app.handle_input(&self.input, &event)
        }

        fn scene(&self) -> &Scene {
            self.app.scene()
        }
    }

    fn button(button: MouseButton, state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button, state, pos: Vec2::new(x, y) })
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { pos: Vec2::new(x, y) })
    }

    #[test]
    fn left_drag_moves_shape_and_requests_repaint() {
        let mut h = Harness::new();
        assert_eq!(
            h.send(button(MouseButton::Left, MouseButtonState::Pressed, 10.5, 10.5)),
            AppControl::Redraw
        );
        assert_eq!(h.scene().shapes()[1].color(), Rgb::new(1, 0, 0));

        assert_eq!(h.send(moved(30.2, 15.9)), AppControl::Redraw);
        assert_eq!(
            h.send(button(MouseButton::Left, MouseButtonState::Released, 40.0, 20.0)),
            AppControl::Redraw
        );
        assert_eq!(h.scene().shapes()[1].anchor(), Point::new(30, 10));
    }

    #[test]
    fn hover_without_press_does_not_repaint() {
        let mut h = Harness::new();
        assert_eq!(h.send(moved(10.0, 10.0)), AppControl::Continue);
        assert_eq!(h.send(InputEvent::PointerLeft), AppControl::Continue);
    }

    #[test]
    fn secondary_buttons_are_ignored() {
        let mut h = Harness::new();
        let before = h.scene().clone();
        assert_eq!(
            h.send(button(MouseButton::Right, MouseButtonState::Pressed, 10.0, 10.0)),
            AppControl::Continue
        );
        assert_eq!(h.send(moved(50.0, 50.0)), AppControl::Continue);
        assert_eq!(h.scene(), &before);
    }

    #[test]
    fn press_on_background_does_not_repaint() {
        let mut h = Harness::new();
        assert_eq!(
            h.send(button(MouseButton::Left, MouseButtonState::Pressed, 300.0, 300.0)),
            AppControl::Continue
        );
    }

    #[test]
    fn focus_loss_mid_drag_stops_following_pointer() {
        let mut h = Harness::new();
        h.send(InputEvent::Focused(true));
        h.send(button(MouseButton::Left, MouseButtonState::Pressed, 10.0, 10.0));
        assert_eq!(h.send(moved(12.0, 11.0)), AppControl::Redraw);

        assert_eq!(h.send(InputEvent::Focused(false)), AppControl::Continue);
        assert_eq!(h.send(moved(210.0, 110.0)), AppControl::Continue);
        assert_eq!(h.scene().shapes()[1].anchor(), Point::new(2, 1));
    }

    #[test]
    fn moves_without_held_button_are_ignored_even_mid_session() {
        let mut h = Harness::new();
        h.send(button(MouseButton::Left, MouseButtonState::Pressed, 10.0, 10.0));
        // The release went somewhere else; the platform no longer reports the button.
        h.input.buttons_down.clear();
        assert_eq!(h.send(moved(50.0, 50.0)), AppControl::Continue);
        assert_eq!(h.scene().shapes()[1].anchor(), Point::new(0, 0));
    }
}
