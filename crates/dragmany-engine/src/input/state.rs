use std::collections::HashSet;

use crate::coords::Vec2;

use super::types::{
    InputEvent,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for the window.
///
/// Holds "is down" information and the current pointer position.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels.
    ///
    /// Kept after the pointer leaves the window so that a button released
    /// outside still reports where the pointer was last seen.
    pub pointer_pos: Option<Vec2>,

    /// Whether the pointer is currently over the window surface.
    pub hovered: bool,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                // Releases that happen while unfocused are never delivered.
                if !*f {
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { pos }) => {
                self.pointer_pos = Some(*pos);
                self.hovered = true;
            }

            InputEvent::PointerLeft => {
                self.hovered = false;
            }

            InputEvent::PointerButton(PointerButtonEvent { button, state, pos }) => {
                self.pointer_pos = Some(*pos);

                match state {
                    MouseButtonState::Pressed => {
                        self.buttons_down.insert(*button);
                    }
                    MouseButtonState::Released => {
                        self.buttons_down.remove(button);
                    }
                }
            }
        }
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn button(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            pos: Vec2::new(x, y),
        })
    }

    #[test]
    fn press_and_release_track_held_buttons() {
        let mut st = InputState::default();
        st.apply_event(&button(MouseButtonState::Pressed, 1.0, 2.0));
        assert!(st.button_down(MouseButton::Left));
        assert_eq!(st.pointer_pos, Some(Vec2::new(1.0, 2.0)));

        st.apply_event(&button(MouseButtonState::Released, 3.0, 4.0));
        assert!(!st.button_down(MouseButton::Left));
        assert_eq!(st.pointer_pos, Some(Vec2::new(3.0, 4.0)));
    }

    #[test]
    fn pointer_left_keeps_last_position() {
        let mut st = InputState::default();
        st.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { pos: Vec2::new(9.0, 9.0) }));
        assert!(st.hovered);
        st.apply_event(&InputEvent::PointerLeft);
        assert!(!st.hovered);
        assert_eq!(st.pointer_pos, Some(Vec2::new(9.0, 9.0)));
    }

    #[test]
    fn focus_change_is_recorded() {
        let mut st = InputState::default();
        st.apply_event(&InputEvent::Focused(true));
        assert!(st.focused);
    }

    #[test]
    fn focus_loss_releases_held_buttons() {
        let mut st = InputState::default();
        st.apply_event(&InputEvent::Focused(true));
        st.apply_event(&button(MouseButtonState::Pressed, 1.0, 2.0));
        st.apply_event(&InputEvent::Focused(false));
        assert!(!st.focused);
        assert!(!st.button_down(MouseButton::Left));
    }
}
