use crate::input::{InputEvent, InputState};

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    /// Nothing visible changed.
    Continue,
    /// State changed; schedule a repaint of the window.
    Redraw,
    Exit,
}

/// Application contract implemented by the demo.
///
/// The runtime never redraws on its own beyond window creation and resizes;
/// returning [`AppControl::Redraw`] is how an app asks for a new frame.
pub trait App {
    /// Called for every translated input event, after `input` has been updated.
    fn on_input(&mut self, input: &InputState, event: &InputEvent) -> AppControl {
        let _ = (input, event);
        AppControl::Continue
    }

    /// Called once per requested frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
