//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - preserve paint order exactly as recorded (later commands occlude earlier ones)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::Border;
pub use shapes::circle::CircleCmd;
pub use shapes::rect::RectCmd;
