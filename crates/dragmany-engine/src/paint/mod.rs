//! Paint model shared between the demo and the renderer.
//!
//! Only solid colors exist; geometry types remain in `coords`.

pub mod color;

pub use color::Color;
