//! DragMany engine crate.
//!
//! This crate owns the platform + GPU runtime pieces the demo sits on: one
//! `winit` window, a `wgpu` surface, pointer input and a flat shape renderer.

pub mod device;
pub mod window;
pub mod input;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
