//! DragMany: drag any one of many random circles and squares.
//!
//! The model (`shape`, `scene`, `drag`) is independent of the window; `app`
//! plugs it into the `dragmany-engine` runtime.

pub mod app;
pub mod cli;
pub mod config;
pub mod drag;
pub mod scene;
pub mod shape;

pub use app::DragApp;
pub use config::DemoConfig;
pub use drag::DragController;
pub use scene::Scene;
pub use shape::{Point, Rgb, Shape, ShapeKind};
