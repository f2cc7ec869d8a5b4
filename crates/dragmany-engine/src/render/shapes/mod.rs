//! Shape renderers.

mod common;
mod shape;

pub use shape::ShapeRenderer;
