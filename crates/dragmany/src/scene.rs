//! Ordered shape collection. Order is paint order: the last shape is on top.

use rand::Rng;

use dragmany_engine::scene::DrawList;

use crate::config::{MAX_SIZE, MIN_SIZE, PANEL_SIZE};
use crate::shape::{Point, Rgb, Shape, ShapeKind};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Generates `count` shapes that each fit on a `PANEL_SIZE` square canvas.
    ///
    /// Per shape: size in `[MIN_SIZE, MAX_SIZE)`, anchor coordinates in
    /// `[0, PANEL_SIZE - size)`, color channels in `[0, 255)`, then a fair
    /// coin for the kind and another for the fill.
    pub fn random<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let shapes = (0..count).map(|_| random_shape(rng)).collect();
        Self { shapes }
    }

    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Shape> {
        self.shapes.get_mut(index)
    }

    /// Index of the topmost shape containing `p`.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        self.shapes.iter().rposition(|s| s.contains(p))
    }

    /// Moves the shape at `index` to the top of the paint order and returns
    /// its new index. Relative order of the other shapes is kept.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn bring_to_front(&mut self, index: usize) -> usize {
        let shape = self.shapes.remove(index);
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Records every shape back-to-front.
    pub fn render(&self, list: &mut DrawList) {
        for shape in &self.shapes {
            shape.render(list);
        }
    }
}

fn random_shape<R: Rng + ?Sized>(rng: &mut R) -> Shape {
    let size = rng.random_range(MIN_SIZE..MAX_SIZE);
    let max_anchor = (PANEL_SIZE - size) as i32;
    let anchor = Point::new(rng.random_range(0..max_anchor), rng.random_range(0..max_anchor));
    let color = Rgb::new(
        rng.random_range(0..255),
        rng.random_range(0..255),
        rng.random_range(0..255),
    );
    let kind = if rng.random_bool(0.5) { ShapeKind::Circle } else { ShapeKind::Square };
    let filled = rng.random_bool(0.5);

    Shape::new(kind, filled, size, anchor, color)
}
