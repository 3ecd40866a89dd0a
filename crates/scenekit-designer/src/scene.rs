//! Ordered shape collection.
//!
//! Insertion order is paint order: later shapes paint on top and are
//! hit-tested first.

use crate::model::Shape;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.shapes.len()
    }

    /// Replaces the shape at `index` by value. Returns `false` for an
    /// out-of-range index and leaves the scene untouched.
    pub fn replace(&mut self, index: usize, shape: Shape) -> bool {
        match self.shapes.get_mut(index) {
            Some(slot) => {
                *slot = shape;
                true
            }
            None => false,
        }
    }

    pub fn push(&mut self, shape: Shape) -> usize {
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    /// Shapes in paint order, bottom first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Shape> + ExactSizeIterator {
        self.shapes.iter()
    }

    /// `(index, shape)` pairs, topmost first.
    pub fn iter_topmost(&self) -> impl Iterator<Item = (usize, &Shape)> {
        self.shapes.iter().enumerate().rev()
    }

    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }
}

impl From<Vec<Shape>> for Scene {
    fn from(shapes: Vec<Shape>) -> Self {
        Self::new(shapes)
    }
}

impl FromIterator<Shape> for Scene {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
