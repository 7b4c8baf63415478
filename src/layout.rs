use nalgebra::DMatrix;
use std::ops::{Index, IndexMut};

use crate::viewer::Viewer;

/// How the viewers of a layout are grouped into stacks.
///
/// Layouts are stored row-major: row `i` holds one viewer from every stack,
/// so viewer `i * num_stacks + n` is the `i`-th viewer of stack `n`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StackShape {
    pub num_stacks: usize,
    pub num_per_stack: usize,
}

impl StackShape {
    pub fn new(num_stacks: usize, num_per_stack: usize) -> Self {
        Self { num_stacks, num_per_stack }
    }

    pub fn len(&self) -> usize {
        self.num_stacks * self.num_per_stack
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Axis-aligned box around a set of viewer circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl BoundingBox {
    pub fn area(&self) -> f64 {
        (self.max_x - self.min_x) * (self.max_y - self.min_y)
    }
}

/// An ordered arrangement of viewers, grouped into equal-sized stacks.
///
/// # Fields
///
/// * `viewers` - The viewers in generation order
/// * `shape` - Number of stacks and viewers per stack
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Layout {
    pub viewers: Vec<Viewer>,
    pub shape: StackShape,
}

impl Layout {
    pub fn new(viewers: Vec<Viewer>, shape: StackShape) -> Self {
        debug_assert_eq!(viewers.len(), shape.len());
        Self { viewers, shape }
    }

    pub fn len(&self) -> usize {
        self.viewers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.viewers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Viewer> {
        self.viewers.iter()
    }

    /// Horizontal offset between neighbouring stacks, read off the first two viewers.
    pub fn spacing(&self) -> f64 {
        match self.viewers.as_slice() {
            [first, second, ..] => second.x - first.x,
            _ => 0.0,
        }
    }

    /// Leftmost and rightmost x of the viewers resting on the first row (`y == radius`).
    pub fn first_row_extent(&self, radius: f64) -> Option<(f64, f64)> {
        self.viewers
            .iter()
            .filter(|v| v.y == radius)
            .fold(None, |acc, v| match acc {
                None => Some((v.x, v.x)),
                Some((lo, hi)) => Some((lo.min(v.x), hi.max(v.x))),
            })
    }

    /// Bounding box of all viewer centers, grown by `radius` on every side.
    pub fn bounding_box(&self, radius: f64) -> Option<BoundingBox> {
        let first = self.viewers.first()?;
        let mut bbox = BoundingBox {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        for v in &self.viewers[1..] {
            bbox.min_x = bbox.min_x.min(v.x);
            bbox.max_x = bbox.max_x.max(v.x);
            bbox.min_y = bbox.min_y.min(v.y);
            bbox.max_y = bbox.max_y.max(v.y);
        }
        bbox.min_x -= radius;
        bbox.max_x += radius;
        bbox.min_y -= radius;
        bbox.max_y += radius;
        Some(bbox)
    }

    /// One row per viewer: `x, y, focus_x, focus_y`.
    pub fn as_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.viewers.len(), 4, |i, j| {
            let v = &self.viewers[i];
            match j {
                0 => v.x,
                1 => v.y,
                2 => v.focus_x,
                _ => v.focus_y,
            }
        })
    }
}

impl Index<usize> for Layout {
    type Output = Viewer;

    fn index(&self, index: usize) -> &Viewer {
        &self.viewers[index]
    }
}

impl IndexMut<usize> for Layout {
    fn index_mut(&mut self, index: usize) -> &mut Viewer {
        &mut self.viewers[index]
    }
}
