//! Per-axis value pairs.

use std::ops::{Index, IndexMut};

/// One of the two layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Horizontal,
    Vertical,
}

impl Dimension {
    pub const ALL: [Dimension; 2] = [Dimension::Horizontal, Dimension::Vertical];
}

/// A value for each axis, indexable by [`Dimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BothDim<T> {
    pub horizontal: T,
    pub vertical: T,
}

impl<T> BothDim<T> {
    pub fn new(horizontal: T, vertical: T) -> Self {
        BothDim {
            horizontal,
            vertical,
        }
    }
}

impl<T: Copy> BothDim<T> {
    pub fn splat(value: T) -> Self {
        BothDim::new(value, value)
    }
}

impl<T> Index<Dimension> for BothDim<T> {
    type Output = T;

    fn index(&self, dim: Dimension) -> &T {
        match dim {
            Dimension::Horizontal => &self.horizontal,
            Dimension::Vertical => &self.vertical,
        }
    }
}

impl<T> IndexMut<Dimension> for BothDim<T> {
    fn index_mut(&mut self, dim: Dimension) -> &mut T {
        match dim {
            Dimension::Horizontal => &mut self.horizontal,
            Dimension::Vertical => &mut self.vertical,
        }
    }
}
