//! Accumulates coordinates for a vector whose final length is not known up front.

use crate::vector::int_vector::Vector;
use num_traits::{PrimInt, Signed};

#[derive(Debug, Clone, Default)]
pub struct VectorBuilder<T> {
    coordinates: Vec<T>,
}

impl<T> VectorBuilder<T>
where
    T: PrimInt + Signed,
{
    pub fn new() -> Self {
        VectorBuilder { coordinates: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        VectorBuilder { coordinates: Vec::with_capacity(capacity) }
    }

    /// Adds one trailing coordinate.
    pub fn push(&mut self, value: T) -> &mut Self {
        self.coordinates.push(value);
        self
    }

    /// Chained form of [`push`](Self::push) for owned builders.
    pub fn with(mut self, value: T) -> Self {
        self.coordinates.push(value);
        self
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Freezes the accumulated coordinates into a vector.
    pub fn build(self) -> Vector<T> {
        Vector::from(self.coordinates)
    }
}

impl<T> From<Vector<T>> for VectorBuilder<T>
where
    T: PrimInt + Signed,
{
    fn from(vector: Vector<T>) -> Self {
        VectorBuilder { coordinates: vector.into_coordinates() }
    }
}
