//! Integer coordinate vectors used as training points, queries and weights.

use crate::error::{PerceptronError, Result};
use crate::vector::builder::VectorBuilder;
use num_traits::{PrimInt, Signed};
use std::fmt;

/// An ordered sequence of signed integer coordinates.
///
/// Vectors are values: `add`, `subtract` and `append` hand back a new vector
/// and leave their operands untouched. Combining two vectors requires equal
/// dimensionality, otherwise [`PerceptronError::DimensionMismatch`] is returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector<T> {
    coordinates: Vec<T>,
}

/// The concrete vector type used by the bindings and most callers.
pub type IntVector = Vector<i64>;

impl<T> Vector<T>
where
    T: PrimInt + Signed,
{
    /// Creates a vector from an explicit list of coordinates.
    pub fn of(coordinates: &[T]) -> Self {
        Vector { coordinates: coordinates.to_vec() }
    }

    /// Builds one vector per row, in input order.
    ///
    /// ```
    /// use perceptron_learning::IntVector;
    ///
    /// let list = IntVector::list_of(&[[1, 0], [0, 1], [1, 1], [0, 0]]);
    /// assert_eq!(perceptron_learning::vector::render_list(&list), "[(1,0), (0,1), (1,1), (0,0)]");
    /// ```
    pub fn list_of<R: AsRef<[T]>>(rows: &[R]) -> Vec<Self> {
        rows.iter().map(|row| Self::of(row.as_ref())).collect()
    }

    /// Returns a vector of size `n` with every coordinate equal to `value`.
    pub fn constant(n: usize, value: T) -> Self {
        Vector { coordinates: vec![value; n] }
    }

    /// Dimensionality of the vector.
    pub fn size(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn coordinates(&self) -> &[T] {
        &self.coordinates
    }

    pub fn get(&self, index: usize) -> Option<T> {
        self.coordinates.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.coordinates.iter().copied()
    }

    /// Returns a new vector with `value` appended as the trailing coordinate.
    ///
    /// Consumes `self`, so a vector can never be observed at both its old and
    /// new dimensionality.
    pub fn append(self, value: T) -> Self {
        VectorBuilder::from(self).with(value).build()
    }

    /// Element-wise sum.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference `self - other`.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Sum of element-wise products. Overflow is not checked beyond `T`'s width.
    pub fn dot_product(&self, other: &Self) -> Result<T> {
        self.check_dimensions(other)?;
        // plain integer arithmetic, wraps or panics on overflow like `T` does
        Ok(self
            .iter()
            .zip(other.iter())
            .fold(T::zero(), |acc, (a, b)| acc + a * b))
    }

    // Shared body of `add` and `subtract`
    fn zip_with(&self, other: &Self, op: impl Fn(T, T) -> T) -> Result<Self> {
        self.check_dimensions(other)?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| op(a, b)).collect())
    }

    fn check_dimensions(&self, other: &Self) -> Result<()> {
        if self.size() != other.size() {
            return Err(PerceptronError::DimensionMismatch {
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(())
    }

    pub(crate) fn into_coordinates(self) -> Vec<T> {
        self.coordinates
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(coordinates: Vec<T>) -> Self {
        Vector { coordinates }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector { coordinates: iter.into_iter().collect() }
    }
}

/// Renders as `(c0,c1,...,cn-1)` with no whitespace.
impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", c)?;
        }
        f.write_str(")")
    }
}
