use std::fmt;

use super::index;

/// The lengths of the axes of an [`Array`], axis 0 first.
///
/// The rank of an array is the number of axes. Every axis has its own
/// length, and an array is always rectangular: every position along one axis
/// has a sub-array of the same shape.
///
/// [`Array`]: super::Array
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    pub fn new(dims: impl Into<Vec<usize>>) -> Self { Self {dims: dims.into()} }

    pub fn dims(&self) -> &[usize] { &self.dims }

    pub fn rank(&self) -> usize { self.dims.len() }

    /// The number of items in an array of this shape.
    pub fn length(&self) -> usize { index::length(&self.dims) }

    /// The number of items, or `None` if it does not fit in a `usize`.
    pub fn checked_length(&self) -> Option<usize> { index::checked_length(&self.dims) }

    /// Row-major strides, in items.
    pub fn strides(&self) -> Vec<usize> { index::strides(&self.dims) }

    /// Returns `self` with `count` axes of length `1` prepended.
    pub fn promote(&self, count: usize) -> Self {
        let mut dims = vec![1; count];
        dims.extend_from_slice(&self.dims);
        Self {dims}
    }

    /// Returns `self` with an outer axis of length `len` prepended.
    pub fn stacked(&self, len: usize) -> Self { self.promote(1).with_outer(len) }

    fn with_outer(mut self, len: usize) -> Self {
        self.dims[0] = len;
        self
    }
}

impl std::ops::Deref for Shape {
    type Target = [usize];
    fn deref(&self) -> &Self::Target { &self.dims }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self { Self::new(dims) }
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self { Self::new(dims) }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self { Self::new(dims) }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (axis, len) in self.dims.iter().enumerate() {
            if axis > 0 { write!(f, ", ")?; }
            write!(f, "{}", len)?;
        }
        write!(f, ")")
    }
}
