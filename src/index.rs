//! Index arithmetic for row-major multi-indices.
//!
//! A multi-index is a `&[usize]` with one entry per axis, axis 0 first. The
//! last axis varies fastest in the flat representation.

use super::{ArrayError, Result};

/// The error returned by [`normalize()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("index {index} out of range for length {len}")]
pub struct OutOfRange {
    pub index: isize,
    pub len: usize,
}

impl OutOfRange {
    /// Attach the axis on which `self` occurred.
    pub fn on_axis(self, axis: usize) -> ArrayError {
        ArrayError::OutOfRange {index: self.index, axis, len: self.len}
    }
}

/// Maps a possibly negative `index` into `0..len`.
///
/// Negative indices count back from `len`, so `-1` is the last position.
///
/// ```
/// use slicearray::{normalize, OutOfRange};
/// assert_eq!(normalize(1, 3), Ok(1));
/// assert_eq!(normalize(-1, 3), Ok(2));
/// assert_eq!(normalize(-4, 3), Err(OutOfRange {index: -4, len: 3}));
/// assert_eq!(normalize(3, 3), Err(OutOfRange {index: 3, len: 3}));
/// ```
pub fn normalize(index: isize, len: usize) -> std::result::Result<usize, OutOfRange> {
    let error = OutOfRange {index, len};
    let adjusted = if index < 0 { index + len as isize } else { index };
    if adjusted < 0 || adjusted as usize >= len { return Err(error); }
    Ok(adjusted as usize)
}

// ----------------------------------------------------------------------------

/// Returns the number of items in an array of shape `dims`, or `None` if
/// it does not fit in a `usize`.
pub fn checked_length(dims: &[usize]) -> Option<usize> {
    if dims.contains(&0) { return Some(0); }
    dims.iter().try_fold(1usize, |n, &len| n.checked_mul(len))
}

/// Returns the number of items in an array of shape `dims`.
///
/// # Panics
///
/// Panics if the number does not fit in a `usize`.
pub fn length(dims: &[usize]) -> usize {
    checked_length(dims).unwrap_or_else(|| panic!("Shape {:?} has too many items", dims))
}

/// Returns the distance in the flat representation between neighbours along
/// each axis.
///
/// Strides that do not fit in a `usize` saturate. That only happens when
/// `dims` contains a zero, so that no position is ever computed.
pub fn strides(dims: &[usize]) -> Vec<usize> {
    let mut strides: Vec<usize> = vec![1; dims.len()];
    for axis in (1..dims.len()).rev() {
        strides[axis - 1] = strides[axis].saturating_mul(dims[axis]);
    }
    strides
}

/// Calls `f` on every multi-index of an array of shape `dims`, in
/// row-major order.
pub fn each(dims: &[usize], mut f: impl FnMut(&[usize])) {
    if dims.contains(&0) { return; }
    let mut index = vec![0; dims.len()];
    loop {
        f(&index);
        let mut axis = dims.len();
        loop {
            if axis == 0 { return; }
            axis -= 1;
            index[axis] += 1;
            if index[axis] < dims[axis] { break; }
            index[axis] = 0;
        }
    }
}

/// Resolves a prefix of possibly negative indices against `dims`.
///
/// Returns the range of the flat representation that holds the selected
/// sub-array, whose shape is `&dims[indices.len()..]`.
pub(crate) fn locate(dims: &[usize], indices: &[isize]) -> Result<std::ops::Range<usize>> {
    if indices.len() > dims.len() {
        return Err(ArrayError::RankMismatch {rank: dims.len(), got: indices.len()});
    }
    let mut position = 0;
    for (axis, (&i, &len)) in indices.iter().zip(dims).enumerate() {
        let i = normalize(i, len).map_err(|e| e.on_axis(axis))?;
        position = position * len + i;
    }
    let block = length(&dims[indices.len()..]);
    Ok(position * block .. (position + 1) * block)
}

// ----------------------------------------------------------------------------
