//! The slicing engine: applies one [`Range`] per axis and copies the
//! selected items into a new [`Array`].

use super::{index, Array, ArrayError, Range, Result, Shape, View};

/// Returns the positions selected along an axis of length `len`.
///
/// Every visited position must lie in `0..len`: range bounds are taken
/// literally, never offset from the end of the axis.
fn select_axis(range: &Range, axis: usize, len: usize) -> Result<Vec<usize>> {
    range.indices(len).map(|i| {
        if i < 0 || i as usize >= len {
            return Err(ArrayError::OutOfRange {index: i, axis, len});
        }
        Ok(i as usize)
    }).collect()
}

/// Slices the row-major `items` of shape `dims`.
///
/// Axes beyond `ranges.len()` are selected whole. Once an axis selects
/// nothing, deeper axes are never visited, so their ranges are not checked.
pub(crate) fn slice<T: Clone>(dims: &[usize], items: &[T], ranges: &[Range]) -> Result<Array<T>> {
    tracing::trace!(shape = ?dims, ranges = ?ranges, "slicing");
    let result = slice_inner(dims, items, ranges);
    match &result {
        Ok(array) => tracing::trace!(shape = ?array.shape(), "sliced"),
        Err(e) => tracing::debug!(shape = ?dims, ranges = ?ranges, error = %e, "slice rejected"),
    }
    result
}

fn slice_inner<T: Clone>(dims: &[usize], items: &[T], ranges: &[Range]) -> Result<Array<T>> {
    if ranges.len() > dims.len() {
        return Err(ArrayError::RankMismatch {rank: dims.len(), got: ranges.len()});
    }
    // Below an empty axis only the lengths matter, and nothing is copied.
    let mut selected: Vec<Vec<usize>> = Vec::with_capacity(dims.len());
    let mut counts = Vec::with_capacity(dims.len());
    for (axis, &len) in dims.iter().enumerate() {
        if counts.contains(&0) {
            counts.push(ranges.get(axis).map_or(len, |range| range.count(len)));
            continue;
        }
        let positions = match ranges.get(axis) {
            Some(range) => select_axis(range, axis, len)?,
            None => (0..len).collect(),
        };
        counts.push(positions.len());
        selected.push(positions);
    }
    let strides = Shape::from(dims).strides();
    let shape = Shape::new(counts);
    let outer = shape.clone();
    Ok(Array::new_with(shape, |buffer| {
        index::each(&outer, |index| {
            let position: usize = index.iter().zip(&selected).zip(&strides)
                .map(|((&i, positions), &stride)| positions[i] * stride)
                .sum();
            buffer.push(items[position].clone());
        });
    }))
}

// ----------------------------------------------------------------------------
