use super::{index, parse_ranges, slice, Array, Range, Result};

/// Implemented by types that look like a rectangular array of `Self::T`s of
/// any rank, backed by a row-major slice of items.
///
/// [`Array`] owns its items; [`ArrayView`] and [`ArrayViewMut`] borrow them
/// from an `Array`.
///
/// ### Indexing
///
/// [`View::view()`] and [`View::get()`] take a prefix of possibly negative
/// indices, one per axis starting at axis 0, and return a reference into the
/// existing items. Nothing is copied.
///
/// ### Slicing
///
/// [`View::slice()`] and [`View::slice_str()`] take one [`Range`] per axis
/// and return a new [`Array`] that shares nothing with `self`.
///
/// ```
/// use slicearray::{Array, View};
/// let a = Array::from_fn([2, 2, 3], |i| 6 * i[0] + 3 * i[1] + i[2]);
/// assert_eq!(a.view(&[1]).unwrap().as_slice(), [6, 7, 8, 9, 10, 11]);
/// assert_eq!(a.slice_str("0:1, 1:, ::2").unwrap().as_slice(), [3, 5]);
/// ```
pub trait View {
    /// The item type.
    type T;

    /// The length of each axis, axis 0 first.
    fn shape(&self) -> &[usize];

    /// The items in row-major order.
    fn as_slice(&self) -> &[Self::T];

    /// The number of axes.
    fn rank(&self) -> usize { self.shape().len() }

    /// The number of items.
    fn len(&self) -> usize { self.as_slice().len() }

    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Borrow the whole of `self`.
    fn as_view(&self) -> ArrayView<'_, Self::T> {
        ArrayView {shape: self.shape(), items: self.as_slice()}
    }

    /// Returns the sub-array selected by `indices`.
    ///
    /// Each index may be negative, counting back from the end of its axis.
    /// The result has rank `self.rank() - indices.len()`.
    ///
    /// # Errors
    ///
    /// [`RankMismatch`] if there are more indices than axes, otherwise
    /// [`OutOfRange`] for the first index that is out of bounds.
    ///
    /// [`RankMismatch`]: super::ArrayError::RankMismatch
    /// [`OutOfRange`]: super::ArrayError::OutOfRange
    fn view(&self, indices: &[isize]) -> Result<ArrayView<'_, Self::T>> {
        let shape = self.shape();
        let range = index::locate(shape, indices).map_err(|e| {
            tracing::debug!(shape = ?shape, indices = ?indices, error = %e, "index rejected");
            e
        })?;
        Ok(ArrayView {shape: &shape[indices.len()..], items: &self.as_slice()[range]})
    }

    /// Returns the item selected by `indices`, which must have one index per
    /// axis.
    fn get(&self, indices: &[isize]) -> Result<&Self::T> {
        check_full_rank(self.rank(), indices)?;
        Ok(self.view(indices)?.into_scalar())
    }

    /// Copies the items into a new [`Array`] of the same shape.
    fn to_array(&self) -> Array<Self::T> where Self::T: Clone {
        Array::new_unchecked(self.shape().into(), self.as_slice().into())
    }

    /// Returns a new [`Array`] containing the items selected by `ranges`.
    ///
    /// `ranges[a]` selects along axis `a`. Axes without a range are selected
    /// whole, so `ranges` may be shorter than the rank. The result has the
    /// same rank as `self`.
    ///
    /// ```
    /// use slicearray::{Array, Range, View};
    /// let a = Array::from_fn([2, 2, 3], |i| 6 * i[0] + 3 * i[1] + i[2]);
    /// let s = a.slice(&[Range::from(0..1)]).unwrap();
    /// assert_eq!(s.shape(), [1, 2, 3]);
    /// assert_eq!(s.as_slice(), [0, 1, 2, 3, 4, 5]);
    /// ```
    ///
    /// # Errors
    ///
    /// [`RankMismatch`] if there are more ranges than axes, otherwise
    /// [`OutOfRange`] if a range visits an index outside its axis.
    ///
    /// [`RankMismatch`]: super::ArrayError::RankMismatch
    /// [`OutOfRange`]: super::ArrayError::OutOfRange
    fn slice(&self, ranges: &[Range]) -> Result<Array<Self::T>> where Self::T: Clone {
        slice::slice(self.shape(), self.as_slice(), ranges)
    }

    /// Parses `spec` using [`parse_ranges()`] and then calls [`View::slice()`].
    fn slice_str(&self, spec: &str) -> Result<Array<Self::T>> where Self::T: Clone {
        let ranges = parse_ranges(spec)?;
        self.slice(&ranges)
    }
}

/// Implemented by [`View`]s whose items can be modified in place.
pub trait ViewMut: View {
    /// Returns `(self.shape(), self.as_mut_slice())` in one borrow.
    fn parts_mut(&mut self) -> (&[usize], &mut [Self::T]);

    /// The items in row-major order.
    fn as_mut_slice(&mut self) -> &mut [Self::T] { self.parts_mut().1 }

    /// Mutably borrow the whole of `self`.
    fn as_view_mut(&mut self) -> ArrayViewMut<'_, Self::T> {
        let (shape, items) = self.parts_mut();
        ArrayViewMut {shape, items}
    }

    /// Like [`View::view()`], but writes through the result modify `self`.
    ///
    /// ```
    /// use slicearray::{Array, View, ViewMut};
    /// let mut a = Array::filled([2, 3], 0);
    /// a.view_mut(&[-1]).unwrap().as_mut_slice().fill(1);
    /// assert_eq!(a.as_slice(), [0, 0, 0, 1, 1, 1]);
    /// ```
    fn view_mut(&mut self, indices: &[isize]) -> Result<ArrayViewMut<'_, Self::T>> {
        let (shape, items) = self.parts_mut();
        let range = index::locate(shape, indices).map_err(|e| {
            tracing::debug!(shape = ?shape, indices = ?indices, error = %e, "index rejected");
            e
        })?;
        Ok(ArrayViewMut {shape: &shape[indices.len()..], items: &mut items[range]})
    }

    /// Like [`View::get()`], but returns a mutable reference.
    fn get_mut(&mut self, indices: &[isize]) -> Result<&mut Self::T> {
        check_full_rank(self.rank(), indices)?;
        Ok(self.view_mut(indices)?.into_scalar())
    }
}

fn check_full_rank(rank: usize, indices: &[isize]) -> Result<()> {
    if indices.len() != rank {
        return Err(super::ArrayError::RankMismatch {rank, got: indices.len()});
    }
    Ok(())
}

// ----------------------------------------------------------------------------

/// A [`View`] that borrows its items. The return type of [`View::view()`].
#[derive(Debug)]
pub struct ArrayView<'a, T> {
    shape: &'a [usize],
    items: &'a [T],
}

impl<'a, T> ArrayView<'a, T> {
    /// Returns the only item of a view of rank 0.
    ///
    /// # Panics
    ///
    /// Panics if `self.rank()` is not `0`.
    pub fn into_scalar(self) -> &'a T {
        assert_eq!(self.shape.len(), 0, "View of shape {:?} is not a scalar", self.shape);
        &self.items[0]
    }

    /// Like [`View::view()`], but the result lives as long as `self` does.
    pub fn into_view(self, indices: &[isize]) -> Result<ArrayView<'a, T>> {
        let range = index::locate(self.shape, indices)?;
        Ok(ArrayView {shape: &self.shape[indices.len()..], items: &self.items[range]})
    }
}

impl<'a, T> Clone for ArrayView<'a, T> {
    fn clone(&self) -> Self { *self }
}

impl<'a, T> Copy for ArrayView<'a, T> {}

impl<'a, T> View for ArrayView<'a, T> {
    type T = T;
    #[inline(always)]
    fn shape(&self) -> &[usize] { self.shape }
    #[inline(always)]
    fn as_slice(&self) -> &[T] { self.items }
}

// ----------------------------------------------------------------------------

/// A [`ViewMut`] that mutably borrows its items. The return type of
/// [`ViewMut::view_mut()`].
#[derive(Debug)]
pub struct ArrayViewMut<'a, T> {
    shape: &'a [usize],
    items: &'a mut [T],
}

impl<'a, T> ArrayViewMut<'a, T> {
    /// Returns the only item of a view of rank 0.
    ///
    /// # Panics
    ///
    /// Panics if `self.rank()` is not `0`.
    pub fn into_scalar(self) -> &'a mut T {
        let Self {shape, items} = self;
        assert_eq!(shape.len(), 0, "View of shape {:?} is not a scalar", shape);
        &mut items[0]
    }

    /// Like [`ViewMut::view_mut()`], but the result lives as long as `self`
    /// does.
    pub fn into_view_mut(self, indices: &[isize]) -> Result<ArrayViewMut<'a, T>> {
        let Self {shape, items} = self;
        let range = index::locate(shape, indices)?;
        Ok(ArrayViewMut {shape: &shape[indices.len()..], items: &mut items[range]})
    }
}

impl<'a, T> View for ArrayViewMut<'a, T> {
    type T = T;
    #[inline(always)]
    fn shape(&self) -> &[usize] { self.shape }
    #[inline(always)]
    fn as_slice(&self) -> &[T] { &*self.items }
}

impl<'a, T> ViewMut for ArrayViewMut<'a, T> {
    #[inline(always)]
    fn parts_mut(&mut self) -> (&[usize], &mut [T]) { (self.shape, &mut *self.items) }
}

// ----------------------------------------------------------------------------
