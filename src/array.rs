use super::{index, ArrayError, Result, Shape, View, ViewMut};

/// A dense, rectangular array of `T`s of any rank.
///
/// The items are stored in a single [`Box<[T]>`] in row-major order: the last
/// axis varies fastest. The purpose of the `Array` wrapper is to look like a
/// nested collection, where an array of rank `N` is a sequence of arrays of
/// rank `N - 1`.
///
/// Most methods are provided by [`View`] and [`ViewMut`].
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawArray<T>"))]
pub struct Array<T> {
    shape: Shape,
    items: Box<[T]>,
}

impl<T> Array<T> {
    pub(crate) fn new_unchecked(shape: Shape, items: Box<[T]>) -> Self {
        debug_assert_eq!(shape.length(), items.len());
        Self {shape, items}
    }

    /// Constructs an `Array` of shape `dims` given its items in row-major
    /// order.
    ///
    /// ```
    /// use slicearray::{Array, View};
    /// let a = Array::new([2, 3], vec![0, 1, 2, 3, 4, 5]).unwrap();
    /// assert_eq!(a.get(&[1, 0]), Ok(&3));
    /// assert!(Array::new([2, 3], vec![0, 1, 2]).is_err());
    /// ```
    pub fn new(dims: impl Into<Shape>, items: impl Into<Box<[T]>>) -> Result<Self> {
        let shape = dims.into();
        let items = items.into();
        check_length(&shape, items.len())?;
        Ok(Self {shape, items})
    }

    /// Constructs an `Array` of shape `dims` in which every item is `fill`.
    ///
    /// Each of the `dims[0]` sub-arrays has shape `dims[1..]`, and so on.
    ///
    /// ```
    /// use slicearray::{Array, View};
    /// let a = Array::filled([2, 3], 4);
    /// assert_eq!(a.shape(), [2, 3]);
    /// assert_eq!(a.as_slice(), [4, 4, 4, 4, 4, 4]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the number of items does not fit in a `usize`.
    pub fn filled(dims: impl Into<Shape>, fill: T) -> Self where T: Clone {
        let shape = dims.into();
        let items = vec![fill; shape.length()];
        Self {shape, items: items.into()}
    }

    /// Constructs an `Array` of shape `dims` filled with `T::default()`.
    ///
    /// Panics like [`Array::filled()`].
    pub fn with_shape(dims: impl Into<Shape>) -> Self where T: Default {
        Self::from_fn(dims, |_| T::default())
    }

    /// Construct an `Array` of shape `dims` from a function of the
    /// multi-index.
    ///
    /// ```
    /// use slicearray::{Array, View};
    /// let a = Array::from_fn([2, 2], |i| 10 * i[0] + i[1]);
    /// assert_eq!(a.as_slice(), [0, 1, 10, 11]);
    /// ```
    ///
    /// Panics like [`Array::filled()`].
    pub fn from_fn(dims: impl Into<Shape>, mut f: impl FnMut(&[usize]) -> T) -> Self {
        let shape = dims.into();
        let outer = shape.clone();
        Self::new_with(shape, |buffer| index::each(&outer, |i| buffer.push(f(i))))
    }

    /// Constructs an `Array` of rank `N + 1` from a sequence of arrays of
    /// rank `N`, which become its sub-arrays in order.
    ///
    /// All the arrays must have the same shape. The sequence must be
    /// non-empty, otherwise the shape of the sub-arrays is unknown; an empty
    /// array can be made using [`Array::filled()`] with a zero length.
    ///
    /// ```
    /// use slicearray::{Array, View};
    /// let a = Array::stack([
    ///     Array::from([0, 1, 2]),
    ///     Array::from([3, 4, 5]),
    /// ]).unwrap();
    /// assert_eq!(a.shape(), [2, 3]);
    /// assert_eq!(a.get(&[1, 2]), Ok(&5));
    /// ```
    pub fn stack(children: impl IntoIterator<Item=Array<T>>) -> Result<Self> {
        let mut children = children.into_iter();
        let first = children.next().ok_or(ArrayError::EmptyStack)?;
        let child_shape = first.shape.clone();
        let mut items = first.items.into_vec();
        let mut count = 1;
        for child in children {
            if child.shape != child_shape {
                return Err(ArrayError::ShapeMismatch {
                    expected: child_shape.dims().to_vec(),
                    got: child.shape.dims().to_vec(),
                });
            }
            items.extend(child.items.into_vec());
            count += 1;
        }
        Ok(Self::new_unchecked(child_shape.stacked(count), items.into()))
    }

    /// Reinterprets `self` as an array of rank `rank`.
    ///
    /// Each extra rank wraps `self` as the sole item of an enclosing level,
    /// i.e. prepends an axis of length `1`. The items are not moved.
    ///
    /// ```
    /// use slicearray::{Array, View};
    /// let a = Array::from([1, 2]).promote(3).unwrap();
    /// assert_eq!(a.shape(), [1, 1, 2]);
    /// assert_eq!(a.get(&[0, 0, 1]), Ok(&2));
    /// ```
    pub fn promote(self, rank: usize) -> Result<Self> {
        let own_rank = self.shape.rank();
        if rank < own_rank {
            return Err(ArrayError::RankMismatch {rank: own_rank, got: rank});
        }
        Ok(Self {shape: self.shape.promote(rank - own_rank), items: self.items})
    }

    /// Change the shape of this array without moving any of the items.
    ///
    /// ```
    /// use slicearray::{Array, View};
    /// let a = Array::from([0, 1, 2, 3, 4, 5]).reshape([3, 2]).unwrap();
    /// assert_eq!(a.get(&[2, 0]), Ok(&4));
    /// ```
    pub fn reshape(self, dims: impl Into<Shape>) -> Result<Self> {
        let shape = dims.into();
        check_length(&shape, self.items.len())?;
        Ok(Self {shape, items: self.items})
    }

    /// Returns the raw array items in row-major order.
    pub fn into_raw(self) -> Box<[T]> { self.items }

    /// Returns the shape and the raw items.
    pub fn into_parts(self) -> (Shape, Box<[T]>) { (self.shape, self.items) }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self {
        Self {shape: Shape::new([items.len()]), items: items.into()}
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(items: [T; N]) -> Self { Self::from(Vec::from(items)) }
}

impl<T> std::convert::AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] { &self.items }
}

impl<T> std::convert::AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.items }
}

impl<T> View for Array<T> {
    type T = T;
    #[inline(always)]
    fn shape(&self) -> &[usize] { self.shape.dims() }
    #[inline(always)]
    fn as_slice(&self) -> &[T] { &self.items }
}

impl<T> ViewMut for Array<T> {
    #[inline(always)]
    fn parts_mut(&mut self) -> (&[usize], &mut [T]) { (self.shape.dims(), &mut self.items) }
}

impl<T, const K: usize> std::ops::Index<[isize; K]> for Array<T> {
    type Output = T;
    fn index(&self, index: [isize; K]) -> &T {
        self.get(&index).unwrap_or_else(|e| panic!("{}", e))
    }
}

impl<T, const K: usize> std::ops::IndexMut<[isize; K]> for Array<T> {
    fn index_mut(&mut self, index: [isize; K]) -> &mut T {
        self.get_mut(&index).unwrap_or_else(|e| panic!("{}", e))
    }
}

/// Checks that `shape` holds exactly `len` items.
fn check_length(shape: &Shape, len: usize) -> Result<()> {
    match shape.checked_length() {
        None => Err(ArrayError::TooLarge {dims: shape.dims().to_vec()}),
        Some(expected) if expected != len => Err(ArrayError::LengthMismatch {expected, got: len}),
        Some(_) => Ok(()),
    }
}

// ----------------------------------------------------------------------------

/// The unvalidated serialized form of an [`Array`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawArray<T> {
    shape: Shape,
    items: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawArray<T>> for Array<T> {
    type Error = ArrayError;
    fn try_from(raw: RawArray<T>) -> Result<Self> { Self::new(raw.shape, raw.items) }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// `[[[0, 1, 2], [3, 4, 5]], [[6, 7, 8], [9, 10, 11]]]`
    fn counting() -> Array<i32> {
        Array::stack([
            Array::stack([Array::from([0, 1, 2]), Array::from([3, 4, 5])]).unwrap(),
            Array::stack([Array::from([6, 7, 8]), Array::from([9, 10, 11])]).unwrap(),
        ]).unwrap()
    }

    #[test]
    fn sized() {
        let a: Array<i32> = Array::with_shape([2, 3, 4]);
        assert_eq!(a.shape(), [2, 3, 4]);
        assert_eq!(a.len(), 24);
        assert!(a.as_slice().iter().all(|&x| x == 0));
        for i in 0..2 {
            assert_eq!(a.view(&[i]).unwrap().shape(), [3, 4]);
        }

        let e: Array<u8> = Array::filled([0, 3], 7);
        assert_eq!(e.shape(), [0, 3]);
        assert!(e.is_empty());
    }

    #[test]
    fn nested() {
        let a = counting();
        assert_eq!(a.shape(), [2, 2, 3]);
        assert_eq!(a.as_slice(), (0..12).collect::<Vec<_>>());
        assert_eq!(a.rank(), 3);
    }

    #[test]
    fn stack_bad() {
        assert_eq!(Array::<i32>::stack([]), Err(ArrayError::EmptyStack));
        assert_eq!(
            Array::stack([Array::from([1, 2]), Array::from([3])]),
            Err(ArrayError::ShapeMismatch {expected: vec![2], got: vec![1]}),
        );
    }

    #[test]
    fn promote() {
        let a = Array::from([1, 2]);
        assert_eq!(a.clone().promote(1).unwrap(), a);
        let p = a.clone().promote(3).unwrap();
        assert_eq!(p.shape(), [1, 1, 2]);
        assert_eq!(p.as_slice(), [1, 2]);
        assert_eq!(counting().promote(2), Err(ArrayError::RankMismatch {rank: 3, got: 2}));
    }

    #[test]
    fn new_and_reshape() {
        assert_eq!(
            Array::new([2, 2], vec![1, 2, 3]),
            Err(ArrayError::LengthMismatch {expected: 4, got: 3}),
        );
        let a = counting().reshape([3, 4]).unwrap();
        assert_eq!(a.get(&[2, 3]), Ok(&11));
        assert!(a.reshape([5]).is_err());
    }

    #[test]
    fn too_large() {
        let huge: [usize; 2] = [1 << 32, (1 << 32) + 1];
        assert_eq!(
            Array::<()>::new(huge, vec![(); 4]),
            Err(ArrayError::TooLarge {dims: huge.to_vec()}),
        );
        assert_eq!(
            Array::from([(); 4]).reshape(huge),
            Err(ArrayError::TooLarge {dims: huge.to_vec()}),
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_json_form() {
        let a = counting();
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"shape":[2,2,3],"items":[0,1,2,3,4,5,6,7,8,9,10,11]}"#);
        assert_eq!(serde_json::from_str::<Array<i32>>(&json).unwrap(), a);
        let empty: Array<i32> = serde_json::from_str(r#"{"shape":[0,3],"items":[]}"#).unwrap();
        assert_eq!(empty.shape(), [0, 3]);
        let short = serde_json::from_str::<Array<i32>>(r#"{"shape":[2,2],"items":[1,2,3]}"#);
        assert!(short.unwrap_err().to_string().contains("shape requires 4 items, got 3"));
    }

    #[test]
    #[should_panic]
    fn filled_too_large() {
        let _x = Array::filled([1usize << 32, (1 << 32) + 1], ());
    }

    #[test]
    fn index_operator() {
        let mut a = counting();
        assert_eq!(a[[1, 0, 2]], 8);
        assert_eq!(a[[-1, -1, -1]], 11);
        a[[0, 1, 2]] = 777;
        assert_eq!(a.as_slice()[5], 777);
    }

    #[test]
    #[should_panic]
    fn index_operator_out_of_range() {
        let a = counting();
        let _x = a[[2, 0, 0]];
    }

    #[test]
    fn parts() {
        let (shape, items) = counting().into_parts();
        assert_eq!(shape.dims(), [2, 2, 3]);
        assert_eq!(items.len(), 12);
        assert_eq!(*Array::from(vec!['a', 'b']).into_raw(), ['a', 'b']);
    }
}
