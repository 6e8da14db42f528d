use super::{Array, Shape};

/// A buffer that accumulates the items of a partially constructed [`Array`].
pub(crate) struct Buffer<T> {
    items: Vec<T>,
}

impl<T> Buffer<T> {
    /// Append `t` to `self`.
    pub fn push(&mut self, t: T) { self.items.push(t); }
}

impl<T> Array<T> {
    /// Construct an `Array` of shape `shape`.
    ///
    /// - callback - This will be called once, passing a `Buffer` large
    /// enough to hold all the items. It must fill the buffer by pushing each
    /// item once, in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if `callback` does, or if it pushes the wrong number of items.
    pub(crate) fn new_with(
        shape: Shape,
        callback: impl FnOnce(&mut Buffer<T>),
    ) -> Self {
        let mut buffer = Buffer {items: Vec::with_capacity(shape.length())};
        callback(&mut buffer);
        assert_eq!(buffer.items.len(), shape.length(), "Wrong number of items for shape {}", shape);
        Self::new_unchecked(shape, buffer.items.into())
    }
}
