//! `Display` formatting for [`Array`]s and views.
//!
//! An array of rank 1 prints on one line as `[ 1, 2, 3 ]`. An array of
//! higher rank prints one sub-array per line, indented two spaces deeper
//! than its enclosing bracket:
//!
//! ```text
//! [
//!   [ 1, 2 ],
//!   [ 3, 4 ]
//! ]
//! ```
//!
//! An empty axis prints as `[ ]`.

use std::fmt;

use super::{index, Array, ArrayView, ArrayViewMut, View};

fn write_nested<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    dims: &[usize],
    items: &[T],
    indent: usize,
) -> fmt::Result {
    match dims {
        [] => write!(f, "{}", items[0]),
        [0, ..] => write!(f, "[ ]"),
        [_] => {
            write!(f, "[ ")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 { write!(f, ", ")?; }
                write!(f, "{}", item)?;
            }
            write!(f, " ]")
        },
        [len, rest @ ..] => {
            let block = index::length(rest);
            writeln!(f, "[")?;
            for i in 0..*len {
                write!(f, "{:width$}  ", "", width = 2 * indent)?;
                write_nested(f, rest, &items[i * block..(i + 1) * block], indent + 1)?;
                if i + 1 < *len { write!(f, ",")?; }
                writeln!(f)?;
            }
            write!(f, "{:width$}]", "", width = 2 * indent)
        },
    }
}

impl<T: fmt::Display> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nested(f, self.shape(), self.as_slice(), 0)
    }
}

impl<'a, T: fmt::Display> fmt::Display for ArrayView<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nested(f, self.shape(), self.as_slice(), 0)
    }
}

impl<'a, T: fmt::Display> fmt::Display for ArrayViewMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nested(f, self.shape(), self.as_slice(), 0)
    }
}
