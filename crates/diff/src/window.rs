use std::fmt;
use std::ops::{Index, Range};

use crate::error::{DiffError, Result};

/// A bounded, zero-copy view over a borrowed sequence.
///
/// A window never copies or mutates the sequence it looks at. Indexing is
/// relative to the window, while [`Window::offset`] reports where the window
/// starts in the backing sequence.
pub struct Window<'a, T> {
    /// The backing sequence
    items: &'a [T],

    /// Start of the window in `items`
    offset: usize,

    /// Number of elements visible through the window
    len: usize,
}

impl<'a, T> Window<'a, T> {
    /// Create a window over `items[offset..offset + len]`
    pub fn new(items: &'a [T], offset: usize, len: usize) -> Result<Self> {
        check_bounds(offset, len, items.len())?;
        Ok(Self { items, offset, len })
    }

    /// Create a window covering all of `items`
    pub fn full(items: &'a [T]) -> Self {
        Self {
            items,
            offset: 0,
            len: items.len(),
        }
    }

    /// Create a sub-window. `offset` and `len` are relative to this window
    /// and must fit inside it.
    pub fn subset(&self, offset: usize, len: usize) -> Result<Self> {
        check_bounds(offset, len, self.len)?;
        Ok(self.slice(offset, len))
    }

    /// Sub-window without the bounds check. Callers guarantee the range is
    /// inside this window.
    pub(crate) fn slice(&self, offset: usize, len: usize) -> Self {
        debug_assert!(offset + len <= self.len);
        Self {
            items: self.items,
            offset: self.offset + offset,
            len,
        }
    }

    /// Number of elements in the window
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the window has no elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Start of the window in the backing sequence
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The covered range of the backing sequence
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.len
    }

    /// Get the element at `index` (relative to the window)
    pub fn get(&self, index: usize) -> Option<&'a T> {
        if index < self.len {
            Some(&self.items[self.offset + index])
        } else {
            None
        }
    }

    /// The visible elements as a slice of the backing sequence
    pub fn as_slice(&self) -> &'a [T] {
        &self.items[self.range()]
    }

    /// Iterate over the visible elements
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.as_slice().iter()
    }

    /// The whole backing sequence
    pub fn backing(&self) -> &'a [T] {
        self.items
    }
}

fn check_bounds(offset: usize, len: usize, bound: usize) -> Result<()> {
    match offset.checked_add(len) {
        Some(end) if end <= bound => Ok(()),
        _ => Err(DiffError::OutOfRange { offset, len, bound }),
    }
}

impl<T> Clone for Window<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Window<'_, T> {}

impl<T> Index<usize> for Window<'_, T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => panic!(
                "index {} out of range for window of length {}",
                index, self.len
            ),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Window<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("offset", &self.offset)
            .field("items", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Window<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.as_slice() == other.as_slice()
    }
}

impl<'a, T> IntoIterator for Window<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
