use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::chunk::{assemble, Chunk, ChunkKind, ChunkSpan};
use crate::engine::align;
use crate::error::{DiffError, Result};
use crate::window::Window;

/// Element counts of a comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffStats {
    /// Number of chunks
    pub chunks: usize,

    /// Elements matched on both sides
    pub equal: usize,

    /// Elements only present in the first sequence
    pub deleted: usize,

    /// Elements only present in the second sequence
    pub inserted: usize,
}

impl DiffStats {
    /// Tally the given chunk spans
    pub fn from_spans<I>(spans: I) -> Self
    where
        I: IntoIterator<Item = ChunkSpan>,
    {
        let mut stats = Self::default();
        for span in spans {
            stats.chunks += 1;
            let len_a = span.a.map_or(0, |s| s.len);
            let len_b = span.b.map_or(0, |s| s.len);
            if span.kind == ChunkKind::Equal {
                stats.equal += len_a;
            } else {
                stats.deleted += len_a;
                stats.inserted += len_b;
            }
        }
        stats
    }

    /// Number of insert and delete operations needed to turn the first
    /// sequence into the second
    pub fn edit_distance(&self) -> usize {
        self.deleted + self.inserted
    }

    /// Check if there is anything to edit
    pub fn has_changes(&self) -> bool {
        self.edit_distance() > 0
    }
}

/// The comparison of two sequences, split into aligned chunks.
///
/// The result is computed once at construction and never changes.
#[derive(Debug)]
pub struct Differences<'a, T> {
    /// The compared part of the first sequence
    a: Window<'a, T>,

    /// The compared part of the second sequence
    b: Window<'a, T>,

    /// The chunks, in alignment order
    chunks: Vec<Chunk<'a, T>>,
}

impl<'a, T: PartialEq> Differences<'a, T> {
    /// Compare two sequences using `==` on the elements
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self::with_comparer(a, b, |x: &T, y: &T| x == y)
    }
}

impl<'a, T> Differences<'a, T> {
    /// Compare two sequences, treating elements as the same when `eq` holds
    pub fn with_comparer<F>(a: &'a [T], b: &'a [T], eq: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        Self::from_windows(Window::full(a), Window::full(b), eq)
    }

    /// Compare `a[a_offset..a_offset + a_len]` against
    /// `b[b_offset..b_offset + b_len]`.
    ///
    /// Chunk offsets stay relative to the start of `a` and `b`, not to the
    /// compared part.
    pub fn with_windows<F>(
        a: &'a [T],
        a_offset: usize,
        a_len: usize,
        b: &'a [T],
        b_offset: usize,
        b_len: usize,
        eq: F,
    ) -> Result<Self>
    where
        F: Fn(&T, &T) -> bool,
    {
        let a = Window::new(a, a_offset, a_len).map_err(|e| DiffError::argument("a", e))?;
        let b = Window::new(b, b_offset, b_len).map_err(|e| DiffError::argument("b", e))?;
        Ok(Self::from_windows(a, b, eq))
    }

    /// Compare two windows
    pub fn from_windows<F>(a: Window<'a, T>, b: Window<'a, T>, eq: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        let alignment = align(a.as_slice(), b.as_slice(), &eq);
        let chunks = assemble(a, b, &alignment);
        Self { a, b, chunks }
    }

    /// The compared part of the first sequence
    pub fn a(&self) -> Window<'a, T> {
        self.a
    }

    /// The compared part of the second sequence
    pub fn b(&self) -> Window<'a, T> {
        self.b
    }

    /// Get the chunks
    pub fn chunks(&self) -> &[Chunk<'a, T>] {
        &self.chunks
    }

    /// Get the number of chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Check if there are no chunks (both inputs empty)
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Get a chunk by index
    pub fn get(&self, index: usize) -> Option<&Chunk<'a, T>> {
        self.chunks.get(index)
    }

    /// Iterate over the chunks
    pub fn iter(&self) -> std::slice::Iter<'_, Chunk<'a, T>> {
        self.chunks.iter()
    }

    /// Check if every chunk is an equal chunk
    pub fn are_equal(&self) -> bool {
        self.chunks.iter().all(Chunk::are_equal)
    }

    /// Element counts of this comparison
    pub fn stats(&self) -> DiffStats {
        DiffStats::from_spans(self.chunks.iter().map(Chunk::span))
    }
}

impl<'a, T> Index<usize> for Differences<'a, T> {
    type Output = Chunk<'a, T>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.chunks[index]
    }
}

impl<'s, 'a, T> IntoIterator for &'s Differences<'a, T> {
    type Item = &'s Chunk<'a, T>;
    type IntoIter = std::slice::Iter<'s, Chunk<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunk::Span;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_windows_keep_original_offsets() {
        let a = [0, 1, 2, 3, 4, 5];
        let b = [9, 2, 3, 7];
        let diff = Differences::with_windows(&a, 2, 3, &b, 1, 3, |x: &i32, y: &i32| x == y)
            .unwrap();

        let spans: Vec<ChunkSpan> = diff.iter().map(Chunk::span).collect();
        assert_eq!(
            spans,
            vec![
                ChunkSpan {
                    kind: ChunkKind::Equal,
                    a: Some(Span::new(2, 2)),
                    b: Some(Span::new(1, 2)),
                },
                ChunkSpan {
                    kind: ChunkKind::Deleted,
                    a: Some(Span::new(4, 1)),
                    b: None,
                },
                ChunkSpan {
                    kind: ChunkKind::Inserted,
                    a: None,
                    b: Some(Span::new(3, 1)),
                },
            ]
        );
    }

    #[test]
    fn test_window_out_of_range_names_argument() {
        let a = [1, 2, 3];
        let b = [1, 2, 3];
        let err = Differences::with_windows(&a, 0, 3, &b, 2, 2, |x: &i32, y: &i32| x == y)
            .unwrap_err();
        assert!(matches!(err, DiffError::InvalidArgument { name: "b", .. }));
    }

    #[test]
    fn test_stats() {
        let a: Vec<char> = "kitten".chars().collect();
        let b: Vec<char> = "sitting".chars().collect();
        let stats = Differences::new(&a, &b).stats();

        assert_eq!(stats.equal, 4);
        assert_eq!(stats.deleted, 2);
        assert_eq!(stats.inserted, 3);
        assert_eq!(stats.edit_distance(), 5);
        assert!(stats.has_changes());
    }
}
