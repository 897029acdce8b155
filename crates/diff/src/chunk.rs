use derive_more::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::engine::Alignment;
use crate::window::Window;

/// What a chunk represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChunkKind {
    /// A run of matched elements present on both sides
    #[display(fmt = "Equal")]
    Equal,

    /// Elements only present in the first sequence
    #[display(fmt = "Deleted")]
    Deleted,

    /// Elements only present in the second sequence
    #[display(fmt = "Inserted")]
    Inserted,
}

/// A position range in one of the original inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Span {
    /// Start position in the original input
    pub offset: usize,

    /// Number of elements covered
    pub len: usize,
}

impl Span {
    /// Create a new span
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// End of the span (exclusive)
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Plain-data description of a chunk, detached from the compared sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChunkSpan {
    pub kind: ChunkKind,
    pub a: Option<Span>,
    pub b: Option<Span>,
}

/// One aligned segment of a comparison.
///
/// Equal chunks carry matching runs of both sequences. A deletion carries
/// only a run of the first sequence, an insertion only a run of the second.
#[derive(Debug, PartialEq)]
pub struct Chunk<'a, T> {
    a: Option<Window<'a, T>>,
    b: Option<Window<'a, T>>,
}

impl<'a, T> Chunk<'a, T> {
    /// Create a chunk. Panics if neither side is present, since only the
    /// assembler builds chunks and an empty one means the alignment is broken.
    pub(crate) fn new(a: Option<Window<'a, T>>, b: Option<Window<'a, T>>) -> Self {
        assert!(
            a.is_some() || b.is_some(),
            "a chunk needs at least one side"
        );
        Self { a, b }
    }

    /// The run of the first sequence, if this chunk covers any of it
    pub fn a(&self) -> Option<Window<'a, T>> {
        self.a
    }

    /// The run of the second sequence, if this chunk covers any of it
    pub fn b(&self) -> Option<Window<'a, T>> {
        self.b
    }

    /// Check if this chunk is a run of matched elements, that is, if both
    /// sides are present
    pub fn are_equal(&self) -> bool {
        self.a.is_some() && self.b.is_some()
    }

    /// Classify the chunk
    pub fn kind(&self) -> ChunkKind {
        match (self.a.is_some(), self.b.is_some()) {
            (true, true) => ChunkKind::Equal,
            (true, false) => ChunkKind::Deleted,
            (false, _) => ChunkKind::Inserted,
        }
    }

    /// Offsets and lengths of both sides in the original inputs
    pub fn span(&self) -> ChunkSpan {
        let to_span = |w: &Window<'a, T>| Span::new(w.offset(), w.len());
        ChunkSpan {
            kind: self.kind(),
            a: self.a.as_ref().map(to_span),
            b: self.b.as_ref().map(to_span),
        }
    }
}

impl<T> Clone for Chunk<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Chunk<'_, T> {}

/// Group the flags of an alignment into the ordered chunk list.
///
/// Matched runs become one equal chunk each. Between two matched runs, all
/// marked elements of `a` are drained into one deletion, followed by all
/// marked elements of `b` drained into one insertion.
pub(crate) fn assemble<'a, T>(
    a: Window<'a, T>,
    b: Window<'a, T>,
    alignment: &Alignment,
) -> Vec<Chunk<'a, T>> {
    let modified_a = &alignment.modified_a;
    let modified_b = &alignment.modified_b;
    let n = a.len();
    let m = b.len();
    debug_assert_eq!(modified_a.len(), n);
    debug_assert_eq!(modified_b.len(), m);

    let mut chunks = Vec::new();
    let mut pos_a = 0;
    let mut pos_b = 0;

    while pos_a < n || pos_b < m {
        let start_a = pos_a;
        let start_b = pos_b;

        while pos_a < n && pos_b < m && !modified_a[pos_a] && !modified_b[pos_b] {
            pos_a += 1;
            pos_b += 1;
        }
        if pos_a > start_a {
            chunks.push(Chunk::new(
                Some(a.slice(start_a, pos_a - start_a)),
                Some(b.slice(start_b, pos_b - start_b)),
            ));
        }

        let start_a = pos_a;
        let start_b = pos_b;

        while pos_a < n && (pos_b >= m || modified_a[pos_a]) {
            pos_a += 1;
        }
        while pos_b < m && (pos_a >= n || modified_b[pos_b]) {
            pos_b += 1;
        }

        if pos_a > start_a {
            chunks.push(Chunk::new(Some(a.slice(start_a, pos_a - start_a)), None));
        }
        if pos_b > start_b {
            chunks.push(Chunk::new(None, Some(b.slice(start_b, pos_b - start_b))));
        }
    }

    chunks
}
