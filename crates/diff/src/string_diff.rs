use std::iter;
use std::ops::Index;

use crate::chunk::{Chunk, ChunkKind, ChunkSpan, Span};
use crate::differences::{DiffStats, Differences};

/// How two characters are compared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CharComparer {
    /// Same Unicode scalar value
    #[default]
    Exact,

    /// Same after lowercasing both characters
    IgnoreCase,
}

impl CharComparer {
    /// Check if two characters count as the same
    pub fn matches(&self, a: char, b: char) -> bool {
        match self {
            CharComparer::Exact => a == b,
            CharComparer::IgnoreCase => a == b || a.to_lowercase().eq(b.to_lowercase()),
        }
    }
}

/// A slice of one of the compared strings.
///
/// `offset` and `len` count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSpan<'a> {
    /// The covered text
    pub text: &'a str,

    /// Position of the first character in the original string
    pub offset: usize,

    /// Number of characters covered
    pub len: usize,
}

impl<'a> TextSpan<'a> {
    fn new(source: &'a str, boundaries: &[usize], span: Span) -> Self {
        Self {
            text: &source[boundaries[span.offset]..boundaries[span.end()]],
            offset: span.offset,
            len: span.len,
        }
    }
}

/// Byte position of every character start, followed by the string length
pub(crate) fn char_boundaries(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(i, _)| i)
        .chain(iter::once(text.len()))
        .collect()
}

/// A character-level chunk with its text taken from the compared strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringChunk<'a> {
    kind: ChunkKind,
    a: Option<TextSpan<'a>>,
    b: Option<TextSpan<'a>>,
}

impl<'a> StringChunk<'a> {
    /// The text of the first string covered by this chunk
    pub fn a(&self) -> Option<TextSpan<'a>> {
        self.a
    }

    /// The text of the second string covered by this chunk
    pub fn b(&self) -> Option<TextSpan<'a>> {
        self.b
    }

    /// Classify the chunk
    pub fn kind(&self) -> ChunkKind {
        self.kind
    }

    /// Check if this chunk is a run of matched characters
    pub fn are_equal(&self) -> bool {
        self.kind == ChunkKind::Equal
    }

    /// Character offsets and lengths of both sides
    pub fn span(&self) -> ChunkSpan {
        let to_span = |t: &TextSpan<'a>| Span::new(t.offset, t.len);
        ChunkSpan {
            kind: self.kind,
            a: self.a.as_ref().map(to_span),
            b: self.b.as_ref().map(to_span),
        }
    }
}

/// Builder for character-level comparisons
#[derive(Debug, Clone, Copy, Default)]
pub struct StringDiffConfig {
    comparer: CharComparer,
}

impl StringDiffConfig {
    /// Set how characters are compared
    pub fn comparer(mut self, comparer: CharComparer) -> Self {
        self.comparer = comparer;
        self
    }

    /// Compare two strings with this configuration
    pub fn diff<'a>(&self, a: &'a str, b: &'a str) -> StringDifferences<'a> {
        let comparer = self.comparer;
        StringDifferences::with_comparer(a, b, move |x: &char, y: &char| {
            comparer.matches(*x, *y)
        })
    }
}

/// The character-by-character comparison of two strings
#[derive(Debug, Clone)]
pub struct StringDifferences<'a> {
    a: &'a str,
    b: &'a str,
    chunks: Vec<StringChunk<'a>>,
}

impl<'a> StringDifferences<'a> {
    /// Compare two strings character by character
    pub fn new(a: &'a str, b: &'a str) -> Self {
        Self::configure().diff(a, b)
    }

    /// Start configuring a comparison
    pub fn configure() -> StringDiffConfig {
        StringDiffConfig::default()
    }

    /// Compare two strings, treating characters as the same when `eq` holds
    pub fn with_comparer<F>(a: &'a str, b: &'a str, eq: F) -> Self
    where
        F: Fn(&char, &char) -> bool,
    {
        let chars_a: Vec<char> = a.chars().collect();
        let chars_b: Vec<char> = b.chars().collect();
        let bounds_a = char_boundaries(a);
        let bounds_b = char_boundaries(b);

        let differences = Differences::with_comparer(&chars_a, &chars_b, eq);
        let chunks = differences
            .iter()
            .map(Chunk::span)
            .map(|span| StringChunk {
                kind: span.kind,
                a: span.a.map(|s| TextSpan::new(a, &bounds_a, s)),
                b: span.b.map(|s| TextSpan::new(b, &bounds_b, s)),
            })
            .collect();

        Self { a, b, chunks }
    }

    /// The first string
    pub fn a(&self) -> &'a str {
        self.a
    }

    /// The second string
    pub fn b(&self) -> &'a str {
        self.b
    }

    /// Get the chunks
    pub fn chunks(&self) -> &[StringChunk<'a>] {
        &self.chunks
    }

    /// Get the number of chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Check if there are no chunks (both strings empty)
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Get a chunk by index
    pub fn get(&self, index: usize) -> Option<&StringChunk<'a>> {
        self.chunks.get(index)
    }

    /// Iterate over the chunks
    pub fn iter(&self) -> std::slice::Iter<'_, StringChunk<'a>> {
        self.chunks.iter()
    }

    /// Check if the strings are the same under the comparer
    pub fn are_equal(&self) -> bool {
        self.chunks.iter().all(StringChunk::are_equal)
    }

    /// Character counts of this comparison
    pub fn stats(&self) -> DiffStats {
        DiffStats::from_spans(self.chunks.iter().map(StringChunk::span))
    }
}

impl<'a> Index<usize> for StringDifferences<'a> {
    type Output = StringChunk<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.chunks[index]
    }
}

impl<'s, 'a> IntoIterator for &'s StringDifferences<'a> {
    type Item = &'s StringChunk<'a>;
    type IntoIter = std::slice::Iter<'s, StringChunk<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_boundaries_multibyte() {
        assert_eq!(char_boundaries("aé🚀"), vec![0, 1, 3, 7]);
        assert_eq!(char_boundaries(""), vec![0]);
    }

    #[test]
    fn test_ignore_case_comparer() {
        assert!(CharComparer::IgnoreCase.matches('A', 'a'));
        assert!(CharComparer::IgnoreCase.matches('Σ', 'σ'));
        assert!(!CharComparer::Exact.matches('A', 'a'));
    }

    #[test]
    fn test_text_spans_count_characters() {
        let diff = StringDifferences::new("héllo", "hallo");

        assert_eq!(diff[1].kind(), ChunkKind::Deleted);
        let a = diff[1].a().unwrap();
        assert_eq!(a.text, "é");
        assert_eq!((a.offset, a.len), (1, 1));
        assert_eq!(diff[2].kind(), ChunkKind::Inserted);
        assert_eq!(diff[2].b().unwrap().text, "a");
        assert_eq!(diff[3].a().unwrap().text, "llo");
        assert_eq!(diff[3].a().unwrap().offset, 2);
    }
}
