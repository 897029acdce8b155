use std::ops::{Index, Range};

use ropey::Rope;

use crate::chunk::{Chunk, ChunkKind, ChunkSpan, Span};
use crate::differences::{DiffStats, Differences};

/// What happens to line terminators when two lines are compared.
///
/// Terminators always stay part of the line text handed back in chunks, so
/// the original strings can be rebuilt from the chunks either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineTerminators {
    /// Terminators take part in the comparison: `"a\n"` differs from `"a"`
    /// and from `"a\r\n"`
    Retain,

    /// Terminators are ignored by the comparison
    #[default]
    Strip,
}

/// One line of a compared string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line number (0-based)
    pub index: usize,

    /// The full line including its terminator
    pub text: &'a str,

    /// The line without its terminator
    pub content: &'a str,

    /// Character position of the line start in the original string
    pub offset: usize,

    /// Number of characters in `text`
    pub len: usize,

    /// Byte position of the line start in the original string
    pub byte_offset: usize,
}

/// Split `text` into lines.
///
/// A line ends after LF, CRLF, CR, VT, FF, NEL, LS or PS. A trailing
/// terminator does not start an extra empty line, and the empty string has
/// no lines.
pub fn split_lines(text: &str) -> Vec<Line<'_>> {
    let rope = Rope::from_str(text);
    let mut lines = Vec::with_capacity(rope.len_lines());

    for i in 0..rope.len_lines() {
        let start = rope.line_to_byte(i);
        let end = rope.line_to_byte(i + 1);
        if start == end {
            continue;
        }

        let line_text = &text[start..end];
        let offset = rope.line_to_char(i);
        lines.push(Line {
            index: lines.len(),
            text: line_text,
            content: strip_terminator(line_text),
            offset,
            len: rope.line_to_char(i + 1) - offset,
            byte_offset: start,
        });
    }

    lines
}

fn strip_terminator(line: &str) -> &str {
    if let Some(content) = line.strip_suffix("\r\n") {
        return content;
    }
    match line.chars().next_back() {
        Some(c) if is_line_break(c) => &line[..line.len() - c.len_utf8()],
        _ => line,
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{0B}' | '\u{0C}' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// A run of consecutive lines on one side of a chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRun<'a> {
    /// The covered text, terminators included
    pub text: &'a str,

    /// Index of the first covered line
    pub first_line: usize,

    /// Number of covered lines
    pub line_count: usize,

    /// Character position of the run in the original string
    pub offset: usize,

    /// Number of characters covered
    pub len: usize,
}

impl<'a> LineRun<'a> {
    fn new(source: &'a str, lines: &[Line<'a>], span: Span) -> Self {
        let first = &lines[span.offset];
        let last = &lines[span.end() - 1];
        Self {
            text: &source[first.byte_offset..last.byte_offset + last.text.len()],
            first_line: span.offset,
            line_count: span.len,
            offset: first.offset,
            len: last.offset + last.len - first.offset,
        }
    }

    /// Line indices covered by this run
    pub fn lines(&self) -> Range<usize> {
        self.first_line..self.first_line + self.line_count
    }
}

/// A line-level chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineChunk<'a> {
    kind: ChunkKind,
    a: Option<LineRun<'a>>,
    b: Option<LineRun<'a>>,
}

impl<'a> LineChunk<'a> {
    /// The lines of the first string covered by this chunk
    pub fn a(&self) -> Option<LineRun<'a>> {
        self.a
    }

    /// The lines of the second string covered by this chunk
    pub fn b(&self) -> Option<LineRun<'a>> {
        self.b
    }

    /// Classify the chunk
    pub fn kind(&self) -> ChunkKind {
        self.kind
    }

    /// Check if this chunk is a run of matched lines
    pub fn are_equal(&self) -> bool {
        self.kind == ChunkKind::Equal
    }

    /// Line indices and counts of both sides
    pub fn span(&self) -> ChunkSpan {
        let to_span = |run: &LineRun<'a>| Span::new(run.first_line, run.line_count);
        ChunkSpan {
            kind: self.kind,
            a: self.a.as_ref().map(to_span),
            b: self.b.as_ref().map(to_span),
        }
    }
}

/// Builder for line-level comparisons
#[derive(Debug, Clone, Copy, Default)]
pub struct LineDiffConfig {
    terminators: LineTerminators,
    ignore_case: bool,
    ignore_whitespace: bool,
}

impl LineDiffConfig {
    /// Set how line terminators are compared
    pub fn terminators(mut self, terminators: LineTerminators) -> Self {
        self.terminators = terminators;
        self
    }

    /// Compare lines without regard to letter case
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Compare lines with all whitespace removed, terminators included
    pub fn ignore_whitespace(mut self, ignore_whitespace: bool) -> Self {
        self.ignore_whitespace = ignore_whitespace;
        self
    }

    /// Check if two lines count as the same under this configuration
    pub fn lines_match(&self, a: &Line<'_>, b: &Line<'_>) -> bool {
        let (a, b) = match self.terminators {
            LineTerminators::Retain => (a.text, b.text),
            LineTerminators::Strip => (a.content, b.content),
        };

        let ignore_whitespace = self.ignore_whitespace;
        let visible = move |text: &str| {
            text.chars()
                .filter(move |c| !(ignore_whitespace && c.is_whitespace()))
                .collect::<Vec<char>>()
        };

        match (self.ignore_case, ignore_whitespace) {
            (false, false) => a == b,
            (false, true) => visible(a) == visible(b),
            (true, _) => visible(a)
                .into_iter()
                .flat_map(char::to_lowercase)
                .eq(visible(b).into_iter().flat_map(char::to_lowercase)),
        }
    }

    /// Compare two strings line by line with this configuration
    pub fn diff<'a>(&self, a: &'a str, b: &'a str) -> LineDifferences<'a> {
        let config = *self;
        LineDifferences::with_comparer(a, b, move |x: &Line<'_>, y: &Line<'_>| {
            config.lines_match(x, y)
        })
    }
}

/// The line-by-line comparison of two strings
#[derive(Debug, Clone)]
pub struct LineDifferences<'a> {
    lines_a: Vec<Line<'a>>,
    lines_b: Vec<Line<'a>>,
    chunks: Vec<LineChunk<'a>>,
}

impl<'a> LineDifferences<'a> {
    /// Compare two strings line by line, ignoring terminators
    pub fn new(a: &'a str, b: &'a str) -> Self {
        Self::configure().diff(a, b)
    }

    /// Start configuring a comparison
    pub fn configure() -> LineDiffConfig {
        LineDiffConfig::default()
    }

    /// Compare two strings line by line, treating lines as the same when
    /// `eq` holds
    pub fn with_comparer<F>(a: &'a str, b: &'a str, eq: F) -> Self
    where
        F: Fn(&Line<'a>, &Line<'a>) -> bool,
    {
        let lines_a = split_lines(a);
        let lines_b = split_lines(b);

        let chunks = Differences::with_comparer(&lines_a, &lines_b, eq)
            .iter()
            .map(Chunk::span)
            .map(|span| LineChunk {
                kind: span.kind,
                a: span.a.map(|s| LineRun::new(a, &lines_a, s)),
                b: span.b.map(|s| LineRun::new(b, &lines_b, s)),
            })
            .collect();

        Self {
            lines_a,
            lines_b,
            chunks,
        }
    }

    /// The lines of the first string
    pub fn lines_a(&self) -> &[Line<'a>] {
        &self.lines_a
    }

    /// The lines of the second string
    pub fn lines_b(&self) -> &[Line<'a>] {
        &self.lines_b
    }

    /// Get the chunks
    pub fn chunks(&self) -> &[LineChunk<'a>] {
        &self.chunks
    }

    /// Get the number of chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Check if there are no chunks (neither string has a line)
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Get a chunk by index
    pub fn get(&self, index: usize) -> Option<&LineChunk<'a>> {
        self.chunks.get(index)
    }

    /// Iterate over the chunks
    pub fn iter(&self) -> std::slice::Iter<'_, LineChunk<'a>> {
        self.chunks.iter()
    }

    /// Check if the strings are the same line for line
    pub fn are_equal(&self) -> bool {
        self.chunks.iter().all(LineChunk::are_equal)
    }

    /// Line counts of this comparison
    pub fn stats(&self) -> DiffStats {
        DiffStats::from_spans(self.chunks.iter().map(LineChunk::span))
    }
}

impl<'a> Index<usize> for LineDifferences<'a> {
    type Output = LineChunk<'a>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.chunks[index]
    }
}

impl<'s, 'a> IntoIterator for &'s LineDifferences<'a> {
    type Item = &'s LineChunk<'a>;
    type IntoIter = std::slice::Iter<'s, LineChunk<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.chunks.iter()
    }
}
