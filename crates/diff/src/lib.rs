// Sequence alignment for Chunk Diff
// This crate computes the chunks that turn one sequence into another using
// Myers' O((N+M)D) shortest edit script search.

mod chunk;
mod differences;
mod engine;
mod error;
mod line_diff;
mod string_diff;
mod window;

pub use chunk::{Chunk, ChunkKind, ChunkSpan, Span};
pub use differences::{DiffStats, Differences};
pub use error::{DiffError, Result};
pub use line_diff::{
    split_lines, Line, LineChunk, LineDiffConfig, LineDifferences, LineRun, LineTerminators,
};
pub use string_diff::{CharComparer, StringChunk, StringDiffConfig, StringDifferences, TextSpan};
pub use window::Window;
