use derive_more::Display;

/// Errors raised while setting up a comparison.
///
/// All validation happens before any alignment work starts, so a failed
/// constructor never leaves a partially computed result behind.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DiffError {
    /// A window `offset..offset + len` does not fit inside a sequence of
    /// length `bound`
    #[display(
        fmt = "window at offset {} with length {} is out of range for length {}",
        offset,
        len,
        bound
    )]
    OutOfRange {
        offset: usize,
        len: usize,
        bound: usize,
    },

    /// A caller supplied argument was rejected
    #[display(fmt = "invalid argument `{}`: {}", name, reason)]
    InvalidArgument { name: &'static str, reason: String },
}

impl std::error::Error for DiffError {}

impl DiffError {
    /// Wrap a window failure as a rejected argument named `name`.
    pub(crate) fn argument(name: &'static str, source: DiffError) -> Self {
        DiffError::InvalidArgument {
            name,
            reason: source.to_string(),
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, DiffError>;
