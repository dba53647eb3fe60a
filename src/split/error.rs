use thiserror::Error;

/// Errors produced by [`DelimitedSplitter::split`](super::DelimitedSplitter::split).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    #[error("unbalanced delimiters in '{input}': {depth} left open")]
    UnbalancedDelimiters { input: String, depth: usize },

    #[error("unbalanced delimiters in '{input}': unexpected '{found}' at offset {offset}")]
    UnexpectedClose {
        input: String,
        found: char,
        offset: usize,
    },
}
