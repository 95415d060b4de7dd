use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CronError {
    /// Expression text doesn't match the grammar.
    ///
    /// `position` is a byte offset into the source text, `expected` describes
    /// what the parser was looking for at that position.
    #[error("syntax error at position {position}: expected {expected}")]
    Syntax {
        /// Byte offset of the offending input.
        position: usize,
        /// Human-readable description of the accepted input.
        expected: String,
    },
    /// Syntactically valid value which can't be evaluated, i.e. repeating pattern with zero step.
    #[error("invalid value: {0}")]
    Domain(String),
}

impl CronError {
    pub(crate) fn syntax(position: usize, expected: impl Into<String>) -> Self {
        Self::Syntax {
            position,
            expected: expected.into(),
        }
    }
}
