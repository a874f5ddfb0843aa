/// Error type for asking questions.
#[derive(Debug, thiserror::Error)]
pub enum QavError {
    /// User cancelled input (Ctrl+C, end of input, etc.)
    #[error("Input cancelled by user")]
    Cancelled,

    /// Removal of a sub-question that was never added.
    #[error("'{0}' is not a sub-question of this question")]
    NotASubquestion(String),

    /// Removal of a question that is not part of the set.
    #[error("'{0}' is not part of this question set")]
    NotInSet(String),

    /// Input source failure (I/O, terminal crash, exhausted script, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl QavError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
