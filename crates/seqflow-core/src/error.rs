use thiserror::Error;

/// Canonical result for seqflow.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("argument '{name}' out of range: {reason}")]
    ArgumentOutOfRange { name: &'static str, reason: String },

    #[error("index {index} is out of range")]
    IndexOutOfRange { index: usize },

    #[error("sequence contains no matching element")]
    EmptySequence,

    #[error("sequence contains more than one matching element")]
    MultipleElements,

    #[error("duplicate key produced by element at index {index}")]
    DuplicateKey { index: usize },

    #[error("operation was canceled")]
    OperationCanceled,

    #[error("invalid configuration: {0}")]
    Config(String),

    // Blocking worker of an async helper was cancelled or aborted. Callback
    // panics are resumed on the caller, never mapped here.
    #[error("materialization worker failed: {0}")]
    Worker(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
