//! Error type shared by every classifier and reader in this crate.
use thiserror::Error;


/// Errors returned by the classifiers and the sample readers.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// The training data (or a parameter derived from it) is unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The computation hit a division by zero or an all-zero likelihood.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// The classifier was asked to predict before `train()` completed.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A test instance does not have as many features as the training data.
    #[error("expected {expected} features, got {got}")]
    DimensionMismatch {
        /// Number of features seen during training.
        expected: usize,
        /// Number of features of the offending instance.
        got: usize,
    },

    /// Training was interrupted through the interrupt flag.
    #[error("training interrupted")]
    Interrupted,

    /// A file could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A CSV row could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number in the source.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// A `polars` conversion failed.
    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),
}


/// Result type for the operations of this crate.
pub type Result<T> = std::result::Result<T, ClassifierError>;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ClassifierError::Configuration("empty training set".into());
        assert!(format!("{err}").contains("empty training set"));

        let err = ClassifierError::DimensionMismatch { expected: 3, got: 2 };
        assert_eq!(format!("{err}"), "expected 3 features, got 2");

        let err = ClassifierError::Parse { line: 4, message: "bad".into() };
        assert!(format!("{err}").contains("line 4"));
    }
}
