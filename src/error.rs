use thiserror::Error;

/// Error types for the stablekmeans library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KMeansError {
    /// Empty dataset, k < 1, empty center set, or an assignment vector whose
    /// length disagrees with the dataset
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Points or centers of differing dimensionality within one call
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Model has not been fitted yet
    #[error("Model has not been fitted. Call train() or fit() first.")]
    NotFitted,
}
