use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

// Contract violations raised by the classification core.
// None of these are recoverable inside the crate; they propagate to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Dimension mismatch: {left} pixels compared against {right} pixels")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Classifier has no training observations")]
    UntrainedModel,

    #[error("Cannot evaluate an empty dataset")]
    EmptyDataset,
}
