use thiserror::Error;

// All failures are reported before or during generation; a caller
// never observes a partially filled grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerrainError {
    #[error("invalid seed: {0}")]
    InvalidSeed(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("non-finite vertex component at index {index}")]
    NumericOverflow { index: usize },
}
