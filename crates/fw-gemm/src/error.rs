use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GemmError {
    #[error("gemm dimension mismatch: [{m}x{k}] @ [{k2}x{n}]")]
    DimensionMismatch {
        m: usize,
        k: usize,
        k2: usize,
        n: usize,
    },
    #[error("invalid dimension {what}={value}: {reason}")]
    InvalidDimension {
        what: &'static str,
        value: usize,
        reason: &'static str,
    },
    #[error("buffer for {operand} too small: need {required} elements, got {got}")]
    BufferTooSmall {
        operand: &'static str,
        required: usize,
        got: usize,
    },
    #[error("buffer length mismatch: expected {expected} elements, got {got}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GemmError>;
