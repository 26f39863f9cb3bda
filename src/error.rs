use thiserror::Error;

/// Failures surfaced by the bulk entry points and method-code parsing.
/// The scalar kernels themselves never signal: out-of-range values saturate
/// (or wrap, for the shift rescale) inline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    #[error("unsupported rounding method code {0} (valid codes are 2..=9)")]
    UnsupportedMethod(i32),

    #[error("unsupported scale/round mode code {0} (valid codes are 0..=3)")]
    UnsupportedTmpMethod(i32),

    #[error("array shape mismatch: expected {expected} elements, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("lookup table too small: kernel addresses {needed} entries, table has {got}")]
    TableTooSmall { needed: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, KernelError>;
