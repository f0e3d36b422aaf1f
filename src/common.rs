// src/common.rs

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum FftError {
    /// Construction of a `Plan` with a size that isn't a positive power of
    /// two, or a `Window` with a non-positive size.
    InvalidSize,
    /// An input or output buffer's length didn't match the length a call
    /// required.
    InvalidLength,
    /// A numeric option outside its valid domain, e.g. a non-positive
    /// sample rate.
    InvalidArgument,
    /// A window type name that isn't one of the supported variants.
    UnknownWindow,
}

use core::fmt;

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::InvalidSize => write!(f, "size must be a positive power of two"),
            FftError::InvalidLength => write!(f, "buffer length does not match the expected size"),
            FftError::InvalidArgument => write!(f, "argument is outside its valid domain"),
            FftError::UnknownWindow => write!(f, "unrecognized window type"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}
