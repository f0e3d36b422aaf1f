// src/buffer.rs
//
// The split-buffer complex vector shared by the FFT kernel, the arithmetic
// layer, and the spectrum pipeline: a pair of equal-length `f64` sequences
// rather than an interleaved `Complex<f64>` slice, so that the arithmetic
// layer can operate pairwise over contiguous `real`/`imag` slices and so
// conjugate-symmetry checks can compare halves of each part directly.

use alloc::vec;
use alloc::vec::Vec;

/// A complex vector stored as two parallel `f64` slices of equal length.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexBuffer {
    pub real: Vec<f64>,
    pub imag: Vec<f64>,
}

impl ComplexBuffer {
    /// A buffer of `len` zeros in both parts.
    pub fn zeros(len: usize) -> Self {
        Self {
            real: vec![0.0; len],
            imag: vec![0.0; len],
        }
    }

    /// A buffer of `len` elements, all equal to the scalar `(re, im)`.
    pub fn filled(len: usize, re: f64, im: f64) -> Self {
        Self {
            real: vec![re; len],
            imag: vec![im; len],
        }
    }

    /// Builds a buffer with zero imaginary part from a real-valued slice.
    pub fn from_real(real: &[f64]) -> Self {
        Self {
            real: real.to_vec(),
            imag: vec![0.0; real.len()],
        }
    }

    pub fn len(&self) -> usize {
        self.real.len()
    }

    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }

    /// Resets every element to zero in place, keeping the current length.
    pub fn zero(&mut self) {
        self.real.iter_mut().for_each(|v| *v = 0.0);
        self.imag.iter_mut().for_each(|v| *v = 0.0);
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
