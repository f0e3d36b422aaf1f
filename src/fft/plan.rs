// src/fft/plan.rs

use super::core::{butterfly_in_place, precompute_bitrev, precompute_stage_twiddles};
use crate::buffer::ComplexBuffer;
use crate::common::FftError;
use alloc::vec::Vec;

/// An immutable radix-2 Cooley-Tukey plan for a fixed power-of-two `size`:
/// a bit-reversal permutation and one twiddle table per stage, built once
/// and reusable across any number of `forward`/`forward_complex`/`inverse`
/// calls at that size.
#[derive(Debug, Clone)]
pub struct Plan {
    size: usize,
    rev: Vec<usize>,
    stage_twiddles: Vec<Vec<(f64, f64)>>,
}

impl Plan {
    /// Builds a plan for `size`. `size` must be a positive power of two.
    pub fn new(size: usize) -> Result<Self, FftError> {
        if size == 0 || !size.is_power_of_two() {
            return Err(FftError::InvalidSize);
        }
        Ok(Self {
            size,
            rev: precompute_bitrev(size),
            stage_twiddles: precompute_stage_twiddles(size),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Forward DFT of a real-valued input (imaginary part taken as zero).
    /// Unnormalized, matching `forward_complex`.
    pub fn forward(
        &self,
        input: &[f64],
        out: Option<ComplexBuffer>,
    ) -> Result<ComplexBuffer, FftError> {
        if input.len() != self.size {
            return Err(FftError::InvalidLength);
        }
        let mut out = self.prepare_output(out)?;
        for (i, &x) in input.iter().enumerate() {
            let j = self.rev[i];
            out.real[j] = x;
            out.imag[j] = 0.0;
        }
        butterfly_in_place(&mut out.real, &mut out.imag, &self.stage_twiddles, false);
        Ok(out)
    }

    /// Forward DFT of a complex-valued input. Unnormalized.
    pub fn forward_complex(
        &self,
        input: &ComplexBuffer,
        out: Option<ComplexBuffer>,
    ) -> Result<ComplexBuffer, FftError> {
        if input.len() != self.size {
            return Err(FftError::InvalidLength);
        }
        let mut out = self.prepare_output(out)?;
        self.scatter_complex(input, &mut out);
        butterfly_in_place(&mut out.real, &mut out.imag, &self.stage_twiddles, false);
        Ok(out)
    }

    /// Inverse DFT, normalized by `1/size` so that `inverse(forward(x))`
    /// recovers `x` to within floating-point error.
    pub fn inverse(
        &self,
        input: &ComplexBuffer,
        out: Option<ComplexBuffer>,
    ) -> Result<ComplexBuffer, FftError> {
        if input.len() != self.size {
            return Err(FftError::InvalidLength);
        }
        let mut out = self.prepare_output(out)?;
        self.scatter_complex(input, &mut out);
        butterfly_in_place(&mut out.real, &mut out.imag, &self.stage_twiddles, true);
        Ok(out)
    }

    fn scatter_complex(&self, input: &ComplexBuffer, out: &mut ComplexBuffer) {
        for i in 0..self.size {
            let j = self.rev[i];
            out.real[j] = input.real[i];
            out.imag[j] = input.imag[i];
        }
    }

    fn prepare_output(&self, out: Option<ComplexBuffer>) -> Result<ComplexBuffer, FftError> {
        match out {
            Some(buf) => {
                if buf.len() != self.size {
                    return Err(FftError::InvalidLength);
                }
                Ok(buf)
            }
            None => Ok(ComplexBuffer::zeros(self.size)),
        }
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
