// src/window.rs

use crate::common::FftError;
use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::PI;

#[cfg(feature = "std")]
fn cos(angle: f64) -> f64 {
    angle.cos()
}
#[cfg(not(feature = "std"))]
fn cos(angle: f64) -> f64 {
    libm::cos(angle)
}

/// The window shapes offered by the Power ladder's `window()` builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Rect,
    Hann,
    Hamming,
    Blackman,
}

impl WindowKind {
    /// Parses the options vocabulary's `window_type` strings.
    pub fn parse(name: &str) -> Result<Self, FftError> {
        match name {
            "rect" => Ok(WindowKind::Rect),
            "hann" => Ok(WindowKind::Hann),
            "hamming" => Ok(WindowKind::Hamming),
            "blackman" => Ok(WindowKind::Blackman),
            _ => Err(FftError::UnknownWindow),
        }
    }
}

impl Default for WindowKind {
    fn default() -> Self {
        WindowKind::Rect
    }
}

/// Builds a length-`n` window of the given kind. `n == 1` always returns
/// `[1.0]`; `n == 0` fails with `InvalidSize`.
pub fn window(kind: WindowKind, n: usize) -> Result<Vec<f64>, FftError> {
    if n == 0 {
        return Err(FftError::InvalidSize);
    }
    if n == 1 {
        return Ok(vec![1.0]);
    }

    let denom = (n - 1) as f64;
    let coeffs = match kind {
        WindowKind::Rect => vec![1.0; n],
        WindowKind::Hann => (0..n)
            .map(|i| 0.5 * (1.0 - cos(2.0 * PI * (i as f64) / denom)))
            .collect(),
        WindowKind::Hamming => (0..n)
            .map(|i| 0.54 - 0.46 * cos(2.0 * PI * (i as f64) / denom))
            .collect(),
        WindowKind::Blackman => (0..n)
            .map(|i| {
                let phase = (i as f64) / denom;
                0.42 - 0.5 * cos(2.0 * PI * phase) + 0.08 * cos(4.0 * PI * phase)
            })
            .collect(),
    };
    Ok(coeffs)
}

/// `out[i] = input[i] * w[i]`. Fails with `InvalidLength` on mismatch.
pub fn apply_window(input: &[f64], w: &[f64]) -> Result<Vec<f64>, FftError> {
    if input.len() != w.len() {
        return Err(FftError::InvalidLength);
    }
    Ok(input.iter().zip(w.iter()).map(|(x, w)| x * w).collect())
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;
