// src/spectrum.rs
//
// The top-level Beginner-ladder entry point: frame assembly, windowing,
// forward transform, amplitude scaling, phase extraction, frequency-axis
// construction, and non-DC-preferred peak detection, built on top of the
// FFT Kernel (`crate::fft`), Complex Arithmetic (`crate::arithmetic`) and
// Window (`crate::window`) layers.

use crate::arithmetic;
use crate::buffer::ComplexBuffer;
use crate::common::FftError;
use crate::fft::Plan;
use crate::window::{self, WindowKind};
use alloc::vec;
use alloc::vec::Vec;

/// One-sided (`N/2 + 1` bins, folded-in negative-frequency energy doubled)
/// or two-sided (all `N` bins, no doubling) amplitude spectrum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sides {
    One,
    Two,
}

impl Sides {
    pub fn parse(name: &str) -> Result<Self, FftError> {
        match name {
            "one" => Ok(Sides::One),
            "two" => Ok(Sides::Two),
            _ => Err(FftError::InvalidArgument),
        }
    }

    fn output_len(self, fft_size: usize) -> usize {
        match self {
            Sides::One => fft_size / 2 + 1,
            Sides::Two => fft_size,
        }
    }
}

impl Default for Sides {
    fn default() -> Self {
        Sides::One
    }
}

/// Options for `spectrum()`. `fft_size` defaults to the next power of two
/// at or above `samples.len()` (minimum 1); `window` defaults to
/// rectangular; `sides` defaults to one-sided.
#[derive(Debug, Clone, Copy)]
pub struct SpectrumOptions {
    pub sample_rate: f64,
    pub fft_size: Option<usize>,
    pub window: WindowKind,
    pub sides: Sides,
}

impl Default for SpectrumOptions {
    fn default() -> Self {
        Self {
            sample_rate: 1.0,
            fft_size: None,
            window: WindowKind::default(),
            sides: Sides::default(),
        }
    }
}

/// The dominant non-DC tone, selected per the rule in §4.4: DC only wins
/// when every other bin is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    pub index: usize,
    pub frequency: f64,
    pub amplitude: f64,
    pub phase: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumResult {
    pub frequencies: Vec<f64>,
    pub amplitude: Vec<f64>,
    pub phase: Vec<f64>,
    pub peak: Peak,
}

fn next_pow2_at_least_one(n: usize) -> usize {
    if n <= 1 {
        1
    } else {
        n.next_power_of_two()
    }
}

fn build_frame(samples: &[f64], fft_size: usize) -> Vec<f64> {
    let mut frame = vec![0.0; fft_size];
    let copy_len = fft_size.min(samples.len());
    frame[..copy_len].copy_from_slice(&samples[..copy_len]);
    frame
}

/// `freq[k] = k * sample_rate / size` for `k` in `[0, M)`, where `M`
/// depends on `sides`. `sample_rate` and `size` must both be positive.
pub fn bin_frequencies(size: usize, sample_rate: f64, sides: Sides) -> Result<Vec<f64>, FftError> {
    if size == 0 || sample_rate <= 0.0 {
        return Err(FftError::InvalidArgument);
    }
    let m = sides.output_len(size);
    Ok((0..m).map(|k| (k as f64) * sample_rate / (size as f64)).collect())
}

/// Elementwise magnitude of a complex spectrum (Power ladder alias for
/// `crate::arithmetic::mag`).
pub fn magnitude(x: &ComplexBuffer) -> Vec<f64> {
    arithmetic::mag(x)
}

/// Elementwise phase of a complex spectrum (Power ladder alias for
/// `crate::arithmetic::arg`).
pub fn phase(x: &ComplexBuffer) -> Vec<f64> {
    arithmetic::arg(x)
}

/// Circular half-shift of a real sequence by `floor(N/2)`, moving the
/// zero-frequency bin to the middle of the sequence.
pub fn fft_shift_real(x: &[f64]) -> Vec<f64> {
    let n = x.len();
    if n == 0 {
        return Vec::new();
    }
    let shift = n / 2;
    (0..n).map(|i| x[(i + shift) % n]).collect()
}

/// Circular half-shift of a complex sequence by `floor(N/2)`.
pub fn fft_shift_complex(x: &ComplexBuffer) -> ComplexBuffer {
    let n = x.len();
    if n == 0 {
        return ComplexBuffer::zeros(0);
    }
    let shift = n / 2;
    ComplexBuffer {
        real: (0..n).map(|i| x.real[(i + shift) % n]).collect(),
        imag: (0..n).map(|i| x.imag[(i + shift) % n]).collect(),
    }
}

fn scale_amplitude(mag: &[f64], fft_size: usize, sides: Sides) -> Vec<f64> {
    let n = fft_size as f64;
    match sides {
        Sides::One => {
            let m = sides.output_len(fft_size);
            let nyquist = if fft_size % 2 == 0 {
                Some(fft_size / 2)
            } else {
                None
            };
            (0..m)
                .map(|k| {
                    if k == 0 || Some(k) == nyquist {
                        mag[k] / n
                    } else {
                        2.0 * mag[k] / n
                    }
                })
                .collect()
        }
        Sides::Two => mag.iter().map(|&m| m / n).collect(),
    }
}

/// Scans bins `k >= 1` for the largest amplitude; DC (`k == 0`) wins only
/// when every bin from `k >= 1` is zero (the all-zero or pure-DC case).
fn detect_peak(amp: &[f64]) -> usize {
    let mut max_index = 0usize;
    let mut max_value = amp[0];
    let mut non_dc_index = 0usize;
    let mut non_dc_value = f64::NEG_INFINITY;
    let mut has_non_dc = false;

    for (k, &value) in amp.iter().enumerate().skip(1) {
        if value > max_value {
            max_value = value;
            max_index = k;
        }
        if value > non_dc_value {
            non_dc_value = value;
            non_dc_index = k;
        }
        if value > 0.0 {
            has_non_dc = true;
        }
    }

    if has_non_dc {
        non_dc_index
    } else {
        max_index
    }
}

/// Assembles a length-`fft_size` frame from `samples` (zero-padding or
/// truncating), windows it, runs the forward transform, and returns the
/// scaled amplitude/phase spectrum plus the detected peak.
pub fn spectrum(samples: &[f64], options: &SpectrumOptions) -> Result<SpectrumResult, FftError> {
    if options.sample_rate <= 0.0 {
        return Err(FftError::InvalidArgument);
    }

    let fft_size = options
        .fft_size
        .unwrap_or_else(|| next_pow2_at_least_one(samples.len()));

    let frame = build_frame(samples, fft_size);
    let w = window::window(options.window, fft_size)?;
    let windowed = window::apply_window(&frame, &w)?;

    let plan = Plan::new(fft_size)?;
    let spectrum_bins = plan.forward(&windowed, None)?;

    let full_mag = arithmetic::mag(&spectrum_bins);
    let full_phase = arithmetic::arg(&spectrum_bins);

    let m = options.sides.output_len(fft_size);
    let amplitude = scale_amplitude(&full_mag, fft_size, options.sides);
    let phase_bins: Vec<f64> = full_phase[..m].to_vec();
    let frequencies = bin_frequencies(fft_size, options.sample_rate, options.sides)?;

    let peak_index = detect_peak(&amplitude);
    let peak = Peak {
        index: peak_index,
        frequency: frequencies[peak_index],
        amplitude: amplitude[peak_index],
        phase: phase_bins[peak_index],
    };

    Ok(SpectrumResult {
        frequencies,
        amplitude,
        phase: phase_bins,
        peak,
    })
}

#[cfg(test)]
#[path = "spectrum_tests.rs"]
mod tests;
