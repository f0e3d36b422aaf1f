// src/fft/core.rs
//
// The radix-2 Cooley-Tukey butterfly and its precomputed tables. This is a
// direct generalization of the teacher's `radix_2_dit_fft_core`: same
// bit-reversal construction and same in-place stage loop, but operating on
// split `real`/`imag` slices of `f64` instead of an interleaved
// `Complex32` slice, and with one twiddle table per stage (as spec'd)
// instead of a single N/2 table indexed with a stride.

use alloc::vec::Vec;
use core::f64::consts::PI;

#[cfg(feature = "std")]
fn sin_cos(angle: f64) -> (f64, f64) {
    (angle.sin(), angle.cos())
}

#[cfg(not(feature = "std"))]
fn sin_cos(angle: f64) -> (f64, f64) {
    (libm::sin(angle), libm::cos(angle))
}

/// Bit-reversal permutation table for `n` (a power of two). `rev[i]` is `i`
/// with its `log2(n)`-bit representation reversed.
pub(crate) fn precompute_bitrev(n: usize) -> Vec<usize> {
    let mut rev = alloc::vec![0usize; n];
    let mut j = 0;
    for i in 1..n {
        let mut k = n >> 1;
        while j >= k {
            j -= k;
            k >>= 1;
        }
        j += k;
        rev[i] = j;
    }
    rev
}

/// Per-stage twiddle tables. Stage `s` (0-indexed here, `s+1` in spec
/// terms) has `m = 2^(s+1)` and holds `m/2` entries
/// `(cos(-2*pi*k/m), sin(-2*pi*k/m))` for `k` in `[0, m/2)`.
pub(crate) fn precompute_stage_twiddles(n: usize) -> Vec<Vec<(f64, f64)>> {
    let stages = n.trailing_zeros() as usize;
    (1..=stages)
        .map(|s| {
            let m = 1usize << s;
            let half = m / 2;
            (0..half)
                .map(|k| {
                    let angle = -2.0 * PI * (k as f64) / (m as f64);
                    let (sin, cos) = sin_cos(angle);
                    (cos, sin)
                })
                .collect()
        })
        .collect()
}

/// Runs the in-place butterfly stages over an already bit-reversed buffer.
/// `inverse` flips the twiddle sign (the forward tables encode
/// `exp(-2*pi*i*k/m)`) and triggers the final `1/n` normalization.
pub(crate) fn butterfly_in_place(
    real: &mut [f64],
    imag: &mut [f64],
    stage_twiddles: &[Vec<(f64, f64)>],
    inverse: bool,
) {
    let n = real.len();
    let sign = if inverse { -1.0 } else { 1.0 };

    for (s, twiddles) in stage_twiddles.iter().enumerate() {
        let m = 1usize << (s + 1);
        let half = m / 2;
        let mut base = 0;
        while base < n {
            for j in 0..half {
                let (wc, ws) = twiddles[j];
                let w_im = sign * ws;

                let k = base + j;
                let k2 = k + half;

                let (br, bi) = (real[k2], imag[k2]);
                let t_re = wc * br - w_im * bi;
                let t_im = wc * bi + w_im * br;

                let (ar, ai) = (real[k], imag[k]);
                real[k] = ar + t_re;
                imag[k] = ai + t_im;
                real[k2] = ar - t_re;
                imag[k2] = ai - t_im;
            }
            base += m;
        }
    }

    if inverse {
        let scale = 1.0 / (n as f64);
        for v in real.iter_mut() {
            *v *= scale;
        }
        for v in imag.iter_mut() {
            *v *= scale;
        }
    }
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
