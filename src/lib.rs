#![no_std]
//! A `no_std` radix-2 Cooley-Tukey FFT over power-of-two sequences, a
//! split-buffer complex-vector algebra layer, and a windowed
//! amplitude/phase spectrum pipeline with peak detection.
//!
//! Three ladders: [`spectrum()`] for a one-call amplitude/phase/peak
//! bundle, [`Plan`]/[`window()`]/[`apply_window()`]/[`magnitude()`]/
//! [`phase()`]/[`fft_shift_real()`]/[`fft_shift_complex()`]/
//! [`bin_frequencies()`] for callers assembling their own pipeline, and the
//! [`fft`] and [`arithmetic`] modules directly for write-into, allocation-free
//! control over every step.

// Enables the standard library when the `std` feature is on (the default,
// for `f64::{sin,cos,atan2,hypot}` and `std::error::Error`) and always for
// tests, so `cargo test` works normally even if a caller builds us with
// `--no-default-features`.
#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub mod arithmetic;
pub mod buffer;
pub mod common;
pub mod fft;
pub mod spectrum;
pub mod window;

// Beginner ladder.
pub use spectrum::{spectrum, Peak, Sides, SpectrumOptions, SpectrumResult};

// Power ladder.
pub use fft::Plan;
pub use spectrum::{bin_frequencies, fft_shift_complex, fft_shift_real, magnitude, phase};
pub use window::{apply_window, window, WindowKind};

// Expert ladder: `Plan::{forward, forward_complex, inverse}` and every
// `arithmetic::*` op (both allocating and write-into forms) are public in
// their own modules already; re-exported here only where a flat top-level
// path reads better for callers reaching past the pipeline.
pub use buffer::ComplexBuffer;
pub use common::FftError;
