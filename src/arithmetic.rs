// src/arithmetic.rs
//
// Elementwise complex-vector algebra over `ComplexBuffer`. Every op has an
// allocating form (returns a fresh buffer) and a write-into form. The
// write-into form mutates its first operand in place and treats it as the
// output — the only way to let the output genuinely alias an input in safe
// Rust is to make the aliased operand and the output the same binding, so
// `add_into(a, b)` computes `a[i] += b[i]` rather than taking a third,
// independently-borrowed `out` parameter that a caller could never actually
// alias with `a` or `b` past the borrow checker.

use crate::buffer::ComplexBuffer;
use crate::common::FftError;
use alloc::vec::Vec;

#[cfg(feature = "std")]
fn hypot(re: f64, im: f64) -> f64 {
    re.hypot(im)
}
#[cfg(not(feature = "std"))]
fn hypot(re: f64, im: f64) -> f64 {
    libm::hypot(re, im)
}

#[cfg(feature = "std")]
fn atan2(im: f64, re: f64) -> f64 {
    im.atan2(re)
}
#[cfg(not(feature = "std"))]
fn atan2(im: f64, re: f64) -> f64 {
    libm::atan2(im, re)
}

fn check_len(a: &ComplexBuffer, b: &ComplexBuffer) -> Result<(), FftError> {
    if a.len() != b.len() {
        Err(FftError::InvalidLength)
    } else {
        Ok(())
    }
}

/// `out[i] = a[i] * s`
pub fn scale(a: &ComplexBuffer, s: f64) -> ComplexBuffer {
    let mut out = a.clone();
    scale_into(&mut out, s);
    out
}

pub fn scale_into(a: &mut ComplexBuffer, s: f64) {
    for v in a.real.iter_mut() {
        *v *= s;
    }
    for v in a.imag.iter_mut() {
        *v *= s;
    }
}

/// `out[i] = a[i] + b[i]`
pub fn add(a: &ComplexBuffer, b: &ComplexBuffer) -> Result<ComplexBuffer, FftError> {
    let mut out = a.clone();
    add_into(&mut out, b)?;
    Ok(out)
}

pub fn add_into(a: &mut ComplexBuffer, b: &ComplexBuffer) -> Result<(), FftError> {
    check_len(a, b)?;
    for i in 0..a.len() {
        a.real[i] += b.real[i];
        a.imag[i] += b.imag[i];
    }
    Ok(())
}

/// `out[i] = a[i] - b[i]`
pub fn sub(a: &ComplexBuffer, b: &ComplexBuffer) -> Result<ComplexBuffer, FftError> {
    let mut out = a.clone();
    sub_into(&mut out, b)?;
    Ok(out)
}

pub fn sub_into(a: &mut ComplexBuffer, b: &ComplexBuffer) -> Result<(), FftError> {
    check_len(a, b)?;
    for i in 0..a.len() {
        a.real[i] -= b.real[i];
        a.imag[i] -= b.imag[i];
    }
    Ok(())
}

/// Hadamard product: `(ar*br - ai*bi) + i(ar*bi + ai*br)`.
pub fn mul(a: &ComplexBuffer, b: &ComplexBuffer) -> Result<ComplexBuffer, FftError> {
    let mut out = a.clone();
    mul_into(&mut out, b)?;
    Ok(out)
}

pub fn mul_into(a: &mut ComplexBuffer, b: &ComplexBuffer) -> Result<(), FftError> {
    check_len(a, b)?;
    for i in 0..a.len() {
        let (ar, ai) = (a.real[i], a.imag[i]);
        let (br, bi) = (b.real[i], b.imag[i]);
        a.real[i] = ar * br - ai * bi;
        a.imag[i] = ar * bi + ai * br;
    }
    Ok(())
}

/// Multiplies every element by the complex scalar `(re, im)`.
pub fn mul_scalar(a: &ComplexBuffer, re: f64, im: f64) -> ComplexBuffer {
    let mut out = a.clone();
    mul_scalar_into(&mut out, re, im);
    out
}

pub fn mul_scalar_into(a: &mut ComplexBuffer, re: f64, im: f64) {
    for i in 0..a.len() {
        let (ar, ai) = (a.real[i], a.imag[i]);
        a.real[i] = ar * re - ai * im;
        a.imag[i] = ar * im + ai * re;
    }
}

/// `(ar*br + ai*bi + i(ai*br - ar*bi)) / (br^2 + bi^2)`. Division by a
/// complex zero is not guarded; it produces IEEE-754 `inf`/`NaN`.
pub fn div(a: &ComplexBuffer, b: &ComplexBuffer) -> Result<ComplexBuffer, FftError> {
    let mut out = a.clone();
    div_into(&mut out, b)?;
    Ok(out)
}

pub fn div_into(a: &mut ComplexBuffer, b: &ComplexBuffer) -> Result<(), FftError> {
    check_len(a, b)?;
    for i in 0..a.len() {
        let (ar, ai) = (a.real[i], a.imag[i]);
        let (br, bi) = (b.real[i], b.imag[i]);
        let denom = br * br + bi * bi;
        a.real[i] = (ar * br + ai * bi) / denom;
        a.imag[i] = (ai * br - ar * bi) / denom;
    }
    Ok(())
}

/// Equivalent to `mul_scalar(a, re/(re^2+im^2), -im/(re^2+im^2))`.
pub fn div_scalar(a: &ComplexBuffer, re: f64, im: f64) -> ComplexBuffer {
    let denom = re * re + im * im;
    mul_scalar(a, re / denom, -im / denom)
}

pub fn div_scalar_into(a: &mut ComplexBuffer, re: f64, im: f64) {
    let denom = re * re + im * im;
    mul_scalar_into(a, re / denom, -im / denom);
}

/// `(ar, -ai)`
pub fn conj(a: &ComplexBuffer) -> ComplexBuffer {
    let mut out = a.clone();
    conj_into(&mut out);
    out
}

pub fn conj_into(a: &mut ComplexBuffer) {
    for v in a.imag.iter_mut() {
        *v = -*v;
    }
}

/// `hypot(ar, ai)`, elementwise. Uses `hypot` rather than
/// `sqrt(ar*ar+ai*ai)` to avoid premature overflow on large magnitudes.
pub fn mag(a: &ComplexBuffer) -> Vec<f64> {
    a.real
        .iter()
        .zip(a.imag.iter())
        .map(|(&r, &i)| hypot(r, i))
        .collect()
}

pub fn mag_into(out: &mut [f64], a: &ComplexBuffer) -> Result<(), FftError> {
    if out.len() != a.len() {
        return Err(FftError::InvalidLength);
    }
    for (o, (&r, &i)) in out.iter_mut().zip(a.real.iter().zip(a.imag.iter())) {
        *o = hypot(r, i);
    }
    Ok(())
}

/// `atan2(ai, ar)`, elementwise.
pub fn arg(a: &ComplexBuffer) -> Vec<f64> {
    a.real
        .iter()
        .zip(a.imag.iter())
        .map(|(&r, &i)| atan2(i, r))
        .collect()
}

pub fn arg_into(out: &mut [f64], a: &ComplexBuffer) -> Result<(), FftError> {
    if out.len() != a.len() {
        return Err(FftError::InvalidLength);
    }
    for (o, (&r, &i)) in out.iter_mut().zip(a.real.iter().zip(a.imag.iter())) {
        *o = atan2(i, r);
    }
    Ok(())
}

/// A deep copy of `a`.
pub fn copy(a: &ComplexBuffer) -> ComplexBuffer {
    a.clone()
}

pub fn copy_into(out: &mut ComplexBuffer, a: &ComplexBuffer) -> Result<(), FftError> {
    if out.len() != a.len() {
        return Err(FftError::InvalidLength);
    }
    out.real.copy_from_slice(&a.real);
    out.imag.copy_from_slice(&a.imag);
    Ok(())
}

/// A fresh all-zero buffer of length `len`.
pub fn zero(len: usize) -> ComplexBuffer {
    ComplexBuffer::zeros(len)
}

pub fn zero_into(out: &mut ComplexBuffer) {
    out.zero();
}

#[cfg(test)]
#[path = "arithmetic_tests.rs"]
mod tests;
