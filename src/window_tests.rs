use super::*;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "mismatch: {} vs {}", a, b);
}

#[test]
fn size_zero_is_invalid() {
    assert_eq!(window(WindowKind::Rect, 0).unwrap_err(), FftError::InvalidSize);
}

#[test]
fn size_one_is_always_one() {
    for kind in [
        WindowKind::Rect,
        WindowKind::Hann,
        WindowKind::Hamming,
        WindowKind::Blackman,
    ] {
        assert_eq!(window(kind, 1).unwrap(), vec![1.0]);
    }
}

#[test]
fn rect_is_all_ones() {
    assert_eq!(window(WindowKind::Rect, 5).unwrap(), vec![1.0; 5]);
}

#[test]
fn hann_endpoints_are_zero() {
    let w = window(WindowKind::Hann, 8).unwrap();
    assert_close(w[0], 0.0);
    assert_close(w[7], 0.0);
}

#[test]
fn hann_is_symmetric() {
    let w = window(WindowKind::Hann, 9).unwrap();
    for i in 0..w.len() {
        assert_close(w[i], w[w.len() - 1 - i]);
    }
}

#[test]
fn hamming_endpoints_match_closed_form() {
    let w = window(WindowKind::Hamming, 8).unwrap();
    assert_close(w[0], 0.08);
    assert_close(w[7], 0.08);
}

#[test]
fn blackman_endpoints_match_closed_form() {
    let w = window(WindowKind::Blackman, 8).unwrap();
    assert_close(w[0], 0.42 - 0.5 + 0.08);
    assert_close(w[7], 0.42 - 0.5 + 0.08);
}

#[test]
fn unknown_window_name_is_rejected() {
    assert_eq!(WindowKind::parse("blackman-harris").unwrap_err(), FftError::UnknownWindow);
    assert_eq!(WindowKind::parse("hann").unwrap(), WindowKind::Hann);
}

#[test]
fn apply_window_multiplies_elementwise() {
    let input = [1.0, 2.0, 3.0, 4.0];
    let w = [1.0, 0.5, 0.0, 2.0];
    let out = apply_window(&input, &w).unwrap();
    assert_eq!(out, vec![1.0, 1.0, 0.0, 8.0]);
}

#[test]
fn apply_window_rejects_length_mismatch() {
    let input = [1.0, 2.0, 3.0];
    let w = [1.0, 1.0];
    assert_eq!(apply_window(&input, &w).unwrap_err(), FftError::InvalidLength);
}
