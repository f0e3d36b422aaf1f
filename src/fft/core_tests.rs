use super::*;
use alloc::vec;
use alloc::vec::Vec;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "mismatch: {} vs {}", a, b);
}

#[test]
fn bitrev_matches_known_permutation_for_8() {
    // Same permutation the teacher's test pins for N=8.
    let rev = precompute_bitrev(8);
    assert_eq!(rev, vec![0, 4, 2, 6, 1, 5, 3, 7]);
}

#[test]
fn bitrev_size_one_is_identity() {
    assert_eq!(precompute_bitrev(1), vec![0]);
}

#[test]
fn stage_twiddles_have_spec_shaped_lengths() {
    let tables = precompute_stage_twiddles(8);
    // log2(8) = 3 stages, lengths 1, 2, 4.
    assert_eq!(tables.len(), 3);
    assert_eq!(tables[0].len(), 1);
    assert_eq!(tables[1].len(), 2);
    assert_eq!(tables[2].len(), 4);
}

#[test]
fn stage_twiddles_match_known_angles_for_8() {
    let tables = precompute_stage_twiddles(8);
    // Final stage, m=8: cos(-2*pi*k/8), sin(-2*pi*k/8) for k=0..4
    let sqrt2_2 = core::f64::consts::SQRT_2 / 2.0;
    assert_close(tables[2][0].0, 1.0);
    assert_close(tables[2][0].1, 0.0);
    assert_close(tables[2][1].0, sqrt2_2);
    assert_close(tables[2][1].1, -sqrt2_2);
    assert_close(tables[2][2].0, 0.0);
    assert_close(tables[2][2].1, -1.0);
    assert_close(tables[2][3].0, -sqrt2_2);
    assert_close(tables[2][3].1, -sqrt2_2);
}

#[test]
fn butterfly_dc_signal_concentrates_energy_in_bin_zero() {
    let n = 4;
    let rev = precompute_bitrev(n);
    let tables = precompute_stage_twiddles(n);

    let mut real = vec![1.0; n];
    let mut imag = vec![0.0; n];
    // Scatter (identity input, all-ones is scatter-invariant).
    let scattered_real: Vec<f64> = (0..n).map(|i| real[rev[i]]).collect();
    let _ = scattered_real; // all ones either way
    butterfly_in_place(&mut real, &mut imag, &tables, false);

    assert_close(real[0], 4.0);
    assert_close(imag[0], 0.0);
    for k in 1..n {
        assert_close(real[k], 0.0);
        assert_close(imag[k], 0.0);
    }

    butterfly_in_place(&mut real, &mut imag, &tables, true);
    for k in 0..n {
        assert_close(real[k], 1.0);
        assert_close(imag[k], 0.0);
    }
}
