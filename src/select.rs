//! Single-positive-root extraction for cubic and quartic polynomials.
//!
//! These routines exist for callers that know, ahead of time, that each
//! polynomial in the batch is monic and has exactly one positive real root.
//! Floating-point noise means that root rarely reports an exactly-zero
//! imaginary part from the eigendecomposition (an imaginary component below
//! 1e-16 is common for a mathematically real root), so equality against zero
//! is never tested. Instead, among the eigenvalues with strictly positive
//! real part, the one whose imaginary part is closest to zero is taken as
//! the intended root.

use num_complex::Complex64;
use rayon::prelude::*;

use crate::roots::monic_poly_roots;

/// Default upper bound on the winning root's imaginary-part magnitude.
///
/// The selection scan only considers candidates whose |imag| is strictly
/// below the current best, seeded with this bound. The true root of a
/// well-conditioned input sits many orders of magnitude below it.
pub const DEFAULT_IMAG_BOUND: f64 = 1.0;

/// Outcome of one nearest-to-real positive-root selection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Selection {
    /// Index of the chosen eigenvalue, in decomposition order
    pub index: usize,
    /// Real part of the chosen eigenvalue (the reported root)
    pub value: f64,
    /// Imaginary-part magnitude of the chosen eigenvalue, for diagnostics
    pub imag_magnitude: f64,
    /// False if no eigenvalue had a strictly positive real part and an
    /// imaginary magnitude below the bound; `index` is then the fallback 0
    pub matched: bool,
}

/// Selects the near-real eigenvalue with positive real part.
///
/// Scans `eigenvalues` in order. Each eigenvalue whose real part is strictly
/// greater than zero and whose imaginary-part magnitude is strictly below
/// the best seen so far (seeded with `imag_bound`) becomes the new
/// candidate. Strict comparison means the first of two equally close
/// candidates wins.
///
/// If no eigenvalue qualifies, the result falls back to index 0 with
/// `matched == false`; the caller decides whether that is an error (the
/// flat-buffer batch functions emit it silently, `checked` rejects it).
///
/// `eigenvalues` must be non-empty.
pub fn select_positive_real(eigenvalues: &[Complex64], imag_bound: f64) -> Selection {
    let mut best_match = 0;
    let mut smallest_imag_so_far = imag_bound;
    let mut matched = false;
    for (j, eig) in eigenvalues.iter().enumerate() {
        if eig.re > 0.0 && eig.im.abs() < smallest_imag_so_far {
            smallest_imag_so_far = eig.im.abs();
            best_match = j;
            matched = true;
        }
    }
    Selection {
        index: best_match,
        value: eigenvalues[best_match].re,
        imag_magnitude: eigenvalues[best_match].im.abs(),
        matched,
    }
}

fn single_positive_roots(input: &[f64], num_rows: usize, num_col: usize, output: &mut [f64]) {
    if num_col == 0 {
        return;
    }
    input
        .par_chunks_exact(num_col)
        .take(num_rows)
        .zip(output.par_iter_mut())
        .for_each(|(row, out)| {
            let roots = monic_poly_roots(row);
            *out = select_positive_real(&roots.to_vec(), DEFAULT_IMAG_BOUND).value;
        });
}

/// Extracts the single positive real root of each monic cubic in a batch.
///
/// # Arguments
///
/// * `input` - `num_rows * num_col` values, row-major, `num_col` fixed at 3.
///   Column `i` of a row holds the coefficient of xⁱ; the leading
///   coefficient is implicitly 1 and not read from the buffer.
/// * `num_rows` - Number of polynomials in the batch
/// * `num_col` - Values per row (3)
/// * `output` - `num_rows` values, one selected real root per row
///
/// # Precondition
///
/// Each row's polynomial must have exactly one positive real root. This is
/// not checked: a row violating it still produces a value, chosen by the
/// [`select_positive_real`] policy, with no defined meaning. In particular,
/// when no eigenvalue has a positive real part the real part of eigenvalue 0
/// is emitted regardless of sign — a silent fallback, not an error signal.
/// Use [`crate::checked::single_positive_roots_checked`] to surface that
/// case instead.
pub fn single_pos_special_cubic(input: &[f64], num_rows: usize, num_col: usize, output: &mut [f64]) {
    single_positive_roots(input, num_rows, num_col, output);
}

/// Extracts the single positive real root of each monic quartic in a batch.
///
/// Identical to [`single_pos_special_cubic`] except `num_col` is fixed at 4;
/// the selection policy and its precondition are shared.
pub fn single_pos_special_quartic(
    input: &[f64],
    num_rows: usize,
    num_col: usize,
    output: &mut [f64],
) {
    single_positive_roots(input, num_rows, num_col, output);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_selects_nearest_to_real_among_positive() {
        let eigs = [c(-1.0, 1e-18), c(2.0, 3e-10), c(4.0, 0.5)];
        let sel = select_positive_real(&eigs, DEFAULT_IMAG_BOUND);
        assert_eq!(sel.index, 1);
        assert_eq!(sel.value, 2.0);
        assert_eq!(sel.imag_magnitude, 3e-10);
        assert!(sel.matched);
    }

    #[test]
    fn test_negative_real_parts_never_considered() {
        // The negative candidate is far closer to real, but must lose.
        let eigs = [c(-5.0, 0.0), c(1.0, 1e-3)];
        let sel = select_positive_real(&eigs, DEFAULT_IMAG_BOUND);
        assert_eq!(sel.index, 1);
        assert!(sel.matched);
    }

    #[test]
    fn test_fallback_when_no_positive_real_part() {
        let eigs = [c(-1.0, 0.0), c(-2.0, 0.5), c(-3.0, -0.5)];
        let sel = select_positive_real(&eigs, DEFAULT_IMAG_BOUND);
        assert_eq!(sel.index, 0);
        assert_eq!(sel.value, -1.0);
        assert!(!sel.matched);
    }

    #[test]
    fn test_fallback_when_positive_candidate_exceeds_bound() {
        // Positive real part but |imag| above the bound: no update happens.
        let eigs = [c(-1.0, 0.0), c(3.0, 2.0)];
        let sel = select_positive_real(&eigs, DEFAULT_IMAG_BOUND);
        assert_eq!(sel.index, 0);
        assert!(!sel.matched);
    }

    #[test]
    fn test_tie_break_first_encountered_wins() {
        // Strict < comparison: the later equally-close candidate does not
        // overwrite the earlier one.
        let eigs = [c(1.0, 0.5), c(2.0, -0.5), c(3.0, 0.5)];
        let sel = select_positive_real(&eigs, DEFAULT_IMAG_BOUND);
        assert_eq!(sel.index, 0);
        assert_eq!(sel.value, 1.0);
    }

    #[test]
    fn test_custom_bound_tightens_selection() {
        let eigs = [c(1.0, 0.1), c(2.0, 1e-12)];
        let tight = select_positive_real(&eigs, 1e-6);
        assert_eq!(tight.index, 1);
        assert!(tight.matched);

        let very_tight = select_positive_real(&eigs, 1e-15);
        assert!(!very_tight.matched);
        assert_eq!(very_tight.index, 0);
    }
}
