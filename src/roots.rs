//! General batch root extraction.
//!
//! Each coefficient row is mapped to its companion matrix and handed to
//! LAPACK's DGEEV (through the `ndarray-linalg` `EigVals` trait); the
//! eigenvalues are the polynomial's roots. No ordering of the returned roots
//! is guaranteed beyond "whatever LAPACK produces for this input", and a
//! mathematically real root may carry floating-point noise in its imaginary
//! part.

use ndarray::Array1;
use ndarray_linalg::error::LinalgError;
use ndarray_linalg::EigVals;
use num_complex::Complex64;
use rayon::prelude::*;

use crate::companion::{companion_from_row, monic_companion_from_row};

pub(crate) fn try_poly_roots(coeffs: &[f64]) -> Result<Array1<Complex64>, LinalgError> {
    companion_from_row(coeffs).eigvals()
}

pub(crate) fn try_monic_poly_roots(coeffs: &[f64]) -> Result<Array1<Complex64>, LinalgError> {
    monic_companion_from_row(coeffs).eigvals()
}

/// Computes all complex roots of one polynomial.
///
/// `coeffs` holds the coefficients in increasing powers of x, with the
/// leading coefficient last; the polynomial has degree `coeffs.len() - 1`
/// and that many roots are returned. The leading coefficient must be
/// non-zero, otherwise the result is non-finite.
///
/// If the eigendecomposition fails to converge the returned roots are all
/// NaN; this function never panics on degenerate numeric input.
///
/// # Examples
///
/// ```
/// use polyroots::roots::poly_roots;
///
/// // x^2 - 1
/// let roots = poly_roots(&[-1.0, 0.0, 1.0]);
/// assert_eq!(roots.len(), 2);
/// assert!(roots.iter().all(|r| r.im.abs() < 1e-9));
/// ```
pub fn poly_roots(coeffs: &[f64]) -> Array1<Complex64> {
    if coeffs.len() < 2 {
        return Array1::from_vec(Vec::new());
    }
    try_poly_roots(coeffs)
        .unwrap_or_else(|_| Array1::from_elem(coeffs.len() - 1, Complex64::new(f64::NAN, f64::NAN)))
}

/// Computes all complex roots of one monic polynomial.
///
/// Every entry of `coeffs` is a sub-leading coefficient; the leading
/// coefficient is implicitly 1, so a degree-n polynomial is given by n
/// values. Failure behavior matches [`poly_roots`].
pub fn monic_poly_roots(coeffs: &[f64]) -> Array1<Complex64> {
    if coeffs.is_empty() {
        return Array1::from_vec(Vec::new());
    }
    try_monic_poly_roots(coeffs)
        .unwrap_or_else(|_| Array1::from_elem(coeffs.len(), Complex64::new(f64::NAN, f64::NAN)))
}

/// Extracts every root of every polynomial in a batch.
///
/// # Arguments
///
/// * `input` - `num_rows * num_col` values, row-major: row `r` column `c` at
///   offset `r * num_col + c`. Each row is one polynomial in increasing
///   powers of x with the leading coefficient in the last column.
/// * `num_rows` - Number of polynomials in the batch
/// * `num_col` - Values per row; the polynomial degree is `num_col - 1`
/// * `output` - `num_rows * 2 * (num_col - 1)` values. Row `i`'s root `j`
///   lands at offset `2*i*num_roots + 2*j` (real part) and the next offset
///   (imaginary part), in exactly the order the eigendecomposition returned
///   them. No sorting or filtering is applied.
///
/// Rows are independent, so the batch is processed as a parallel map with
/// one freshly allocated companion matrix per row.
///
/// No error is raised for degenerate input: a zero leading coefficient or a
/// non-converging decomposition shows up as non-finite output values only.
/// See [`crate::checked::find_roots_checked`] for a validating variant.
pub fn find_roots(input: &[f64], num_rows: usize, num_col: usize, output: &mut [f64]) {
    if num_col < 2 {
        return;
    }
    let num_roots = num_col - 1;
    input
        .par_chunks_exact(num_col)
        .take(num_rows)
        .zip(output.par_chunks_exact_mut(2 * num_roots))
        .for_each(|(row, out)| {
            let roots = poly_roots(row);
            for (j, root) in roots.iter().enumerate() {
                out[2 * j] = root.re;
                out[2 * j + 1] = root.im;
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poly_roots_linear() {
        // 2x - 6: single root at 3
        let roots = poly_roots(&[-6.0, 2.0]);
        assert_eq!(roots.len(), 1);
        assert!((roots[0].re - 3.0).abs() < 1e-12);
        assert!(roots[0].im.abs() < 1e-12);
    }

    #[test]
    fn test_poly_roots_empty_for_constant() {
        let roots = poly_roots(&[5.0]);
        assert_eq!(roots.len(), 0);
    }

    #[test]
    fn test_monic_poly_roots_cubic() {
        // x^3 - 8: real root 2, complex pair at -1 ± i*sqrt(3)
        let roots = monic_poly_roots(&[-8.0, 0.0, 0.0]);
        assert_eq!(roots.len(), 3);

        let real_root = roots
            .iter()
            .find(|r| r.im.abs() < 1e-9)
            .expect("x^3 - 8 has one real root");
        assert!((real_root.re - 2.0).abs() < 1e-9);

        for r in roots.iter().filter(|r| r.im.abs() >= 1e-9) {
            assert!((r.re + 1.0).abs() < 1e-9);
            assert!((r.im.abs() - 3.0_f64.sqrt()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_find_roots_short_circuit_on_degenerate_shape() {
        let input = vec![1.0, 2.0];
        let mut output = vec![7.0; 2];
        find_roots(&input, 2, 1, &mut output);
        // Degree-0 rows have no roots; the output is untouched.
        assert_eq!(output, vec![7.0, 7.0]);
    }
}
