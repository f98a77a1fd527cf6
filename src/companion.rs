//! Companion-matrix construction from polynomial coefficient rows.
//!
//! A companion matrix of a monic degree-n polynomial is the n×n matrix whose
//! characteristic polynomial equals that polynomial, so its eigenvalues are
//! exactly the polynomial's roots. The layout used here places 1.0 on the
//! subdiagonal and the negated (normalized) coefficients in the last column.

use ndarray::Array2;

/// Builds the companion matrix of a polynomial given as one coefficient row.
///
/// `coeffs` holds `num_col` values in increasing powers of x: index `i`
/// (0 ≤ i < num_col-1) is the coefficient of xⁱ, index `num_col-1` is the
/// leading coefficient. The result is a `(num_col-1) × (num_col-1)` matrix:
///
/// ```text
/// entry (r, c) = 1.0                      when r == c + 1
/// entry (r, n-1) = -coeffs[r] / leading   (last column, n = num_col - 1)
/// entry (r, c) = 0.0                      otherwise
/// ```
///
/// The matrix is allocated zero-filled and every non-zero entry is assigned
/// explicitly, so no entry can carry a stale value from a previous row.
///
/// A zero leading coefficient is not validated here: the division produces
/// ±infinity or NaN entries, which propagate through the eigendecomposition
/// as non-finite roots. Avoiding that is the caller's responsibility (see
/// `checked::find_roots_checked` for a validating variant).
///
/// # Examples
///
/// ```
/// use polyroots::companion::companion_from_row;
///
/// // x^2 - 1: coefficients [-1, 0, 1]
/// let m = companion_from_row(&[-1.0, 0.0, 1.0]);
/// assert_eq!(m[(1, 0)], 1.0);
/// assert_eq!(m[(0, 1)], 1.0); // -(-1)/1
/// assert_eq!(m[(1, 1)], 0.0);
/// ```
pub fn companion_from_row(coeffs: &[f64]) -> Array2<f64> {
    let num_roots = coeffs.len() - 1;
    let leading = coeffs[num_roots];
    let mut m = Array2::zeros((num_roots, num_roots));
    for r in 0..num_roots {
        if r > 0 {
            m[(r, r - 1)] = 1.0;
        }
        m[(r, num_roots - 1)] = -coeffs[r] / leading;
    }
    m
}

/// Builds the companion matrix of a monic polynomial.
///
/// Every entry of `coeffs` is a sub-leading coefficient (index `i` holds the
/// coefficient of xⁱ); the leading coefficient is implicitly 1 and no
/// division is performed. The result is a `coeffs.len() × coeffs.len()`
/// matrix with the same structure as [`companion_from_row`].
///
/// This is the fixed-size path used by the cubic/quartic single-root
/// selectors, where the caller guarantees a monic polynomial.
pub fn monic_companion_from_row(coeffs: &[f64]) -> Array2<f64> {
    let num_roots = coeffs.len();
    let mut m = Array2::zeros((num_roots, num_roots));
    for r in 0..num_roots {
        if r > 0 {
            m[(r, r - 1)] = 1.0;
        }
        m[(r, num_roots - 1)] = -coeffs[r];
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_structure_degree_3() {
        // 2x^3 + 4x^2 + 6x + 8: normalized column is [-4, -3, -2]
        let m = companion_from_row(&[8.0, 6.0, 4.0, 2.0]);
        assert_eq!(m.shape(), &[3, 3]);

        // Subdiagonal
        assert_eq!(m[(1, 0)], 1.0);
        assert_eq!(m[(2, 1)], 1.0);

        // Last column: -coeff[r] / leading
        assert_eq!(m[(0, 2)], -4.0);
        assert_eq!(m[(1, 2)], -3.0);
        assert_eq!(m[(2, 2)], -2.0);

        // Everything else zero
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(0, 1)], 0.0);
        assert_eq!(m[(1, 1)], 0.0);
        assert_eq!(m[(2, 0)], 0.0);
    }

    #[test]
    fn test_monic_structure_degree_4() {
        let m = monic_companion_from_row(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.shape(), &[4, 4]);

        assert_eq!(m[(1, 0)], 1.0);
        assert_eq!(m[(2, 1)], 1.0);
        assert_eq!(m[(3, 2)], 1.0);

        assert_eq!(m[(0, 3)], -1.0);
        assert_eq!(m[(1, 3)], -2.0);
        assert_eq!(m[(2, 3)], -3.0);
        assert_eq!(m[(3, 3)], -4.0);

        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(3, 0)], 0.0);
        assert_eq!(m[(0, 1)], 0.0);
    }

    #[test]
    fn test_normalization_by_leading_coefficient() {
        // 2x^2 + 5x + 6: last column is [-3, -2.5]
        let m = companion_from_row(&[6.0, 5.0, 2.0]);
        assert_eq!(m[(1, 0)], 1.0);
        assert_eq!(m[(0, 1)], -3.0);
        assert_eq!(m[(1, 1)], -2.5);
    }

    #[test]
    fn test_zero_leading_coefficient_is_non_finite() {
        let m = companion_from_row(&[1.0, 2.0, 0.0]);
        assert!(m.iter().any(|v| !v.is_finite()));
    }
}
