//! Validating wrappers around the batch root extractors.
//!
//! The hot-path functions in [`crate::roots`] and [`crate::select`] never
//! signal errors: degenerate input silently propagates as non-finite or
//! numerically meaningless output. The wrappers here trade a little speed
//! for explicit `Result`s, rejecting bad buffer shapes and degenerate
//! numeric conditions before (or after) they turn into garbage output.

use crate::roots::{try_monic_poly_roots, try_poly_roots};
use crate::select::{select_positive_real, DEFAULT_IMAG_BOUND};

/// Error type for the checked batch operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RootError {
    /// A buffer's length does not match the stated batch shape
    DimensionMismatch {
        /// Which buffer is wrong ("input" or "output")
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },
    /// `num_col` does not describe a polynomial of degree >= 1, or is not
    /// the fixed size a specialized selector requires
    UnsupportedShape { num_col: usize },
    /// A row's leading coefficient is zero or below the tolerance; dividing
    /// by it would produce non-finite companion-matrix entries
    ZeroLeadingCoefficient { row: usize, value: f64 },
    /// The eigendecomposition did not converge for a row
    EigenFailure { row: usize },
    /// No eigenvalue of a row had a strictly positive real part within the
    /// imaginary bound, so the selector would have fallen back silently
    NoPositiveRealRoot { row: usize },
    /// A NaN or infinity appeared in a row's computed output
    NonFiniteOutput { row: usize },
}

impl std::fmt::Display for RootError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RootError::DimensionMismatch {
                buffer,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{} buffer has {} values, batch shape requires {}",
                    buffer, actual, expected
                )
            }
            RootError::UnsupportedShape { num_col } => {
                write!(f, "unsupported row width {} for this operation", num_col)
            }
            RootError::ZeroLeadingCoefficient { row, value } => {
                write!(
                    f,
                    "row {} has zero or near-zero leading coefficient {:e}",
                    row, value
                )
            }
            RootError::EigenFailure { row } => {
                write!(f, "eigendecomposition failed to converge for row {}", row)
            }
            RootError::NoPositiveRealRoot { row } => {
                write!(f, "row {} has no eigenvalue with positive real part", row)
            }
            RootError::NonFiniteOutput { row } => {
                write!(f, "row {} produced non-finite output values", row)
            }
        }
    }
}

impl std::error::Error for RootError {}

fn check_shapes(
    input_len: usize,
    output_len: usize,
    num_rows: usize,
    num_col: usize,
    out_per_row: usize,
) -> Result<(), RootError> {
    let expected_in = num_rows * num_col;
    if input_len != expected_in {
        return Err(RootError::DimensionMismatch {
            buffer: "input",
            expected: expected_in,
            actual: input_len,
        });
    }
    let expected_out = num_rows * out_per_row;
    if output_len != expected_out {
        return Err(RootError::DimensionMismatch {
            buffer: "output",
            expected: expected_out,
            actual: output_len,
        });
    }
    Ok(())
}

/// Checked variant of [`crate::roots::find_roots`].
///
/// Validates buffer shapes up front, rejects rows whose leading-coefficient
/// magnitude is at or below `lead_tol` (`None` uses machine epsilon), and
/// scans each row's computed roots for non-finite values. The output buffer
/// is filled row by row; on error, rows before the failing one have already
/// been written.
///
/// # Examples
///
/// ```
/// use polyroots::checked::{find_roots_checked, RootError};
///
/// // Second row has a zero leading coefficient.
/// let input = vec![-1.0, 0.0, 1.0, 1.0, 2.0, 0.0];
/// let mut output = vec![0.0; 8];
/// let err = find_roots_checked(&input, 2, 3, &mut output, None).unwrap_err();
/// assert!(matches!(err, RootError::ZeroLeadingCoefficient { row: 1, .. }));
/// ```
pub fn find_roots_checked(
    input: &[f64],
    num_rows: usize,
    num_col: usize,
    output: &mut [f64],
    lead_tol: Option<f64>,
) -> Result<(), RootError> {
    if num_col < 2 {
        return Err(RootError::UnsupportedShape { num_col });
    }
    let num_roots = num_col - 1;
    check_shapes(input.len(), output.len(), num_rows, num_col, 2 * num_roots)?;
    let tol = lead_tol.unwrap_or(f64::EPSILON);

    for (row, coeffs) in input.chunks_exact(num_col).enumerate() {
        let leading = coeffs[num_roots];
        if leading.abs() <= tol {
            return Err(RootError::ZeroLeadingCoefficient {
                row,
                value: leading,
            });
        }
        let roots = try_poly_roots(coeffs).map_err(|_| RootError::EigenFailure { row })?;
        let out = &mut output[2 * row * num_roots..2 * (row + 1) * num_roots];
        for (j, root) in roots.iter().enumerate() {
            if !root.re.is_finite() || !root.im.is_finite() {
                return Err(RootError::NonFiniteOutput { row });
            }
            out[2 * j] = root.re;
            out[2 * j + 1] = root.im;
        }
    }
    Ok(())
}

/// Checked variant of the specialized single-positive-root selectors.
///
/// Accepts `num_col` of 3 (cubic) or 4 (quartic) and applies the same
/// nearest-to-real selection policy as the flat-buffer functions, except
/// that the silent index-0 fallback becomes [`RootError::NoPositiveRealRoot`]
/// and a non-finite selected value becomes [`RootError::NonFiniteOutput`].
/// `imag_bound` replaces the default sentinel
/// ([`DEFAULT_IMAG_BOUND`]) when tighter screening is wanted.
pub fn single_positive_roots_checked(
    input: &[f64],
    num_rows: usize,
    num_col: usize,
    output: &mut [f64],
    imag_bound: Option<f64>,
) -> Result<(), RootError> {
    if num_col != 3 && num_col != 4 {
        return Err(RootError::UnsupportedShape { num_col });
    }
    check_shapes(input.len(), output.len(), num_rows, num_col, 1)?;
    let bound = imag_bound.unwrap_or(DEFAULT_IMAG_BOUND);

    for (row, coeffs) in input.chunks_exact(num_col).enumerate() {
        let roots = try_monic_poly_roots(coeffs).map_err(|_| RootError::EigenFailure { row })?;
        let selection = select_positive_real(&roots.to_vec(), bound);
        if !selection.matched {
            return Err(RootError::NoPositiveRealRoot { row });
        }
        if !selection.value.is_finite() {
            return Err(RootError::NonFiniteOutput { row });
        }
        output[row] = selection.value;
    }
    Ok(())
}
