//! polyroots: batch polynomial root extraction via companion matrices
//!
//! This crate finds the roots of batches of univariate polynomials with real
//! coefficients. Each polynomial is mapped to its companion matrix, whose
//! eigenvalues (computed by LAPACK's DGEEV via ndarray-linalg) are exactly the
//! polynomial's roots.
//!
//! # Organization
//!
//! - `companion`: companion-matrix construction from coefficient rows
//! - `roots`: general batch extraction of every (complex) root per row
//! - `select`: specialized cubic/quartic extraction of a single positive
//!   real root, using a nearest-to-real selection heuristic
//! - `checked`: validating wrappers that report degenerate inputs and
//!   degenerate outputs instead of silently propagating them
//! - `ffi`: C-ABI entry points over flat, caller-owned `f64` buffers
//!
//! # Buffer conventions
//!
//! All batch entry points use flat, row-major, caller-owned buffers of `f64`.
//! A batch of `num_rows` polynomials with `num_col` values per row stores row
//! `r`, column `c` at offset `r * num_col + c`. The hot-path functions never
//! panic on degenerate numeric input; failure is observable only as
//! non-finite output values. Use the `checked` module when you want errors
//! instead.
//!
//! # Example
//!
//! ```
//! use polyroots::roots::find_roots;
//!
//! // One row: x^2 - 1, coefficients in increasing powers of x.
//! let input = vec![-1.0, 0.0, 1.0];
//! let mut output = vec![0.0; 4];
//! find_roots(&input, 1, 3, &mut output);
//!
//! // Roots are 1 and -1, in whatever order LAPACK returns them.
//! let mut reals = [output[0], output[2]];
//! reals.sort_by(|a, b| a.partial_cmp(b).unwrap());
//! assert!((reals[0] + 1.0).abs() < 1e-9);
//! assert!((reals[1] - 1.0).abs() < 1e-9);
//! ```

pub mod checked;
pub mod companion;
pub mod ffi;
pub mod roots;
pub mod select;

pub use checked::RootError;
pub use select::{Selection, DEFAULT_IMAG_BOUND};
