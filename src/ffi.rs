//! C-ABI entry points over flat, caller-owned buffers.
//!
//! These wrappers exist for host processes (typically a scripting runtime
//! loading this crate as a shared library) that pass raw `double` buffers
//! across the foreign-function boundary. They validate nothing beyond null
//! pointers and non-positive dimensions, build slices of exactly the lengths
//! the buffer contracts require, and delegate to the safe batch drivers.
//! All memory is owned by the host; nothing is retained across calls.

use std::os::raw::c_int;
use std::slice;

use crate::roots;
use crate::select;

/// C entry point for [`crate::roots::find_roots`].
///
/// `input` must hold `num_rows * num_col` doubles and `output` must hold
/// `num_rows * 2 * (num_col - 1)` doubles, laid out as documented on the
/// safe function. There is no return status; failure is only observable as
/// non-finite output values.
///
/// # Safety
///
/// `input` and `output` must be non-null, properly aligned, valid for reads
/// resp. writes of the lengths above, and non-overlapping. `num_rows` and
/// `num_col` must describe the buffers the host actually allocated.
#[no_mangle]
pub unsafe extern "C" fn find_roots(
    input: *const f64,
    num_rows: c_int,
    num_col: c_int,
    output: *mut f64,
) {
    if input.is_null() || output.is_null() || num_rows <= 0 || num_col < 2 {
        return;
    }
    let num_rows = num_rows as usize;
    let num_col = num_col as usize;
    let input = slice::from_raw_parts(input, num_rows * num_col);
    let output = slice::from_raw_parts_mut(output, num_rows * 2 * (num_col - 1));
    roots::find_roots(input, num_rows, num_col, output);
}

/// C entry point for [`crate::select::single_pos_special_cubic`].
///
/// `input` must hold `num_rows * num_col` doubles with `num_col` fixed at 3,
/// and `output` must hold `num_rows` doubles. The single-positive-real-root
/// precondition documented on the safe function applies unchecked.
///
/// # Safety
///
/// Same pointer requirements as [`find_roots`], with the output length
/// `num_rows`.
#[no_mangle]
pub unsafe extern "C" fn single_pos_special_cubic(
    input: *const f64,
    num_rows: c_int,
    num_col: c_int,
    output: *mut f64,
) {
    if input.is_null() || output.is_null() || num_rows <= 0 || num_col <= 0 {
        return;
    }
    let num_rows = num_rows as usize;
    let num_col = num_col as usize;
    let input = slice::from_raw_parts(input, num_rows * num_col);
    let output = slice::from_raw_parts_mut(output, num_rows);
    select::single_pos_special_cubic(input, num_rows, num_col, output);
}

/// C entry point for [`crate::select::single_pos_special_quartic`].
///
/// Identical to [`single_pos_special_cubic`] with `num_col` fixed at 4.
///
/// # Safety
///
/// Same pointer requirements as [`single_pos_special_cubic`].
#[no_mangle]
pub unsafe extern "C" fn single_pos_special_quartic(
    input: *const f64,
    num_rows: c_int,
    num_col: c_int,
    output: *mut f64,
) {
    if input.is_null() || output.is_null() || num_rows <= 0 || num_col <= 0 {
        return;
    }
    let num_rows = num_rows as usize;
    let num_col = num_col as usize;
    let input = slice::from_raw_parts(input, num_rows * num_col);
    let output = slice::from_raw_parts_mut(output, num_rows);
    select::single_pos_special_quartic(input, num_rows, num_col, output);
}
