//! Demonstration of batch root extraction over flat buffers.
//!
//! This example runs both call shapes: the general extractor that returns
//! every complex root of each polynomial, and the specialized cubic selector
//! that picks the single positive real root.

use polyroots::roots::find_roots;
use polyroots::select::single_pos_special_cubic;

fn main() {
    println!("Batch Root Extraction Demo\n");

    // Example 1: every root of a batch of quadratics
    println!("Example 1: general extraction, x^2 - k^2 for k = 1, 2, 3");
    println!("--------------------------------------------------------");
    let input = vec![
        -1.0, 0.0, 1.0, // x^2 - 1
        -4.0, 0.0, 1.0, // x^2 - 4
        -9.0, 0.0, 1.0, // x^2 - 9
    ];
    let mut output = vec![0.0; 3 * 4];
    find_roots(&input, 3, 3, &mut output);

    for row in 0..3 {
        let base = 4 * row;
        println!(
            "  row {}: roots {:+.4} {:+.4}i, {:+.4} {:+.4}i",
            row,
            output[base],
            output[base + 1],
            output[base + 2],
            output[base + 3]
        );
    }

    // Example 2: single positive real root of monic cubics
    println!("\nExample 2: cubic selector, x^3 - k^3 for k = 2, 3, 4");
    println!("----------------------------------------------------");
    let input = vec![
        -8.0, 0.0, 0.0, // x^3 - 8
        -27.0, 0.0, 0.0, // x^3 - 27
        -64.0, 0.0, 0.0, // x^3 - 64
    ];
    let mut output = vec![0.0; 3];
    single_pos_special_cubic(&input, 3, 3, &mut output);

    for (row, root) in output.iter().enumerate() {
        println!("  row {}: positive real root {:.6}", row, root);
    }
}
