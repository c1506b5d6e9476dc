use super::check_dimensions;
use crate::{Pixel, Result};

// L1 distance: the sum of absolute pixel differences.
// Accumulated in u64 so that no combination of i32 pixels can overflow.
pub fn manhattan(a: &[Pixel], b: &[Pixel]) -> Result<f64> {
    check_dimensions(a, b)?;
    let sum: u64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| x.abs_diff(*y) as u64)
        .sum();
    Ok(sum as f64)
}
