use super::check_dimensions;
use crate::{Pixel, Result};

// Counts the positions at which two images differ
pub fn hamming(a: &[Pixel], b: &[Pixel]) -> Result<f64> {
    check_dimensions(a, b)?;
    let count = a.iter().zip(b.iter()).filter(|(x, y)| x != y).count();
    Ok(count as f64)
}
