use super::check_dimensions;
use crate::{Pixel, Result};

// L2 distance
pub fn euclidean(a: &[Pixel], b: &[Pixel]) -> Result<f64> {
    check_dimensions(a, b)?;
    let square_sum: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = x.abs_diff(*y) as f64;
            diff * diff
        })
        .sum();
    Ok(square_sum.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        assert_eq!(euclidean(&[0, 0], &[3, 4]).unwrap(), 5.0);
        assert_eq!(euclidean(&[1, 2, 3], &[1, 2, 3]).unwrap(), 0.0);
    }
}
