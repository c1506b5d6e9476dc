use crate::{Error, Pixel, Result};

// Every metric refuses to compare vectors of different lengths
pub fn check_dimensions(a: &[Pixel], b: &[Pixel]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}
