use crate::Pixel;

// A single labeled image: the true class and its flattened pixel intensities.
// Observations are created once at load time and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    label: String,
    pixels: Vec<Pixel>,
}

impl Observation {
    pub fn new(label: impl Into<String>, pixels: Vec<Pixel>) -> Self {
        Observation {
            label: label.into(),
            pixels,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }
}
