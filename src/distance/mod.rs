// Distance metrics between two pixel vectors of equal length

use std::fmt;

use clap::ValueEnum;

use crate::{Pixel, Result};

mod check;
use check::check_dimensions;

mod manhattan;
pub use manhattan::manhattan;

mod euclidean;
pub use euclidean::euclidean;

mod hamming;
pub use hamming::hamming;

// Anything that can measure how dissimilar two images are.
// Implementations must be non-negative, zero for identical inputs and symmetric,
// and must fail with DimensionMismatch rather than comparing vectors of different lengths.
pub trait Distance {
    fn between(&self, a: &[Pixel], b: &[Pixel]) -> Result<f64>;
}

// Plain functions and closures are metrics
impl<F> Distance for F
where
    F: Fn(&[Pixel], &[Pixel]) -> Result<f64>,
{
    fn between(&self, a: &[Pixel], b: &[Pixel]) -> Result<f64> {
        self(a, b)
    }
}

pub type DistanceFn = fn(&[Pixel], &[Pixel]) -> Result<f64>;

// The metrics selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Metric {
    #[default]
    Manhattan,
    Euclidean,
    Hamming,
}

impl Metric {
    pub fn function(self) -> DistanceFn {
        match self {
            Metric::Manhattan => manhattan,
            Metric::Euclidean => euclidean,
            Metric::Hamming => hamming,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::Manhattan => "manhattan",
            Metric::Euclidean => "euclidean",
            Metric::Hamming => "hamming",
        };
        f.write_str(name)
    }
}
