pub mod classifier;
pub mod distance;
pub mod error;
pub mod evaluator;
pub mod mnist;
pub mod observation;
pub mod split;

pub use classifier::{Classifier, NearestNeighbor};
pub use distance::{Distance, DistanceFn, Metric};
pub use error::{Error, Result};
pub use observation::Observation;

// One pixel intensity. MNIST uses 0-255, but any integer is accepted.
pub type Pixel = i32;
