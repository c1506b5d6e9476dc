// Classifiers that learn from labeled observations and label new images

use crate::{Observation, Pixel, Result};

mod nearest_neighbor;
pub use nearest_neighbor::NearestNeighbor;

pub trait Classifier {
    // Replace whatever the classifier knew with this training set
    fn train(&mut self, training_set: Vec<Observation>);

    // Label a single image
    fn predict(&self, pixels: &[Pixel]) -> Result<&str>;
}
