use tracing::debug;

use super::Classifier;
use crate::distance::Distance;
use crate::{Error, Observation, Pixel, Result};

// 1-nearest-neighbor classifier.
// Training only memorizes the examples; every prediction is a brute-force
// scan over all of them using the injected distance metric.
pub struct NearestNeighbor<D: Distance> {
    // Fixed at construction
    distance: D,
    // Replaced wholesale by each call to train
    training_set: Vec<Observation>,
}

impl<D: Distance> NearestNeighbor<D> {
    // Starts out untrained
    pub fn new(distance: D) -> Self {
        NearestNeighbor {
            distance,
            training_set: Vec::new(),
        }
    }

    pub fn distance(&self) -> &D {
        &self.distance
    }

    pub fn training_set(&self) -> &[Observation] {
        &self.training_set
    }
}

impl<D: Distance> Classifier for NearestNeighbor<D> {
    // No length checks here - a mismatched observation is reported by the metric when queried
    fn train(&mut self, training_set: Vec<Observation>) {
        debug!("Training on {} observations", training_set.len());
        self.training_set = training_set;
    }

    fn predict(&self, pixels: &[Pixel]) -> Result<&str> {
        if self.training_set.is_empty() {
            return Err(Error::UntrainedModel);
        }

        let mut best = &self.training_set[0];
        let mut shortest = f64::INFINITY;
        for observation in &self.training_set {
            let distance = self.distance.between(observation.pixels(), pixels)?;
            // Strictly less than: on ties, the earliest observation wins
            if distance < shortest {
                shortest = distance;
                best = observation;
            }
        }

        Ok(best.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{euclidean, manhattan, DistanceFn};

    fn obs(label: &str, pixels: &[Pixel]) -> Observation {
        Observation::new(label, pixels.to_vec())
    }

    fn trained(training_set: Vec<Observation>) -> NearestNeighbor<DistanceFn> {
        let mut classifier = NearestNeighbor::new(manhattan as DistanceFn);
        classifier.train(training_set);
        classifier
    }

    #[test]
    fn test_closest_label() {
        let classifier = trained(vec![obs("0", &[0, 0]), obs("1", &[10, 10])]);
        assert_eq!(classifier.predict(&[1, 1]).unwrap(), "0");
        assert_eq!(classifier.predict(&[9, 8]).unwrap(), "1");
    }

    #[test]
    fn test_exact_match_wins() {
        let classifier = trained(vec![
            obs("3", &[5, 5, 5]),
            obs("8", &[200, 13, 40]),
            obs("5", &[6, 5, 5]),
        ]);
        assert_eq!(classifier.predict(&[200, 13, 40]).unwrap(), "8");
    }

    #[test]
    fn test_tie_goes_to_first_inserted() {
        let classifier = trained(vec![obs("4", &[1, 2]), obs("9", &[1, 2])]);
        assert_eq!(classifier.predict(&[1, 2]).unwrap(), "4");

        let classifier = trained(vec![obs("9", &[1, 2]), obs("4", &[1, 2])]);
        assert_eq!(classifier.predict(&[1, 2]).unwrap(), "9");

        // Equidistant but not identical
        let classifier = trained(vec![obs("a", &[0, 0]), obs("b", &[2, 2])]);
        assert_eq!(classifier.predict(&[1, 1]).unwrap(), "a");
    }

    #[test]
    fn test_untrained() {
        let classifier = NearestNeighbor::new(manhattan as DistanceFn);
        assert_eq!(classifier.predict(&[1, 1]), Err(Error::UntrainedModel));

        let classifier = trained(vec![]);
        assert_eq!(classifier.predict(&[1, 1]), Err(Error::UntrainedModel));
    }

    #[test]
    fn test_query_dimension_mismatch() {
        let classifier = trained(vec![obs("0", &[0, 0])]);
        assert_eq!(
            classifier.predict(&[1, 1, 1]),
            Err(Error::DimensionMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn test_retrain_replaces_training_set() {
        let mut classifier = trained(vec![obs("old", &[0, 0])]);
        classifier.train(vec![obs("new", &[50, 50])]);
        assert_eq!(classifier.training_set().len(), 1);
        assert_eq!(classifier.predict(&[0, 0]).unwrap(), "new");
    }

    #[test]
    fn test_metric_changes_outcome() {
        // Manhattan: 6 vs 5, Euclidean: sqrt(18) ~ 4.24 vs 5
        let training_set = vec![obs("diagonal", &[3, 3]), obs("axis", &[5, 0])];
        let query = [0, 0];

        let manhattan_nn = trained(training_set.clone());
        assert_eq!(manhattan_nn.predict(&query).unwrap(), "axis");

        let mut euclidean_nn = NearestNeighbor::new(euclidean as DistanceFn);
        euclidean_nn.train(training_set);
        assert_eq!(euclidean_nn.predict(&query).unwrap(), "diagonal");
    }

    #[test]
    fn test_closure_metric() {
        let offset = 100;
        let mut classifier = NearestNeighbor::new(move |a: &[Pixel], b: &[Pixel]| {
            manhattan(a, b).map(|d| d + offset as f64)
        });
        classifier.train(vec![obs("x", &[0]), obs("y", &[4])]);
        assert_eq!(classifier.predict(&[3]).unwrap(), "y");
    }
}
