use rayon::prelude::*;
use tracing::debug;

use crate::{Classifier, Error, Observation, Result};

// Fraction of the validation set that the classifier labels correctly.
// Predictions are made one at a time, in order, and the first failure is returned.
pub fn correct<C: Classifier + ?Sized>(
    validation_set: &[Observation],
    classifier: &C,
) -> Result<f64> {
    if validation_set.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let mut total = 0.0;
    for observation in validation_set {
        total += score(observation, classifier)?;
    }
    Ok(mean(total, validation_set.len()))
}

// Same as `correct`, but scores observations on the rayon thread pool.
// Scores are collected before summing, so the result matches the sequential version.
pub fn par_correct<C: Classifier + Sync + ?Sized>(
    validation_set: &[Observation],
    classifier: &C,
) -> Result<f64> {
    if validation_set.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let scores = validation_set
        .par_iter()
        .map(|observation| score(observation, classifier))
        .collect::<Result<Vec<f64>>>()?;
    Ok(mean(scores.iter().sum(), validation_set.len()))
}

fn score<C: Classifier + ?Sized>(observation: &Observation, classifier: &C) -> Result<f64> {
    if classifier.predict(observation.pixels())? == observation.label() {
        Ok(1.0)
    } else {
        Ok(0.0)
    }
}

fn mean(total: f64, count: usize) -> f64 {
    debug!("{} of {} observations classified correctly", total, count);
    total / count as f64
}
