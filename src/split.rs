use rand::{prelude::SliceRandom, Rng};

// Randomly set aside part of a labeled dataset for validation.
// Returns (training, validation), where validation holds round(len * fraction) observations.
pub fn holdout<T>(
    mut observations: Vec<T>,
    validation_fraction: f64,
    rng: &mut impl Rng,
) -> (Vec<T>, Vec<T>) {
    let fraction = validation_fraction.clamp(0.0, 1.0);
    let n_validation = (observations.len() as f64 * fraction).round() as usize;

    observations.shuffle(rng);
    let validation = observations.split_off(observations.len() - n_validation);
    (observations, validation)
}
