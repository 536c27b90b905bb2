use common::NUM_CELLS;
use rand::Rng;
use rand::prelude::IndexedRandom;

use crate::prediction::PredictionError;

/// The last `NUM_CELLS` activations are the output layer, one per board cell.
pub fn output_activations(activations: &[f64]) -> Result<&[f64], PredictionError> {
    if activations.len() < NUM_CELLS {
        return Err(PredictionError::Malformed(format!(
            "expected at least {} activations, got {}",
            NUM_CELLS,
            activations.len()
        )));
    }

    let outputs = &activations[activations.len() - NUM_CELLS..];
    if let Some(value) = outputs.iter().find(|value| !value.is_finite()) {
        return Err(PredictionError::Malformed(format!(
            "output activation {} is not finite",
            value
        )));
    }

    Ok(outputs)
}

/// Indices whose activation lies within `tolerance` (a fraction of the maximum) of the maximum.
///
/// With a non-positive maximum the relative window is empty, so the exact maxima are returned.
pub fn highest_activation_indices(outputs: &[f64], tolerance: f64) -> Vec<usize> {
    let highest = outputs.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let near_ties: Vec<usize> = outputs
        .iter()
        .enumerate()
        .filter(|&(_, &value)| highest - value < highest * tolerance)
        .map(|(index, _)| index)
        .collect();

    if !near_ties.is_empty() {
        return near_ties;
    }

    outputs
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value == highest)
        .map(|(index, _)| index)
        .collect()
}

pub fn choose_random_index<R: Rng + ?Sized>(candidates: &[usize], rng: &mut R) -> Option<usize> {
    candidates.choose(rng).copied()
}
