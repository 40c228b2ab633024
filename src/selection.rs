//! Fitness-proportional selection.
//!
//! Raw member scores become a probability distribution in
//! [`selection_probabilities`], and [`resample`] draws a new population from it
//! by inverse-CDF sampling with replacement.
//!
//! ## Sampling rule
//!
//! For a uniform draw `u` in `[0, 1)`, the selected index is the first `i`
//! whose cumulative probability `cdf[i]` is strictly greater than `u`. Members
//! with zero probability therefore never own an interval and are never
//! selected. If floating-point rounding leaves the final cumulative sum below
//! `u`, the last member with non-zero probability is selected.

use rand::Rng;

/// Turn raw scores into selection probabilities.
///
/// Negative (and NaN) scores count as zero and `+inf` counts as `f32::MAX`.
/// If every clamped score is zero the distribution is uniform. The result is
/// non-negative and sums to one.
#[must_use]
pub fn selection_probabilities(raw: &[f32]) -> Vec<f32> {
    let mut weights: Vec<f32> = raw
        .iter()
        .map(|&s| if s > 0.0 { s.min(f32::MAX) } else { 0.0 })
        .collect();

    let max = weights.iter().copied().fold(0.0f32, f32::max);
    if max == 0.0 {
        weights.fill(1.0);
    } else {
        // Rescale into [0, 1] so the sum below cannot overflow.
        for w in &mut weights {
            *w /= max;
        }
    }

    let total: f32 = weights.iter().sum();
    for w in &mut weights {
        *w /= total;
    }
    weights
}

/// Running sums of `probabilities`.
#[must_use]
pub fn cumulative(probabilities: &[f32]) -> Vec<f32> {
    probabilities
        .iter()
        .scan(0.0f32, |acc, &p| {
            *acc += p;
            Some(*acc)
        })
        .collect()
}

/// Index selected by the uniform draw `u` against the cumulative distribution `cdf`.
///
/// Returns `None` only if `cdf` is empty or carries no mass.
#[must_use]
pub fn sample_index(cdf: &[f32], u: f32) -> Option<usize> {
    if let Some(i) = cdf.iter().position(|&c| u < c) {
        return Some(i);
    }
    // Rounding fallback: last index that owns a non-empty interval.
    let mut previous = 0.0;
    let mut last = None;
    for (i, &c) in cdf.iter().enumerate() {
        if c > previous {
            last = Some(i);
        }
        previous = c;
    }
    last
}

/// Draw `members.len()` independent copies from `members`, each chosen with
/// the matching entry of `probabilities`.
///
/// Every returned member is a fresh clone; no two entries share storage.
///
/// # Panics
///
/// Panics if the lengths differ or if `probabilities` carries no mass.
pub fn resample<T: Clone, R: Rng>(members: &[T], probabilities: &[f32], rng: &mut R) -> Vec<T> {
    assert_eq!(
        members.len(),
        probabilities.len(),
        "Probability length mismatch: expected {}, got {}",
        members.len(),
        probabilities.len()
    );
    let cdf = cumulative(probabilities);
    (0..members.len())
        .map(|_| {
            let u = rng.random::<f32>();
            let index = sample_index(&cdf, u).expect("selection distribution has no mass");
            members[index].clone()
        })
        .collect()
}
