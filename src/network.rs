//! Fixed-topology recurrent network.
//!
//! A [`Network`] is a dense weighted graph over `nb_neurons` neurons laid out
//! in three contiguous index ranges:
//!
//! ```text
//! [0, sensors)                       sensor neurons
//! [sensors, sensors + hidden)        hidden neurons
//! [sensors + hidden, nb_neurons)     actor neurons
//! ```
//!
//! Every call to [`Network::action`] adds the sensor readings onto the sensor
//! neurons and advances the whole graph by one discrete step:
//! `values <- squash(weights . values + bias)`. The value vector is the
//! network's working memory and survives between calls until
//! [`Network::reset`] is invoked.

use std::ops::Range;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::activation::Squash;
use crate::error::ConfigError;

/// Half-width of the uniform range used for fresh weights and biases: `[-0.5, 0.5)`.
pub const WEIGHT_RANGE: f32 = 0.5;

#[inline]
fn draw_weight<R: Rng>(rng: &mut R) -> f32 {
    rng.random_range(-WEIGHT_RANGE..WEIGHT_RANGE)
}

/// Dense weights (row-major, `n * n`) then biases, drawn in that order.
fn random_parameters<R: Rng>(n: usize, rng: &mut R) -> (Vec<f32>, Vec<f32>) {
    let weights = (0..n * n).map(|_| draw_weight(rng)).collect();
    let bias = (0..n).map(|_| draw_weight(rng)).collect();
    (weights, bias)
}

/// Neuron counts of a network. The total is fixed for the network's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Shape {
    /// Neurons receiving environment input.
    pub sensors: usize,
    /// Internal neurons.
    pub hidden: usize,
    /// Neurons read back as the network's output.
    pub actors: usize,
}

impl Shape {
    #[must_use]
    pub const fn new(sensors: usize, hidden: usize, actors: usize) -> Self {
        Self {
            sensors,
            hidden,
            actors,
        }
    }

    /// Total neuron count.
    #[must_use]
    pub const fn neurons(&self) -> usize {
        self.sensors + self.hidden + self.actors
    }

    #[must_use]
    pub const fn sensor_range(&self) -> Range<usize> {
        0..self.sensors
    }

    #[must_use]
    pub const fn hidden_range(&self) -> Range<usize> {
        self.sensors..self.sensors + self.hidden
    }

    #[must_use]
    pub const fn actor_range(&self) -> Range<usize> {
        self.sensors + self.hidden..self.neurons()
    }
}

/// How a network's weights and bias are initialised.
///
/// Exactly one mode applies; anything inconsistent is rejected by
/// [`Network::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Init {
    /// Every weight and bias drawn uniformly from `[-0.5, 0.5)`.
    #[default]
    Random,
    /// Caller-supplied parameters. `weights[i][j]` is the influence of neuron
    /// `j` on neuron `i`.
    Explicit {
        /// `nb_neurons x nb_neurons` matrix.
        weights: Vec<Vec<f32>>,
        /// `nb_neurons` entries.
        bias: Vec<f32>,
    },
    /// Random weights restricted to allowed blocks between neuron groups.
    ///
    /// The groups are the sensors, one group per entry of `slices` (which
    /// partition the hidden neurons in order), and the actors. `regions[i][j]`
    /// allows connections from group `j` into group `i`; a `false` block is
    /// zero and stays zero under mutation.
    Blocked {
        /// Sizes of the hidden groups.
        slices: Vec<usize>,
        /// Square adjacency over `slices.len() + 2` groups.
        regions: Vec<Vec<bool>>,
    },
}

/// A recurrent network with persistent activation state.
///
/// Cloning produces fully independent storage; no two networks ever share
/// weights, bias, or values.
#[derive(Debug, Clone)]
pub struct Network {
    shape: Shape,
    /// Row-major: `weights[i * n + j]` feeds neuron `j` into neuron `i`.
    weights: Vec<f32>,
    bias: Vec<f32>,
    values: Vec<f32>,
    /// Structural connectivity, same layout as `weights`. `None` means dense.
    mask: Option<Vec<bool>>,
    squash: Squash,
    /// Scratch buffer for the next step; swapped with `values`.
    next: Vec<f32>,
}

impl Network {
    /// Build a network of the given shape.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if explicit parameters do not match
    /// `shape.neurons()`, or if blocked slices/regions do not describe the
    /// hidden range and the group adjacency.
    pub fn new<R: Rng>(shape: Shape, init: Init, rng: &mut R) -> Result<Self, ConfigError> {
        let n = shape.neurons();

        let (weights, bias, mask) = match init {
            Init::Random => {
                let (weights, bias) = random_parameters(n, rng);
                (weights, bias, None)
            }
            Init::Explicit { weights, bias } => {
                if weights.len() != n {
                    return Err(ConfigError::WeightRows {
                        expected: n,
                        found: weights.len(),
                    });
                }
                if let Some((row, r)) = weights.iter().enumerate().find(|(_, r)| r.len() != n) {
                    return Err(ConfigError::WeightColumns {
                        row,
                        expected: n,
                        found: r.len(),
                    });
                }
                if bias.len() != n {
                    return Err(ConfigError::BiasLength {
                        expected: n,
                        found: bias.len(),
                    });
                }
                (weights.concat(), bias, None)
            }
            Init::Blocked { slices, regions } => {
                let (weights, mask) = blocked_weights(shape, &slices, &regions, rng)?;
                let bias = (0..n).map(|_| draw_weight(rng)).collect();
                (weights, bias, Some(mask))
            }
        };

        Ok(Self {
            shape,
            weights,
            bias,
            values: vec![0.0; n],
            mask,
            squash: Squash::default(),
            next: vec![0.0; n],
        })
    }

    /// Build a densely connected network with random parameters.
    #[must_use]
    pub fn random<R: Rng>(shape: Shape, rng: &mut R) -> Self {
        let n = shape.neurons();
        let (weights, bias) = random_parameters(n, rng);
        Self {
            shape,
            weights,
            bias,
            values: vec![0.0; n],
            mask: None,
            squash: Squash::default(),
            next: vec![0.0; n],
        }
    }

    /// Replace the squashing function.
    #[must_use]
    pub fn with_squash(mut self, squash: Squash) -> Self {
        self.squash = squash;
        self
    }

    /// Feed one set of sensor readings and advance the network by one step.
    ///
    /// Sensor readings are added onto the current sensor activations rather
    /// than overwriting them. Returns the actor activations after the step.
    ///
    /// # Panics
    ///
    /// Panics if `sensors.len()` differs from the network's sensor count.
    pub fn action(&mut self, sensors: &[f32]) -> &[f32] {
        assert_eq!(
            sensors.len(),
            self.shape.sensors,
            "Sensor length mismatch: expected {}, got {}",
            self.shape.sensors,
            sensors.len()
        );

        for (value, &reading) in self.values.iter_mut().zip(sensors) {
            *value += reading;
        }

        let n = self.shape.neurons();
        for (i, next) in self.next.iter_mut().enumerate() {
            let row = &self.weights[i * n..(i + 1) * n];
            let sum: f32 = row
                .iter()
                .zip(&self.values)
                .map(|(w, v)| w * v)
                .sum::<f32>()
                + self.bias[i];
            *next = self.squash.apply(sum);
        }
        std::mem::swap(&mut self.values, &mut self.next);

        &self.values[self.shape.actor_range()]
    }

    /// Redraw each weight and bias independently with probability `rate`.
    ///
    /// Redrawn entries are uniform in `[-0.5, 0.5)`. Weights outside the
    /// connectivity mask are never touched.
    pub fn mutate<R: Rng>(&mut self, rng: &mut R, rate: f32) {
        for (k, weight) in self.weights.iter_mut().enumerate() {
            if let Some(mask) = &self.mask {
                if !mask[k] {
                    continue;
                }
            }
            if rng.random::<f32>() < rate {
                *weight = draw_weight(rng);
            }
        }
        for bias in &mut self.bias {
            if rng.random::<f32>() < rate {
                *bias = draw_weight(rng);
            }
        }
    }

    /// Zero the recurrent state.
    pub fn reset(&mut self) {
        self.values.fill(0.0);
    }

    /// Return a copy of this network with `delta` extra hidden neurons.
    ///
    /// New neurons are appended after the existing hidden range, so actors
    /// shift up by `delta`. Every existing weight, bias, and value keeps its
    /// value at its shifted position; everything touching a new neuron starts
    /// at zero. New neurons are fully connectable.
    #[must_use]
    pub fn add_neurons(&self, delta: usize) -> Self {
        let old_n = self.shape.neurons();
        let shape = Shape {
            hidden: self.shape.hidden + delta,
            ..self.shape
        };
        let n = shape.neurons();
        let boundary = self.shape.sensors + self.shape.hidden;
        let remap = |k: usize| if k < boundary { k } else { k + delta };

        let mut weights = vec![0.0; n * n];
        let mut bias = vec![0.0; n];
        let mut values = vec![0.0; n];
        let mut mask = self.mask.as_ref().map(|_| vec![true; n * n]);

        for i in 0..old_n {
            let ni = remap(i);
            bias[ni] = self.bias[i];
            values[ni] = self.values[i];
            for j in 0..old_n {
                let nj = remap(j);
                weights[ni * n + nj] = self.weights[i * old_n + j];
                if let (Some(new_mask), Some(old_mask)) = (mask.as_mut(), self.mask.as_ref()) {
                    new_mask[ni * n + nj] = old_mask[i * old_n + j];
                }
            }
        }

        Self {
            shape,
            weights,
            bias,
            values,
            mask,
            squash: self.squash,
            next: vec![0.0; n],
        }
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub const fn nb_neurons(&self) -> usize {
        self.shape.neurons()
    }

    #[must_use]
    pub const fn squash(&self) -> Squash {
        self.squash
    }

    /// Row-major weight matrix.
    #[must_use]
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Weight feeding neuron `from` into neuron `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn weight(&self, to: usize, from: usize) -> f32 {
        let n = self.nb_neurons();
        assert!(to < n && from < n, "neuron index out of range");
        self.weights[to * n + from]
    }

    /// Whether mutation may change the weight from `from` into `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn is_connected(&self, to: usize, from: usize) -> bool {
        let n = self.nb_neurons();
        assert!(to < n && from < n, "neuron index out of range");
        self.mask.as_ref().map_or(true, |mask| mask[to * n + from])
    }

    #[must_use]
    pub fn bias(&self) -> &[f32] {
        &self.bias
    }

    /// Current activations of every neuron.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Current actor activations.
    #[must_use]
    pub fn actor_values(&self) -> &[f32] {
        &self.values[self.shape.actor_range()]
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "neurons : {}", self.nb_neurons())?;
        writeln!(f, "sensors : {}", self.shape.sensors)?;
        writeln!(f, "hidden  : {}", self.shape.hidden)?;
        writeln!(f, "actors  : {}", self.shape.actors)?;
        let n = self.nb_neurons();
        writeln!(f, "weights :")?;
        for row in self.weights.chunks(n.max(1)) {
            let cells: Vec<String> = row.iter().map(|w| format!("{w:+.3}")).collect();
            writeln!(f, "  [{}]", cells.join(" "))?;
        }
        writeln!(f, "bias    : {:?}", self.bias)?;
        write!(f, "values  : {:?}", self.values)
    }
}

/// Draw weights for a blocked layout and record which entries are connectable.
fn blocked_weights<R: Rng>(
    shape: Shape,
    slices: &[usize],
    regions: &[Vec<bool>],
    rng: &mut R,
) -> Result<(Vec<f32>, Vec<bool>), ConfigError> {
    let hidden: usize = slices.iter().sum();
    if hidden != shape.hidden {
        return Err(ConfigError::SliceSum {
            expected: shape.hidden,
            found: hidden,
        });
    }

    let mut groups = Vec::with_capacity(slices.len() + 2);
    groups.push(shape.sensors);
    groups.extend_from_slice(slices);
    groups.push(shape.actors);

    if regions.len() != groups.len() {
        return Err(ConfigError::RegionShape {
            groups: groups.len(),
            row: None,
            found: regions.len(),
        });
    }
    if let Some((row, r)) = regions
        .iter()
        .enumerate()
        .find(|(_, r)| r.len() != groups.len())
    {
        return Err(ConfigError::RegionShape {
            groups: groups.len(),
            row: Some(row),
            found: r.len(),
        });
    }

    // Group g covers neurons [offsets[g], offsets[g + 1]).
    let mut offsets = Vec::with_capacity(groups.len() + 1);
    offsets.push(0);
    for size in &groups {
        offsets.push(offsets[offsets.len() - 1] + size);
    }

    let n = shape.neurons();
    let mut weights = vec![0.0; n * n];
    let mut mask = vec![false; n * n];
    for (gi, allowed_row) in regions.iter().enumerate() {
        for (gj, &allowed) in allowed_row.iter().enumerate() {
            if !allowed {
                continue;
            }
            for i in offsets[gi]..offsets[gi + 1] {
                for j in offsets[gj]..offsets[gj + 1] {
                    weights[i * n + j] = draw_weight(rng);
                    mask[i * n + j] = true;
                }
            }
        }
    }

    Ok((weights, mask))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_random_network_shape() {
        let mut rng = test_rng();
        let net = Network::new(Shape::new(3, 4, 2), Init::Random, &mut rng).unwrap();

        assert_eq!(net.nb_neurons(), 9);
        assert_eq!(net.weights().len(), 81);
        assert_eq!(net.bias().len(), 9);
        assert!(net.values().iter().all(|&v| v == 0.0));
        assert!(net
            .weights()
            .iter()
            .chain(net.bias())
            .all(|w| (-WEIGHT_RANGE..WEIGHT_RANGE).contains(w)));
    }

    #[test]
    fn test_random_init_matches_random_constructor() {
        let shape = Shape::new(2, 3, 1);
        let built = Network::new(shape, Init::Random, &mut test_rng()).unwrap();
        let direct = Network::random(shape, &mut test_rng());

        assert_eq!(built.weights(), direct.weights());
        assert_eq!(built.bias(), direct.bias());
        assert!(built.is_connected(0, 5) && direct.is_connected(5, 0));
    }

    #[test]
    #[should_panic(expected = "neuron index out of range")]
    fn test_is_connected_rejects_out_of_range_on_dense_network() {
        let net = Network::random(Shape::new(1, 1, 1), &mut test_rng());
        let _ = net.is_connected(3, 0);
    }

    #[test]
    fn test_action_output_length_and_state_size() {
        let mut rng = test_rng();
        let mut net = Network::random(Shape::new(2, 3, 4), &mut rng);

        for step in 0..20 {
            let out = net.action(&[0.5, -0.25 * step as f32]);
            assert_eq!(out.len(), 4);
            assert!(out.iter().all(|v| v.abs() < 1.0));
            assert_eq!(net.values().len(), 9);
        }
    }

    #[test]
    fn test_sensor_input_accumulates() {
        let mut rng = test_rng();
        // Sensor keeps its own value, actor copies the sensor.
        let init = Init::Explicit {
            weights: vec![vec![1.0, 0.0], vec![1.0, 0.0]],
            bias: vec![0.0, 0.0],
        };
        let mut net = Network::new(Shape::new(1, 0, 1), init, &mut rng).unwrap();
        let sq = |x: f32| Squash::Natural.apply(x);

        let first = net.action(&[1.0])[0];
        assert!((first - sq(1.0)).abs() < 1e-6);

        let second = net.action(&[1.0])[0];
        assert!((second - sq(sq(1.0) + 1.0)).abs() < 1e-6);
        assert!(second > first);
    }

    #[test]
    fn test_zero_network_stays_silent() {
        let mut rng = test_rng();
        let init = Init::Explicit {
            weights: vec![vec![0.0; 3]; 3],
            bias: vec![0.0; 3],
        };
        let mut net = Network::new(Shape::new(1, 1, 1), init, &mut rng).unwrap();
        assert_eq!(net.action(&[0.0])[0], 0.0);
        assert_eq!(net.action(&[5.0])[0], 0.0);
    }

    #[test]
    #[should_panic(expected = "Sensor length mismatch")]
    fn test_action_rejects_wrong_sensor_count() {
        let mut rng = test_rng();
        let mut net = Network::random(Shape::new(2, 0, 1), &mut rng);
        net.action(&[1.0]);
    }

    #[test]
    fn test_explicit_shape_errors() {
        let mut rng = test_rng();
        let shape = Shape::new(1, 0, 1);

        let err = Network::new(
            shape,
            Init::Explicit {
                weights: vec![vec![0.0; 2]],
                bias: vec![0.0; 2],
            },
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::WeightRows {
                expected: 2,
                found: 1
            }
        );

        let err = Network::new(
            shape,
            Init::Explicit {
                weights: vec![vec![0.0; 2], vec![0.0; 3]],
                bias: vec![0.0; 2],
            },
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::WeightColumns {
                row: 1,
                expected: 2,
                found: 3
            }
        );

        let err = Network::new(
            shape,
            Init::Explicit {
                weights: vec![vec![0.0; 2]; 2],
                bias: vec![0.0; 1],
            },
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::BiasLength {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_blocked_layout() {
        let mut rng = test_rng();
        // sensors -> hidden -> actors, nothing else.
        let init = Init::Blocked {
            slices: vec![2],
            regions: vec![
                vec![false, false, false],
                vec![true, false, false],
                vec![false, true, false],
            ],
        };
        let net = Network::new(Shape::new(1, 2, 1), init, &mut rng).unwrap();

        for to in 0..4 {
            for from in 0..4 {
                let allowed = matches!((to, from), (1 | 2, 0) | (3, 1 | 2));
                assert_eq!(net.is_connected(to, from), allowed, "{to} <- {from}");
                if !allowed {
                    assert_eq!(net.weight(to, from), 0.0);
                }
            }
        }
        assert_ne!(net.weight(3, 1), 0.0);
    }

    #[test]
    fn test_blocked_zeros_survive_mutation() {
        let mut rng = test_rng();
        let init = Init::Blocked {
            slices: vec![1, 1],
            regions: vec![
                vec![false, false, false, false],
                vec![true, false, false, false],
                vec![false, true, false, false],
                vec![false, false, true, false],
            ],
        };
        let mut net = Network::new(Shape::new(1, 2, 1), init, &mut rng).unwrap();
        net.mutate(&mut rng, 1.0);

        for to in 0..4 {
            for from in 0..4 {
                if !net.is_connected(to, from) {
                    assert_eq!(net.weight(to, from), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_blocked_errors() {
        let mut rng = test_rng();
        let err = Network::new(
            Shape::new(1, 3, 1),
            Init::Blocked {
                slices: vec![1, 1],
                regions: vec![vec![true; 4]; 4],
            },
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::SliceSum {
                expected: 3,
                found: 2
            }
        );

        let err = Network::new(
            Shape::new(1, 2, 1),
            Init::Blocked {
                slices: vec![2],
                regions: vec![vec![true; 3]; 2],
            },
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::RegionShape {
                groups: 3,
                row: None,
                found: 2
            }
        );

        let err = Network::new(
            Shape::new(1, 2, 1),
            Init::Blocked {
                slices: vec![2],
                regions: vec![vec![true; 3], vec![true; 2], vec![true; 3]],
            },
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::RegionShape {
                groups: 3,
                row: Some(1),
                found: 2
            }
        );
    }

    #[test]
    fn test_mutate_zero_rate_is_identity() {
        let mut rng = test_rng();
        let mut net = Network::random(Shape::new(2, 3, 2), &mut rng);
        let weights = net.weights().to_vec();
        let bias = net.bias().to_vec();

        for _ in 0..10 {
            net.mutate(&mut rng, 0.0);
        }

        assert_eq!(net.weights(), weights.as_slice());
        assert_eq!(net.bias(), bias.as_slice());
    }

    #[test]
    fn test_mutate_full_rate_redraws_everything() {
        let mut rng = test_rng();
        let mut net = Network::random(Shape::new(2, 3, 2), &mut rng);
        let weights = net.weights().to_vec();
        let bias = net.bias().to_vec();

        net.mutate(&mut rng, 1.0);

        for (old, new) in weights.iter().zip(net.weights()) {
            assert_ne!(old, new);
            assert!((-WEIGHT_RANGE..WEIGHT_RANGE).contains(new));
        }
        for (old, new) in bias.iter().zip(net.bias()) {
            assert_ne!(old, new);
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let mut rng = test_rng();
        let original = Network::random(Shape::new(1, 2, 1), &mut rng);
        let mut copy = original.clone();

        copy.mutate(&mut rng, 1.0);
        copy.action(&[1.0]);

        assert_ne!(original.weights(), copy.weights());
        assert!(original.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_reset_clears_state() {
        let mut rng = test_rng();
        let mut net = Network::random(Shape::new(1, 2, 1), &mut rng);
        net.action(&[1.0]);
        assert!(net.values().iter().any(|&v| v != 0.0));

        net.reset();
        assert!(net.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_add_neurons_preserves_existing_parameters() {
        let mut rng = test_rng();
        let mut net = Network::random(Shape::new(2, 1, 2), &mut rng);
        net.action(&[0.3, -0.7]);

        let grown = net.add_neurons(2);
        assert_eq!(grown.shape(), Shape::new(2, 3, 2));
        assert_eq!(grown.nb_neurons(), 7);

        // old index -> new index
        let remap = [0, 1, 2, 5, 6];
        for (i, &ni) in remap.iter().enumerate() {
            assert_eq!(grown.bias()[ni], net.bias()[i]);
            assert_eq!(grown.values()[ni], net.values()[i]);
            for (j, &nj) in remap.iter().enumerate() {
                assert_eq!(grown.weight(ni, nj), net.weight(i, j));
            }
        }

        for new in [3, 4] {
            assert_eq!(grown.bias()[new], 0.0);
            assert_eq!(grown.values()[new], 0.0);
            for k in 0..7 {
                assert_eq!(grown.weight(new, k), 0.0);
                assert_eq!(grown.weight(k, new), 0.0);
            }
        }
        assert_eq!(grown.actor_values(), net.actor_values());
    }

    #[test]
    fn test_add_neurons_keeps_mask() {
        let mut rng = test_rng();
        let init = Init::Blocked {
            slices: vec![1],
            regions: vec![
                vec![false, false, false],
                vec![true, false, false],
                vec![false, true, false],
            ],
        };
        let net = Network::new(Shape::new(1, 1, 1), init, &mut rng).unwrap();
        let grown = net.add_neurons(1);

        assert!(grown.is_connected(1, 0));
        assert!(grown.is_connected(3, 1));
        assert!(!grown.is_connected(0, 3));
        assert!(grown.is_connected(2, 0));
    }

    #[test]
    fn test_display_lists_counts() {
        let mut rng = test_rng();
        let net = Network::random(Shape::new(1, 2, 3), &mut rng);
        let text = net.to_string();
        assert!(text.contains("neurons : 6"));
        assert!(text.contains("actors  : 3"));
    }
}
