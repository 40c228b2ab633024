//! # Neuroherd
//!
//! Gradient-free training of fixed-topology recurrent controllers by
//! fitness-proportional evolution.
//!
//! ## Features
//!
//! - **Recurrent Networks**: Dense weight matrix over sensor, hidden, and actor
//!   neurons with persistent activation state between steps
//! - **Blocked Connectivity**: Architectural priors that keep whole blocks of
//!   the weight matrix at zero for the network's lifetime
//! - **Herd Evolution**: Evaluate, resample with replacement, mutate, repeat
//! - **Parallel Evaluation**: Optional rayon-backed scoring with a barrier
//!   before every selection step
//!
//! ## Quick Start
//!
//! ```rust
//! use neuroherd::{ConstantProblem, Herd, HerdConfig};
//!
//! let config = HerdConfig {
//!     population_size: 5,
//!     mutation_rate: 0.0,
//!     trials_per_eval: 3,
//!     seed: Some(42),
//!     ..HerdConfig::new(1, 1, 0)
//! };
//! let mut herd = Herd::new(config, ConstantProblem::new(1, 1, 1.0)).unwrap();
//!
//! assert_eq!(herd.evolve(3), vec![1.0, 1.0, 1.0]);
//! ```
//!
//! ## Writing a Problem
//!
//! ```rust
//! use neuroherd::{Network, Problem};
//!
//! /// Reward networks whose single output is positive for ten steps.
//! struct StayPositive;
//!
//! impl Problem for StayPositive {
//!     fn sensor_count(&self) -> usize { 1 }
//!     fn actor_count(&self) -> usize { 1 }
//!
//!     fn experience(&mut self, network: &mut Network) -> f32 {
//!         let mut score = 0.0;
//!         for _ in 0..10 {
//!             score += network.action(&[1.0])[0];
//!         }
//!         self.reset();
//!         score
//!     }
//!
//!     fn reset(&mut self) {}
//! }
//! ```
//!
//! ## Dynamics
//!
//! Each step adds the sensor readings onto the sensor neurons, then updates
//! every neuron at once:
//!
//! ```text
//! values <- squash(weights . values + bias)
//! squash(x) = 2 * (sigmoid(x) - 0.5)
//! ```
//!
//! Values are only cleared by [`Network::reset`]; a herd never resets members
//! between episodes.

pub mod activation;
pub mod error;
pub mod herd;
pub mod network;
pub mod problem;
pub mod selection;

// Re-exports for convenience
pub use activation::{Squash, SATURATION};
pub use error::ConfigError;
pub use herd::{scale, Herd, HerdConfig};
pub use network::{Init, Network, Shape, WEIGHT_RANGE};
pub use problem::{ConstantProblem, MemoryTask, Problem};
pub use selection::{cumulative, resample, sample_index, selection_probabilities};
