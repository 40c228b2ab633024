//! Generational evolution of a fixed-size population.
//!
//! Each generation runs the same cycle:
//!
//! 1. Every member plays `trials_per_eval` episodes of the problem; its raw
//!    score is the mean over those episodes.
//! 2. Raw scores become selection probabilities (negatives clamp to zero, an
//!    all-zero generation selects uniformly).
//! 3. `population_size` members are drawn with replacement, each as an
//!    independent copy.
//! 4. Every new member is mutated at `mutation_rate`.
//!
//! The mean raw score of each generation is appended to the herd's history.

use log::{debug, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::activation::Squash;
use crate::error::ConfigError;
use crate::network::{Init, Network, Shape};
use crate::problem::Problem;
use crate::selection::{resample, selection_probabilities};

/// Configuration for a [`Herd`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HerdConfig {
    /// Sensor neurons per member; must match the problem.
    pub sensors: usize,
    /// Actor neurons per member; must match the problem.
    pub actors: usize,
    /// Hidden neurons per member.
    pub hidden: usize,
    /// Number of members, constant across generations.
    pub population_size: usize,
    /// Per-parameter probability of a redraw after reproduction.
    pub mutation_rate: f32,
    /// Episodes averaged into each member's score.
    pub trials_per_eval: usize,
    /// Initialisation applied to every member of the first generation.
    #[serde(default)]
    pub init: Init,
    #[serde(default)]
    pub squash: Squash,
    /// Seed for the herd's generator. `None` seeds from the thread RNG.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for HerdConfig {
    fn default() -> Self {
        Self {
            sensors: 1,
            actors: 1,
            hidden: 0,
            population_size: 30,
            mutation_rate: 0.001,
            trials_per_eval: 10,
            init: Init::Random,
            squash: Squash::Natural,
            seed: None,
        }
    }
}

impl HerdConfig {
    /// Default selection parameters for the given architecture.
    #[must_use]
    pub fn new(sensors: usize, actors: usize, hidden: usize) -> Self {
        Self {
            sensors,
            actors,
            hidden,
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        Shape::new(self.sensors, self.hidden, self.actors)
    }

    /// Check the selection parameters.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an empty population, zero trials, or a
    /// mutation rate outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.trials_per_eval == 0 {
            return Err(ConfigError::NoTrials);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::MutationRate(self.mutation_rate));
        }
        Ok(())
    }
}

/// A population of networks evolved against one problem.
#[derive(Debug)]
pub struct Herd<P> {
    config: HerdConfig,
    shape: Shape,
    problem: P,
    population: Vec<Network>,
    /// Raw mean scores of the last evaluated generation.
    scores: Vec<f32>,
    /// Highest scoring member of the last evaluated generation.
    champion: Option<Network>,
    history: Vec<f32>,
    rng: ChaCha8Rng,
}

impl<P: Problem> Herd<P> {
    /// Build the first generation.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration is invalid, if the
    /// problem's sensor or actor count differs from the configured one, or if
    /// `config.init` does not fit the configured shape.
    pub fn new(config: HerdConfig, problem: P) -> Result<Self, ConfigError> {
        config.validate()?;

        if problem.sensor_count() != config.sensors {
            return Err(ConfigError::SensorMismatch {
                configured: config.sensors,
                problem: problem.sensor_count(),
            });
        }
        if problem.actor_count() != config.actors {
            return Err(ConfigError::ActorMismatch {
                configured: config.actors,
                problem: problem.actor_count(),
            });
        }

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };

        let shape = config.shape();
        let population = (0..config.population_size)
            .map(|_| {
                Network::new(shape, config.init.clone(), &mut rng)
                    .map(|net| net.with_squash(config.squash))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "herd created: {} members, {} neurons each ({} sensors, {} hidden, {} actors)",
            population.len(),
            shape.neurons(),
            shape.sensors,
            shape.hidden,
            shape.actors
        );

        Ok(Self {
            config,
            shape,
            problem,
            population,
            scores: Vec::new(),
            champion: None,
            history: Vec::new(),
            rng,
        })
    }

    /// Score every member and return the selection probabilities.
    ///
    /// The raw mean scores are kept and available through [`Herd::scores`].
    pub fn evaluate(&mut self) -> Vec<f32> {
        let trials = self.config.trials_per_eval;
        let problem = &mut self.problem;
        let scores = self
            .population
            .iter_mut()
            .enumerate()
            .map(|(index, member)| {
                let score = mean_score(problem, member, trials);
                trace!("member {} scored {:.4}", index, score);
                score
            })
            .collect();
        self.record_scores(scores)
    }

    /// Run `generations` full generations sequentially.
    ///
    /// Returns the mean raw score of each generation run by this call.
    pub fn evolve(&mut self, generations: usize) -> Vec<f32> {
        (0..generations)
            .map(|_| {
                let probabilities = self.evaluate();
                self.reproduce(&probabilities)
            })
            .collect()
    }

    /// Grow every member by `delta` hidden neurons.
    ///
    /// See [`Network::add_neurons`] for how existing parameters are kept.
    /// `config().hidden` follows the new size; `config().init` still
    /// describes how the first generation was built.
    pub fn grow(&mut self, delta: usize) {
        for member in &mut self.population {
            *member = member.add_neurons(delta);
        }
        self.shape.hidden += delta;
        self.config.hidden = self.shape.hidden;
    }

    #[must_use]
    pub fn config(&self) -> &HerdConfig {
        &self.config
    }

    /// Architecture shared by every member.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Current members, read-only.
    #[must_use]
    pub fn population(&self) -> &[Network] {
        &self.population
    }

    /// Raw mean scores of the last evaluated generation.
    #[must_use]
    pub fn scores(&self) -> &[f32] {
        &self.scores
    }

    /// Copy of the best member of the last evaluated generation.
    #[must_use]
    pub fn champion(&self) -> Option<&Network> {
        self.champion.as_ref()
    }

    /// Mean raw score of every generation run so far.
    #[must_use]
    pub fn history(&self) -> &[f32] {
        &self.history
    }

    /// Store raw scores and the champion, then derive selection probabilities.
    fn record_scores(&mut self, scores: Vec<f32>) -> Vec<f32> {
        if scores.iter().all(|&s| s <= 0.0 || s.is_nan()) {
            debug!("no member scored above zero; selecting uniformly");
        }

        let best = scores
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(index, _)| index);
        self.champion = best.map(|index| self.population[index].clone());

        let probabilities = selection_probabilities(&scores);
        self.scores = scores;
        probabilities
    }

    /// Replace the population from `probabilities`, mutate it, and log the
    /// generation. Returns the generation's mean raw score.
    fn reproduce(&mut self, probabilities: &[f32]) -> f32 {
        let mut next = resample(&self.population, probabilities, &mut self.rng);
        for member in &mut next {
            member.mutate(&mut self.rng, self.config.mutation_rate);
        }
        self.population = next;

        let mean = finite_mean(self.scores.iter().copied());
        self.history.push(mean);
        debug!(
            "generation {}: mean score {:.4}, best {:.4}",
            self.history.len(),
            mean,
            self.scores.iter().copied().fold(f32::NEG_INFINITY, f32::max)
        );
        mean
    }
}

impl<P: Problem + Clone + Send> Herd<P> {
    /// Score every member on a rayon pool.
    ///
    /// Each member plays against its own [`Problem::fork`] of the shared
    /// problem. All scores are collected before the probabilities are computed.
    pub fn evaluate_parallel(&mut self) -> Vec<f32> {
        let trials = self.config.trials_per_eval;
        let problems: Vec<P> = (0..self.population.len())
            .map(|_| self.problem.fork())
            .collect();
        let scores: Vec<f32> = self
            .population
            .par_iter_mut()
            .zip(problems)
            .map(|(member, mut problem)| mean_score(&mut problem, member, trials))
            .collect();
        self.record_scores(scores)
    }

    /// Like [`Herd::evolve`], with each evaluation run in parallel.
    pub fn evolve_parallel(&mut self, generations: usize) -> Vec<f32> {
        (0..generations)
            .map(|_| {
                let probabilities = self.evaluate_parallel();
                self.reproduce(&probabilities)
            })
            .collect()
    }
}

/// Mean fitness of `member` over `trials` episodes.
fn mean_score<P: Problem>(problem: &mut P, member: &mut Network, trials: usize) -> f32 {
    finite_mean((0..trials).map(|_| problem.experience(member)))
}

/// Mean accumulated in `f64`, saturated to the finite `f32` range. NaN propagates.
fn finite_mean(values: impl Iterator<Item = f32>) -> f32 {
    let (total, count) = values.fold((0.0f64, 0usize), |(total, count), v| {
        (total + f64::from(v), count + 1)
    });
    if count == 0 {
        return 0.0;
    }
    let limit = f64::from(f32::MAX);
    (total / count as f64).clamp(-limit, limit) as f32
}

/// Grow every network to the largest neuron count among them.
///
/// Smaller members gain hidden neurons via [`Network::add_neurons`]. Returns
/// the common neuron count, or zero for an empty slice.
pub fn scale(members: &mut [Network]) -> usize {
    let target = members.iter().map(Network::nb_neurons).max().unwrap_or(0);
    for member in members.iter_mut() {
        let missing = target - member.nb_neurons();
        if missing > 0 {
            *member = member.add_neurons(missing);
        }
    }
    target
}
