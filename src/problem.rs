//! The task contract networks are evaluated against, plus two stock tasks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::network::Network;

/// An episodic task a [`Network`] can be scored on.
///
/// Implementations own all task state. [`experience`](Problem::experience)
/// must terminate after a bounded number of steps and must leave the problem
/// ready for the next episode, so one instance can be reused across every
/// trial of every member.
pub trait Problem {
    /// Number of readings passed to [`Network::action`] on each step.
    fn sensor_count(&self) -> usize;

    /// Number of outputs the task reads back on each step.
    fn actor_count(&self) -> usize;

    /// Run one full episode with `network` in control and return its fitness.
    ///
    /// Higher is better. Negative scores are allowed; the herd treats them as
    /// zero when selecting.
    fn experience(&mut self, network: &mut Network) -> f32;

    /// Return the task to its initial state.
    fn reset(&mut self);

    /// An independent instance for concurrent evaluation.
    ///
    /// Defaults to a clone. Tasks that draw random episodes should advance
    /// their own generator here so that forks play different episodes.
    fn fork(&mut self) -> Self
    where
        Self: Sized + Clone,
    {
        self.clone()
    }
}

/// A borrowed problem, so one task instance can drive several herds in turn.
impl<P: Problem + ?Sized> Problem for &mut P {
    fn sensor_count(&self) -> usize {
        (**self).sensor_count()
    }

    fn actor_count(&self) -> usize {
        (**self).actor_count()
    }

    fn experience(&mut self, network: &mut Network) -> f32 {
        (**self).experience(network)
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

/// A task whose fitness ignores the network entirely.
///
/// Each episode feeds `steps` zero readings to the network and returns
/// `score`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantProblem {
    pub sensors: usize,
    pub actors: usize,
    pub steps: usize,
    pub score: f32,
}

impl ConstantProblem {
    #[must_use]
    pub const fn new(sensors: usize, actors: usize, score: f32) -> Self {
        Self {
            sensors,
            actors,
            steps: 1,
            score,
        }
    }
}

impl Problem for ConstantProblem {
    fn sensor_count(&self) -> usize {
        self.sensors
    }

    fn actor_count(&self) -> usize {
        self.actors
    }

    fn experience(&mut self, network: &mut Network) -> f32 {
        let silence = vec![0.0; self.sensors];
        for _ in 0..self.steps {
            network.action(&silence);
        }
        self.score
    }

    fn reset(&mut self) {}
}

/// Delayed recall of a single cue.
///
/// On the first step the network's only sensor receives a cue drawn
/// uniformly from `[-1, 1)`. It then receives `delay` silent steps, and the
/// episode's fitness is `1 - |output - cue|` read from the single actor after
/// the last step. Solving it requires the network to hold the cue in its
/// recurrent state.
#[derive(Debug, Clone)]
pub struct MemoryTask {
    delay: usize,
    rng: ChaCha8Rng,
    cue: Option<f32>,
    step: usize,
}

impl MemoryTask {
    #[must_use]
    pub fn new(delay: usize, seed: u64) -> Self {
        Self {
            delay,
            rng: ChaCha8Rng::seed_from_u64(seed),
            cue: None,
            step: 0,
        }
    }

    #[must_use]
    pub const fn delay(&self) -> usize {
        self.delay
    }

    /// Sensor reading for the current step, drawing a cue on the first one.
    fn reading(&mut self) -> f32 {
        if self.step == 0 {
            let cue = self.rng.random_range(-1.0..1.0);
            self.cue = Some(cue);
            cue
        } else {
            0.0
        }
    }
}

impl Problem for MemoryTask {
    fn sensor_count(&self) -> usize {
        1
    }

    fn actor_count(&self) -> usize {
        1
    }

    fn experience(&mut self, network: &mut Network) -> f32 {
        let mut output = 0.0;
        while self.step <= self.delay {
            let reading = self.reading();
            output = network.action(&[reading])[0];
            self.step += 1;
        }
        let score = self.cue.map_or(0.0, |cue| 1.0 - (output - cue).abs());
        self.reset();
        score
    }

    /// Clears the episode; the cue generator keeps advancing so successive
    /// trials see different cues.
    fn reset(&mut self) {
        self.cue = None;
        self.step = 0;
    }

    fn fork(&mut self) -> Self {
        Self::new(self.delay, self.rng.random())
    }
}
