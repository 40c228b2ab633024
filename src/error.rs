//! Configuration errors for networks and herds.

/// Error raised when a [`Network`](crate::Network) or [`Herd`](crate::Herd)
/// is built from inconsistent parameters.
///
/// Construction never yields a partially built object: either every check
/// passes or one of these variants is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Explicit weights have the wrong number of rows.
    WeightRows {
        /// Rows required (`nb_neurons`).
        expected: usize,
        /// Rows supplied.
        found: usize,
    },
    /// One row of the explicit weights has the wrong length.
    WeightColumns {
        /// Offending row.
        row: usize,
        /// Columns required (`nb_neurons`).
        expected: usize,
        /// Columns supplied.
        found: usize,
    },
    /// Explicit bias has the wrong length.
    BiasLength {
        /// Entries required (`nb_neurons`).
        expected: usize,
        /// Entries supplied.
        found: usize,
    },
    /// Hidden group sizes do not add up to the hidden neuron count.
    SliceSum {
        /// Hidden neurons configured.
        expected: usize,
        /// Sum of the supplied slices.
        found: usize,
    },
    /// The region matrix is not square over the neuron groups.
    RegionShape {
        /// Number of groups (sensors, each hidden slice, actors).
        groups: usize,
        /// Offending row, or `None` when the row count itself is wrong.
        row: Option<usize>,
        /// Length found where `groups` was required.
        found: usize,
    },
    /// The problem reports a different sensor count than the herd was built for.
    SensorMismatch {
        /// Sensors configured on the herd.
        configured: usize,
        /// Sensors reported by the problem.
        problem: usize,
    },
    /// The problem reports a different actor count than the herd was built for.
    ActorMismatch {
        /// Actors configured on the herd.
        configured: usize,
        /// Actors reported by the problem.
        problem: usize,
    },
    /// A herd needs at least one member.
    EmptyPopulation,
    /// Each member needs at least one trial per evaluation.
    NoTrials,
    /// Mutation rate must be a probability.
    MutationRate(f32),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::WeightRows { expected, found } => write!(
                f,
                "explicit weights must have {} rows (one per neuron), got {}",
                expected, found
            ),
            ConfigError::WeightColumns {
                row,
                expected,
                found,
            } => write!(
                f,
                "explicit weight row {} must have {} columns, got {}",
                row, expected, found
            ),
            ConfigError::BiasLength { expected, found } => write!(
                f,
                "explicit bias must have {} entries, got {}",
                expected, found
            ),
            ConfigError::SliceSum { expected, found } => write!(
                f,
                "hidden slices must sum to the hidden neuron count {}, got {}",
                expected, found
            ),
            ConfigError::RegionShape {
                groups,
                row: None,
                found,
            } => write!(
                f,
                "regions must be a {}x{} matrix over neuron groups, got {} rows",
                groups, groups, found
            ),
            ConfigError::RegionShape {
                groups,
                row: Some(row),
                found,
            } => write!(
                f,
                "regions row {} must have {} entries, got {}",
                row, groups, found
            ),
            ConfigError::SensorMismatch {
                configured,
                problem,
            } => write!(
                f,
                "herd configured with {} sensors but problem provides {}",
                configured, problem
            ),
            ConfigError::ActorMismatch {
                configured,
                problem,
            } => write!(
                f,
                "herd configured with {} actors but problem expects {}",
                configured, problem
            ),
            ConfigError::EmptyPopulation => write!(f, "population size must be at least 1"),
            ConfigError::NoTrials => write!(f, "trials per evaluation must be at least 1"),
            ConfigError::MutationRate(rate) => write!(
                f,
                "mutation rate must be a probability in [0, 1], got {}",
                rate
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
