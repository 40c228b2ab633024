//! Squashing function applied to every neuron on each network step.
//!
//! The squash is a sigmoid rescaled onto `(-1, 1)`:
//! `squash(x) = 2 * (sigmoid(x) - 0.5)`. It is odd-symmetric and maps `0` to `0`,
//! so a silent network stays silent until it receives input or bias.

use serde::{Deserialize, Serialize};

/// Base of the exponential used inside the squash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Squash {
    /// Exact exponential: `2 / (1 + e^(-x)) - 1`, i.e. `tanh(x / 2)`.
    #[default]
    Natural,
    /// Fixed finite base `2.7`: `2 / (1 + 2.7^(-x)) - 1`.
    ///
    /// Slightly flatter than [`Squash::Natural`]; kept for reproducing runs
    /// that were tuned against this landscape.
    Truncated,
}

/// Base used by [`Squash::Truncated`].
pub const TRUNCATED_BASE: f32 = 2.7;

/// Largest magnitude the squash produces: the `f32` just below `1.0`.
pub const SATURATION: f32 = 1.0 - f32::EPSILON / 2.0;

impl Squash {
    /// Apply the squash to a pre-activation sum.
    ///
    /// NaN propagates. Large inputs, infinities included, saturate to
    /// `±SATURATION` so the result never reaches `±1`.
    #[inline]
    #[must_use]
    pub fn apply(self, x: f32) -> f32 {
        if x.is_nan() {
            return f32::NAN;
        }
        if x == f32::INFINITY {
            return SATURATION;
        }
        if x == f32::NEG_INFINITY {
            return -SATURATION;
        }

        let y = match self {
            // 2 * (sigmoid(x) - 0.5) == tanh(x / 2), which is exactly odd.
            Self::Natural => (0.5 * x).tanh(),
            Self::Truncated => {
                // Same identity with a rescaled argument: b^x = e^(x ln b).
                (0.5 * x * TRUNCATED_BASE.ln()).tanh()
            }
        };
        // tanh rounds to exactly 1.0 in f32 once |x / 2| is around 9.
        y.clamp(-SATURATION, SATURATION)
    }

    /// The image of the squash; both bounds are open.
    #[must_use]
    pub const fn output_range(self) -> (f32, f32) {
        (-1.0, 1.0)
    }
}
