// File: crates/cma-core/src/momentum.rs
// Summary: Momentum (first difference) and acceleration (second difference) of the moving average.

use tracing::warn;

use crate::error::IndicatorError;

/// First and second difference produced by one advance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Momentum {
    pub delta: f64,
    pub gamma: f64,
}

/// Last observed average and its derivatives. Starts at zero, so the first
/// advance reports delta = first average and gamma = delta.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MomentumState {
    pub previous_average: f64,
    pub previous_delta: f64,
    /// Display only; never fed back into the next difference.
    pub previous_gamma: f64,
}

impl MomentumState {
    /// Consume the state and return its successor along with this step's differences.
    #[must_use]
    pub fn advance(self, average: f64) -> (MomentumState, Momentum) {
        let delta = average - self.previous_average;
        let gamma = delta - self.previous_delta;
        let next = MomentumState { previous_average: average, previous_delta: delta, previous_gamma: gamma };
        (next, Momentum { delta, gamma })
    }

    /// Momentum as last reported; what a readout shows between bars.
    pub fn last(&self) -> Momentum {
        Momentum { delta: self.previous_delta, gamma: self.previous_gamma }
    }
}

/// Owning wrapper around `MomentumState` that refuses non-finite input.
#[derive(Clone, Debug, Default)]
pub struct Tracker {
    state: MomentumState,
}

impl Tracker {
    pub fn new() -> Self { Self::default() }

    pub fn state(&self) -> MomentumState { self.state }

    pub fn update(&mut self, average: f64) -> Result<Momentum, IndicatorError> {
        if !average.is_finite() {
            warn!(average, "rejecting non-finite moving-average value");
            return Err(IndicatorError::NonFiniteAverage(average));
        }
        let (next, momentum) = self.state.advance(average);
        self.state = next;
        Ok(momentum)
    }
}
