// File: crates/cma-core/src/signal.rs
// Summary: Edge-triggered momentum crossover (zero-line) detection.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Crossover {
    #[default]
    None,
    Bullish,
    Bearish,
}

impl Crossover {
    pub fn is_signal(&self) -> bool { !matches!(self, Crossover::None) }
}

/// Compare this bar's normalized momentum with the prior bar's raw momentum.
/// `previous_delta` must be read before the momentum state advances.
pub fn crossover(normalized_delta: f64, previous_delta: f64) -> Crossover {
    if normalized_delta > 0.0 && previous_delta <= 0.0 {
        Crossover::Bullish
    } else if normalized_delta < 0.0 && previous_delta >= 0.0 {
        Crossover::Bearish
    } else {
        Crossover::None
    }
}
