// File: crates/cma-core/src/indicator.rs
// Summary: Indicator lifecycle (initialize / on_bar) over the pure momentum step, plus the snapshot it emits.

use tracing::{debug, trace, warn};

use crate::average::Average;
use crate::bar::{Bar, BarStatus, BarUpdate};
use crate::color::{momentum_color, ColorScale, Rgb};
use crate::config::{IndicatorConfig, IntrabarPolicy};
use crate::error::IndicatorError;
use crate::momentum::MomentumState;
use crate::normalize::normalize;
use crate::signal::{crossover, Crossover};

/// Read-only result of one bar, handed to the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Snapshot {
    pub time: f64,
    pub average: f64,
    pub delta: f64,
    pub gamma: f64,
    pub normalized_delta: f64,
    pub normalized_gamma: f64,
    pub color: Rgb,
    pub crossover: Crossover,
    /// Computed from an intrabar tick rather than a closed bar.
    pub provisional: bool,
}

/// The parts of the config the per-bar step reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepSettings {
    pub contrast: f64,
    pub color_scale: ColorScale,
}

impl From<&IndicatorConfig> for StepSettings {
    fn from(cfg: &IndicatorConfig) -> Self {
        Self { contrast: cfg.contrast, color_scale: cfg.color_scale }
    }
}

/// Pure state transition: old state + new average -> new state + snapshot.
/// The crossover compares against the raw delta held in the *incoming* state.
pub fn step(
    state: MomentumState,
    time: f64,
    average: f64,
    settings: &StepSettings,
) -> Result<(MomentumState, Snapshot), IndicatorError> {
    if !average.is_finite() {
        return Err(IndicatorError::NonFiniteAverage(average));
    }
    let previous_delta = state.previous_delta;
    let (next, m) = state.advance(average);
    let normalized_delta = normalize(m.delta, settings.contrast);
    let normalized_gamma = normalize(m.gamma, settings.contrast);
    let snapshot = Snapshot {
        time,
        average,
        delta: m.delta,
        gamma: m.gamma,
        normalized_delta,
        normalized_gamma,
        color: momentum_color(normalized_delta, settings.color_scale),
        crossover: crossover(normalized_delta, previous_delta),
        provisional: false,
    };
    Ok((next, snapshot))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    NonFiniteInput,
    NonFiniteAverage,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BarOutcome {
    /// State advanced.
    Committed(Snapshot),
    /// Intrabar tick evaluated without touching committed state.
    Preview(Snapshot),
    /// The average has no value yet; nothing changed.
    WarmingUp,
    /// Bad data; nothing changed.
    Rejected(RejectReason),
}

impl BarOutcome {
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            BarOutcome::Committed(s) | BarOutcome::Preview(s) => Some(s),
            _ => None,
        }
    }
}

/// Host-facing contract for bar-driven indicators.
pub trait Indicator: Sized {
    type Config;

    fn id(&self) -> &'static str;
    fn initialize(config: Self::Config) -> Result<Self, IndicatorError>;
    fn on_bar(&mut self, update: &BarUpdate) -> BarOutcome;

    /// Replay closed bars, collecting the snapshots that committed.
    fn compute(&mut self, bars: &[Bar]) -> Vec<Snapshot> {
        bars.iter()
            .filter_map(|bar| match self.on_bar(&BarUpdate::closed(*bar)) {
                BarOutcome::Committed(s) => Some(s),
                _ => None,
            })
            .collect()
    }
}

/// Colored moving average with momentum/acceleration readouts.
#[derive(Clone, Debug)]
pub struct ColorfulMa {
    config: IndicatorConfig,
    settings: StepSettings,
    average: Average,
    state: MomentumState,
    last: Option<Snapshot>,
}

impl ColorfulMa {
    pub fn config(&self) -> &IndicatorConfig { &self.config }

    pub fn state(&self) -> MomentumState { self.state }

    /// Most recent committed or preview snapshot.
    pub fn last_snapshot(&self) -> Option<&Snapshot> { self.last.as_ref() }

    pub fn name(&self) -> String { self.config.display_name() }

    /// Drop all history; the next bar starts from zero state and a cold average.
    pub fn reset(&mut self) {
        self.average = Average::from_config(&self.config);
        self.state = MomentumState::default();
        self.last = None;
    }

    fn commit(&mut self, average: f64, bar: &Bar, status: BarStatus) -> BarOutcome {
        match step(self.state, bar.time, average, &self.settings) {
            Ok((next, mut snap)) => {
                snap.provisional = status == BarStatus::Provisional;
                self.state = next;
                self.last = Some(snap);
                if snap.crossover.is_signal() {
                    debug!(time = bar.time, crossover = ?snap.crossover, delta = snap.delta, "momentum crossover");
                }
                BarOutcome::Committed(snap)
            }
            Err(e) => {
                warn!(time = bar.time, error = %e, "skipping bar");
                BarOutcome::Rejected(RejectReason::NonFiniteAverage)
            }
        }
    }

    fn preview(&mut self, bar: &Bar, price: f64) -> BarOutcome {
        let mut scratch = self.average.clone();
        let Some(average) = scratch.next(price, bar.volume) else {
            trace!(time = bar.time, "average warming up (preview)");
            return BarOutcome::WarmingUp;
        };
        match step(self.state, bar.time, average, &self.settings) {
            Ok((_, mut snap)) => {
                snap.provisional = true;
                self.last = Some(snap);
                BarOutcome::Preview(snap)
            }
            Err(e) => {
                warn!(time = bar.time, error = %e, "skipping intrabar tick");
                BarOutcome::Rejected(RejectReason::NonFiniteAverage)
            }
        }
    }
}

impl Indicator for ColorfulMa {
    type Config = IndicatorConfig;

    fn id(&self) -> &'static str { "colorful_ma" }

    fn initialize(config: IndicatorConfig) -> Result<Self, IndicatorError> {
        config.validate()?;
        debug!(average = config.average.label(), period = config.period, "initializing indicator");
        Ok(Self {
            settings: StepSettings::from(&config),
            average: Average::from_config(&config),
            state: MomentumState::default(),
            last: None,
            config,
        })
    }

    fn on_bar(&mut self, update: &BarUpdate) -> BarOutcome {
        let bar = &update.bar;
        let price = self.config.source.select(bar);
        if !price.is_finite() || !bar.volume.is_finite() {
            let e = IndicatorError::NonFiniteInput { price, volume: bar.volume };
            warn!(time = bar.time, error = %e, "skipping bar");
            return BarOutcome::Rejected(RejectReason::NonFiniteInput);
        }

        if self.config.intrabar == IntrabarPolicy::ClosedBarsOnly && update.status == BarStatus::Provisional {
            return self.preview(bar, price);
        }

        match self.average.next(price, bar.volume) {
            Some(average) => self.commit(average, bar, update.status),
            None => {
                trace!(time = bar.time, "average warming up");
                BarOutcome::WarmingUp
            }
        }
    }
}
