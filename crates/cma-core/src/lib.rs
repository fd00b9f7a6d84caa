// File: crates/cma-core/src/lib.rs
// Summary: Core library entry point; exports the momentum tracker, normalizer, color/crossover logic and indicator lifecycle.

pub mod average;
pub mod bar;
pub mod color;
pub mod config;
pub mod error;
pub mod indicator;
pub mod momentum;
pub mod normalize;
pub mod render;
pub mod signal;

pub use average::{Average, AverageKind};
pub use bar::{Bar, BarStatus, BarUpdate, PriceSource};
pub use color::{momentum_color, ColorScale, Rgb};
pub use config::{IndicatorConfig, IntrabarPolicy};
pub use error::IndicatorError;
pub use indicator::{step, BarOutcome, ColorfulMa, Indicator, RejectReason, Snapshot, StepSettings};
pub use momentum::{Momentum, MomentumState, Tracker};
pub use normalize::{normalize, normalize_default, DEFAULT_CONTRAST, NORMALIZED_LIMIT};
pub use render::{render, render_history, DrawCommand, MarkerIcon, MarkerPlacement, ReadoutLayout};
pub use signal::{crossover, Crossover};
