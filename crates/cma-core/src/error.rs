// File: crates/cma-core/src/error.rs
// Summary: Error type shared by configuration, initialization and per-bar processing.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IndicatorError {
    #[error("period must be within {min}..={max}, got {got}")]
    InvalidPeriod { got: u32, min: u32, max: u32 },

    #[error("T3 volume factor must be within {min}..={max}, got {got}")]
    InvalidVolumeFactor { got: f64, min: f64, max: f64 },

    #[error("contrast must be finite and positive, got {0}")]
    InvalidContrast(f64),

    #[error("non-finite moving-average value: {0}")]
    NonFiniteAverage(f64),

    #[error("non-finite bar input: price={price}, volume={volume}")]
    NonFiniteInput { price: f64, volume: f64 },

    #[error("invalid bar: {0}")]
    InvalidBar(&'static str),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
