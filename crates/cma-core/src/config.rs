// File: crates/cma-core/src/config.rs
// Summary: Indicator parameters (TOML-loadable) with range validation.

use std::path::Path;

use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Serialize};

use crate::average::AverageKind;
use crate::bar::PriceSource;
use crate::color::ColorScale;
use crate::error::IndicatorError;
use crate::normalize::DEFAULT_CONTRAST;

pub const PERIOD_MIN: u32 = 1;
pub const PERIOD_MAX: u32 = 100;
pub const DEFAULT_PERIOD: u32 = 8;
pub const VOLUME_FACTOR_MIN: f64 = 0.1;
pub const VOLUME_FACTOR_MAX: f64 = 1.0;
pub const DEFAULT_VOLUME_FACTOR: f64 = 0.7;

/// How provisional (intrabar) notifications are folded into the momentum state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntrabarPolicy {
    /// Every notification is a fresh sample; repeated ticks of one bar count as separate bars.
    EveryUpdate,
    /// Provisional ticks are previewed on a scratch copy; only closed bars commit.
    #[default]
    ClosedBarsOnly,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct IndicatorConfig {
    pub average: AverageKind,
    pub period: u32,
    pub source: PriceSource,
    pub t3_volume_factor: f64,
    pub contrast: f64,
    pub intrabar: IntrabarPolicy,
    pub color_scale: ColorScale,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            average: AverageKind::T3,
            period: DEFAULT_PERIOD,
            source: PriceSource::Close,
            t3_volume_factor: DEFAULT_VOLUME_FACTOR,
            contrast: DEFAULT_CONTRAST,
            intrabar: IntrabarPolicy::ClosedBarsOnly,
            color_scale: ColorScale::RedGreen,
        }
    }
}

impl IndicatorConfig {
    pub fn validate(&self) -> Result<(), IndicatorError> {
        if !(PERIOD_MIN..=PERIOD_MAX).contains(&self.period) {
            return Err(IndicatorError::InvalidPeriod { got: self.period, min: PERIOD_MIN, max: PERIOD_MAX });
        }
        if !(VOLUME_FACTOR_MIN..=VOLUME_FACTOR_MAX).contains(&self.t3_volume_factor) {
            return Err(IndicatorError::InvalidVolumeFactor {
                got: self.t3_volume_factor,
                min: VOLUME_FACTOR_MIN,
                max: VOLUME_FACTOR_MAX,
            });
        }
        if !self.contrast.is_finite() || self.contrast <= 0.0 {
            return Err(IndicatorError::InvalidContrast(self.contrast));
        }
        Ok(())
    }

    /// Parse from TOML; absent keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, IndicatorError> {
        let cfg: Self = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, IndicatorError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| IndicatorError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Short human-readable name, e.g. "Colorful Moving Average (T3 8)".
    pub fn display_name(&self) -> String {
        format!("Colorful Moving Average ({} {})", self.average.label(), self.period)
    }
}

/// Parse a config keyword (case-insensitive) through the type's serde names.
pub(crate) fn parse_keyword<T: DeserializeOwned>(s: &str) -> Result<T, String> {
    let lowered = s.trim().to_ascii_lowercase();
    let de: StrDeserializer<'_, ValueError> = lowered.as_str().into_deserializer();
    T::deserialize(de).map_err(|e| format!("unrecognized value '{s}': {e}"))
}

macro_rules! keyword_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl std::str::FromStr for $ty {
                type Err = String;
                fn from_str(s: &str) -> Result<Self, Self::Err> { parse_keyword(s) }
            }
        )*
    };
}

keyword_from_str!(AverageKind, PriceSource, IntrabarPolicy, ColorScale);
