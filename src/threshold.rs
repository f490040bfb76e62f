use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use log::warn;
use serde::{Deserialize, Serialize};
use crate::error::HistogramError;
use crate::statistics::{ascending, deviation, quantile};

/// Largest bin count the square root rule will ever suggest.
pub const SQUARE_ROOT_CAP: f64 = 50.0;

/// Rules for choosing how many bins a histogram should have.
/// See <https://en.wikipedia.org/wiki/Histogram#Number_of_bins_and_width>.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThresholdMethod {
    /// ceil(√n), capped at 50. Ignores the spread of the data.
    #[default]
    SquareRoot,

    /// Bin width 3.5σ / ∛n. Sensitive to outliers through the standard deviation.
    Scott,

    /// Bin width 2·IQR / ∛n. Robust to outliers.
    FreedmanDiaconis,

    /// ceil(log₂ n) + 1. Assumes roughly normal data.
    Sturges
}

impl ThresholdMethod {
    /// All methods, in declaration order.
    pub const ALL: [ThresholdMethod; 4] = [
        ThresholdMethod::SquareRoot,
        ThresholdMethod::Scott,
        ThresholdMethod::FreedmanDiaconis,
        ThresholdMethod::Sturges
    ];

    /// Name used when parsing and serializing.
    pub fn name(&self) -> &'static str {
        match self {
            ThresholdMethod::SquareRoot => "squareRoot",
            ThresholdMethod::Scott => "scott",
            ThresholdMethod::FreedmanDiaconis => "freedmanDiaconis",
            ThresholdMethod::Sturges => "sturges"
        }
    }

    /// Raw suggested bin count. May be NaN or infinite for degenerate data,
    /// e.g. fewer than two values, zero deviation or zero IQR.
    pub fn suggest(&self, values: &[f64], min: f64, max: f64) -> f64 {
        let n = values.len() as f64;
        match self {
            ThresholdMethod::SquareRoot => n.sqrt().ceil().min(SQUARE_ROOT_CAP),
            ThresholdMethod::Scott => {
                let sigma = deviation(values).unwrap_or(f64::NAN);
                ((max - min) / (3.5 * sigma * n.powf(-1.0 / 3.0))).ceil()
            },
            ThresholdMethod::FreedmanDiaconis => {
                // Sort a private copy; the caller's order must survive.
                let mut sorted = values.to_vec();
                sorted.sort_by(ascending);
                let iqr = match (quantile(&sorted, 0.75), quantile(&sorted, 0.25)) {
                    (Some(q3), Some(q1)) => q3 - q1,
                    _ => f64::NAN
                };
                ((max - min) / (2.0 * iqr * n.powf(-1.0 / 3.0))).ceil()
            },
            ThresholdMethod::Sturges => n.log2().ceil() + 1.0
        }
    }

    /// Suggested bin count, clamped to at least one bin.
    pub fn bin_count(&self, values: &[f64], min: f64, max: f64) -> usize {
        let raw = self.suggest(values, min, max);
        if raw.is_finite() && raw >= 1.0 {
            raw as usize
        }
        else {
            warn!("{} suggested {} bins for {} values, falling back to a single bin", self, raw, values.len());
            1
        }
    }
}

impl Display for ThresholdMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThresholdMethod {
    type Err = HistogramError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ThresholdMethod::ALL
            .iter()
            .find(|method| method.name() == name)
            .copied()
            .ok_or_else(|| HistogramError::UnknownMethod(name.to_string()))
    }
}
