//! Histogram bins whose edges sit on round tick values.
//!
//! The number of bins comes from one of four rules (square root, Scott,
//! Freedman-Diaconis, Sturges). That count is turned into a "nice" step
//! (a power of ten times 1, 2 or 5), bin edges are laid on multiples of the step,
//! and each value is dropped into the bin containing it.
//!
//! Usage:
//!
//!      use histobin::{compute_bins, BinOptions, ThresholdMethod};
//!      let data: Vec<f64> = (1..=100).map(|i| i as f64).collect();
//!
//!      let result = compute_bins(&data, ThresholdMethod::SquareRoot).unwrap();
//!      assert_eq!(result.bins.len(), 11);
//!      assert_eq!(result.data[1].label, "10 - 20");
//!
//!      let padded = compute_bins(&data, BinOptions::new().with_pad_bounds(true)).unwrap();
//!      assert_eq!(padded.custom_data[0].count, 0);
use std::mem;
use log::{debug, trace};
use serde::Serialize;

pub mod error;
pub mod options;
pub mod preprocess;
pub mod statistics;
pub mod threshold;
pub mod tick;

pub use error::{HistogramError, Result};
pub use options::BinOptions;
pub use preprocess::{Dataset, Dimensions};
pub use threshold::ThresholdMethod;
pub use tick::TickStep;

use preprocess::{data_preprocess, normalize_dimensions};
use tick::{range, round_to_precision, tick_step};

/// Bin counts above this are refused rather than allocated.
pub const MAX_BIN_COUNT: usize = 1 << 20;

/// One histogram bin: the interval `[x0, x1)` and the values that fell into it.
/// The last bin also holds values equal to `x1`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Bin {
    pub x0 : f64,
    pub x1 : f64,

    /// Values assigned to this bin, in input order.
    pub sample : Vec<f64>
}

impl Bin {
    fn new(x0: f64, x1: f64) -> Self {
        Bin { x0, x1, sample: Vec::new() }
    }

    /// Number of values in the bin.
    pub fn count(&self) -> usize {
        self.sample.len()
    }

    /// Center of `[x0, x1]`, where a bar for this bin is drawn.
    pub fn midpoint(&self) -> f64 {
        (self.x0 + self.x1) / 2.0
    }

    /// Human readable "x0 - x1".
    pub fn label(&self) -> String {
        format!("{} - {}", format_edge(self.x0), format_edge(self.x1))
    }
}

/// Shortest round-trip decimal for magnitudes in [1e-6, 1e21),
/// exponent notation with a signed exponent (`2e-7`, `2e+21`) outside it.
fn format_edge(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-6..1e21).contains(&magnitude) || !value.is_finite() {
        return format!("{}", value);
    }
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => format!("{}e+{}", mantissa, exponent),
        _ => formatted
    }
}

/// Per-bin record for plotting: where to draw the bar and what to call it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BinRecord {
    pub midpoint : f64,
    pub count : usize,
    pub x0 : f64,
    pub x1 : f64,
    pub label : String
}

/// Compact per-bin record with only the boundaries and the count.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct BinSummary {
    pub x0 : f64,
    pub x1 : f64,
    pub count : usize
}

/// Everything `compute_bins` produces. The three lists run in bin order.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BinResult {
    pub bins : Vec<Bin>,
    pub data : Vec<BinRecord>,
    pub custom_data : Vec<BinSummary>
}

impl BinResult {
    fn from_bins(bins: Vec<Bin>) -> Self {
        let data = bins
            .iter()
            .map(|bin| BinRecord {
                midpoint: bin.midpoint(),
                count: bin.count(),
                x0: bin.x0,
                x1: bin.x1,
                label: bin.label()
            })
            .collect();
        let custom_data = bins
            .iter()
            .map(|bin| BinSummary { x0: bin.x0, x1: bin.x1, count: bin.count() })
            .collect();
        BinResult { bins, data, custom_data }
    }

    /// Sample count per bin.
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(Bin::count).collect()
    }
}

// ////////////////////////////
//                           //
//        Bin Builder        //
//                           //
// ////////////////////////////

/// Compute histogram bins for `data`.
///
/// `options` may be a `BinOptions`, a `ThresholdMethod`, or options parsed
/// from a method name with `"scott".parse::<BinOptions>()`.
///
/// Edge cases:
///   - No finite values: `HistogramError::InsufficientData`.
///   - All values equal (including a single value): one zero-width bin holding them all.
///   - No tick falls inside the data: one bin from the tick below the minimum
///     to the tick above the maximum.
pub fn compute_bins<'a, D, O>(data: D, options: O) -> Result<BinResult>
where D: Into<Dataset<'a>>,
      O: Into<BinOptions>
{
    let options = options.into();
    let method = options.method;
    let dimensions = normalize_dimensions(options.dimensions.as_ref());
    let values = data_preprocess(&data.into(), dimensions.as_deref());

    let (min_value, max_value) = match (statistics::min(&values), statistics::max(&values)) {
        (Some(min), Some(max)) => (min, max),
        _ => return Err(HistogramError::InsufficientData)
    };
    if min_value == max_value {
        debug!("all {} values equal {}, using a single bin", values.len(), min_value);
        return Ok(BinResult::from_bins(vec![Bin { x0: min_value, x1: max_value, sample: values }]));
    }

    let bin_count = method.bin_count(&values, min_value, max_value);
    if bin_count > MAX_BIN_COUNT {
        return Err(HistogramError::TooManyBins { requested: bin_count, limit: MAX_BIN_COUNT });
    }
    let TickStep { step, precision } = tick_step(min_value, max_value, bin_count)?;

    // Edges strictly inside the data range, aligned to multiples of step.
    let range_array = range(
        round_to_precision((min_value / step).ceil() * step, precision),
        round_to_precision((max_value / step).floor() * step, precision),
        step,
        precision
    );
    debug!("{} chose {} bins for {} values: step {}, {} edges in [{}, {}]",
        method, bin_count, values.len(), step, range_array.len(), min_value, max_value);

    if range_array.is_empty() {
        let x0 = round_to_precision((min_value / step).floor() * step, precision).min(min_value);
        let x1 = round_to_precision((max_value / step).ceil() * step, precision).max(max_value);
        return Ok(BinResult::from_bins(vec![Bin { x0, x1, sample: values }]));
    }

    let (mut bins, left_bound_extended, right_bound_extended) =
        empty_bins(&range_array, min_value, max_value, step, precision);

    for &value in values.iter() {
        if min_value <= value && value <= max_value {
            // A value equal to an edge belongs to the bin on the right of it.
            let index = range_array.partition_point(|&edge| edge <= value);
            bins[index].sample.push(value);
        }
    }

    if options.pad_bounds {
        pad_bounds(&mut bins, left_bound_extended, right_bound_extended);
    }

    Ok(BinResult::from_bins(bins))
}

/// Lay out `edges.len() + 1` empty bins around the interior edges.
/// Also reports whether the first and last bins had to be widened
/// past the data to a full step.
fn empty_bins(edges: &[f64], min_value: f64, max_value: f64, step: f64, precision: usize) -> (Vec<Bin>, bool, bool) {
    let len = edges.len();
    let mut left_bound_extended = false;
    let mut right_bound_extended = false;
    let mut bins = Vec::with_capacity(len + 1);
    for i in 0..=len {
        let x0 =
            if i > 0 { edges[i - 1] }
            else if edges[0] - min_value == step { min_value }
            else {
                left_bound_extended = true;
                round_to_precision(edges[0] - step, precision)
            };
        let x1 =
            if i < len { edges[i] }
            else if max_value - edges[len - 1] == step { max_value }
            else {
                right_bound_extended = true;
                round_to_precision(edges[len - 1] + step, precision)
            };
        bins.push(Bin::new(x0, x1));
    }
    (bins, left_bound_extended, right_bound_extended)
}

/// Empty each extended edge bin into its neighbour so the placeholder reports zero.
fn pad_bounds(bins: &mut [Bin], left_bound_extended: bool, right_bound_extended: bool) {
    let len = bins.len();
    if len < 2 {
        return;
    }
    if left_bound_extended {
        let moved = mem::take(&mut bins[0].sample);
        trace!("moving {} samples out of the extended first bin", moved.len());
        bins[1].sample.extend(moved);
    }
    if right_bound_extended {
        let moved = mem::take(&mut bins[len - 1].sample);
        trace!("moving {} samples out of the extended last bin", moved.len());
        bins[len - 2].sample.extend(moved);
    }
}
