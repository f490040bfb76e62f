use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::HistogramError;
use crate::preprocess::Dimensions;
use crate::threshold::ThresholdMethod;

/// Settings for `compute_bins`.
///
/// Usage:
///
///      use histobin::{BinOptions, ThresholdMethod};
///      let opts = BinOptions::new()
///          .with_method(ThresholdMethod::Sturges)
///          .with_dimensions(1_usize)
///          .with_pad_bounds(true);
///      assert!(opts.pad_bounds);
///
/// Options can also come from a bare method name (`"scott".parse()`)
/// or from JSON such as `{"method": "scott", "dimensions": [1], "padBounds": true}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BinOptions {
    /// Rule used to pick the target bin count. Defaults to square root.
    pub method : ThresholdMethod,

    /// Column(s) to project from row data. Ignored for flat values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions : Option<Dimensions>,

    /// Move the samples of an extended edge bin into its neighbour,
    /// leaving the edge bin as an empty placeholder.
    pub pad_bounds : bool
}

impl BinOptions {
    /// Square root rule, no dimension selection, no padding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the rule that picks the target bin count.
    pub fn with_method(mut self, method: ThresholdMethod) -> Self {
        self.method = method;
        self
    }

    /// Configure which column(s) of row data are binned.
    /// An empty list means no selection, the same as never calling this.
    pub fn with_dimensions<D: Into<Dimensions>>(mut self, dimensions: D) -> Self {
        self.dimensions = Some(dimensions.into());
        self
    }

    /// Configure whether extended edge bins hand their samples to their neighbours.
    pub fn with_pad_bounds(mut self, pad_bounds: bool) -> Self {
        self.pad_bounds = pad_bounds;
        self
    }
}

impl From<ThresholdMethod> for BinOptions {
    fn from(method: ThresholdMethod) -> Self {
        BinOptions::new().with_method(method)
    }
}

impl From<&BinOptions> for BinOptions {
    fn from(options: &BinOptions) -> Self {
        options.clone()
    }
}

/// Parse a bare method name into options with every other setting at its default.
impl FromStr for BinOptions {
    type Err = HistogramError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(name.parse::<ThresholdMethod>()?.into())
    }
}
