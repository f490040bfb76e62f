use thiserror::Error;

/// Reasons a dataset cannot be turned into bins.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HistogramError {
    /// No finite values were left after preprocessing.
    #[error("insufficient data: no finite values to bin")]
    InsufficientData,

    #[error("unknown threshold method `{0}`, expected one of squareRoot, scott, freedmanDiaconis, sturges")]
    UnknownMethod(String),

    /// The tick step came out non-finite or non-positive.
    #[error("cannot bin data: degenerate tick step for range [{start}, {stop}] split into {count} bins")]
    DegenerateStep { start: f64, stop: f64, count: usize },

    #[error("cannot bin data: {requested} bins requested, limit is {limit}")]
    TooManyBins { requested: usize, limit: usize },
}

pub type Result<T> = std::result::Result<T, HistogramError>;
