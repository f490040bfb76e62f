use serde::{Deserialize, Serialize};

/// Data handed to the bin builder: a flat list of values, or rows of
/// values from which one column is projected.
#[derive(Copy, Clone, Debug)]
pub enum Dataset<'a> {
    Values(&'a [f64]),
    Rows(&'a [Vec<f64>])
}

impl<'a> From<&'a [f64]> for Dataset<'a> {
    fn from(values: &'a [f64]) -> Self {
        Dataset::Values(values)
    }
}

impl<'a> From<&'a Vec<f64>> for Dataset<'a> {
    fn from(values: &'a Vec<f64>) -> Self {
        Dataset::Values(values.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Dataset<'a> {
    fn from(values: &'a [f64; N]) -> Self {
        Dataset::Values(values.as_slice())
    }
}

impl<'a> From<&'a [Vec<f64>]> for Dataset<'a> {
    fn from(rows: &'a [Vec<f64>]) -> Self {
        Dataset::Rows(rows)
    }
}

impl<'a> From<&'a Vec<Vec<f64>>> for Dataset<'a> {
    fn from(rows: &'a Vec<Vec<f64>>) -> Self {
        Dataset::Rows(rows.as_slice())
    }
}

/// Which column(s) of row data to use: a single index or a list of them.
/// When a list is given, every listed column must be finite for a row to count,
/// and the first listed column supplies the value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimensions {
    Single(usize),
    Many(Vec<usize>)
}

impl From<usize> for Dimensions {
    fn from(index: usize) -> Self {
        Dimensions::Single(index)
    }
}

impl From<Vec<usize>> for Dimensions {
    fn from(indices: Vec<usize>) -> Self {
        Dimensions::Many(indices)
    }
}

/// Canonical form of a dimension selector: None means "no selection".
/// An empty list selects nothing, so it normalizes to None as well.
pub fn normalize_dimensions(dimensions: Option<&Dimensions>) -> Option<Vec<usize>> {
    match dimensions {
        None => None,
        Some(Dimensions::Single(index)) => Some(vec![*index]),
        Some(Dimensions::Many(indices)) if indices.is_empty() => None,
        Some(Dimensions::Many(indices)) => Some(indices.clone())
    }
}

/// Flatten `data` into the finite values to bin, keeping their original order.
///
/// For rows, the checked columns are `dimensions` or, if absent, the whole row.
/// A row with a missing or non-finite checked column is skipped entirely.
pub fn data_preprocess(data: &Dataset, dimensions: Option<&[usize]>) -> Vec<f64> {
    match data {
        Dataset::Values(values) => values.iter().copied().filter(|x| x.is_finite()).collect(),
        Dataset::Rows(rows) => {
            let target = dimensions.and_then(|dims| dims.first().copied()).unwrap_or(0);
            rows.iter()
                .filter(|row| match dimensions {
                    Some(dims) => dims.iter().all(|&j| row.get(j).map_or(false, |x| x.is_finite())),
                    None => row.iter().all(|x| x.is_finite())
                })
                .filter_map(|row| row.get(target).copied())
                .filter(|x| x.is_finite())
                .collect()
        }
    }
}
