use crate::error::{HistogramError, Result};

/// A "nice" step between bin edges and the number of decimal digits
/// needed to print any multiple of it without binary rounding noise.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickStep {
    /// Power of ten times 1, 2, 5 or 10. Negative when the range is descending.
    pub step : f64,

    /// Decimal digits to keep when rounding edges built from `step`.
    pub precision : usize
}

/// Decimal exponent of a positive number: the power of ten at or just below it.
///
/// ```text
///     quantity_exponent(0.25) == -1
///     quantity_exponent(1000) ==  3
/// ```
pub fn quantity_exponent(value: f64) -> i32 {
    if value == 0.0 || !value.is_finite() {
        return 0;
    }
    let magnitude = value.abs();
    let mut exponent = magnitude.log10().floor() as i32;
    // log10 may land a hair off an exact power of ten.
    let scaled = magnitude / 10_f64.powi(exponent);
    if scaled >= 10.0 {
        exponent += 1;
    }
    else if scaled < 1.0 {
        exponent -= 1;
    }
    exponent
}

/// Round half away from zero, keeping `digits` decimals.
/// Negative zero comes back as positive zero so labels never print "-0".
pub fn round_to_precision(value: f64, digits: usize) -> f64 {
    let factor = 10_f64.powi(digits as i32);
    if !factor.is_finite() {
        return value;
    }
    (value * factor).round() / factor + 0.0
}

/// Compute a step close to `(stop - start) / count` that is a power of ten
/// times 1, 2, 5 or 10, together with its display precision.
///
/// The multiplier is picked by comparing the raw step against the geometric
/// midpoints sqrt(2), sqrt(10) and sqrt(50) of the candidate multipliers.
pub fn tick_step(start: f64, stop: f64, count: usize) -> Result<TickStep> {
    let degenerate = || HistogramError::DegenerateStep { start, stop, count };
    if count == 0 {
        return Err(degenerate());
    }
    let raw_step = (stop - start).abs() / count as f64;
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return Err(degenerate());
    }
    let exponent = quantity_exponent(raw_step);
    let mut nice_step = 10_f64.powi(exponent);
    let error = raw_step / nice_step;
    if error >= 50_f64.sqrt() {
        nice_step *= 10.0;
    }
    else if error >= 10_f64.sqrt() {
        nice_step *= 5.0;
    }
    else if error >= 2_f64.sqrt() {
        nice_step *= 2.0;
    }
    let precision = if exponent < 0 { (-exponent) as usize } else { 0 };
    let signed = if stop >= start { nice_step } else { -nice_step };
    let step = round_to_precision(signed, precision);
    if !step.is_finite() || step == 0.0 {
        return Err(degenerate());
    }
    Ok(TickStep { step, precision })
}

/// Values `start, start + step, start + 2*step, ...` up to and including `end`,
/// each rounded to `precision` digits so repeated addition does not drift.
///
/// Returns an empty list when `end` lies before `start` or the step is unusable.
pub fn range(start: f64, end: f64, step: f64, precision: usize) -> Vec<f64> {
    let steps = round_to_precision((end - start) / step, precision).ceil();
    if !steps.is_finite() || steps < 0.0 {
        return Vec::new();
    }
    (0..=steps as usize)
        .map(|i| round_to_precision(start + i as f64 * step, precision))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_exponent() {
        assert_eq!(quantity_exponent(1.0), 0);
        assert_eq!(quantity_exponent(9.99), 0);
        assert_eq!(quantity_exponent(10.0), 1);
        assert_eq!(quantity_exponent(1000.0), 3);
        assert_eq!(quantity_exponent(0.25), -1);
        assert_eq!(quantity_exponent(0.001), -3);
    }

    #[test]
    fn test_round_to_precision() {
        assert_eq!(round_to_precision(0.1 + 0.2, 1), 0.3);
        assert_eq!(round_to_precision(0.6000000000000001, 1), 0.6);
        assert_eq!(round_to_precision(12.5, 0), 13.0);
        assert!(round_to_precision(-0.04, 1).is_sign_positive());
    }

    #[test]
    fn test_tick_step_multipliers() {
        assert_eq!(tick_step(0.0, 10.0, 10).unwrap(), TickStep { step: 1.0, precision: 0 });
        assert_eq!(tick_step(0.0, 1.0, 10).unwrap(), TickStep { step: 0.1, precision: 1 });
        assert_eq!(tick_step(0.0, 100.0, 3).unwrap(), TickStep { step: 50.0, precision: 0 });
        assert_eq!(tick_step(0.0, 1.0, 3).unwrap(), TickStep { step: 0.5, precision: 1 });
        assert_eq!(tick_step(1.0, 100.0, 10).unwrap(), TickStep { step: 10.0, precision: 0 });
        assert_eq!(tick_step(0.1, 0.7, 3).unwrap(), TickStep { step: 0.2, precision: 1 });
    }

    #[test]
    fn test_tick_step_descending() {
        let tick = tick_step(10.0, 0.0, 10).unwrap();
        assert_eq!(tick.step, -1.0);
    }

    #[test]
    fn test_tick_step_small_steps_are_clean() {
        let tick = tick_step(0.0, 0.003, 3).unwrap();
        assert_eq!(tick.step, 0.001);
        assert_eq!(tick.precision, 3);
    }

    #[test]
    fn test_tick_step_degenerate() {
        assert!(matches!(tick_step(5.0, 5.0, 4), Err(HistogramError::DegenerateStep { .. })));
        assert!(matches!(tick_step(0.0, 1.0, 0), Err(HistogramError::DegenerateStep { .. })));
        assert!(tick_step(0.0, f64::NAN, 4).is_err());
        assert!(tick_step(f64::MIN, f64::MAX, 2).is_err());
    }

    #[test]
    fn test_range() {
        assert_eq!(range(0.2, 0.6, 0.2, 1), vec![0.2, 0.4, 0.6]);
        assert_eq!(range(10.0, 100.0, 10.0, 0).len(), 10);
        assert_eq!(range(3.0, 3.0, 1.0, 0), vec![3.0]);
        assert!(range(5.0, 1.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_range_no_drift() {
        let edges = range(0.0, 1.0, 0.1, 1);
        assert_eq!(edges.len(), 11);
        assert_eq!(edges[3], 0.3);
        assert_eq!(edges[7], 0.7);
        assert_eq!(edges[10], 1.0);
    }

    #[test]
    fn test_range_is_restartable() {
        assert_eq!(range(-1.5, 1.5, 0.5, 1), range(-1.5, 1.5, 0.5, 1));
    }
}
