//! Vertical axis scaling.
//!
//! Bounds are computed once from the entire table and reused unchanged for
//! the full view and every sub-window, so all charts of one run share a
//! comparable vertical scale.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::table::{Sample, TableView};

/// Fan speed is already a percentage; its axis tops out at 100 regardless
/// of observed data.
pub const FAN_SPEED_LIMIT: f64 = 100.0;

/// Headroom factor applied above the observed maximum.
pub const Y_SCALING: f64 = 1.1;

/// Vertical range for one metric's axis. `lower` is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub lower: f64,
    pub upper: f64,
}

impl AxisBounds {
    /// Bounds from zero up to `upper`.
    pub fn from_upper(upper: f64) -> Self {
        Self { lower: 0.0, upper }
    }

    /// Width of the range.
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Per-metric axis bounds for one chart run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBounds {
    pub fan_speed: AxisBounds,
    pub temperature: AxisBounds,
    pub power_usage: AxisBounds,
}

/// Derive axis bounds from the full dataset.
///
/// Fails with [`Error::EmptyInput`] when there are no samples; there is no
/// meaningful scale for zero samples and no default is substituted.
pub fn compute_bounds(view: TableView<'_>) -> Result<ChartBounds> {
    if view.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(ChartBounds {
        fan_speed: AxisBounds::from_upper(FAN_SPEED_LIMIT),
        temperature: AxisBounds::from_upper(max_metric(view, |s| s.temperature) * Y_SCALING),
        power_usage: AxisBounds::from_upper(max_metric(view, |s| s.power_usage) * Y_SCALING),
    })
}

fn max_metric(view: TableView<'_>, metric: impl Fn(&Sample) -> f64) -> f64 {
    view.samples()
        .iter()
        .map(metric)
        .fold(f64::NEG_INFINITY, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RecordTable;
    use approx::assert_relative_eq;

    fn table(temps: &[f64], powers: &[f64]) -> RecordTable {
        let samples = temps
            .iter()
            .zip(powers)
            .enumerate()
            .map(|(i, (&t, &p))| Sample {
                timestamp_ms: i as u64 * 250,
                device_index: 0,
                fan_speed: 150.0, // deliberately above the fixed limit
                temperature: t,
                power_usage: p,
            })
            .collect();
        RecordTable::new(samples)
    }

    #[test]
    fn test_fan_speed_upper_is_fixed() {
        let t = table(&[90.0, 95.0], &[400.0, 500.0]);
        let bounds = compute_bounds(t.full_view()).unwrap();
        assert_eq!(bounds.fan_speed.upper, FAN_SPEED_LIMIT);
        assert_eq!(bounds.fan_speed.lower, 0.0);
    }

    #[test]
    fn test_temperature_upper_scales_observed_max() {
        let t = table(&[10.0, 20.0, 30.0], &[1.0, 1.0, 1.0]);
        let bounds = compute_bounds(t.full_view()).unwrap();
        assert_relative_eq!(bounds.temperature.upper, 33.0, max_relative = 1e-12);
    }

    #[test]
    fn test_power_upper_scales_observed_max() {
        let t = table(&[1.0, 1.0], &[120.0, 250.0]);
        let bounds = compute_bounds(t.full_view()).unwrap();
        assert_relative_eq!(bounds.power_usage.upper, 275.0, max_relative = 1e-12);
    }

    #[test]
    fn test_empty_table_is_an_error() {
        let t = RecordTable::new(Vec::new());
        assert!(matches!(
            compute_bounds(t.full_view()),
            Err(Error::EmptyInput)
        ));
    }
}
