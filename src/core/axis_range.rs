use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};

const DEFAULT_SPLIT_NUMBER: u32 = 5;

fn default_split_number() -> u32 {
    DEFAULT_SPLIT_NUMBER
}

/// Value range of one axis dimension.
///
/// Construction does not validate; degenerate ranges are reported by the
/// operations that divide by the span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    #[serde(default = "default_split_number")]
    pub split_number: u32,
}

impl AxisRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            split_number: DEFAULT_SPLIT_NUMBER,
        }
    }

    #[must_use]
    pub const fn with_split_number(mut self, split_number: u32) -> Self {
        self.split_number = split_number;
        self
    }

    /// `max - min`, rejecting non-finite bounds and empty spans.
    pub fn span(self) -> ChartResult<f64> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ChartError::InvalidData(
                "axis range bounds must be finite".to_owned(),
            ));
        }
        let span = self.max - self.min;
        if span == 0.0 {
            return Err(ChartError::DegenerateRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(span)
    }

    /// Maps `value` to its fraction of the range: `min -> 0`, `max -> 1`.
    ///
    /// Values outside the range are not clamped. Non-finite samples are
    /// pulled to the nearest bound (`NaN` to `min`).
    pub fn normalize(self, value: f64) -> ChartResult<f64> {
        let span = self.span()?;
        let value = self.clamp_sample(value, self.min);
        Ok((value - self.min) / span)
    }

    /// Value bars grow from: `min` when the whole range is positive, else 0.
    #[must_use]
    pub fn bar_baseline(self) -> f64 {
        self.min.max(0.0)
    }

    /// Fraction of the span covered by a bar of `value`, measured from
    /// [`AxisRange::bar_baseline`].
    pub fn bar_fraction(self, value: f64) -> ChartResult<f64> {
        let span = self.span()?;
        let baseline = self.bar_baseline();
        let value = self.clamp_sample(value, baseline);
        Ok((value - baseline) / span)
    }

    /// Pixel distance from the axis start to the bar baseline over `extent`.
    pub fn zero_offset(self, extent: f64) -> ChartResult<f64> {
        let span = self.span()?;
        if self.min >= 0.0 {
            Ok(0.0)
        } else if self.max <= 0.0 {
            Ok(extent)
        } else {
            Ok(-self.min / span * extent)
        }
    }

    fn clamp_sample(self, value: f64, nan_fallback: f64) -> f64 {
        if value.is_finite() {
            return value;
        }
        let clamped = if value.is_nan() {
            nan_fallback
        } else if value > 0.0 {
            self.max
        } else {
            self.min
        };
        warn!(
            value,
            clamped,
            min = self.min,
            max = self.max,
            "clamping non-finite sample"
        );
        clamped
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}
