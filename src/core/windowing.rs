use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};

/// Visible sub-range of the category domain as `start..=end` fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataZoom {
    start: f64,
    end: f64,
}

impl DataZoom {
    pub const FULL: Self = Self {
        start: 0.0,
        end: 1.0,
    };

    pub fn new(start: f64, end: f64) -> ChartResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(ChartError::InvalidData(
                "data zoom bounds must be finite".to_owned(),
            ));
        }
        if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) || start > end {
            return Err(ChartError::InvalidData(
                "data zoom must satisfy 0 <= start <= end <= 1".to_owned(),
            ));
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(self) -> f64 {
        self.start
    }

    #[must_use]
    pub fn end(self) -> f64 {
        self.end
    }

    #[must_use]
    pub fn is_full(self) -> bool {
        self.start <= 0.0 && self.end >= 1.0
    }

    /// Index range of the categories inside the window.
    ///
    /// The range is never empty for a non-empty domain: a collapsed window
    /// keeps the category under `start`.
    #[must_use]
    pub fn visible_range(self, count: usize) -> Range<usize> {
        if count == 0 {
            return 0..0;
        }
        let total = count as f64;
        let first = ((self.start * total).floor() as usize).min(count - 1);
        let last = ((self.end * total).ceil() as usize).min(count);
        if last <= first {
            return first..first + 1;
        }
        first..last
    }

    /// Number of categories inside the window.
    #[must_use]
    pub fn visible_count(self, count: usize) -> usize {
        self.visible_range(count).len()
    }
}

impl Default for DataZoom {
    fn default() -> Self {
        Self::FULL
    }
}

/// `[min_show, max_show)` index window applied after zooming.
///
/// `max_show == 0` leaves the window open-ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowWindow {
    pub min_show: usize,
    pub max_show: usize,
}

impl ShowWindow {
    #[must_use]
    pub const fn new(min_show: usize, max_show: usize) -> Self {
        Self { min_show, max_show }
    }

    /// Clamps the window to a series of `len` samples.
    ///
    /// Out-of-range bounds are recovered here and never surface as errors.
    #[must_use]
    pub fn clamp(self, len: usize) -> Range<usize> {
        let end = if self.max_show > 0 {
            self.max_show.min(len)
        } else {
            len
        };
        let start = self.min_show.min(end);
        if start != self.min_show || (self.max_show > 0 && end != self.max_show) {
            trace!(
                min_show = self.min_show,
                max_show = self.max_show,
                len,
                start,
                end,
                "clamped show window to series length"
            );
        }
        start..end
    }
}
