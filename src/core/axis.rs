use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{AxisRange, DataZoom};
use crate::error::{ChartError, ChartResult};

/// One cartesian axis as seen by the bar layout.
///
/// The same record serves as category axis (uses `category_count` and
/// `boundary_gap`) or value axis (uses `range`), depending on orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub show: bool,
    pub boundary_gap: bool,
    pub range: AxisRange,
    pub category_count: usize,
}

impl Axis {
    #[must_use]
    pub fn category(category_count: usize) -> Self {
        Self {
            show: true,
            boundary_gap: true,
            range: AxisRange::default(),
            category_count,
        }
    }

    #[must_use]
    pub fn value(range: AxisRange) -> Self {
        Self {
            show: true,
            boundary_gap: false,
            range,
            category_count: 0,
        }
    }

    #[must_use]
    pub fn with_show(mut self, show: bool) -> Self {
        self.show = show;
        self
    }

    #[must_use]
    pub fn with_boundary_gap(mut self, boundary_gap: bool) -> Self {
        self.boundary_gap = boundary_gap;
        self
    }

    /// Pixel width of one category slot over `total_extent`.
    ///
    /// Only categories inside `zoom` share the extent. Without boundary gap
    /// the first and last category sit on the axis ends, so one slot fewer
    /// divides the extent.
    pub fn data_width(self, total_extent: f64, zoom: DataZoom) -> ChartResult<f64> {
        if !total_extent.is_finite() {
            return Err(ChartError::InvalidData(
                "axis extent must be finite".to_owned(),
            ));
        }
        let visible = zoom.visible_count(self.category_count);
        let divisor = if self.boundary_gap {
            visible
        } else {
            visible.saturating_sub(1)
        };
        if divisor == 0 {
            return Err(ChartError::DegenerateRange {
                min: 0.0,
                max: visible as f64,
            });
        }
        Ok(total_extent / divisor as f64)
    }
}

/// Picks the axis paired with `preferred`.
///
/// Returns `preferred` when that axis is shown, otherwise its cyclic
/// successor `(preferred + 1) % len`, whether or not that one is shown.
pub fn resolve_visible_axis(candidates: &[Axis], preferred: usize) -> ChartResult<usize> {
    let count = candidates.len();
    if preferred >= count {
        return Err(ChartError::IndexOutOfRange {
            index: preferred,
            len: count,
        });
    }
    if candidates[preferred].show {
        return Ok(preferred);
    }

    let resolved = (preferred + 1) % count;
    trace!(preferred, resolved, "paired axis hidden; using cyclic successor");
    Ok(resolved)
}
