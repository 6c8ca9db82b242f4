//! Bar-series layout.
//!
//! Series are grouped by stack id (see [`group_by_stack`]). Every group owns
//! one lateral slot per category, unless `in_same_bar` overlays all groups
//! in the same slot. Inside a group the members are stacked along the value
//! axis through a group-scoped accumulation map that is created empty for
//! the group and dropped with it.

use std::collections::BTreeMap;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::polygon::{PolygonVertices, quad};
use crate::core::{
    Axis, CoordinateRect, DataZoom, LegendFilter, Series, ShowWindow, StackGroup, StackKey,
    group_by_stack, resolve_visible_axis,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartRenderSink, SeriesPalette};

/// Which axis carries values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarOrientation {
    /// Values grow along y; categories run along x.
    #[default]
    Vertical,
    /// Values grow along x; categories run along y.
    Horizontal,
}

impl BarOrientation {
    /// Splits `(x_axes, y_axes)` into `(category_axes, value_axes)`.
    #[must_use]
    pub fn split_axes<'a>(self, x_axes: &'a [Axis], y_axes: &'a [Axis]) -> (&'a [Axis], &'a [Axis]) {
        match self {
            Self::Vertical => (x_axes, y_axes),
            Self::Horizontal => (y_axes, x_axes),
        }
    }
}

/// Bar width and spacing policy.
///
/// `bar_width > 1` is an absolute pixel width; otherwise it is a fraction of
/// the category slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarPolicy {
    #[serde(default)]
    pub in_same_bar: bool,
    pub bar_width: f64,
    pub space: f64,
}

impl Default for BarPolicy {
    fn default() -> Self {
        Self {
            in_same_bar: false,
            bar_width: 0.6,
            space: 10.0,
        }
    }
}

impl BarPolicy {
    #[must_use]
    pub fn resolve_bar_width(self, scale_width: f64) -> f64 {
        if self.bar_width > 1.0 {
            self.bar_width
        } else {
            scale_width * self.bar_width
        }
    }

    /// Distance from the slot start to the first bar, centering all groups.
    #[must_use]
    pub fn group_offset(self, scale_width: f64, bar_width: f64, group_count: usize) -> f64 {
        let gaps = group_count.saturating_sub(1) as f64 * self.space;
        if self.in_same_bar {
            (scale_width - bar_width - gaps) / 2.0
        } else {
            (scale_width - bar_width * group_count as f64 - gaps) / 2.0
        }
    }

    #[must_use]
    pub fn lateral_offset(self, group_offset: f64, group_index: usize, bar_width: f64) -> f64 {
        if self.in_same_bar {
            group_offset
        } else {
            group_offset + group_index as f64 * (bar_width + self.space)
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.bar_width.is_finite() || self.bar_width < 0.0 {
            return Err(ChartError::InvalidData(
                "bar width must be finite and >= 0".to_owned(),
            ));
        }
        if !self.space.is_finite() {
            return Err(ChartError::InvalidData(
                "bar space must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Rectangle of one datum of one series.
///
/// Along the value axis the bar spans `origin_offset..far()`; across it the
/// bar spans `cross_start()..cross_start() + bar_extent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarPlacement {
    pub series_index: usize,
    pub data_index: usize,
    /// Category slot relative to the zoom window.
    pub slot_index: usize,
    pub slot_origin: f64,
    pub lateral_offset: f64,
    pub bar_extent: f64,
    pub origin_offset: f64,
    pub value_extent: f64,
}

impl BarPlacement {
    #[must_use]
    pub fn far(&self) -> f64 {
        self.origin_offset + self.value_extent
    }

    #[must_use]
    pub fn cross_start(&self) -> f64 {
        self.slot_origin + self.lateral_offset
    }

    #[must_use]
    pub fn quad(&self, orientation: BarOrientation) -> PolygonVertices {
        let cross_start = self.cross_start();
        let cross_end = cross_start + self.bar_extent;
        match orientation {
            BarOrientation::Vertical => quad(cross_start, self.origin_offset, cross_end, self.far()),
            BarOrientation::Horizontal => {
                quad(self.origin_offset, cross_start, self.far(), cross_end)
            }
        }
    }
}

/// Placements of one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeriesLayout {
    pub series_index: usize,
    /// Palette index; `None` for series laid out but not shown.
    pub color_index: Option<usize>,
    pub placements: Vec<BarPlacement>,
}

/// Layout of one stack group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGroupLayout {
    pub key: StackKey,
    pub group_index: usize,
    pub series: Vec<BarSeriesLayout>,
    /// Final stacked extent per data index.
    pub accumulated: BTreeMap<usize, f64>,
}

/// Result of one bar pass, complete before anything is emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarLayoutPass {
    pub orientation: BarOrientation,
    pub groups: Vec<BarGroupLayout>,
}

impl BarLayoutPass {
    pub fn series(&self) -> impl Iterator<Item = &BarSeriesLayout> {
        self.groups.iter().flat_map(|group| group.series.iter())
    }

    #[must_use]
    pub fn series_layout(&self, series_index: usize) -> Option<&BarSeriesLayout> {
        self.series().find(|layout| layout.series_index == series_index)
    }

    #[must_use]
    pub fn placement_count(&self) -> usize {
        self.series().map(|layout| layout.placements.len()).sum()
    }

    /// Emits one quad per placement of every shown series.
    ///
    /// Every quad is built and checked for finite vertices first; on error
    /// the sink receives nothing.
    pub fn emit<S, P>(&self, sink: &mut S, palette: &P) -> ChartResult<usize>
    where
        S: ChartRenderSink + ?Sized,
        P: SeriesPalette + ?Sized,
    {
        let mut quads: Vec<(PolygonVertices, usize)> = Vec::with_capacity(self.placement_count());
        for layout in self.series() {
            let Some(color_index) = layout.color_index else {
                continue;
            };
            for placement in &layout.placements {
                let vertices = placement.quad(self.orientation);
                if !vertices.iter().all(|vertex| vertex.is_finite()) {
                    return Err(ChartError::InvalidData(format!(
                        "bar of series {} at data index {} has non-finite vertices",
                        placement.series_index, placement.data_index
                    )));
                }
                quads.push((vertices, color_index));
            }
        }

        for (vertices, color_index) in &quads {
            sink.emit_polygon(vertices, palette.color_for(*color_index))?;
        }
        debug!(quads = quads.len(), "emitted bar pass");
        Ok(quads.len())
    }
}

/// Axes, plot area and policies of one bar pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLayoutInput<'a> {
    pub orientation: BarOrientation,
    pub coordinate: CoordinateRect,
    pub x_axes: &'a [Axis],
    pub y_axes: &'a [Axis],
    pub policy: BarPolicy,
    pub zoom: DataZoom,
    pub window: ShowWindow,
}

impl<'a> BarLayoutInput<'a> {
    #[must_use]
    pub fn new(
        orientation: BarOrientation,
        coordinate: CoordinateRect,
        x_axes: &'a [Axis],
        y_axes: &'a [Axis],
    ) -> Self {
        Self {
            orientation,
            coordinate,
            x_axes,
            y_axes,
            policy: BarPolicy::default(),
            zoom: DataZoom::FULL,
            window: ShowWindow::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: BarPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: DataZoom) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_window(mut self, window: ShowWindow) -> Self {
        self.window = window;
        self
    }

    /// `(cross_origin, cross_extent, main_origin, main_extent)`.
    fn extents(&self) -> (f64, f64, f64, f64) {
        let c = self.coordinate;
        match self.orientation {
            BarOrientation::Vertical => (c.x, c.width, c.y, c.height),
            BarOrientation::Horizontal => (c.y, c.height, c.x, c.width),
        }
    }
}

/// Lays out every legend-active series.
///
/// Series rejected by `legend` are skipped: they get no placements and do
/// not advance their group's accumulation, so later members of the same
/// stack close the gap. Series with `show == false` are laid out and keep
/// their stack space but receive no color and are not emitted.
pub fn layout_bars<L>(
    input: &BarLayoutInput<'_>,
    series: &[Series],
    legend: &L,
) -> ChartResult<BarLayoutPass>
where
    L: LegendFilter + ?Sized,
{
    input.policy.validate()?;
    if !input.coordinate.is_valid() {
        return Err(ChartError::InvalidData(
            "coordinate rect must be finite with non-negative size".to_owned(),
        ));
    }

    let groups = group_by_stack(series);
    let active: Vec<bool> = series.iter().map(|item| legend.is_active(&item.name)).collect();
    let mut colors = vec![None; series.len()];
    let mut next_color = 0;
    for index in groups.iter().flat_map(|group| group.series.iter().copied()) {
        if series[index].show {
            colors[index] = Some(next_color);
            next_color += 1;
        }
    }

    let ctx = GroupContext {
        input,
        series,
        active: &active,
        colors: &colors,
        group_count: groups.len(),
    };

    #[cfg(feature = "parallel-layout")]
    let laid_out = {
        use rayon::prelude::*;
        groups
            .into_par_iter()
            .enumerate()
            .map(|(group_index, group)| ctx.layout_group(group_index, group))
            .collect::<ChartResult<Vec<_>>>()?
    };
    #[cfg(not(feature = "parallel-layout"))]
    let laid_out = groups
        .into_iter()
        .enumerate()
        .map(|(group_index, group)| ctx.layout_group(group_index, group))
        .collect::<ChartResult<Vec<_>>>()?;

    let pass = BarLayoutPass {
        orientation: input.orientation,
        groups: laid_out,
    };
    debug!(
        series = series.len(),
        groups = pass.groups.len(),
        placements = pass.placement_count(),
        orientation = ?input.orientation,
        "computed bar layout"
    );
    Ok(pass)
}

struct GroupContext<'a, 'i> {
    input: &'a BarLayoutInput<'i>,
    series: &'a [Series],
    active: &'a [bool],
    colors: &'a [Option<usize>],
    group_count: usize,
}

impl GroupContext<'_, '_> {
    fn layout_group(&self, group_index: usize, group: StackGroup) -> ChartResult<BarGroupLayout> {
        let mut accumulated = BTreeMap::new();
        let mut layouts = Vec::with_capacity(group.len());
        for &series_index in &group.series {
            if !self.active[series_index] {
                continue;
            }
            let placements = self.layout_series(series_index, group_index, &mut accumulated)?;
            layouts.push(BarSeriesLayout {
                series_index,
                color_index: self.colors[series_index],
                placements,
            });
        }

        Ok(BarGroupLayout {
            key: group.key,
            group_index,
            series: layouts,
            accumulated,
        })
    }

    fn layout_series(
        &self,
        series_index: usize,
        group_index: usize,
        accumulated: &mut BTreeMap<usize, f64>,
    ) -> ChartResult<Vec<BarPlacement>> {
        let input = self.input;
        let item = &self.series[series_index];
        let (category_axes, value_axes) = input.orientation.split_axes(input.x_axes, input.y_axes);
        let value_axis = value_axes
            .get(item.axis_index)
            .ok_or(ChartError::IndexOutOfRange {
                index: item.axis_index,
                len: value_axes.len(),
            })?;
        let category_axis = category_axes[resolve_visible_axis(category_axes, item.axis_index)?];

        let (cross_origin, cross_extent, main_origin, main_extent) = input.extents();
        let scale_width = category_axis.data_width(cross_extent, input.zoom)?;
        let bar_width = input.policy.resolve_bar_width(scale_width);
        let group_offset = input
            .policy
            .group_offset(scale_width, bar_width, self.group_count);
        let lateral_offset = input
            .policy
            .lateral_offset(group_offset, group_index, bar_width);
        let base = main_origin
            + value_axis.range.zero_offset(main_extent)?
            + input.coordinate.tickness;
        let slot_shift = if category_axis.boundary_gap {
            0.0
        } else {
            scale_width / 2.0
        };

        let zoomed: Range<usize> = input.zoom.visible_range(item.values.len());
        let visible = &item.values[zoomed.clone()];
        let mut placements = Vec::new();
        for slot_index in input.window.clamp(visible.len()) {
            let data_index = zoomed.start + slot_index;
            let value_extent = value_axis.range.bar_fraction(visible[slot_index])? * main_extent;
            let stacked = accumulated.entry(data_index).or_insert(0.0);
            let origin_offset = base + *stacked;
            if !value_extent.is_finite() || !(origin_offset + value_extent).is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "bar of series `{}` at data index {data_index} overflows the plot",
                    item.name
                )));
            }
            *stacked += value_extent;

            placements.push(BarPlacement {
                series_index,
                data_index,
                slot_index,
                slot_origin: cross_origin + slot_index as f64 * scale_width - slot_shift,
                lateral_offset,
                bar_extent: bar_width,
                origin_offset,
                value_extent,
            });
        }
        Ok(placements)
    }
}
