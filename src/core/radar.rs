//! Radar coordinate system.
//!
//! Indicators are laid out clockwise from north: indicator `i` of `N` sits at
//! `2π/N * i` (vertex mode) or `2π/N * (i + 0.5)` (between mode). Positions
//! use `sin` for x and `cos` for y, so angle 0 points up in the y-up engine
//! frame.

use std::f64::consts::{PI, TAU};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::polygon::{ensure_counter_clockwise, ring_from_points};
use crate::core::{AxisRange, LegendFilter, PolygonVertices, Series, Vector2};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartRenderSink, SeriesPalette};

/// Boundary style of the radar grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RadarShape {
    #[default]
    Polygon,
    Circle,
}

/// Where indicator labels and data samples sit relative to grid vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorPosition {
    #[default]
    Vertex,
    /// Halfway between two vertices, i.e. on the boundary edge midpoints.
    Between,
}

/// One radar dimension.
///
/// `max == 0` marks an unbounded indicator that should be auto-scaled by the
/// caller (see [`RadarConfig::auto_scaled`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub name: String,
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
}

impl Indicator {
    #[must_use]
    pub fn new(name: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            name: name.into(),
            min,
            max,
        }
    }

    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.max == 0.0
    }

    #[must_use]
    pub fn range(&self) -> AxisRange {
        AxisRange::new(self.min, self.max)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "indicator `{}` bounds must be finite",
                self.name
            )));
        }
        if !self.is_unbounded() && self.max < self.min {
            return Err(ChartError::InvalidData(format!(
                "indicator `{}` must satisfy max >= min",
                self.name
            )));
        }
        Ok(())
    }
}

/// Radar coordinate configuration.
///
/// `radius` and both `center` components are fractions of the container
/// when `<= 1` and absolute pixels otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarConfig {
    #[serde(default)]
    pub shape: RadarShape,
    #[serde(default)]
    pub position: IndicatorPosition,
    pub radius: f64,
    pub center: [f64; 2],
    pub split_number: u32,
    pub indicator_gap: f64,
    #[serde(default = "default_show_indicator")]
    pub show_indicator: bool,
    pub indicators: Vec<Indicator>,
}

fn default_show_indicator() -> bool {
    true
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            shape: RadarShape::Polygon,
            position: IndicatorPosition::Vertex,
            radius: 0.4,
            center: [0.5, 0.45],
            split_number: 5,
            indicator_gap: 10.0,
            show_indicator: true,
            indicators: (1..=5)
                .map(|n| Indicator::new(format!("indicator{n}"), 0.0, 100.0))
                .collect(),
        }
    }
}

impl RadarConfig {
    #[must_use]
    pub fn new(indicators: Vec<Indicator>) -> Self {
        Self {
            indicators,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_shape(mut self, shape: RadarShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub fn with_position(mut self, position: IndicatorPosition) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_center(mut self, x: f64, y: f64) -> Self {
        self.center = [x, y];
        self
    }

    #[must_use]
    pub fn with_split_number(mut self, split_number: u32) -> Self {
        self.split_number = split_number;
        self
    }

    #[must_use]
    pub fn with_indicator_gap(mut self, indicator_gap: f64) -> Self {
        self.indicator_gap = indicator_gap;
        self
    }

    #[must_use]
    pub fn indicator(&self, index: usize) -> Option<&Indicator> {
        self.indicators.get(index)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.radius.is_finite() {
            return Err(ChartError::InvalidData(
                "radar radius must be finite".to_owned(),
            ));
        }
        if !self.center.iter().all(|value| value.is_finite()) {
            return Err(ChartError::InvalidData(
                "radar center must be finite".to_owned(),
            ));
        }
        if !self.indicator_gap.is_finite() {
            return Err(ChartError::InvalidData(
                "radar indicator gap must be finite".to_owned(),
            ));
        }
        for indicator in &self.indicators {
            indicator.validate()?;
        }
        Ok(())
    }

    /// Returns a copy whose unbounded indicators take the largest finite
    /// sample observed for them across `series`.
    ///
    /// Indicators without any usable sample are copied unchanged.
    #[must_use]
    pub fn auto_scaled(&self, series: &[Series]) -> Self {
        let mut scaled = self.clone();
        for (index, indicator) in scaled.indicators.iter_mut().enumerate() {
            if !indicator.is_unbounded() {
                continue;
            }
            let observed = series
                .iter()
                .filter_map(|item| item.values.get(index).copied())
                .filter(|value| value.is_finite())
                .map(OrderedFloat)
                .max();
            if let Some(OrderedFloat(max)) = observed {
                if max > indicator.min {
                    indicator.max = max;
                }
            }
        }
        scaled
    }
}

/// Derived geometry of the last successful layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarGeometryState {
    pub center: Vector2,
    pub radius: f64,
    /// Radius data samples are scaled against; the polygon apothem in
    /// between mode, `radius` otherwise.
    pub data_radius: f64,
    /// Grid boundary vertices, one per indicator, at vertex angles.
    pub vertex_positions: Vec<Vector2>,
}

/// One nested grid boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RadarGridRing {
    Polygon(Vec<Vector2>),
    Circle { center: Vector2, radius: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RadarLayout {
    config: RadarConfig,
    geometry: Option<RadarGeometryState>,
}

impl RadarLayout {
    #[must_use]
    pub fn new(config: RadarConfig) -> Self {
        Self {
            config,
            geometry: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    /// Replaces the configuration and drops the derived geometry, which has
    /// to be resolved again with [`RadarLayout::update_center`].
    pub fn set_config(&mut self, config: RadarConfig) {
        self.config = config;
        self.geometry = None;
    }

    #[must_use]
    pub fn geometry(&self) -> Option<&RadarGeometryState> {
        self.geometry.as_ref()
    }

    #[must_use]
    pub fn indicator_count(&self) -> usize {
        self.config.indicators.len()
    }

    /// Resolves center, radius and vertices for a container.
    ///
    /// On error the previous geometry is kept as is.
    pub fn update_center(&mut self, width: f64, height: f64) -> ChartResult<&RadarGeometryState> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ChartError::InvalidContainer { width, height });
        }
        self.config.validate()?;
        let count = self.indicator_count();
        if count == 0 {
            return Err(ChartError::EmptyIndicatorSet);
        }

        let center = Vector2::new(
            resolve_fraction(self.config.center[0], width),
            resolve_fraction(self.config.center[1], height),
        );
        let radius = if self.config.radius <= 0.0 {
            0.0
        } else if self.config.radius <= 1.0 {
            width.min(height) * self.config.radius
        } else {
            self.config.radius
        };
        let data_radius = match (self.config.shape, self.config.position) {
            // The apothem is negative for a single indicator; clamp to the center.
            (RadarShape::Polygon, IndicatorPosition::Between) => {
                (radius * (PI / count as f64).cos()).max(0.0)
            }
            _ => radius,
        };
        let vertex_positions = (0..count)
            .map(|index| {
                center
                    + Vector2::from_north_angle(indicator_angle(
                        IndicatorPosition::Vertex,
                        index,
                        count,
                    )) * radius
            })
            .collect();

        debug!(
            indicators = count,
            center_x = center.x,
            center_y = center.y,
            radius,
            data_radius,
            "resolved radar geometry"
        );
        Ok(&*self.geometry.insert(RadarGeometryState {
            center,
            radius,
            data_radius,
            vertex_positions,
        }))
    }

    /// Anchor of indicator `index`'s label, `indicator_gap` past the radius.
    pub fn indicator_position(&self, index: usize) -> ChartResult<Vector2> {
        let geometry = self.resolved_for(index)?;
        let angle = indicator_angle(self.config.position, index, self.indicator_count());
        Ok(geometry.center
            + Vector2::from_north_angle(angle) * (geometry.radius + self.config.indicator_gap))
    }

    /// Position of a sample already normalized to its indicator's range.
    pub fn data_position(&self, index: usize, fraction: f64) -> ChartResult<Vector2> {
        let geometry = self.resolved_for(index)?;
        let angle = indicator_angle(self.config.position, index, self.indicator_count());
        let fraction = if fraction.is_finite() { fraction } else { 0.0 };
        Ok(geometry.center + Vector2::from_north_angle(angle) * (geometry.data_radius * fraction))
    }

    /// Normalizes a raw sample against indicator `index`.
    pub fn normalized_value(&self, index: usize, value: f64) -> ChartResult<f64> {
        let indicator = self
            .config
            .indicator(index)
            .ok_or(ChartError::IndexOutOfRange {
                index,
                len: self.indicator_count(),
            })?;
        indicator.range().normalize(value)
    }

    /// Data ring of one series in indicator order.
    ///
    /// Samples missing past the end of `values` sit at the center.
    pub fn series_ring(&self, values: &[f64]) -> ChartResult<Vec<Vector2>> {
        let count = self.indicator_count();
        if count == 0 {
            return Err(ChartError::EmptyIndicatorSet);
        }
        (0..count)
            .map(|index| {
                let fraction = match values.get(index) {
                    Some(&value) => self.normalized_value(index, value)?,
                    None => 0.0,
                };
                self.data_position(index, fraction)
            })
            .collect()
    }

    /// Split grid from the innermost ring outwards.
    pub fn grid_rings(&self) -> ChartResult<Vec<RadarGridRing>> {
        let geometry = self.resolved()?;
        let splits = self.config.split_number.max(1);
        let rings = (1..=splits)
            .map(|level| {
                let scale = f64::from(level) / f64::from(splits);
                match self.config.shape {
                    RadarShape::Polygon => RadarGridRing::Polygon(
                        geometry
                            .vertex_positions
                            .iter()
                            .map(|&vertex| geometry.center + (vertex - geometry.center) * scale)
                            .collect(),
                    ),
                    RadarShape::Circle => RadarGridRing::Circle {
                        center: geometry.center,
                        radius: geometry.radius * scale,
                    },
                }
            })
            .collect();
        Ok(rings)
    }

    /// Center-to-vertex axis segment per indicator.
    pub fn axis_lines(&self) -> ChartResult<Vec<(Vector2, Vector2)>> {
        let geometry = self.resolved()?;
        Ok(geometry
            .vertex_positions
            .iter()
            .map(|&vertex| (geometry.center, vertex))
            .collect())
    }

    /// Emits one ring per shown, legend-active series.
    ///
    /// Every ring is computed before the first emission, so a failing series
    /// leaves the sink untouched. Returns the number of emitted rings.
    pub fn emit_series<S, P, L>(
        &self,
        series: &[Series],
        legend: &L,
        sink: &mut S,
        palette: &P,
    ) -> ChartResult<usize>
    where
        S: ChartRenderSink + ?Sized,
        P: SeriesPalette + ?Sized,
        L: LegendFilter + ?Sized,
    {
        let mut rings: Vec<(usize, PolygonVertices)> = Vec::with_capacity(series.len());
        let mut color_index = 0;
        for item in series {
            if !item.show {
                continue;
            }
            if legend.is_active(&item.name) {
                let mut ring = ring_from_points(&self.series_ring(&item.values)?);
                if !ring.iter().all(|vertex| vertex.is_finite()) {
                    return Err(ChartError::InvalidData(format!(
                        "radar series `{}` has non-finite vertices",
                        item.name
                    )));
                }
                ensure_counter_clockwise(&mut ring);
                rings.push((color_index, ring));
            }
            color_index += 1;
        }

        for (color_index, ring) in &rings {
            sink.emit_polygon(ring, palette.color_for(*color_index))?;
        }
        debug!(
            series = series.len(),
            rings = rings.len(),
            "emitted radar series"
        );
        Ok(rings.len())
    }

    fn resolved(&self) -> ChartResult<&RadarGeometryState> {
        if self.indicator_count() == 0 {
            return Err(ChartError::EmptyIndicatorSet);
        }
        self.geometry.as_ref().ok_or(ChartError::GeometryNotResolved)
    }

    fn resolved_for(&self, index: usize) -> ChartResult<&RadarGeometryState> {
        let geometry = self.resolved()?;
        let len = self.indicator_count();
        if index >= len {
            return Err(ChartError::IndexOutOfRange { index, len });
        }
        Ok(geometry)
    }
}

/// Clockwise-from-north angle of indicator `index` out of `count`.
#[must_use]
pub fn indicator_angle(position: IndicatorPosition, index: usize, count: usize) -> f64 {
    let step = TAU / count as f64;
    match position {
        IndicatorPosition::Vertex => step * index as f64,
        IndicatorPosition::Between => step * (index as f64 + 0.5),
    }
}

fn resolve_fraction(value: f64, extent: f64) -> f64 {
    if value <= 1.0 { extent * value } else { value }
}
