use serde::{Deserialize, Serialize};

use crate::core::{
    BarOrientation, BarPolicy, ContainerSize, CoordinateRect, DataZoom, RadarConfig, ShowWindow,
};
use crate::error::{ChartError, ChartResult};

/// Public engine configuration.
///
/// Every field is a plain value record compared structurally; copies never
/// share state with the original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEngineConfig {
    pub container: ContainerSize,
    #[serde(default)]
    pub coordinate: CoordinateRect,
    #[serde(default)]
    pub orientation: BarOrientation,
    #[serde(default)]
    pub bar_policy: BarPolicy,
    #[serde(default)]
    pub zoom: DataZoom,
    #[serde(default)]
    pub show_window: ShowWindow,
    #[serde(default)]
    pub radar: RadarConfig,
}

impl ChartEngineConfig {
    /// Creates a config with default plot area, bar policy and radar setup.
    #[must_use]
    pub fn new(container: ContainerSize) -> Self {
        Self {
            container,
            coordinate: CoordinateRect::default(),
            orientation: BarOrientation::default(),
            bar_policy: BarPolicy::default(),
            zoom: DataZoom::FULL,
            show_window: ShowWindow::default(),
            radar: RadarConfig::default(),
        }
    }

    #[must_use]
    pub fn with_coordinate(mut self, coordinate: CoordinateRect) -> Self {
        self.coordinate = coordinate;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: BarOrientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_bar_policy(mut self, bar_policy: BarPolicy) -> Self {
        self.bar_policy = bar_policy;
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: DataZoom) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_show_window(mut self, show_window: ShowWindow) -> Self {
        self.show_window = show_window;
        self
    }

    #[must_use]
    pub fn with_radar(mut self, radar: RadarConfig) -> Self {
        self.radar = radar;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.container.is_valid() {
            return Err(ChartError::InvalidContainer {
                width: self.container.width,
                height: self.container.height,
            });
        }
        if !self.coordinate.is_valid() {
            return Err(ChartError::InvalidData(
                "coordinate rect must be finite with non-negative size".to_owned(),
            ));
        }
        self.bar_policy.validate()?;
        self.radar.validate()
    }
}

impl Default for ChartEngineConfig {
    fn default() -> Self {
        Self::new(ContainerSize::default())
    }
}
