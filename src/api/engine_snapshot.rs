use serde::{Deserialize, Serialize};

use crate::core::{BarLayoutPass, ContainerSize, RadarConfig, RadarGeometryState};
use crate::error::{ChartError, ChartResult};
use crate::render::ChartRenderSink;

use super::ChartEngine;

/// Serializable view of the derived state, used by regression tests and
/// debugging tooling. It is not a persistence format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub container: ContainerSize,
    pub radar_config: RadarConfig,
    pub radar_geometry: Option<RadarGeometryState>,
    pub bar_pass: Option<BarLayoutPass>,
}

impl<S: ChartRenderSink> ChartEngine<S> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            container: self.config.container,
            radar_config: self.config.radar.clone(),
            radar_geometry: self.radar_geometry.clone(),
            bar_pass: self.last_bar_pass.clone(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture comparisons.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
