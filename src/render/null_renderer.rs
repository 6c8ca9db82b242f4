use crate::core::Vector3;
use crate::error::ChartResult;
use crate::render::{ChartRenderSink, Color, PolygonPrimitive};

/// No-op sink used by tests and headless layout runs.
///
/// It still validates every polygon so invalid geometry is caught before a
/// real mesh backend sees it.
#[derive(Debug, Default)]
pub struct NullSink {
    pub polygon_count: usize,
    pub vertex_count: usize,
}

impl ChartRenderSink for NullSink {
    fn emit_polygon(&mut self, vertices: &[Vector3], color: Color) -> ChartResult<()> {
        PolygonPrimitive::new(vertices, color).validate()?;
        self.polygon_count += 1;
        self.vertex_count += vertices.len();
        Ok(())
    }
}
