use crate::core::Vector3;
use crate::error::ChartResult;
use crate::render::{ChartRenderSink, Color, PolygonPrimitive};

/// Recording sink holding every polygon of the passes it received.
///
/// Polygons are validated on arrival, so a frame never holds non-finite
/// vertices or out-of-range colors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolygonFrame {
    pub polygons: Vec<PolygonPrimitive>,
}

impl PolygonFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn clear(&mut self) {
        self.polygons.clear();
    }

    /// Polygons emitted with `color`, in emission order.
    pub fn with_color(&self, color: Color) -> impl Iterator<Item = &PolygonPrimitive> {
        self.polygons
            .iter()
            .filter(move |polygon| polygon.color == color)
    }
}

impl ChartRenderSink for PolygonFrame {
    fn emit_polygon(&mut self, vertices: &[Vector3], color: Color) -> ChartResult<()> {
        let polygon = PolygonPrimitive::new(vertices, color);
        polygon.validate()?;
        self.polygons.push(polygon);
        Ok(())
    }
}
