mod frame;
mod null_renderer;
mod palette;
mod primitives;

pub use frame::PolygonFrame;
pub use null_renderer::NullSink;
pub use palette::{Palette, SeriesPalette};
pub use primitives::{Color, PolygonPrimitive};

use crate::core::Vector3;
use crate::error::ChartResult;

/// Contract implemented by any mesh backend.
///
/// Layout passes call it once per polygon: a 4-vertex quad per bar or an
/// N-vertex ring per radar series, always counter-clockwise in the y-up
/// engine frame. Zero-area polygons are legal and must be accepted.
pub trait ChartRenderSink {
    fn emit_polygon(&mut self, vertices: &[Vector3], color: Color) -> ChartResult<()>;
}

impl<S: ChartRenderSink + ?Sized> ChartRenderSink for &mut S {
    fn emit_polygon(&mut self, vertices: &[Vector3], color: Color) -> ChartResult<()> {
        (**self).emit_polygon(vertices, color)
    }
}
