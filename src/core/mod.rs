pub mod axis;
pub mod axis_range;
pub mod bar_layout;
pub mod polygon;
pub mod radar;
pub mod series;
pub mod series_stacker;
pub mod types;
pub mod windowing;

pub use axis::{Axis, resolve_visible_axis};
pub use axis_range::AxisRange;
pub use bar_layout::{
    BarGroupLayout, BarLayoutInput, BarLayoutPass, BarOrientation, BarPlacement, BarPolicy,
    BarSeriesLayout, layout_bars,
};
pub use polygon::{PolygonVertices, ensure_counter_clockwise, quad, signed_area};
pub use radar::{
    Indicator, IndicatorPosition, RadarConfig, RadarGeometryState, RadarGridRing, RadarLayout,
    RadarShape, indicator_angle,
};
pub use series::{AllActive, LegendFilter, Series};
pub use series_stacker::{StackGroup, StackKey, group_by_stack};
pub use types::{ContainerSize, CoordinateRect, Vector2, Vector3};
pub use windowing::{DataZoom, ShowWindow};
