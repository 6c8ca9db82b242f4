use tracing::debug;

use crate::core::{
    Axis, BarLayoutInput, BarLayoutPass, ContainerSize, LegendFilter, RadarConfig,
    RadarGeometryState, RadarLayout, Series, layout_bars,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{ChartRenderSink, SeriesPalette};

use super::ChartEngineConfig;

/// Main facade consumed by host render loops.
///
/// Each `render_*` call is one synchronous layout pass. A pass computes all
/// of its geometry before emitting into the sink; a failing pass emits
/// nothing and keeps the derived state of the previous pass.
pub struct ChartEngine<S: ChartRenderSink> {
    pub(super) sink: S,
    pub(super) config: ChartEngineConfig,
    pub(super) radar_geometry: Option<RadarGeometryState>,
    pub(super) last_bar_pass: Option<BarLayoutPass>,
}

impl<S: ChartRenderSink> ChartEngine<S> {
    pub fn new(sink: S, config: ChartEngineConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            sink,
            config,
            radar_geometry: None,
            last_bar_pass: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartEngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ChartEngineConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn set_container_size(&mut self, container: ContainerSize) -> ChartResult<()> {
        if !container.is_valid() {
            return Err(ChartError::InvalidContainer {
                width: container.width,
                height: container.height,
            });
        }
        self.config.container = container;
        Ok(())
    }

    pub fn set_radar_config(&mut self, radar: RadarConfig) -> ChartResult<()> {
        radar.validate()?;
        self.config.radar = radar;
        Ok(())
    }

    #[must_use]
    pub fn radar_geometry(&self) -> Option<&RadarGeometryState> {
        self.radar_geometry.as_ref()
    }

    #[must_use]
    pub fn last_bar_pass(&self) -> Option<&BarLayoutPass> {
        self.last_bar_pass.as_ref()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Runs one radar pass and returns the number of emitted rings.
    ///
    /// Unbounded indicators are auto-scaled against `series` for this pass
    /// only; the stored configuration is left as set.
    pub fn render_radar<L, P>(
        &mut self,
        series: &[Series],
        legend: &L,
        palette: &P,
    ) -> ChartResult<usize>
    where
        L: LegendFilter + ?Sized,
        P: SeriesPalette + ?Sized,
    {
        let radar = &self.config.radar;
        let pass_config = if radar.indicators.iter().any(|i| i.is_unbounded()) {
            radar.auto_scaled(series)
        } else {
            radar.clone()
        };

        let mut layout = RadarLayout::new(pass_config);
        let container = self.config.container;
        layout.update_center(container.width, container.height)?;
        let emitted = layout.emit_series(series, legend, &mut self.sink, palette)?;
        self.radar_geometry = layout.geometry().cloned();
        Ok(emitted)
    }

    /// Runs one bar pass over the given axes and returns the number of
    /// emitted quads.
    pub fn render_bars<L, P>(
        &mut self,
        series: &[Series],
        x_axes: &[Axis],
        y_axes: &[Axis],
        legend: &L,
        palette: &P,
    ) -> ChartResult<usize>
    where
        L: LegendFilter + ?Sized,
        P: SeriesPalette + ?Sized,
    {
        let input = BarLayoutInput::new(
            self.config.orientation,
            self.config.coordinate,
            x_axes,
            y_axes,
        )
        .with_policy(self.config.bar_policy)
        .with_zoom(self.config.zoom)
        .with_window(self.config.show_window);

        let pass = layout_bars(&input, series, legend)?;
        let emitted = pass.emit(&mut self.sink, palette)?;
        debug!(emitted, "bar pass committed");
        self.last_bar_pass = Some(pass);
        Ok(emitted)
    }
}
