use tracing::{debug, warn};

use crate::core::{
    ChartGeometry, Coordinate, MarkerSet, NormalizedSeries, SPARKLINE_GEOMETRY, Series,
    ValueDomain, build_coordinates, normalize_series, sample_markers,
};
use crate::error::ChartResult;
use crate::interaction::{HoverState, InteractionController, SurfaceBounds};
use crate::render::{Color, RenderFrame, Renderer};

use super::render_frame_builder::{
    FrameInput, build_chart_frame, build_empty_frame, resolve_tooltip,
};
use super::{SparklineConfig, SparklineSnapshot, SparklineStyle, TooltipLayout};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// One sparkline instance: its config, current series, hover state and backend.
///
/// Instances never share mutable state, so independent charts can be
/// rendered side by side.
pub struct Sparkline<R: Renderer> {
    renderer: R,
    config: SparklineConfig,
    line_color: Color,
    style: SparklineStyle,
    geometry: ChartGeometry,
    series: Series,
    normalized: Option<NormalizedSeries>,
    interaction: InteractionController,
}

impl<R: Renderer> Sparkline<R> {
    pub fn new(renderer: R, config: SparklineConfig) -> ChartResult<Self> {
        config.validate()?;
        let line_color = config.line_color()?;
        Ok(Self {
            renderer,
            config,
            line_color,
            style: SparklineStyle::default(),
            geometry: SPARKLINE_GEOMETRY,
            series: Series::default(),
            normalized: None,
            interaction: InteractionController::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &SparklineConfig {
        &self.config
    }

    /// Replaces the configuration; hover survives since the data is unchanged.
    pub fn set_config(&mut self, config: SparklineConfig) -> ChartResult<()> {
        config.validate()?;
        self.line_color = config.line_color()?;
        self.config = config;
        Ok(())
    }

    #[must_use]
    pub fn style(&self) -> &SparklineStyle {
        &self.style
    }

    #[must_use]
    pub fn geometry(&self) -> ChartGeometry {
        self.geometry
    }

    #[must_use]
    pub fn series(&self) -> &Series {
        &self.series
    }

    #[must_use]
    pub fn normalized_series(&self) -> Option<&NormalizedSeries> {
        self.normalized.as_ref()
    }

    /// Replaces the series and resets hover to `Idle`.
    pub fn set_series(&mut self, series: Series) {
        if series.labels.len() > series.points.len() {
            warn!(
                id = %self.config.id,
                points = series.points.len(),
                labels = series.labels.len(),
                "more labels than points; extra labels are ignored"
            );
        }
        self.normalized = normalize_series(&series);
        let point_count = self.normalized.as_ref().map_or(0, NormalizedSeries::len);
        debug!(
            id = %self.config.id,
            original_count = series.points.len(),
            normalized_count = point_count,
            "set sparkline series"
        );
        self.series = series;
        self.interaction.reset(point_count);
    }

    pub fn set_points(&mut self, points: Vec<f64>) {
        self.set_series(Series::new(points));
    }

    /// Domain used for scaling, `None` for an empty series.
    #[must_use]
    pub fn domain(&self) -> Option<ValueDomain> {
        let normalized = self.normalized.as_ref()?;
        ValueDomain::resolve(normalized.points(), self.config.y_min, self.config.y_max)
    }

    #[must_use]
    pub fn coordinates(&self) -> Vec<Coordinate> {
        match (self.normalized.as_ref(), self.domain()) {
            (Some(series), Some(domain)) => build_coordinates(series, domain, self.geometry),
            _ => Vec::new(),
        }
    }

    #[must_use]
    pub fn markers(&self) -> MarkerSet {
        sample_markers(&self.coordinates())
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.interaction.state()
    }

    /// Highlighted index: the hovered one, or the last point while idle.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.interaction.active_index()
    }

    pub fn handle_pointer_move(&mut self, client_x: f64, surface: SurfaceBounds) -> HoverState {
        self.interaction.handle_pointer_move(client_x, surface)
    }

    pub fn handle_touch_move(&mut self, touches_x: &[f64], surface: SurfaceBounds) -> HoverState {
        self.interaction.handle_touch_move(touches_x, surface)
    }

    pub fn handle_pointer_leave(&mut self) -> HoverState {
        self.interaction.handle_pointer_leave()
    }

    /// Tooltip for the effective active point, also while idle.
    #[must_use]
    pub fn tooltip(&self) -> Option<TooltipLayout> {
        let series = self.normalized.as_ref()?;
        resolve_tooltip(
            series,
            &self.coordinates(),
            self.interaction.state(),
            &self.config.value_suffix,
            self.geometry,
        )
    }

    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let (Some(series), Some(domain)) = (self.normalized.as_ref(), self.domain()) else {
            return build_empty_frame(self.geometry, &self.style);
        };
        let coordinates = build_coordinates(series, domain, self.geometry);
        let markers = sample_markers(&coordinates);
        let frame = build_chart_frame(&FrameInput {
            geometry: self.geometry,
            config: &self.config,
            style: &self.style,
            line_color: self.line_color,
            series,
            domain,
            coordinates: &coordinates,
            markers: &markers,
            hover: self.interaction.state(),
        });
        debug!(
            id = %self.config.id,
            commands = frame.commands.len(),
            hovering = self.interaction.state().is_hovering(),
            "built sparkline frame"
        );
        frame
    }

    #[must_use]
    pub fn snapshot(&self) -> SparklineSnapshot {
        let coordinates = self.coordinates();
        SparklineSnapshot {
            id: self.config.id.clone(),
            point_count: self.series.points.len(),
            padded_from_single: self
                .normalized
                .as_ref()
                .is_some_and(NormalizedSeries::padded_from_single),
            domain: self.domain(),
            markers: sample_markers(&coordinates).into_vec(),
            coordinates,
            hover: self.interaction.state(),
            active_index: self.interaction.active_index(),
            tooltip: self.tooltip(),
        }
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame();
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
