mod frame;
mod layer_stack;
mod layered_frame;
mod null_renderer;
mod primitives;
mod svg_backend;

pub use frame::{AccessibilityMeta, CommandCounts, RenderFrame};
pub use layer_stack::{CanvasLayerKind, LayerStack};
pub use layered_frame::{LayerCommands, LayeredCommands};
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, DrawCommand, FilterDef, GroupPrimitive, LineCap, LinePrimitive,
    PolylinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};
pub use svg_backend::{SvgRenderer, frame_to_svg};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from scaling and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer};
