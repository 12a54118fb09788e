mod json_contract;
mod render_frame_builder;
mod render_style;
mod snapshot;
mod sparkline;
mod sparkline_config;
mod tooltip_layout;
mod validation;

pub use json_contract::{
    RENDER_FRAME_JSON_SCHEMA_V1, RenderFrameJsonContractV1, SPARKLINE_SNAPSHOT_JSON_SCHEMA_V1,
    SparklineSnapshotJsonContractV1,
};
pub use render_frame_builder::{FrameInput, build_chart_frame, build_empty_frame, resolve_tooltip};
pub use render_style::SparklineStyle;
pub use snapshot::SparklineSnapshot;
pub use sparkline::Sparkline;
pub use sparkline_config::{
    DEFAULT_LINE_COLOR, DEFAULT_X_AXIS_LABEL, DEFAULT_Y_AXIS_LABEL, SparklineConfig,
};
pub use tooltip_layout::{
    TOOLTIP_CHAR_WIDTH_PX, TOOLTIP_HEIGHT_PX, TOOLTIP_MAX_WIDTH_PX, TOOLTIP_MIN_WIDTH_PX,
    TOOLTIP_OFFSET_X_PX, TOOLTIP_OFFSET_Y_PX, TooltipLayout, layout_tooltip, tooltip_text,
    tooltip_width,
};
