//! sparkline-rs: trend sparkline scaling, interaction and drawing engine.
//!
//! A numeric series goes in; a backend-agnostic `RenderFrame` of typed
//! primitives comes out, together with hover-driven tooltip state. Backends
//! (null, SVG, cairo) and the optional GTK adapter only consume frames.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{Sparkline, SparklineConfig};
pub use error::{ChartError, ChartResult};
