//! Rendering for Rainwater charts.
//!
//! - [`Scene`]: the chart as ordered draw commands, built by [`WaterChart`]
//! - [`svg`]: SVG serialization of a scene
//! - [`Breakdown`]: the per-index table in text, markdown, HTML or JSON
//! - [`ChartStyle`] / [`ChartTheme`]: metrics and palettes
//! - [`RenderError`]: charts too large to draw

mod error;
mod scene;
pub mod svg;
mod table;
mod theme;

pub use error::RenderError;
pub use scene::{Scene, SceneOptions, WaterChart};
pub use table::{Basin, Breakdown, BreakdownRow, TableFormat, HEADERS};
pub use theme::{ChartStyle, ChartTheme};
