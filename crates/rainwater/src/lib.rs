//! Rainwater: trapped rain water calculator and chart widget.
//!
//! Enter column heights, get back how much water rests above each column,
//! a chart of blocks and water, and a per-index breakdown.
//!
//! # Quick Start
//!
//! ```
//! use rainwater::{Controller, Trigger, SceneOptions, ChartStyle};
//!
//! let mut widget = Controller::new("3, 0, 1, 3", SceneOptions::default(), ChartStyle::default());
//! assert_eq!(widget.view().badge, "5 units");
//!
//! let view = widget.handle(Trigger::LoadExample);
//! assert_eq!(view.total, Some(18));
//! ```

pub mod config;
pub mod controller;
pub mod form;
pub mod page;

pub use config::{Config, ConfigError, ThemeName};
pub use controller::{evaluate, Controller, Trigger, View, PLACEHOLDER_BADGE};
pub use form::{FormAction, FormSubmission};
pub use page::render_page;

// Re-export the lower layers so front ends need a single dependency.
pub use rainwater_core::{
    parse_heights, Color, DrawCommand, Heights, HeightsError, Point, Rect, Size, WaterProfile,
    EXAMPLE_HEIGHTS,
};
pub use rainwater_render::{
    Basin, Breakdown, BreakdownRow, ChartStyle, ChartTheme, RenderError, Scene, SceneOptions,
    TableFormat,
};
