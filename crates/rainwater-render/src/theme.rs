//! Chart palettes and metrics.

use rainwater_core::Color;
use serde::{Deserialize, Serialize};

/// Colors used to paint a water chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartTheme {
    /// Canvas background fill
    pub background: Color,
    /// Canvas outline
    pub border: Color,
    /// Solid column fill
    pub block: Color,
    /// Trapped water fill
    pub water: Color,
    /// Grid lines
    pub grid: Color,
    /// Column labels
    pub label: Color,
    /// Page text (HTML output)
    pub text: Color,
    /// Page background (HTML output)
    pub page: Color,
    /// Error banner accent
    pub error: Color,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ChartTheme {
    /// Translucent panel on a dark page.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: Color::rgba8(0, 0, 0, 0.10),
            border: Color::rgba8(255, 255, 255, 0.06),
            block: Color::rgba8(139, 149, 167, 1.0),
            water: Color::rgba8(77, 163, 255, 1.0),
            grid: Color::rgba8(255, 255, 255, 0.08),
            label: Color::rgba8(233, 238, 252, 0.75),
            text: Color::rgba8(233, 238, 252, 1.0),
            page: Color::rgba8(11, 16, 32, 1.0),
            error: Color::rgba8(255, 107, 107, 1.0),
        }
    }

    /// Same layout on a white page.
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: Color::rgba8(0, 0, 0, 0.03),
            border: Color::rgba8(0, 0, 0, 0.08),
            block: Color::rgba8(71, 85, 105, 1.0),
            water: Color::rgba8(37, 99, 235, 1.0),
            grid: Color::rgba8(0, 0, 0, 0.08),
            label: Color::rgba8(30, 41, 59, 0.75),
            text: Color::rgba8(15, 23, 42, 1.0),
            page: Color::WHITE,
            error: Color::rgba8(185, 28, 28, 1.0),
        }
    }
}

/// Pixel metrics and palette for the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Pixels per unit, both horizontally (one column) and vertically (one height unit)
    pub cell: f32,
    /// Space between the canvas edge and the chart area
    pub padding: f32,
    /// Corner radius of the canvas background
    pub frame_radius: f32,
    /// Corner radius of block and water rectangles
    pub bar_radius: f32,
    /// Gap left on every side of a block or water rectangle
    pub bar_inset: f32,
    /// Label font size
    pub label_size: f32,
    /// Grid line width
    pub grid_width: f32,
    /// Outline width of the canvas background
    pub border_width: f32,
    /// Tallest chart, in unit rows, that will be drawn
    pub max_rows: u32,
    /// Colors
    pub theme: ChartTheme,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            cell: 28.0,
            padding: 14.0,
            frame_radius: 14.0,
            bar_radius: 6.0,
            bar_inset: 1.0,
            label_size: 12.0,
            grid_width: 1.0,
            border_width: 1.0,
            max_rows: 1000,
            theme: ChartTheme::default(),
        }
    }
}

impl ChartStyle {
    /// Default metrics with the given palette.
    #[must_use]
    pub fn with_theme(theme: ChartTheme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }
}
