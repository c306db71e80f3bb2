//! Water chart painting.
//!
//! Layout, in canvas pixels:
//!
//! ```text
//! width  = n * cell + 2 * padding
//! height = max(1, max_level) * cell + 2 * padding
//! ```
//!
//! where `max_level` is the tallest block-plus-water stack. Columns sit on a
//! baseline `padding` pixels above the bottom edge; labels go in that strip.

use crate::error::RenderError;
use crate::svg;
use crate::theme::ChartStyle;
use rainwater_core::{
    BoxStyle, Canvas, DrawCommand, Point, RecordingCanvas, Rect, Size, StrokeStyle, TextAnchor,
    TextStyle, WaterProfile,
};
use serde::{Deserialize, Serialize};

/// Decorations that can be toggled without changing the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneOptions {
    /// Draw column and unit-row grid lines
    pub show_grid: bool,
    /// Draw each column's height beneath it
    pub show_labels: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_labels: true,
        }
    }
}

/// A heights + water chart ready to paint.
#[derive(Debug, Clone, Copy)]
pub struct WaterChart<'a> {
    heights: &'a [u32],
    profile: &'a WaterProfile,
    options: SceneOptions,
    style: &'a ChartStyle,
}

impl<'a> WaterChart<'a> {
    /// Create a chart over `heights` and its computed profile.
    ///
    /// `profile` must come from the same heights; columns beyond the shorter
    /// of the two are not drawn.
    #[must_use]
    pub const fn new(
        heights: &'a [u32],
        profile: &'a WaterProfile,
        options: SceneOptions,
        style: &'a ChartStyle,
    ) -> Self {
        Self {
            heights,
            profile,
            options,
            style,
        }
    }

    fn columns(&self) -> usize {
        self.heights.len().min(self.profile.water.len())
    }

    /// Number of unit rows the chart area spans (at least one).
    fn rows(&self) -> u64 {
        self.profile.max_level(self.heights).max(1)
    }

    /// Fail when the chart needs more rows than `style.max_rows`.
    ///
    /// Painting emits one grid line per row, so an unchecked tall column
    /// produces unbounded output.
    pub fn check(&self) -> Result<(), RenderError> {
        let rows = self.rows();
        let limit = self.style.max_rows;
        if rows > u64::from(limit) {
            return Err(RenderError::TooTall { rows, limit });
        }
        Ok(())
    }

    /// Canvas size needed by this chart.
    #[must_use]
    pub fn measure(&self) -> Size {
        let s = self.style;
        Size::new(
            self.columns() as f32 * s.cell + s.padding * 2.0,
            self.rows() as f32 * s.cell + s.padding * 2.0,
        )
    }

    /// Paint background, grid, columns and labels, in that order.
    pub fn paint(&self, canvas: &mut dyn Canvas) {
        let s = self.style;
        let size = self.measure();
        let n = self.columns();
        let max_level = self.profile.max_level(self.heights);

        let frame = BoxStyle::fill(s.theme.background)
            .with_stroke(StrokeStyle::new(s.theme.border, s.border_width));
        canvas.draw_rounded_rect(Rect::from_size(size), s.frame_radius, &frame);

        let chart_x = s.padding;
        let chart_y = s.padding;
        let chart_w = n as f32 * s.cell;
        let base_y = chart_y + self.rows() as f32 * s.cell;

        if self.options.show_grid {
            for i in 0..=n {
                let x = chart_x + i as f32 * s.cell;
                canvas.draw_line(
                    Point::new(x, chart_y),
                    Point::new(x, base_y),
                    s.theme.grid,
                    s.grid_width,
                );
            }
            for r in 0..=max_level {
                let y = base_y - r as f32 * s.cell;
                canvas.draw_line(
                    Point::new(chart_x, y),
                    Point::new(chart_x + chart_w, y),
                    s.theme.grid,
                    s.grid_width,
                );
            }
        }

        let label_style = TextStyle {
            size: s.label_size,
            color: s.theme.label,
            anchor: TextAnchor::Middle,
        };

        for (i, (&block, &water)) in self.heights.iter().zip(&self.profile.water).enumerate() {
            let x = chart_x + i as f32 * s.cell;
            let block_top = base_y - block as f32 * s.cell;

            if water > 0 {
                let bounds = Rect::new(
                    x,
                    block_top - water as f32 * s.cell,
                    s.cell,
                    water as f32 * s.cell,
                );
                canvas.fill_rounded_rect(bounds.inset(s.bar_inset), s.bar_radius, s.theme.water);
            }

            if block > 0 {
                let bounds = Rect::new(x, block_top, s.cell, block as f32 * s.cell);
                canvas.fill_rounded_rect(bounds.inset(s.bar_inset), s.bar_radius, s.theme.block);
            }

            if self.options.show_labels {
                canvas.draw_text(
                    &block.to_string(),
                    Point::new(x + s.cell / 2.0, base_y + s.label_size),
                    &label_style,
                );
            }
        }
    }
}

/// A painted chart: canvas size plus the ordered draw commands.
///
/// Built fresh for every render; two scenes from identical inputs are equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Canvas size in pixels
    pub size: Size,
    /// Draw commands in paint order
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Paint the chart for `heights` onto a fresh recording canvas.
    ///
    /// # Errors
    ///
    /// [`RenderError::TooTall`] when the chart exceeds `style.max_rows`;
    /// nothing is painted in that case.
    pub fn build(
        heights: &[u32],
        profile: &WaterProfile,
        options: SceneOptions,
        style: &ChartStyle,
    ) -> Result<Self, RenderError> {
        let chart = WaterChart::new(heights, profile, options, style);
        chart.check()?;
        let mut canvas = RecordingCanvas::new();
        chart.paint(&mut canvas);
        Ok(Self {
            size: chart.measure(),
            commands: canvas.take_commands(),
        })
    }

    /// Serialize as a standalone SVG document.
    #[must_use]
    pub fn to_svg(&self) -> String {
        svg::render(self)
    }

    /// Bounds of every rectangle, in paint order.
    pub fn rects(&self) -> impl Iterator<Item = Rect> + '_ {
        self.commands.iter().filter_map(DrawCommand::rect_bounds)
    }

    /// Number of line commands.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Text runs in paint order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ChartTheme;
    use proptest::prelude::*;
    use rainwater_core::{Color, EXAMPLE_HEIGHTS};

    fn scene(heights: &[u32], options: SceneOptions) -> Scene {
        let profile = WaterProfile::compute(heights);
        Scene::build(heights, &profile, options, &ChartStyle::default()).unwrap()
    }

    fn fills(scene: &Scene, color: Color) -> usize {
        scene
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { style, .. } if style.fill == Some(color)))
            .count()
    }

    const BARE: SceneOptions = SceneOptions {
        show_grid: false,
        show_labels: false,
    };

    #[test]
    fn test_example_size() {
        let s = scene(&EXAMPLE_HEIGHTS, SceneOptions::default());
        // 10 columns * 28 + 2 * 14, 6 rows * 28 + 2 * 14
        assert_eq!(s.size, Size::new(308.0, 196.0));
    }

    #[test]
    fn test_empty_heights_still_one_row_tall() {
        let s = scene(&[], SceneOptions::default());
        assert_eq!(s.size, Size::new(28.0, 56.0));
        // background plus the single baseline grid line and one boundary
        assert_eq!(s.rects().count(), 1);
        assert_eq!(s.line_count(), 2);
    }

    #[test]
    fn test_all_zero_heights() {
        let s = scene(&[0, 0, 0], BARE);
        assert_eq!(s.size, Size::new(112.0, 56.0));
        assert_eq!(s.rects().count(), 1);
    }

    #[test]
    fn test_rect_counts_match_nonzero_cells() {
        let theme = ChartTheme::default();
        let s = scene(&EXAMPLE_HEIGHTS, BARE);
        // blocks at 1,5,7,8; water at 2,3,4,6
        assert_eq!(fills(&s, theme.block), 4);
        assert_eq!(fills(&s, theme.water), 4);
        assert_eq!(s.rects().count(), 1 + 8);
    }

    #[test]
    fn test_water_stacks_on_block() {
        let s = scene(&[2, 1, 2], BARE);
        let rects: Vec<Rect> = s.rects().collect();
        // background, block 0, water 1, block 1, block 2
        assert_eq!(rects.len(), 5);
        let water = rects[2];
        let block = rects[3];
        // base_y = 14 + 2 * 28 = 70; block top at 42, water top at 14
        assert_eq!(water, Rect::new(43.0, 15.0, 26.0, 26.0));
        assert_eq!(block, Rect::new(43.0, 43.0, 26.0, 26.0));
    }

    #[test]
    fn test_grid_line_count() {
        let s = scene(&EXAMPLE_HEIGHTS, SceneOptions {
            show_grid: true,
            show_labels: false,
        });
        assert_eq!(s.line_count(), (10 + 1) + (6 + 1));
    }

    #[test]
    fn test_labels_show_heights() {
        let s = scene(&EXAMPLE_HEIGHTS, SceneOptions {
            show_grid: false,
            show_labels: true,
        });
        assert_eq!(s.labels(), vec!["0", "4", "0", "0", "0", "6", "0", "6", "4", "0"]);
    }

    #[test]
    fn test_labels_inside_canvas() {
        let s = scene(&[3, 0, 3], SceneOptions::default());
        for cmd in &s.commands {
            if let DrawCommand::Text { position, .. } = cmd {
                assert!(position.y <= s.size.height);
                assert!(position.x <= s.size.width);
            }
        }
    }

    #[test]
    fn test_toggles_only_add_decoration() {
        let bare = scene(&EXAMPLE_HEIGHTS, BARE);
        let full = scene(&EXAMPLE_HEIGHTS, SceneOptions::default());
        assert_eq!(bare.size, full.size);
        assert_eq!(bare.rects().collect::<Vec<_>>(), full.rects().collect::<Vec<_>>());
        assert_eq!(bare.line_count(), 0);
        assert!(bare.labels().is_empty());
    }

    #[test]
    fn test_background_is_outlined() {
        let theme = ChartTheme::default();
        let s = scene(&[3, 0, 3], BARE);
        match &s.commands[0] {
            DrawCommand::Rect {
                bounds,
                radius,
                style,
            } => {
                assert_eq!(*bounds, Rect::from_size(s.size));
                assert_eq!(*radius, 14.0);
                assert_eq!(style.fill, Some(theme.background));
                assert_eq!(style.stroke, Some(StrokeStyle::new(theme.border, 1.0)));
            }
            other => panic!("expected background rect, got {other:?}"),
        }
        assert!(s.to_svg().contains(r#"stroke="rgba(255,255,255,0.06)""#));
    }

    #[test]
    fn test_too_tall_chart_is_rejected() {
        let heights = [u32::MAX];
        let profile = WaterProfile::compute(&heights);
        let err = Scene::build(&heights, &profile, SceneOptions::default(), &ChartStyle::default())
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::TooTall {
                rows: u64::from(u32::MAX),
                limit: 1000
            }
        );
    }

    #[test]
    fn test_row_limit_is_inclusive() {
        let style = ChartStyle {
            max_rows: 6,
            ..ChartStyle::default()
        };
        let profile = WaterProfile::compute(&EXAMPLE_HEIGHTS);
        assert!(Scene::build(&EXAMPLE_HEIGHTS, &profile, BARE, &style).is_ok());

        let style = ChartStyle {
            max_rows: 5,
            ..style
        };
        assert!(matches!(
            Scene::build(&EXAMPLE_HEIGHTS, &profile, BARE, &style),
            Err(RenderError::TooTall { rows: 6, limit: 5 })
        ));
    }

    #[test]
    fn test_build_is_idempotent() {
        let a = scene(&EXAMPLE_HEIGHTS, SceneOptions::default());
        let b = scene(&EXAMPLE_HEIGHTS, SceneOptions::default());
        assert_eq!(a, b);
        assert_eq!(a.to_svg(), b.to_svg());
    }

    proptest! {
        #[test]
        fn prop_rects_inside_canvas(heights in proptest::collection::vec(0u32..20, 0..30)) {
            let s = scene(&heights, SceneOptions::default());
            let canvas = Rect::from_size(s.size);
            for r in s.rects() {
                prop_assert!(canvas.contains_rect(&r));
            }
        }

        #[test]
        fn prop_one_rect_per_nonzero_cell(heights in proptest::collection::vec(0u32..20, 0..30)) {
            let profile = WaterProfile::compute(&heights);
            let s = Scene::build(&heights, &profile, BARE, &ChartStyle::default()).unwrap();
            let expected = heights.iter().filter(|&&h| h > 0).count()
                + profile.water.iter().filter(|&&w| w > 0).count();
            prop_assert_eq!(s.rects().count(), 1 + expected);
        }
    }
}
