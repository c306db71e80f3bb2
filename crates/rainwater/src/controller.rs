//! The widget controller: input text + toggles in, a complete [`View`] out.
//!
//! Every trigger runs the whole parse → compute → render cycle
//! synchronously. Nothing but the input text and the two toggle flags
//! survives between triggers.

use crate::config::{Config, ConfigError};
use rainwater_core::{parse_heights, Heights, HeightsError};
use rainwater_render::{Breakdown, ChartStyle, RenderError, Scene, SceneOptions};

/// Badge text shown when there is no result.
pub const PLACEHOLDER_BADGE: &str = "—";

/// User actions the widget reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Recompute from the current input
    Compute,
    /// Replace the input with the demonstration sequence, then compute
    LoadExample,
    /// Turn the grid overlay on or off, then compute
    SetGrid(bool),
    /// Turn column labels on or off, then compute
    SetLabels(bool),
    /// Replace the input text without computing
    SetInput(String),
}

/// Everything the widget displays after a trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// `"{total} units"`, or [`PLACEHOLDER_BADGE`] on error
    pub badge: String,
    /// Error banner text; `None` hides the banner
    pub error: Option<String>,
    /// Trapped water total on success
    pub total: Option<u64>,
    /// The chart; `None` when the input was rejected
    pub scene: Option<Scene>,
    /// Per-index table; empty when the input was rejected
    pub breakdown: Breakdown,
}

impl View {
    fn success(
        heights: &Heights,
        options: SceneOptions,
        style: &ChartStyle,
    ) -> Result<Self, RenderError> {
        let profile = heights.water_profile();
        let scene = Scene::build(heights, &profile, options, style)?;
        Ok(Self {
            badge: format!("{} units", profile.total),
            error: None,
            total: Some(profile.total),
            scene: Some(scene),
            breakdown: Breakdown::new(heights, &profile),
        })
    }

    fn failure(message: String) -> Self {
        Self {
            badge: PLACEHOLDER_BADGE.to_string(),
            error: Some(message),
            total: None,
            scene: None,
            breakdown: Breakdown::default(),
        }
    }

    /// True when the last compute succeeded.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The chart as SVG, `None` on error.
    #[must_use]
    pub fn svg(&self) -> Option<String> {
        self.scene.as_ref().map(Scene::to_svg)
    }
}

/// Run one parse → compute → render cycle.
///
/// Never fails: rejected input, or a chart too large to draw, becomes a
/// [`View`] with the error banner set and no scene or table.
#[must_use]
pub fn evaluate(input: &str, options: SceneOptions, style: &ChartStyle) -> View {
    let _span = tracing::debug_span!("compute", input_len = input.len()).entered();
    let heights = match parse_heights(input) {
        Ok(heights) => heights,
        Err(err) => return rejected(&err),
    };
    match View::success(&heights, options, style) {
        Ok(view) => {
            tracing::debug!(
                columns = heights.len(),
                total = ?view.total,
                grid = options.show_grid,
                labels = options.show_labels,
                "computed water profile"
            );
            view
        }
        Err(err) => {
            tracing::warn!(error = %err, columns = heights.len(), "chart not rendered");
            View::failure(err.to_string())
        }
    }
}

fn rejected(err: &HeightsError) -> View {
    tracing::warn!(error = %err, index = ?err.index(), "rejected heights input");
    View::failure(err.to_string())
}

/// Owns the input text and toggle state and answers triggers with a view.
#[derive(Debug, Clone)]
pub struct Controller {
    input: String,
    options: SceneOptions,
    style: ChartStyle,
    view: View,
}

impl Controller {
    /// Create the controller and run the initial compute.
    #[must_use]
    pub fn new(input: impl Into<String>, options: SceneOptions, style: ChartStyle) -> Self {
        let input = input.into();
        let view = evaluate(&input, options, &style);
        Self {
            input,
            options,
            style,
            view,
        }
    }

    /// Create the controller from configuration defaults.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.input.initial.clone(),
            config.scene_options(),
            config.chart_style()?,
        ))
    }

    /// React to a trigger and return the refreshed view.
    pub fn handle(&mut self, trigger: Trigger) -> &View {
        tracing::trace!(?trigger, "handling trigger");
        match trigger {
            Trigger::Compute => {}
            Trigger::LoadExample => self.input = Heights::example().to_string(),
            Trigger::SetGrid(on) => self.options.show_grid = on,
            Trigger::SetLabels(on) => self.options.show_labels = on,
            Trigger::SetInput(text) => {
                self.input = text;
                return &self.view;
            }
        }
        self.view = evaluate(&self.input, self.options, &self.style);
        &self.view
    }

    /// The view produced by the most recent compute.
    #[must_use]
    pub const fn view(&self) -> &View {
        &self.view
    }

    /// Current input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current toggle state.
    #[must_use]
    pub const fn options(&self) -> SceneOptions {
        self.options
    }

    /// Chart metrics and palette.
    #[must_use]
    pub const fn style(&self) -> &ChartStyle {
        &self.style
    }
}
