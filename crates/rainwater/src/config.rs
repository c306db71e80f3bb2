//! TOML configuration.
//!
//! Every key is optional; a missing file section falls back to the defaults
//! below.
//!
//! ```toml
//! [chart]
//! cell = 28.0
//! padding = 14.0
//! max_rows = 1000       # tallest chart drawn
//! theme = "dark"        # or "light"
//! water = "#4da3ff"     # optional color overrides
//!
//! [display]
//! grid = true
//! labels = true
//!
//! [input]
//! initial = "[0,4,0,0,0,6,0,6,4,0]"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//! ```

use rainwater_core::{Color, Heights};
use rainwater_render::{ChartStyle, ChartTheme, SceneOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has unknown keys.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    /// A value parsed but is out of range.
    #[error("invalid value for '{field}': {message}")]
    Invalid {
        /// Dotted key path
        field: &'static str,
        /// What is wrong with it
        message: String,
    },
}

/// Named palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Dark page, translucent panel
    #[default]
    Dark,
    /// White page
    Light,
}

impl ThemeName {
    /// The palette this name stands for.
    #[must_use]
    pub fn theme(self) -> ChartTheme {
        match self {
            Self::Dark => ChartTheme::dark(),
            Self::Light => ChartTheme::light(),
        }
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme '{other}' (expected dark or light)")),
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Dark => "dark",
            Self::Light => "light",
        })
    }
}

/// `[chart]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Pixels per unit
    pub cell: f32,
    /// Canvas padding
    pub padding: f32,
    /// Background corner radius
    pub frame_radius: f32,
    /// Column corner radius
    pub bar_radius: f32,
    /// Label font size
    pub label_size: f32,
    /// Tallest chart, in unit rows, that will be drawn
    pub max_rows: u32,
    /// Palette
    pub theme: ThemeName,
    /// Override for the water fill (hex)
    pub water: Option<String>,
    /// Override for the block fill (hex)
    pub block: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let style = ChartStyle::default();
        Self {
            cell: style.cell,
            padding: style.padding,
            frame_radius: style.frame_radius,
            bar_radius: style.bar_radius,
            label_size: style.label_size,
            max_rows: style.max_rows,
            theme: ThemeName::default(),
            water: None,
            block: None,
        }
    }
}

/// `[display]` section: initial toggle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Grid overlay on
    pub grid: bool,
    /// Column labels on
    pub labels: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let options = SceneOptions::default();
        Self {
            grid: options.show_grid,
            labels: options.show_labels,
        }
    }
}

/// `[input]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Text in the input field at startup
    pub initial: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            initial: Heights::example().to_string(),
        }
    }
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Chart metrics and palette
    pub chart: ChartConfig,
    /// Toggle defaults
    pub display: DisplayConfig,
    /// Startup input
    pub input: InputConfig,
    /// HTTP server
    pub server: ServerConfig,
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Check ranges and color overrides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |field: &'static str, value: f32| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    message: format!("must be a positive number, got {value}"),
                })
            }
        };
        let non_negative = |field: &'static str, value: f32| {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    field,
                    message: format!("must be zero or more, got {value}"),
                })
            }
        };

        positive("chart.cell", self.chart.cell)?;
        non_negative("chart.padding", self.chart.padding)?;
        non_negative("chart.frame_radius", self.chart.frame_radius)?;
        non_negative("chart.bar_radius", self.chart.bar_radius)?;
        positive("chart.label_size", self.chart.label_size)?;
        if self.chart.max_rows == 0 {
            return Err(ConfigError::Invalid {
                field: "chart.max_rows",
                message: "must be at least 1".to_string(),
            });
        }
        if self.server.port == 0 {
            return Err(ConfigError::Invalid {
                field: "server.port",
                message: "must be between 1 and 65535".to_string(),
            });
        }
        self.chart_style().map(|_| ())
    }

    /// Chart metrics and palette, with color overrides applied.
    pub fn chart_style(&self) -> Result<ChartStyle, ConfigError> {
        let chart = &self.chart;
        let mut theme = chart.theme.theme();
        if let Some(hex) = &chart.water {
            theme.water = parse_color("chart.water", hex)?;
        }
        if let Some(hex) = &chart.block {
            theme.block = parse_color("chart.block", hex)?;
        }
        Ok(ChartStyle {
            cell: chart.cell,
            padding: chart.padding,
            frame_radius: chart.frame_radius,
            bar_radius: chart.bar_radius,
            label_size: chart.label_size,
            max_rows: chart.max_rows,
            theme,
            ..ChartStyle::default()
        })
    }

    /// Initial toggle states.
    #[must_use]
    pub const fn scene_options(&self) -> SceneOptions {
        SceneOptions {
            show_grid: self.display.grid,
            show_labels: self.display.labels,
        }
    }
}

fn parse_color(field: &'static str, hex: &str) -> Result<Color, ConfigError> {
    Color::from_hex(hex).map_err(|e| ConfigError::Invalid {
        field,
        message: format!("'{hex}': {e}"),
    })
}
