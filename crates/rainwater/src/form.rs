//! Page form submissions.
//!
//! The HTML page submits its state as a GET query:
//! `heights=<text>&action=compute|example&grid=on&labels=on`.
//! Unchecked checkboxes are simply absent, so toggle state is only read from
//! the query when the form was actually submitted (`heights` or `action`
//! present); a bare `/` starts from configuration defaults.

use crate::config::{Config, ConfigError};
use crate::controller::{Controller, Trigger};
use rainwater_render::SceneOptions;

/// Which button submitted the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// "Compute" button, or Enter in the text field
    Compute,
    /// "Load example" button
    Example,
}

/// A decoded page query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    /// Contents of the heights field
    pub heights: Option<String>,
    /// Submitting button
    pub action: Option<FormAction>,
    /// Grid checkbox value, `None` when the key is absent
    pub grid: Option<bool>,
    /// Labels checkbox value, `None` when the key is absent
    pub labels: Option<bool>,
}

impl FormSubmission {
    /// Decode an `application/x-www-form-urlencoded` query string.
    ///
    /// Unknown keys are ignored; a repeated key keeps its last value.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut form = Self::default();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = percent_decode(key);
            let value = percent_decode(value);
            match key.as_str() {
                "heights" => form.heights = Some(value),
                "action" => {
                    form.action = Some(if value == "example" {
                        FormAction::Example
                    } else {
                        FormAction::Compute
                    });
                }
                "grid" => form.grid = Some(is_checked(&value)),
                "labels" => form.labels = Some(is_checked(&value)),
                _ => {}
            }
        }
        form
    }

    /// True when the query came from the page form rather than a bare visit.
    #[must_use]
    pub const fn is_submitted(&self) -> bool {
        self.heights.is_some() || self.action.is_some()
    }

    /// Toggle state: from the form when submitted, otherwise from config.
    /// An absent checkbox in a submitted form is unchecked.
    #[must_use]
    pub fn scene_options(&self, config: &Config) -> SceneOptions {
        if self.is_submitted() {
            SceneOptions {
                show_grid: self.grid.unwrap_or(false),
                show_labels: self.labels.unwrap_or(false),
            }
        } else {
            config.scene_options()
        }
    }

    /// Build a controller in the state this submission describes and run
    /// the matching trigger.
    pub fn into_controller(self, config: &Config) -> Result<Controller, ConfigError> {
        let options = self.scene_options(config);
        let input = if self.is_submitted() {
            self.heights.unwrap_or_default()
        } else {
            config.input.initial.clone()
        };

        let mut controller = Controller::new(input, options, config.chart_style()?);
        if self.action == Some(FormAction::Example) {
            controller.handle(Trigger::LoadExample);
        }
        Ok(controller)
    }
}

fn is_checked(value: &str) -> bool {
    !matches!(value, "0" | "off" | "false")
}

/// Decode `%XX` escapes and `+` as space. Malformed escapes pass through
/// verbatim; invalid UTF-8 is replaced.
#[must_use]
pub fn percent_decode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                match (hex_value(bytes.get(i + 1)), hex_value(bytes.get(i + 2))) {
                    (Some(hi), Some(lo)) => {
                        out.push((hi << 4) | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: Option<&u8>) -> Option<u8> {
    match *byte? {
        b @ b'0'..=b'9' => Some(b - b'0'),
        b @ b'a'..=b'f' => Some(b - b'a' + 10),
        b @ b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
