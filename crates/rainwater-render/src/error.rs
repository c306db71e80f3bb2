//! Rendering errors.

use thiserror::Error;

/// Reasons a chart cannot be drawn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The tallest column (block plus water) needs more unit rows than the
    /// style allows.
    #[error("Chart too tall: {rows} rows exceed the limit of {limit}. Use smaller heights.")]
    TooTall {
        /// Rows the chart would need
        rows: u64,
        /// Configured maximum
        limit: u32,
    },
}
