//! Core types for the Rainwater trapped-water calculator.
//!
//! This crate provides the pieces every front end shares:
//! - Height parsing: [`parse_heights`] producing [`Heights`]
//! - The water engine: [`WaterProfile`]
//! - Drawing primitives: [`Point`], [`Size`], [`Rect`], [`Color`], [`DrawCommand`]
//! - A [`Canvas`] trait and the [`RecordingCanvas`] that captures commands

mod canvas;
mod color;
pub mod draw;
mod error;
mod geometry;
mod heights;
mod water;

pub use canvas::{Canvas, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use draw::{BoxStyle, DrawCommand, StrokeStyle, TextAnchor, TextStyle};
pub use error::HeightsError;
pub use geometry::{Point, Rect, Size};
pub use heights::{parse_heights, Heights, EXAMPLE_HEIGHTS};
pub use water::WaterProfile;
