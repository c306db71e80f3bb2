//! Canvas abstraction and the recording implementation used to build scenes.

use crate::draw::{BoxStyle, DrawCommand, StrokeStyle, TextStyle};
use crate::{Color, Point, Rect};

/// Drawing surface the chart renderer paints onto.
pub trait Canvas {
    /// Draw a rectangle with uniformly rounded corners, filled and/or stroked.
    fn draw_rounded_rect(&mut self, rect: Rect, radius: f32, style: &BoxStyle);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Draw text anchored at `position` (baseline).
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Draw a filled, unstroked rectangle with rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color) {
        self.draw_rounded_rect(rect, radius, &BoxStyle::fill(color));
    }
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Scenes are built by painting onto one of these and taking the commands.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for RecordingCanvas {
    fn draw_rounded_rect(&mut self, rect: Rect, radius: f32, style: &BoxStyle) {
        self.commands
            .push(DrawCommand::rounded_rect(rect, radius, style.clone()));
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::line(from, to, StrokeStyle::new(color, width)));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands
            .push(DrawCommand::text(text, position, style.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_new() {
        let mut canvas = RecordingCanvas::new();
        assert!(canvas.take_commands().is_empty());
    }

    #[test]
    fn test_recording_canvas_fill_rounded_rect() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 6.0, Color::WHITE);

        let commands = canvas.take_commands();
        assert_eq!(commands.len(), 1);
        match &commands[0] {
            DrawCommand::Rect { radius, style, .. } => {
                assert_eq!(*radius, 6.0);
                assert_eq!(style.fill, Some(Color::WHITE));
                assert!(style.stroke.is_none());
            }
            _ => panic!("Expected Rect command"),
        }
    }

    #[test]
    fn test_recording_canvas_stroked_rect() {
        let mut canvas = RecordingCanvas::new();
        let style = BoxStyle::fill(Color::BLACK).with_stroke(StrokeStyle::new(Color::WHITE, 1.0));
        canvas.draw_rounded_rect(Rect::new(0.0, 0.0, 20.0, 20.0), 14.0, &style);

        match &canvas.take_commands()[0] {
            DrawCommand::Rect { style: recorded, .. } => assert_eq!(*recorded, style),
            _ => panic!("Expected Rect command"),
        }
    }

    #[test]
    fn test_recording_canvas_draw_line() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_line(Point::ORIGIN, Point::new(0.0, 50.0), Color::BLACK, 1.0);

        match &canvas.take_commands()[0] {
            DrawCommand::Line { from, to, style } => {
                assert_eq!(*from, Point::ORIGIN);
                assert_eq!(*to, Point::new(0.0, 50.0));
                assert_eq!(style.width, 1.0);
            }
            _ => panic!("Expected Line command"),
        }
    }

    #[test]
    fn test_recording_canvas_draw_text() {
        let mut canvas = RecordingCanvas::new();
        canvas.draw_text("6", Point::new(5.0, 5.0), &TextStyle::default());

        match &canvas.take_commands()[0] {
            DrawCommand::Text { content, .. } => assert_eq!(content, "6"),
            _ => panic!("Expected Text command"),
        }
    }

    #[test]
    fn test_take_commands_empties_canvas() {
        let mut canvas = RecordingCanvas::new();
        canvas.fill_rounded_rect(Rect::default(), 0.0, Color::WHITE);
        canvas.fill_rounded_rect(Rect::default(), 0.0, Color::BLACK);

        assert_eq!(canvas.take_commands().len(), 2);
        assert!(canvas.take_commands().is_empty());
    }
}
