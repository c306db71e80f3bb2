//! SVG serialization of a [`Scene`].

use crate::scene::Scene;
use rainwater_core::DrawCommand;
use std::fmt::Write;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Render `scene` as a standalone SVG document.
///
/// `width`, `height` and `viewBox` all equal the scene size, so the drawing
/// scales with its container when embedded.
#[must_use]
pub fn render(scene: &Scene) -> String {
    let w = scene.size.width;
    let h = scene.size.height;
    let mut out = String::with_capacity(128 + scene.commands.len() * 96);

    // Writing into a String is infallible.
    let _ = writeln!(
        out,
        r#"<svg xmlns="{SVG_NS}" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    for command in &scene.commands {
        out.push_str("  ");
        write_command(&mut out, command);
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

fn write_command(out: &mut String, command: &DrawCommand) {
    match command {
        DrawCommand::Rect {
            bounds,
            radius,
            style,
        } => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}""#,
                bounds.x, bounds.y, bounds.width, bounds.height
            );
            if *radius > 0.0 {
                let _ = write!(out, r#" rx="{radius}" ry="{radius}""#);
            }
            match style.fill {
                Some(fill) => {
                    let _ = write!(out, r#" fill="{}""#, fill.to_css());
                }
                None => out.push_str(r#" fill="none""#),
            }
            if let Some(stroke) = &style.stroke {
                let _ = write!(
                    out,
                    r#" stroke="{}" stroke-width="{}""#,
                    stroke.color.to_css(),
                    stroke.width
                );
            }
            out.push_str("/>");
        }
        DrawCommand::Line { from, to, style } => {
            let _ = write!(
                out,
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
                from.x,
                from.y,
                to.x,
                to.y,
                style.color.to_css(),
                style.width
            );
        }
        DrawCommand::Text {
            content,
            position,
            style,
        } => {
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" text-anchor="{}" font-size="{}" fill="{}">{}</text>"#,
                position.x,
                position.y,
                style.anchor.as_svg(),
                style.size,
                style.color.to_css(),
                escape(content)
            );
        }
    }
}

/// Escape text for use in XML character data and attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
