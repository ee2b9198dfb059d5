//! SVG output encoder.
//!
//! Element-list builder rendered to markup; the vector chart backend pushes
//! shapes in paint order and serializes once.

use crate::color::Rgba;
use crate::error::Result;
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// SVG encoder for vector chart output.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    width: u32,
    height: u32,
    /// Background color (None for transparent).
    background: Option<Rgba>,
    elements: Vec<SvgElement>,
}

/// An SVG element.
///
/// Field names match SVG attribute names.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Rectangle
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: Option<Rgba>,
        stroke: Option<Rgba>,
        stroke_width: f32,
    },
    /// Circle
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: Rgba,
        stroke: Option<Rgba>,
        stroke_width: f32,
    },
    /// Line, optionally dashed
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        stroke_width: f32,
        dash: Option<String>,
    },
    /// Polyline (connected line segments, no fill)
    Polyline {
        points: Vec<(f32, f32)>,
        stroke: Rgba,
        stroke_width: f32,
    },
    /// Text
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
        bold: bool,
        /// Rotation in degrees around (x, y).
        rotate: Option<f32>,
    },
}

/// Text anchor position for SVG text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Align text start at position (left-aligned for LTR)
    #[default]
    Start,
    /// Center text at position
    Middle,
    /// Align text end at position (right-aligned for LTR)
    End,
}

impl Default for SvgEncoder {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl SvgEncoder {
    /// Create a new SVG encoder with given dimensions and a white background.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, background: Some(Rgba::WHITE), elements: Vec::new() }
    }

    /// Set background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Add a filled rectangle. Translucency comes from the fill's alpha.
    #[must_use]
    pub fn rect(mut self, x: f32, y: f32, width: f32, height: f32, fill: Rgba) -> Self {
        self.elements.push(SvgElement::Rect {
            x,
            y,
            width,
            height,
            fill: Some(fill),
            stroke: None,
            stroke_width: 1.0,
        });
        self
    }

    /// Add an unfilled rectangle outline.
    #[must_use]
    pub fn rect_outlined(
        mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        stroke: Rgba,
        stroke_width: f32,
    ) -> Self {
        self.elements.push(SvgElement::Rect {
            x,
            y,
            width,
            height,
            fill: None,
            stroke: Some(stroke),
            stroke_width,
        });
        self
    }

    /// Add a circle with stroke.
    #[must_use]
    pub fn circle_outlined(
        mut self,
        cx: f32,
        cy: f32,
        r: f32,
        fill: Rgba,
        stroke: Rgba,
        stroke_width: f32,
    ) -> Self {
        self.elements.push(SvgElement::Circle {
            cx,
            cy,
            r,
            fill,
            stroke: Some(stroke),
            stroke_width,
        });
        self
    }

    /// Add a solid line.
    #[must_use]
    pub fn line(mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: Rgba, stroke_width: f32) -> Self {
        self.elements.push(SvgElement::Line { x1, y1, x2, y2, stroke, stroke_width, dash: None });
        self
    }

    /// Add a dashed line (`dash` is an SVG `stroke-dasharray` value).
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn line_dashed(
        mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        stroke_width: f32,
        dash: &str,
    ) -> Self {
        self.elements.push(SvgElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
            dash: Some(dash.to_string()),
        });
        self
    }

    /// Add a polyline.
    #[must_use]
    pub fn polyline(mut self, points: &[(f32, f32)], stroke: Rgba, stroke_width: f32) -> Self {
        self.elements.push(SvgElement::Polyline {
            points: points.to_vec(),
            stroke,
            stroke_width,
        });
        self
    }

    /// Add anchored text.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn text(
        mut self,
        x: f32,
        y: f32,
        text: &str,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
        bold: bool,
    ) -> Self {
        self.elements.push(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill,
            anchor,
            bold,
            rotate: None,
        });
        self
    }

    /// Add anchored text rotated by `degrees` around its position.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn text_rotated(
        mut self,
        x: f32,
        y: f32,
        text: &str,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
        bold: bool,
        degrees: f32,
    ) -> Self {
        self.elements.push(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill,
            anchor,
            bold,
            rotate: Some(degrees),
        });
        self
    }

    /// Render to an SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        if let Some(bg) = self.background {
            let _ =
                writeln!(svg, r#"  <rect width="100%" height="100%" fill="{}"/>"#, bg.to_css());
        }

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

/// Convert an SVG element to its string representation.
fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::Rect { x, y, width, height, fill, stroke, stroke_width } => {
            let fill_attr = fill.map_or_else(|| "none".to_string(), Rgba::to_css);
            let stroke_attr = stroke
                .map(|s| format!(r#" stroke="{}" stroke-width="{stroke_width}""#, s.to_css()))
                .unwrap_or_default();
            format!(
                r#"<rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{fill_attr}"{stroke_attr}/>"#
            )
        }
        SvgElement::Circle { cx, cy, r, fill, stroke, stroke_width } => {
            let stroke_attr = stroke
                .map(|s| format!(r#" stroke="{}" stroke-width="{stroke_width}""#, s.to_css()))
                .unwrap_or_default();
            format!(r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"{stroke_attr}/>"#, fill.to_css())
        }
        SvgElement::Line { x1, y1, x2, y2, stroke, stroke_width, dash } => {
            let dash_attr = dash
                .as_ref()
                .map(|d| format!(r#" stroke-dasharray="{d}""#))
                .unwrap_or_default();
            format!(
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}"{dash_attr}/>"#,
                stroke.to_css()
            )
        }
        SvgElement::Polyline { points, stroke, stroke_width } => {
            let points_str: String = points
                .iter()
                .map(|(x, y)| format!("{x},{y}"))
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                r#"<polyline points="{points_str}" fill="none" stroke="{}" stroke-width="{stroke_width}"/>"#,
                stroke.to_css()
            )
        }
        SvgElement::Text { x, y, text, font_size, fill, anchor, bold, rotate } => {
            let anchor_attr = match anchor {
                TextAnchor::Start => String::new(),
                TextAnchor::Middle => r#" text-anchor="middle""#.to_string(),
                TextAnchor::End => r#" text-anchor="end""#.to_string(),
            };
            let weight_attr = if *bold { r#" font-weight="bold""# } else { "" };
            let rotate_attr = rotate
                .map(|deg| format!(r#" transform="rotate({deg} {x} {y})""#))
                .unwrap_or_default();
            format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}"{anchor_attr}{weight_attr}{rotate_attr}>{}</text>"#,
                fill.to_css(),
                escape_text(text)
            )
        }
    }
}

/// Escape XML-special characters in text content.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_header_and_background() {
        let svg = SvgEncoder::new(800, 600).render();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="800""#));
        assert!(svg.contains(r#"fill="rgb(255,255,255)""#));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_transparent_background() {
        let svg = SvgEncoder::new(100, 100).background(None).render();
        assert!(!svg.contains("100%"));
    }

    #[test]
    fn test_translucent_rect() {
        let svg = SvgEncoder::new(100, 100)
            .rect(10.0, 10.0, 20.0, 20.0, Rgba::rgb(255, 229, 229).with_alpha(51))
            .render();
        assert!(svg.contains(r#"fill="rgba(255,229,229,0.200)""#));
    }

    #[test]
    fn test_dashed_line() {
        let svg = SvgEncoder::new(100, 100)
            .line_dashed(0.0, 0.0, 100.0, 0.0, Rgba::GREEN, 1.0, "5,5")
            .render();
        assert!(svg.contains(r#"stroke-dasharray="5,5""#));
    }

    #[test]
    fn test_polyline_points() {
        let svg = SvgEncoder::new(100, 100)
            .polyline(&[(0.0, 0.0), (10.0, 5.0)], Rgba::CURVE, 3.0)
            .render();
        assert!(svg.contains(r#"points="0,0 10,5""#));
        assert!(svg.contains(r#"fill="none""#));
    }

    #[test]
    fn test_text_attributes() {
        let svg = SvgEncoder::new(100, 100)
            .text(50.0, 20.0, "Fed", 12.0, Rgba::BLACK, TextAnchor::Middle, true)
            .render();
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains(r#"font-weight="bold""#));
        assert!(svg.contains(">Fed</text>"));
    }

    #[test]
    fn test_text_rotation() {
        let svg = SvgEncoder::new(100, 100)
            .text_rotated(20.0, 50.0, "Love", 14.0, Rgba::BLACK, TextAnchor::Middle, true, -90.0)
            .render();
        assert!(svg.contains(r#"transform="rotate(-90 20 50)""#));
    }

    #[test]
    fn test_text_escaping() {
        let svg = SvgEncoder::new(100, 100)
            .text(0.0, 0.0, "<0.005 & more", 12.0, Rgba::BLACK, TextAnchor::Start, false)
            .render();
        assert!(svg.contains("&lt;0.005 &amp; more"));
    }

    #[test]
    fn test_render_deterministic() {
        let build = || {
            SvgEncoder::new(100, 100)
                .line(0.0, 0.0, 1.0, 1.0, Rgba::BLACK, 1.0)
                .render()
        };
        assert_eq!(build(), build());
    }
}
