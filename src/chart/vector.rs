//! Vector chart backend.
//!
//! Builds the chart as an [`SvgEncoder`] element list in paint order:
//! title, border, zone bands, grid, curve polyline with markers, threshold
//! lines, axis captions, zone labels.

use super::{
    ChartLayout, GRID_COLOR, THRESHOLD_LINES, TITLE, X_AXIS_LABEL, X_TICKS, Y_AXIS_LABEL, ZONES,
};
use crate::color::Rgba;
use crate::dataset::CurveData;
use crate::error::Result;
use crate::output::{SvgEncoder, TextAnchor};
use crate::scale::Scale;

/// Zone band fill-opacity, as an 8-bit alpha (0.2).
const ZONE_ALPHA: u8 = 51;
/// Threshold line opacity (0.5).
const THRESHOLD_ALPHA: u8 = 128;

/// Vector renderer for the curve chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorChart {
    layout: ChartLayout,
}

impl VectorChart {
    /// Create a renderer with the default 800x600 layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with an explicit layout.
    #[must_use]
    pub const fn with_layout(layout: ChartLayout) -> Self {
        Self { layout }
    }

    /// Render the chart to SVG markup.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixed chart domains are degenerate; they
    /// never are for the default layout.
    pub fn render(&self, data: &CurveData) -> Result<String> {
        let l = self.layout;
        let x_scale = l.x_scale()?;
        let y_scale = l.y_scale()?;

        let left = l.plot_left() as f32;
        let right = l.plot_right() as f32;
        let top = l.plot_top() as f32;
        let bottom = l.plot_bottom() as f32;

        let mut svg = SvgEncoder::new(l.width, l.height)
            .text(
                l.width as f32 / 2.0,
                30.0,
                TITLE,
                24.0,
                Rgba::BLACK,
                TextAnchor::Middle,
                true,
            )
            .rect_outlined(
                left,
                top,
                l.plot_width() as f32,
                l.plot_height() as f32,
                Rgba::BLACK,
                2.0,
            );

        for zone in &ZONES {
            let x1 = x_scale.scale(zone.start);
            let x2 = x_scale.scale(zone.end);
            svg = svg.rect(
                x1,
                top,
                x2 - x1,
                l.plot_height() as f32,
                zone.fill.with_alpha(ZONE_ALPHA),
            );
        }

        // Horizontal grid at every whole multiplier, labeled 10x down to 0x.
        for i in 0..=10u32 {
            let y = top + i as f32 * l.plot_height() as f32 / 10.0;
            svg = svg
                .line_dashed(left, y, right, y, GRID_COLOR, 1.0, "2,2")
                .text(
                    left - 10.0,
                    y + 5.0,
                    &format!("{}x", 10 - i),
                    12.0,
                    Rgba::BLACK,
                    TextAnchor::End,
                    false,
                );
        }

        // Vertical grid at each energy decade.
        for &tick in &X_TICKS {
            let x = x_scale.scale(tick);
            svg = svg
                .line_dashed(x, top, x, bottom, GRID_COLOR, 1.0, "2,2")
                .text(
                    x,
                    bottom + 20.0,
                    &super::format_tick(tick),
                    12.0,
                    Rgba::BLACK,
                    TextAnchor::Middle,
                    false,
                );
        }

        let points: Vec<(f32, f32)> = data
            .energy()
            .iter()
            .zip(data.multiplier())
            .map(|(&e, &m)| (x_scale.scale(e), y_scale.scale(m)))
            .collect();
        svg = svg.polyline(&points, Rgba::CURVE, 3.0);

        for &(x, y) in &points {
            svg = svg.circle_outlined(x, y, 3.0, Rgba::CURVE, Rgba::DARK_RED, 1.0);
        }

        for line in &THRESHOLD_LINES {
            let y = y_scale.scale(line.multiplier);
            let color = line.color.with_alpha(THRESHOLD_ALPHA);
            svg = svg
                .line_dashed(left, y, right, y, color, 1.0, "5,5")
                .text(
                    right + 10.0,
                    y + 5.0,
                    line.label,
                    12.0,
                    line.color,
                    TextAnchor::Start,
                    false,
                );
        }

        svg = svg
            .text(
                l.width as f32 / 2.0,
                l.height as f32 - 10.0,
                X_AXIS_LABEL,
                14.0,
                Rgba::BLACK,
                TextAnchor::Middle,
                true,
            )
            .text_rotated(
                20.0,
                l.height as f32 / 2.0,
                Y_AXIS_LABEL,
                14.0,
                Rgba::BLACK,
                TextAnchor::Middle,
                true,
                -90.0,
            );

        for zone in &ZONES {
            svg = svg.text(
                x_scale.scale(zone.label_anchor()),
                top - 10.0,
                zone.label,
                12.0,
                Rgba::BLACK,
                TextAnchor::Middle,
                true,
            );
        }

        Ok(svg.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> CurveData {
        CurveData::new(
            vec![0.0001, 0.001, 0.1, 1.0, 10.0, 100.0, 200.0],
            vec![10.0, 10.0, 7.38, 5.46, 3.48, 0.1, 0.1],
        )
        .expect("valid data")
    }

    fn render() -> String {
        VectorChart::new().render(&sample_data()).expect("render")
    }

    #[test]
    fn test_svg_has_title_and_captions() {
        let svg = render();
        assert!(svg.contains(">Aminal VRGDA Love Curve</text>"));
        assert!(svg.contains(">Energy Level (ETH)</text>"));
        assert!(svg.contains(">Love Multiplier</text>"));
        assert!(svg.contains(r#"transform="rotate(-90 20 300)""#));
    }

    #[test]
    fn test_svg_zone_bands() {
        let svg = render();
        // Six translucent bands plus their labels.
        assert_eq!(svg.matches("rgba(").count() - 3, 6); // 3 threshold lines
        for zone in &ZONES {
            assert!(svg.contains(&format!(">{}</text>", zone.label)));
        }
    }

    #[test]
    fn test_svg_grid_and_ticks() {
        let svg = render();
        assert_eq!(svg.matches(r#"stroke-dasharray="2,2""#).count(), 11 + 7);
        assert!(svg.contains(">10x</text>"));
        assert!(svg.contains(">0x</text>"));
        assert!(svg.contains(">0.0001</text>"));
        assert!(svg.contains(">100</text>"));
    }

    #[test]
    fn test_svg_curve_and_markers() {
        let svg = render();
        assert!(svg.contains(r#"stroke="rgb(255,107,107)" stroke-width="3""#));
        assert_eq!(svg.matches("<circle").count(), sample_data().len());
        assert!(svg.contains(r#"stroke="rgb(139,0,0)""#));
    }

    #[test]
    fn test_svg_threshold_lines() {
        let svg = render();
        assert_eq!(svg.matches(r#"stroke-dasharray="5,5""#).count(), 3);
        assert!(svg.contains(">Max (10x)</text>"));
        assert!(svg.contains(">Equilibrium (~5.5x)</text>"));
        assert!(svg.contains(">Min (0.1x)</text>"));
    }

    #[test]
    fn test_svg_deterministic() {
        assert_eq!(render(), render());
    }
}
