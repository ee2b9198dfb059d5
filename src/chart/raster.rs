//! Raster chart backend.
//!
//! Paints the full chart into a [`Framebuffer`]: translucent zone bands,
//! border, dashed-look grid, the anti-aliased curve with circular sample
//! markers, threshold lines, key-point callouts, and all labels.

use super::{
    ChartLayout, GRID_COLOR, KEY_POINTS, THRESHOLD_LINES, TITLE, X_AXIS_LABEL, X_TICKS,
    Y_AXIS_LABEL, ZONES,
};
use crate::color::Rgba;
use crate::dataset::CurveData;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;
use crate::render::{
    draw_circle, draw_circle_outline, draw_line, draw_line_aa, draw_rect_outline, draw_text,
    draw_text_centered, draw_text_right, draw_text_vertical, text_width, CHAR_H,
};
use crate::scale::Scale;

/// Zone band opacity over the white background.
const ZONE_ALPHA: u8 = 51;
/// Vertical clearance between a key point and its callout text.
const CALLOUT_RISE: i32 = 16;

/// Raster renderer for the curve chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct RasterChart {
    layout: ChartLayout,
}

impl RasterChart {
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

    /// Render the chart for a dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the framebuffer cannot be allocated.
    pub fn render(&self, data: &CurveData) -> Result<Framebuffer> {
        let l = self.layout;
        let x_scale = l.x_scale()?;
        let y_scale = l.y_scale()?;

        let mut fb = Framebuffer::new(l.width, l.height)?;
        fb.clear(Rgba::WHITE);

        draw_text_centered(
            &mut fb,
            l.width as i32 / 2,
            30 - CHAR_H as i32 / 2,
            TITLE,
            Rgba::BLACK,
        );

        self.draw_zones(&mut fb, &x_scale);

        draw_rect_outline(
            &mut fb,
            l.plot_left() as i32,
            l.plot_top() as i32,
            l.plot_width(),
            l.plot_height(),
            Rgba::BLACK,
            2,
        );

        self.draw_grid(&mut fb, &x_scale);
        self.draw_curve(&mut fb, data, &x_scale, &y_scale);
        self.draw_thresholds(&mut fb, &y_scale);
        self.draw_callouts(&mut fb, data, &x_scale, &y_scale);
        self.draw_captions(&mut fb, &x_scale);

        Ok(fb)
    }

    fn draw_zones(&self, fb: &mut Framebuffer, x_scale: &impl Scale<f32, f32>) {
        let l = self.layout;
        for zone in &ZONES {
            let x1 = (x_scale.scale(zone.start) as u32).max(l.plot_left());
            let x2 = (x_scale.scale(zone.end) as u32).min(l.plot_right());
            if x2 > x1 {
                fb.blend_rect(
                    x1,
                    l.plot_top(),
                    x2 - x1,
                    l.plot_height(),
                    zone.fill.with_alpha(ZONE_ALPHA),
                );
            }
        }
    }

    fn draw_grid(&self, fb: &mut Framebuffer, x_scale: &impl Scale<f32, f32>) {
        let l = self.layout;

        // Horizontal lines at every whole multiplier, labeled 10x down to 0x.
        for i in 0..=10u32 {
            let y = (l.plot_top() + i * l.plot_height() / 10) as i32;
            draw_line(
                fb,
                l.plot_left() as i32,
                y,
                l.plot_right() as i32,
                y,
                GRID_COLOR,
            );
            let label = format!("{}x", 10 - i);
            draw_text_right(
                fb,
                l.plot_left() as i32 - 10,
                y - CHAR_H as i32 / 2,
                &label,
                Rgba::BLACK,
            );
        }

        // Vertical lines at each energy decade.
        for &tick in &X_TICKS {
            let x = x_scale.scale(tick) as i32;
            draw_line(
                fb,
                x,
                l.plot_top() as i32,
                x,
                l.plot_bottom() as i32,
                GRID_COLOR,
            );
            draw_text_centered(
                fb,
                x,
                l.plot_bottom() as i32 + 10,
                &super::format_tick(tick),
                Rgba::BLACK,
            );
        }
    }

    fn draw_curve(
        &self,
        fb: &mut Framebuffer,
        data: &CurveData,
        x_scale: &impl Scale<f32, f32>,
        y_scale: &impl Scale<f32, f32>,
    ) {
        let points: Vec<(f32, f32)> = data
            .energy()
            .iter()
            .zip(data.multiplier())
            .map(|(&e, &m)| (x_scale.scale(e), y_scale.scale(m)))
            .collect();

        // Three offset passes approximate a 3px stroke.
        for pair in points.windows(2) {
            for dy in -1..=1i32 {
                draw_line_aa(
                    fb,
                    pair[0].0,
                    pair[0].1 + dy as f32,
                    pair[1].0,
                    pair[1].1 + dy as f32,
                    Rgba::CURVE,
                );
            }
        }

        for &(x, y) in &points {
            draw_circle(fb, x as i32, y as i32, 3, Rgba::CURVE);
            draw_circle_outline(fb, x as i32, y as i32, 3, Rgba::DARK_RED);
        }
    }

    fn draw_thresholds(&self, fb: &mut Framebuffer, y_scale: &impl Scale<f32, f32>) {
        let l = self.layout;
        for line in &THRESHOLD_LINES {
            let y = y_scale.scale(line.multiplier) as i32;
            draw_line(
                fb,
                l.plot_left() as i32,
                y,
                l.plot_right() as i32,
                y,
                line.color,
            );
            draw_text(
                fb,
                l.plot_right() as i32 + 5,
                y - CHAR_H as i32 / 2,
                line.label,
                line.color,
            );
        }
    }

    fn draw_callouts(
        &self,
        fb: &mut Framebuffer,
        data: &CurveData,
        x_scale: &impl Scale<f32, f32>,
        y_scale: &impl Scale<f32, f32>,
    ) {
        for point in &KEY_POINTS {
            let idx = data.nearest_index(point.energy);
            let x = x_scale.scale(point.energy) as i32;
            let y = y_scale.scale(data.multiplier()[idx]) as i32;

            // White backing box keeps the callout readable over the curve.
            let w = text_width(point.label) + 4;
            let top = y - CALLOUT_RISE;
            fb.fill_rect(
                (x - w as i32 / 2).max(0) as u32,
                (top - 1).max(0) as u32,
                w,
                CHAR_H,
                Rgba::WHITE,
            );
            draw_text_centered(fb, x, top, point.label, Rgba::BLACK);
        }
    }

    fn draw_captions(&self, fb: &mut Framebuffer, x_scale: &impl Scale<f32, f32>) {
        let l = self.layout;

        draw_text_centered(
            fb,
            l.width as i32 / 2,
            l.height as i32 - 10 - CHAR_H as i32 / 2,
            X_AXIS_LABEL,
            Rgba::BLACK,
        );
        draw_text_vertical(fb, 20, l.height as i32 / 2, Y_AXIS_LABEL, Rgba::BLACK);

        let area = l.plot_area();
        for zone in &ZONES {
            let x = x_scale.scale(zone.label_anchor());
            if area.contains(Point::new(x, area.y)) {
                draw_text_centered(
                    fb,
                    x as i32,
                    l.plot_top() as i32 - 10 - CHAR_H as i32 / 2,
                    zone.label,
                    Rgba::BLACK,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> CurveData {
        CurveData::new(
            vec![0.0001, 0.001, 0.01, 0.1, 1.0, 10.0, 50.0, 100.0, 200.0],
            vec![10.0, 10.0, 9.0, 7.38, 5.46, 3.48, 2.34, 0.1, 0.1],
        )
        .expect("valid data")
    }

    #[test]
    fn test_render_dimensions() {
        let fb = RasterChart::new().render(&sample_data()).expect("render");
        assert_eq!(fb.width(), 800);
        assert_eq!(fb.height(), 600);
    }

    #[test]
    fn test_render_background_is_white() {
        let fb = RasterChart::new().render(&sample_data()).expect("render");
        // Corners are outside the plot area and unlabeled.
        assert_eq!(fb.get_pixel(0, 0), Some(Rgba::WHITE));
        assert_eq!(fb.get_pixel(799, 599), Some(Rgba::WHITE));
    }

    #[test]
    fn test_render_draws_border() {
        let fb = RasterChart::new().render(&sample_data()).expect("render");
        // Inside the 2px left border, clear of grid lines (the first decade
        // tick overdraws the outermost column).
        assert_eq!(fb.get_pixel(61, 301), Some(Rgba::BLACK));
    }

    #[test]
    fn test_render_zones_tint_plot_area() {
        let fb = RasterChart::new().render(&sample_data()).expect("render");
        // A point deep inside the Well-Fed band, away from curve and grid:
        // tinted, not pure white.
        let p = fb.get_pixel(560, 520).expect("in bounds");
        assert_ne!(p, Rgba::WHITE);
        assert!(p.r > 200 && p.b > 200);
    }

    #[test]
    fn test_render_curve_pixels_present() {
        let fb = RasterChart::new().render(&sample_data()).expect("render");
        let mut reddish = 0usize;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                let p = fb.get_pixel(x, y).expect("in bounds");
                if p.r > 200 && p.g < 160 && p.b < 160 {
                    reddish += 1;
                }
            }
        }
        // Curve stroke plus markers cover a substantial pixel count.
        assert!(reddish > 500, "only {reddish} curve pixels");
    }

    #[test]
    fn test_render_deterministic() {
        let chart = RasterChart::new();
        let a = chart.render(&sample_data()).expect("render");
        let b = chart.render(&sample_data()).expect("render");
        assert_eq!(a, b);
    }
}
