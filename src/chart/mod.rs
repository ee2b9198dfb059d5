//! Shared chart model: layout, zones, thresholds, and annotations.
//!
//! Every backend renders the same chart from the same constants; only the
//! output medium differs. The x axis is log10 over the energy domain, the
//! y axis linear over the multiplier domain, and both mappings go through
//! [`crate::scale`] so no backend reimplements the transform.

pub mod ascii;
pub mod raster;
pub mod vector;

use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::Rect;
use crate::scale::{LinearScale, LogScale};

/// Chart title shared by every backend.
pub const TITLE: &str = "Aminal VRGDA Love Curve";
/// X-axis caption.
pub const X_AXIS_LABEL: &str = "Energy Level (ETH)";
/// Y-axis caption.
pub const Y_AXIS_LABEL: &str = "Love Multiplier";

/// Lower bound of the energy axis.
pub const X_MIN: f32 = 0.0001;
/// Upper bound of the energy axis.
pub const X_MAX: f32 = 200.0;
/// Upper bound of the multiplier axis (lower bound is zero).
pub const Y_MAX: f32 = 10.0;

/// Energy values that get a vertical grid line and a tick label.
pub const X_TICKS: [f32; 7] = [0.0001, 0.001, 0.01, 0.1, 1.0, 10.0, 100.0];

/// Pixel geometry of the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLayout {
    /// Total image width in pixels.
    pub width: u32,
    /// Total image height in pixels.
    pub height: u32,
    /// Margin around the plot area on all four sides.
    pub margin: u32,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self { width: 800, height: 600, margin: 60 }
    }
}

impl ChartLayout {
    /// Width of the plot area in pixels.
    #[must_use]
    pub const fn plot_width(&self) -> u32 {
        self.width - 2 * self.margin
    }

    /// Height of the plot area in pixels.
    #[must_use]
    pub const fn plot_height(&self) -> u32 {
        self.height - 2 * self.margin
    }

    /// Left edge of the plot area.
    #[must_use]
    pub const fn plot_left(&self) -> u32 {
        self.margin
    }

    /// Right edge of the plot area.
    #[must_use]
    pub const fn plot_right(&self) -> u32 {
        self.width - self.margin
    }

    /// Top edge of the plot area.
    #[must_use]
    pub const fn plot_top(&self) -> u32 {
        self.margin
    }

    /// Bottom edge of the plot area.
    #[must_use]
    pub const fn plot_bottom(&self) -> u32 {
        self.height - self.margin
    }

    /// Plot area as a rectangle in pixel space.
    #[must_use]
    pub fn plot_area(&self) -> Rect {
        Rect::new(
            self.plot_left() as f32,
            self.plot_top() as f32,
            self.plot_width() as f32,
            self.plot_height() as f32,
        )
    }

    /// Energy-to-column mapping (log10).
    ///
    /// # Errors
    ///
    /// Returns an error if the energy domain is degenerate; it never is for
    /// the fixed chart constants.
    pub fn x_scale(&self) -> Result<LogScale> {
        LogScale::new(
            (X_MIN, X_MAX),
            (self.plot_left() as f32, self.plot_right() as f32),
        )
    }

    /// Multiplier-to-row mapping (linear, descending range so larger
    /// multipliers land nearer the top).
    ///
    /// # Errors
    ///
    /// Returns an error if the multiplier domain is degenerate; it never is
    /// for the fixed chart constants.
    pub fn y_scale(&self) -> Result<LinearScale> {
        LinearScale::new(
            (0.0, Y_MAX),
            (self.plot_bottom() as f32, self.plot_top() as f32),
        )
    }
}

/// A background band of the energy axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    /// Inclusive lower energy bound.
    pub start: f32,
    /// Exclusive upper energy bound.
    pub end: f32,
    /// Background fill.
    pub fill: Rgba,
    /// Label drawn above the band.
    pub label: &'static str,
}

impl Zone {
    /// Energy value at which the label is centered: the geometric mean of
    /// the bounds, so the label sits mid-band on the log axis.
    #[must_use]
    pub fn label_anchor(&self) -> f32 {
        (self.start * self.end).sqrt()
    }
}

/// The six fixed energy zones, in axis order.
pub const ZONES: [Zone; 6] = [
    Zone { start: 0.0001, end: 0.001, fill: Rgba::rgb(255, 229, 229), label: "Starving" },
    Zone { start: 0.001, end: 0.1, fill: Rgba::rgb(255, 240, 229), label: "Hungry" },
    Zone { start: 0.1, end: 1.0, fill: Rgba::rgb(229, 245, 229), label: "Fed" },
    Zone { start: 1.0, end: 10.0, fill: Rgba::rgb(229, 229, 255), label: "Well-Fed" },
    Zone { start: 10.0, end: 100.0, fill: Rgba::rgb(240, 229, 255), label: "Overfed" },
    Zone { start: 100.0, end: 200.0, fill: Rgba::rgb(255, 229, 229), label: "Extreme" },
];

/// A horizontal reference line at a fixed multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdLine {
    /// Multiplier value the line sits at.
    pub multiplier: f32,
    /// Line and label color.
    pub color: Rgba,
    /// Label drawn to the right of the plot.
    pub label: &'static str,
}

/// The three fixed threshold lines.
pub const THRESHOLD_LINES: [ThresholdLine; 3] = [
    ThresholdLine { multiplier: 10.0, color: Rgba::GREEN, label: "Max (10x)" },
    ThresholdLine { multiplier: 5.5, color: Rgba::ORANGE, label: "Equilibrium (~5.5x)" },
    ThresholdLine { multiplier: 0.1, color: Rgba::RED, label: "Min (0.1x)" },
];

/// A labeled annotation anchored to the sample nearest a target energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyPoint {
    /// Target energy; the annotation snaps to the nearest sample.
    pub energy: f32,
    /// Annotation text.
    pub label: &'static str,
}

/// Fixed annotations called out on the raster chart.
pub const KEY_POINTS: [KeyPoint; 6] = [
    KeyPoint { energy: 0.001, label: "10x" },
    KeyPoint { energy: 0.1, label: "7.4x" },
    KeyPoint { energy: 1.0, label: "5.5x" },
    KeyPoint { energy: 10.0, label: "3.5x" },
    KeyPoint { energy: 50.0, label: "2.3x" },
    KeyPoint { energy: 100.0, label: "0.1x" },
];

/// Grid line color shared by the raster and vector backends.
pub(crate) const GRID_COLOR: Rgba = Rgba::rgb(221, 221, 221);

/// Format an axis tick value: whole numbers without a fraction, sub-unit
/// values with their natural decimal expansion.
#[must_use]
pub fn format_tick(value: f32) -> String {
    if value >= 1.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Scale;

    #[test]
    fn test_layout_plot_area() {
        let layout = ChartLayout::default();
        assert_eq!(layout.plot_width(), 680);
        assert_eq!(layout.plot_height(), 480);
        assert_eq!(layout.plot_left(), 60);
        assert_eq!(layout.plot_right(), 740);
        assert_eq!(layout.plot_bottom(), 540);
    }

    #[test]
    fn test_plot_area_rect() {
        let area = ChartLayout::default().plot_area();
        assert_eq!(area, Rect::new(60.0, 60.0, 680.0, 480.0));
        assert_eq!(area.center(), crate::geometry::Point::new(400.0, 300.0));
    }

    #[test]
    fn test_x_scale_endpoints() {
        let layout = ChartLayout::default();
        let scale = layout.x_scale().expect("fixed domain");
        assert!((scale.scale(X_MIN) - 60.0).abs() < 0.01);
        assert!((scale.scale(X_MAX) - 740.0).abs() < 0.01);
    }

    #[test]
    fn test_y_scale_is_descending() {
        let layout = ChartLayout::default();
        let scale = layout.y_scale().expect("fixed domain");
        assert!((scale.scale(10.0) - 60.0).abs() < 0.01);
        assert!((scale.scale(0.0) - 540.0).abs() < 0.01);
        // Equilibrium threshold lands 45% down the plot area.
        assert!((scale.scale(5.5) - (60.0 + 480.0 * 0.45)).abs() < 0.05);
    }

    #[test]
    fn test_zones_tile_the_axis() {
        for pair in ZONES.windows(2) {
            assert!((pair[0].end - pair[1].start).abs() < f32::EPSILON);
        }
        assert!((ZONES[0].start - X_MIN).abs() < f32::EPSILON);
        assert!((ZONES[5].end - X_MAX).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zone_label_anchor_is_geometric_mean() {
        let fed = ZONES[2];
        let anchor = fed.label_anchor();
        assert!(anchor > fed.start && anchor < fed.end);
        assert!((anchor - (0.1f32).sqrt()).abs() < 1e-4);
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(0.0001), "0.0001");
        assert_eq!(format_tick(0.01), "0.01");
        assert_eq!(format_tick(1.0), "1");
        assert_eq!(format_tick(100.0), "100");
    }
}
