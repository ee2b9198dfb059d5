//! End-to-end rendering tests.
//!
//! Loads a dataset the way the binaries do (from a CSV file) and runs every
//! backend over it, checking artifact structure and determinism.

#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use proptest::prelude::*;
use std::io::Write;
use vrgda_viz::chart::ascii;
use vrgda_viz::chart::{format_tick, ZONES};
use vrgda_viz::prelude::*;

/// A small dataset shaped like the real curve file: multiplier pinned at 10
/// through the lowest decades, decaying past 0.005 ETH, floored at 0.1.
const SAMPLE_CSV: &str = "\
eth_amount,love_multiplier
0.0001,10.0
0.001,10.0
0.005,10.0
0.01,9.5
0.1,7.38
0.5,6.2
1.0,5.46
2.0,4.9
5.0,4.1
10.0,3.48
50.0,2.34
100.0,0.1
200.0,0.1
";

fn load_sample() -> CurveData {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_CSV.as_bytes()).unwrap();
    CurveData::from_csv_path(file.path()).unwrap()
}

// ============================================================================
// Dataset
// ============================================================================

#[test]
fn test_loaded_summary_matches_csv() {
    let data = load_sample();
    let summary = data.summary();

    assert_relative_eq!(summary.min_energy, 0.0001, max_relative = 1e-5);
    assert_relative_eq!(summary.max_energy, 200.0, max_relative = 1e-5);
    assert_relative_eq!(summary.max_multiplier, 10.0, max_relative = 1e-5);
    assert_relative_eq!(summary.min_multiplier, 0.1, max_relative = 1e-5);

    // First strict crossings in file order.
    assert_relative_eq!(summary.below_5.unwrap(), 2.0, max_relative = 1e-5);
    assert_relative_eq!(summary.below_1.unwrap(), 100.0, max_relative = 1e-5);
}

#[test]
fn test_summary_report_format() {
    let text = load_sample().summary().to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "VRGDA Curve Summary:");
    assert_eq!(lines[1], "Minimum ETH: 0.0001");
    assert_eq!(lines[2], "Maximum ETH: 200");
    assert_eq!(lines[3], "Maximum multiplier: 10.0x");
    assert_eq!(lines[4], "Minimum multiplier: 0.1x");
    assert_eq!(lines[5], "Multiplier drops below 5x at: 2.0 ETH");
    assert_eq!(lines[6], "Multiplier drops below 1x at: 100.0 ETH");
}

// ============================================================================
// Raster backend
// ============================================================================

#[test]
fn test_raster_chart_renders_and_is_deterministic() {
    let data = load_sample();
    let chart = RasterChart::new();

    let a = chart.render(&data).unwrap();
    let b = chart.render(&data).unwrap();
    assert_eq!((a.width(), a.height()), (800, 600));
    assert_eq!(a, b);
}

#[cfg(feature = "png")]
#[test]
fn test_raster_chart_encodes_to_png() {
    use vrgda_viz::output::PngEncoder;

    let fb = RasterChart::new().render(&load_sample()).unwrap();
    let bytes = PngEncoder::to_bytes(&fb).unwrap();
    assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
}

// ============================================================================
// Vector backend
// ============================================================================

#[test]
fn test_vector_chart_structure() {
    let data = load_sample();
    let svg = VectorChart::new().render(&data).unwrap();

    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>\n"));
    assert!(svg.contains(">Aminal VRGDA Love Curve</text>"));

    // One marker per sample, on top of the polyline.
    assert_eq!(svg.matches("<circle").count(), data.len());
    assert_eq!(svg.matches("<polyline").count(), 1);

    for zone in &ZONES {
        assert!(svg.contains(&format!(">{}</text>", zone.label)));
    }
}

#[test]
fn test_html_report_embeds_chart() {
    let svg = VectorChart::new().render(&load_sample()).unwrap();
    let html = HtmlReport::new("Aminal VRGDA Love Curve", svg.clone()).render();

    assert!(html.contains(&svg));
    assert!(html.contains("<th>Incentive</th>"));
    assert!(html.contains("<td>Well-Fed</td>"));
}

// ============================================================================
// Terminal backend
// ============================================================================

#[test]
fn test_ascii_chart_grid_tracks_curve() {
    let data = load_sample();
    let out = AsciiChart::new().render(&data);

    assert!(out.contains("AMINAL VRGDA LOVE CURVE"));
    assert!(out.contains("Energy Range: 0.0001 - 200 ETH"));
    assert!(out.contains("Multiplier Range: 0.1x - 10.0x"));

    // 10x row is filled at the left edge (the flat head of the curve) and
    // empty at the right edge (where the multiplier is floored at 0.1).
    let ten_row = out
        .lines()
        .find(|l| l.starts_with(" 10x |") && l.contains('\u{2588}'))
        .expect("10x grid row");
    let cells: Vec<char> = ten_row.chars().collect();
    assert_eq!(cells[6], '\u{2588}');
    assert_eq!(cells[6 + 69], ' ');
}

#[test]
fn test_ascii_summary_file_round_trip() {
    let data = load_sample();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vrgda_curve_summary.txt");

    std::fs::write(&path, ascii::summary_file(&data)).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();

    assert!(text.starts_with("AMINAL VRGDA CURVE SUMMARY"));
    assert!(text.contains("Energy Range: 0.0001 - 200 ETH"));
    assert!(text.contains("- Starving (<0.005 ETH): 10x multiplier"));
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// The energy axis mapping is monotonic over its whole domain.
    #[test]
    fn prop_x_scale_monotonic(a in 0.0001f32..200.0, b in 0.0001f32..200.0) {
        let scale = ChartLayout::default().x_scale().unwrap();
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assume!(hi / lo > 1.001);
        prop_assert!(scale.scale(lo) < scale.scale(hi));
    }

    /// The multiplier axis mapping is strictly decreasing in pixel space.
    #[test]
    fn prop_y_scale_descending(a in 0.0f32..10.0, b in 0.0f32..10.0) {
        let scale = ChartLayout::default().y_scale().unwrap();
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        prop_assume!(hi - lo > 0.001);
        prop_assert!(scale.scale(hi) < scale.scale(lo));
    }

    /// Every sample lands inside the plot area.
    #[test]
    fn prop_samples_map_into_plot(energy in 0.0001f32..200.0, mult in 0.0f32..10.0) {
        let layout = ChartLayout::default();
        let x = layout.x_scale().unwrap().scale(energy);
        let y = layout.y_scale().unwrap().scale(mult);
        prop_assert!(x >= layout.plot_left() as f32 - 0.01);
        prop_assert!(x <= layout.plot_right() as f32 + 0.01);
        prop_assert!(y >= layout.plot_top() as f32 - 0.01);
        prop_assert!(y <= layout.plot_bottom() as f32 + 0.01);
    }

    /// Tick formatting never produces an empty or exponent-form label.
    #[test]
    fn prop_format_tick_plain(v in 0.0001f32..200.0) {
        let s = format_tick(v);
        prop_assert!(!s.is_empty());
        prop_assert!(!s.contains('e') && !s.contains('E'));
    }
}
