//! Character-grid chart backend.
//!
//! Renders the curve as a 70x20 block-character grid for terminal output,
//! followed by summary statistics and a threshold/zone table. Also produces
//! the plain-text summary file.

use crate::dataset::CurveData;
use std::fmt::Write;

/// Grid height: multiplier 10 down to 0.5 in half steps.
const ROWS: usize = 20;
/// Grid width in character columns.
const COLS: usize = 70;

/// Total energy span of the grid: column c maps to
/// `0.0001 * 2_000_000^(c / 70)`, covering 0.0001 through 200 ETH.
const COLUMN_SPAN: f32 = 2_000_000.0;

/// Threshold table rows: target energy and the zone it falls in.
const THRESHOLD_ZONES: [(f32, &str); 7] = [
    (0.001, "Starving"),
    (0.01, "Hungry"),
    (0.1, "Hungry"),
    (1.0, "Fed"),
    (10.0, "Well-Fed"),
    (50.0, "Overfed"),
    (100.0, "Extremely Overfed"),
];

/// Terminal renderer for the curve chart.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiChart;

impl AsciiChart {
    /// Create a renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Render the full console report: banner, grid, axis legend, summary
    /// statistics, and the threshold table.
    #[must_use]
    pub fn render(&self, data: &CurveData) -> String {
        let mut out = String::new();
        let rule = "=".repeat(80);

        let _ = writeln!(out, "\n{rule}");
        let _ = writeln!(out, "{}AMINAL VRGDA LOVE CURVE", " ".repeat(25));
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "\nLove Multiplier vs Energy Level (ETH)");
        let _ = writeln!(out, "\n10x |{}", "*".repeat(COLS));

        out.push_str(&self.grid(data));

        let _ = writeln!(out, " 0x |{}", "\u{2500}".repeat(COLS));
        let _ = writeln!(
            out,
            "     0.0001 ETH{gap}1 ETH{gap}100 ETH \u{2192}",
            gap = " ".repeat(20)
        );

        let summary = data.summary();
        let _ = writeln!(out, "\n{rule}");
        let _ = writeln!(out, "SUMMARY STATISTICS:");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(
            out,
            "Energy Range: {:.4} - {:.0} ETH",
            summary.min_energy, summary.max_energy
        );
        let _ = writeln!(
            out,
            "Multiplier Range: {:.1}x - {:.1}x",
            summary.min_multiplier, summary.max_multiplier
        );

        out.push_str(&self.threshold_table(data));
        out
    }

    /// The bare character grid, one line per multiplier row.
    #[must_use]
    pub fn grid(&self, data: &CurveData) -> String {
        let mut out = String::new();

        for row in 0..ROWS {
            let row_multiplier = 10.0 - row as f32 * 0.5;
            let label = if row_multiplier.fract() == 0.0 {
                format!("{}x", row_multiplier as i32)
            } else {
                format!("{row_multiplier:.1}x")
            };
            let _ = write!(out, "{label:>4} |");

            for col in 0..COLS {
                let energy = 0.0001 * COLUMN_SPAN.powf(col as f32 / COLS as f32);
                let idx = data.nearest_index_log(energy);
                let diff = (data.multiplier()[idx] - row_multiplier).abs();

                out.push(if diff < 0.25 {
                    '\u{2588}'
                } else if diff < 0.5 {
                    '\u{2584}'
                } else {
                    ' '
                });
            }
            out.push('\n');
        }
        out
    }

    /// The KEY THRESHOLDS table.
    ///
    /// Each target resolves to the first sample within an absolute tolerance
    /// of 0.01 ETH, or within 10% for targets of 1 ETH and above; an
    /// unmatched target reports 0.0x.
    #[must_use]
    pub fn threshold_table(&self, data: &CurveData) -> String {
        let mut out = String::new();
        let rule = "-".repeat(40);

        let _ = writeln!(out, "\nKEY THRESHOLDS:");
        let _ = writeln!(out, "{rule}");
        let _ = writeln!(out, "Energy Level | Love Multiplier | Zone");
        let _ = writeln!(out, "{rule}");

        for &(target, zone) in &THRESHOLD_ZONES {
            let mut closest_mult = 0.0f32;
            for (i, &e) in data.energy().iter().enumerate() {
                if (e - target).abs() < 0.01 || (target >= 1.0 && (e - target).abs() < target * 0.1)
                {
                    closest_mult = data.multiplier()[i];
                    break;
                }
            }
            let _ = writeln!(out, "{target:>8.3} ETH | {closest_mult:>14.1}x | {zone}");
        }

        let _ = writeln!(out, "{rule}");
        out
    }
}

/// Plain-text summary file contents.
#[must_use]
pub fn summary_file(data: &CurveData) -> String {
    let summary = data.summary();
    let mut out = String::new();

    let _ = writeln!(out, "AMINAL VRGDA CURVE SUMMARY");
    let _ = writeln!(out, "{}\n", "=".repeat(50));
    let _ = writeln!(
        out,
        "Energy Range: {:.4} - {:.0} ETH",
        summary.min_energy, summary.max_energy
    );
    let _ = writeln!(
        out,
        "Multiplier Range: {:.1}x - {:.1}x\n",
        summary.min_multiplier, summary.max_multiplier
    );
    let _ = writeln!(out, "Key Points:");
    let _ = writeln!(out, "- Starving (<0.005 ETH): 10x multiplier");
    let _ = writeln!(out, "- Hungry (0.005-0.1 ETH): 9.5x-7.4x multiplier");
    let _ = writeln!(out, "- Fed (0.1-1 ETH): 7.4x-5.5x multiplier");
    let _ = writeln!(out, "- Well-Fed (1-10 ETH): 5.5x-3.5x multiplier");
    let _ = writeln!(out, "- Overfed (10-100 ETH): 3.5x-0.1x multiplier");
    let _ = writeln!(out, "- Beyond Threshold (>100 ETH): 0.1x multiplier");
    out
}
