//! Self-contained HTML report wrapping the vector chart.
//!
//! The report embeds the SVG markup inline so the file opens in any browser
//! with no external assets, and appends a static table explaining the
//! incentive each curve zone creates.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// One explanatory row of the incentive table.
struct IncentiveRow {
    energy_range: &'static str,
    multiplier_range: &'static str,
    zone: &'static str,
    incentive: &'static str,
}

/// Fixed commentary rows; these describe the curve shape, not the data file,
/// so they are not derived from the loaded samples.
const INCENTIVE_TABLE: [IncentiveRow; 6] = [
    IncentiveRow {
        energy_range: "&lt;0.005 ETH",
        multiplier_range: "10x",
        zone: "Starving",
        incentive: "Maximum reward for rescuing neglected Aminals",
    },
    IncentiveRow {
        energy_range: "0.005-0.1 ETH",
        multiplier_range: "9.5x-7.4x",
        zone: "Hungry",
        incentive: "Strong incentive to feed low-energy Aminals",
    },
    IncentiveRow {
        energy_range: "0.1-1 ETH",
        multiplier_range: "7.4x-5.5x",
        zone: "Fed",
        incentive: "Good returns encourage regular interaction",
    },
    IncentiveRow {
        energy_range: "1-10 ETH",
        multiplier_range: "5.5x-3.5x",
        zone: "Well-Fed",
        incentive: "Natural equilibrium zone",
    },
    IncentiveRow {
        energy_range: "10-100 ETH",
        multiplier_range: "3.5x-0.1x",
        zone: "Overfed",
        incentive: "Diminishing returns discourage overfeeding",
    },
    IncentiveRow {
        energy_range: "&gt;100 ETH",
        multiplier_range: "0.1x",
        zone: "Extreme",
        incentive: "Severe penalty prevents wasteful feeding",
    },
];

const STYLE: &str = "\
        body {
            font-family: Arial, sans-serif;
            max-width: 1000px;
            margin: 0 auto;
            padding: 20px;
        }
        .chart-container {
            background: white;
            border: 1px solid #ddd;
            padding: 20px;
            margin: 20px 0;
        }
        .summary {
            background: #f5f5f5;
            padding: 20px;
            border-radius: 8px;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            margin: 20px 0;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 8px;
            text-align: left;
        }
        th {
            background: #f0f0f0;
        }";

/// HTML report builder around rendered SVG markup.
pub struct HtmlReport {
    title: String,
    svg: String,
}

impl HtmlReport {
    /// Create a report wrapping already-rendered SVG markup.
    #[must_use]
    pub fn new(title: impl Into<String>, svg: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            svg: svg.into(),
        }
    }

    /// Render the full HTML document.
    #[must_use]
    pub fn render(&self) -> String {
        let mut table = String::from(
            "        <table>\n            <tr>\n                <th>Energy Level</th>\n                <th>Love Multiplier</th>\n                <th>Zone</th>\n                <th>Incentive</th>\n            </tr>\n",
        );
        for row in &INCENTIVE_TABLE {
            table.push_str("            <tr>\n");
            table.push_str(&format!("                <td>{}</td>\n", row.energy_range));
            table.push_str(&format!(
                "                <td>{}</td>\n",
                row.multiplier_range
            ));
            table.push_str(&format!("                <td>{}</td>\n", row.zone));
            table.push_str(&format!("                <td>{}</td>\n", row.incentive));
            table.push_str("            </tr>\n");
        }
        table.push_str("        </table>");

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>{title}</title>
    <style>
{STYLE}
    </style>
</head>
<body>
    <h1>{title}</h1>

    <div class="chart-container">
        {svg}
    </div>

    <div class="summary">
        <h2>Summary</h2>
        <p>The VRGDA (Variable Rate Gradual Dutch Auction) creates a smooth curve that incentivizes feeding hungry Aminals while discouraging overfeeding.</p>

{table}
    </div>
</body>
</html>"#,
            title = self.title,
            svg = self.svg,
        )
    }

    /// Write the report to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }
}
