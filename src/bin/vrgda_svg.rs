//! Vector chart pipeline.
//!
//! Reads `vrgda_curve_data.csv` from the working directory, renders the
//! chart as SVG, wraps it in a standalone HTML report, and prints the curve
//! summary.

use std::fs;
use std::process::ExitCode;
use vrgda_viz::chart::TITLE;
use vrgda_viz::prelude::*;

const INPUT_PATH: &str = "vrgda_curve_data.csv";
const OUTPUT_DIR: &str = "output";
const SVG_PATH: &str = "output/vrgda_curve_chart.svg";
const HTML_PATH: &str = "output/vrgda_curve_chart.html";

fn run() -> Result<()> {
    let data = CurveData::from_csv_path(INPUT_PATH)?;
    let svg = VectorChart::new().render(&data)?;

    fs::create_dir_all(OUTPUT_DIR)?;
    fs::write(SVG_PATH, &svg)?;
    println!("SVG chart saved to: {SVG_PATH}");

    HtmlReport::new(TITLE, svg).write_to_file(HTML_PATH)?;
    println!("HTML chart saved to: {HTML_PATH}");
    println!("\nYou can open the HTML file in a web browser to view the interactive chart.");

    print!("\n{}", data.summary());
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
