//! Terminal chart pipeline.
//!
//! Reads `vrgda_curve_data.csv` from the working directory, prints the
//! block-character chart with its threshold table, and writes the plain-text
//! summary file.

use std::fs;
use std::process::ExitCode;
use vrgda_viz::chart::ascii::{self, AsciiChart};
use vrgda_viz::prelude::*;

const INPUT_PATH: &str = "vrgda_curve_data.csv";
const SUMMARY_PATH: &str = "vrgda_curve_summary.txt";

fn run() -> Result<()> {
    let data = CurveData::from_csv_path(INPUT_PATH)?;

    print!("{}", AsciiChart::new().render(&data));

    fs::write(SUMMARY_PATH, ascii::summary_file(&data))?;
    println!("\nSummary saved to: {SUMMARY_PATH}");
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
