//! Raster chart pipeline.
//!
//! Reads `vrgda_curve_data.csv` from the working directory, renders the
//! chart, writes `output/vrgda_curve_chart.png` (or a PPM when PNG encoding
//! is unavailable), and prints the curve summary.

use std::fs;
use std::path::Path;
use std::process::ExitCode;
use vrgda_viz::output::{self, RasterArtifact};
use vrgda_viz::prelude::*;

const INPUT_PATH: &str = "vrgda_curve_data.csv";
const OUTPUT_DIR: &str = "output";
const CHART_PATH: &str = "output/vrgda_curve_chart.png";

fn run() -> Result<()> {
    let data = CurveData::from_csv_path(INPUT_PATH)?;
    let fb = RasterChart::new().render(&data)?;

    fs::create_dir_all(OUTPUT_DIR)?;
    match output::write_raster(&fb, Path::new(CHART_PATH))? {
        RasterArtifact::Png(path) => println!("PNG chart saved to: {}", path.display()),
        RasterArtifact::Ppm(path) => {
            println!("PPM file saved to: {}", path.display());
            println!("Note: Could not convert to PNG automatically. PPM file is available.");
        }
    }

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
