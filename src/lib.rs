//! # Vrgda-Viz
//!
//! Pure-Rust renderer for a precomputed VRGDA (Variable Rate Gradual Dutch
//! Auction) curve dataset.
//!
//! Reads `eth_amount` / `love_multiplier` samples from a CSV file and renders
//! the same chart through several backends: a raster image (PNG, with a
//! plain-text PPM fallback), resolution-independent SVG, a self-contained
//! HTML report, and a block-character grid for terminals, plus textual
//! summary statistics.
//!
//! ## Features
//!
//! - **Pure Rust**: no image library or font dependency; raster text uses an
//!   embedded 5x7 bitmap font
//! - **One coordinate transform**: every backend maps energy through the same
//!   log10 [`scale::LogScale`] and multipliers through the same
//!   [`scale::LinearScale`]
//! - **Multiple Outputs**: PNG, PPM, SVG, HTML, and terminal rendering
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vrgda_viz::prelude::*;
//!
//! let data = CurveData::from_csv_path("vrgda_curve_data.csv")?;
//! let fb = RasterChart::new().render(&data)?;
//! vrgda_viz::output::write_raster(&fb, Path::new("output/vrgda_curve_chart.png"))?;
//! println!("{}", data.summary());
//! ```
//!
//! ## Feature Flags
//!
//! - `png`: PNG encoding via the `png` crate (default). Without it the
//!   raster pipeline writes a P3 PPM and probes `magick`, `convert`, and
//!   `sips` to convert it.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and CSS conversions.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, rectangles).
pub mod geometry;

/// Scale functions for data-to-visual mappings.
pub mod scale;

// ============================================================================
// Data Modules
// ============================================================================

/// Curve dataset loading and summary statistics.
pub mod dataset;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Chart model and per-backend renderers.
pub mod chart;

/// Rasterization primitives and bitmap text.
pub mod render;

/// Output encoders (PNG, PPM, SVG, HTML).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for vrgda-viz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use vrgda_viz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chart::{
        ascii::AsciiChart, raster::RasterChart, vector::VectorChart, ChartLayout,
    };
    pub use crate::color::Rgba;
    pub use crate::dataset::{CurveData, CurveSummary};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Point, Rect};
    pub use crate::output::{HtmlReport, RasterArtifact, SvgEncoder};
    pub use crate::scale::{LinearScale, LogScale, Scale};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_prelude_renders_end_to_end() {
        let data = CurveData::new(vec![0.001, 1.0, 100.0], vec![10.0, 5.5, 0.1])
            .expect("valid data");
        let fb = RasterChart::new().render(&data).expect("raster");
        assert_eq!((fb.width(), fb.height()), (800, 600));
    }
}
