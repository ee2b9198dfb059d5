//! Output encoders for rendered charts.
//!
//! # Formats
//!
//! - **PNG**: raster output via the `png` crate (enabled by the `png`
//!   feature, on by default)
//! - **PPM**: plain-text raster fallback, with best-effort external
//!   conversion to PNG
//! - **SVG**: resolution-independent vector markup
//! - **HTML**: standalone report embedding the SVG

mod html;
#[cfg(feature = "png")]
mod png_encoder;
mod ppm;
mod svg;

pub use html::HtmlReport;
#[cfg(feature = "png")]
pub use png_encoder::PngEncoder;
pub use ppm::{convert_to_png, PpmConverter, PpmEncoder};
pub use svg::{SvgEncoder, TextAnchor};

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use std::path::{Path, PathBuf};

/// What the raster pipeline actually produced on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterArtifact {
    /// A PNG was written at this path.
    Png(PathBuf),
    /// Only a PPM could be written; no converter was available.
    Ppm(PathBuf),
}

impl RasterArtifact {
    /// Path of the file that ended up on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Png(p) | Self::Ppm(p) => p,
        }
    }
}

/// Write a framebuffer as a raster image at `png_path`.
///
/// With the `png` feature the file is encoded directly. Without it, a PPM
/// sibling is written and an external converter is probed to produce the
/// PNG; if none succeeds the PPM is kept as the artifact.
///
/// # Errors
///
/// Returns an error if the image file cannot be written.
#[cfg(feature = "png")]
pub fn write_raster(fb: &Framebuffer, png_path: &Path) -> Result<RasterArtifact> {
    PngEncoder::write_to_file(fb, png_path)?;
    Ok(RasterArtifact::Png(png_path.to_path_buf()))
}

/// Write a framebuffer as a raster image at `png_path`.
///
/// With the `png` feature the file is encoded directly. Without it, a PPM
/// sibling is written and an external converter is probed to produce the
/// PNG; if none succeeds the PPM is kept as the artifact.
///
/// # Errors
///
/// Returns an error if the image file cannot be written.
#[cfg(not(feature = "png"))]
pub fn write_raster(fb: &Framebuffer, png_path: &Path) -> Result<RasterArtifact> {
    let ppm_path = png_path.with_extension("ppm");
    PpmEncoder::write_to_file(fb, &ppm_path)?;

    if convert_to_png(&ppm_path, png_path).is_some() {
        Ok(RasterArtifact::Png(png_path.to_path_buf()))
    } else {
        Ok(RasterArtifact::Ppm(ppm_path))
    }
}
