//! Plain-text PPM (P3) output and external conversion fallback.
//!
//! Used by the raster pipeline when the crate is built without the `png`
//! feature: the framebuffer is serialized as an uncompressed P3 bitmap, then
//! a best-effort probe for a known image converter turns it into a PNG. When
//! no converter is found the PPM stays in place; nothing here is fatal.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use std::env;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Plain-text PPM (P3) encoder for framebuffer output.
pub struct PpmEncoder;

impl PpmEncoder {
    /// Serialize a framebuffer as a P3 bitmap string.
    #[must_use]
    pub fn to_string(fb: &Framebuffer) -> String {
        let mut out = String::with_capacity(fb.pixels().len() * 3);
        let _ = writeln!(out, "P3\n{} {}\n255", fb.width(), fb.height());

        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if let Some(p) = fb.get_pixel(x, y) {
                    let _ = write!(out, "{} {} {} ", p.r, p.g, p.b);
                }
            }
            out.push('\n');
        }
        out
    }

    /// Write a framebuffer to a P3 file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let mut file = fs::File::create(path)?;
        file.write_all(Self::to_string(fb).as_bytes())?;
        Ok(())
    }
}

/// Known external image converters, in probe priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PpmConverter {
    /// ImageMagick 7 (`magick in out`).
    Magick,
    /// ImageMagick 6 (`convert in out`).
    Convert,
    /// macOS `sips`.
    Sips,
}

impl PpmConverter {
    const PROBE_ORDER: [Self; 3] = [Self::Magick, Self::Convert, Self::Sips];

    /// Executable name probed for on `PATH`.
    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::Magick => "magick",
            Self::Convert => "convert",
            Self::Sips => "sips",
        }
    }

    /// First converter whose executable exists on `PATH`, if any.
    #[must_use]
    pub fn detect() -> Option<Self> {
        Self::PROBE_ORDER.into_iter().find(|c| find_on_path(c.program()))
    }

    fn command(self, ppm: &Path, png: &Path) -> Command {
        let mut cmd = Command::new(self.program());
        match self {
            Self::Magick | Self::Convert => {
                cmd.arg(ppm).arg(png);
            }
            Self::Sips => {
                cmd.args(["-s", "format", "png"]).arg(ppm).arg("--out").arg(png);
            }
        }
        cmd.stdout(Stdio::null()).stderr(Stdio::null());
        cmd
    }
}

/// Look for an executable by name in every `PATH` directory.
fn find_on_path(program: &str) -> bool {
    let Some(paths) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&paths).any(|dir| dir.join(program).is_file())
}

/// Best-effort conversion of a PPM file to PNG via an external tool.
///
/// Returns the converter used on success (the PPM is removed), or `None`
/// when no converter is available or the invocation failed (the PPM is left
/// in place). Advisory only; never an error.
#[must_use]
pub fn convert_to_png(ppm: &Path, png: &Path) -> Option<PpmConverter> {
    let converter = PpmConverter::detect()?;

    let converted = converter
        .command(ppm, png)
        .status()
        .map(|status| status.success())
        .unwrap_or(false);

    if converted {
        // Removal failure leaves a stray intermediate file, nothing more.
        let _ = fs::remove_file(ppm);
        Some(converter)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_ppm_header() {
        let mut fb = Framebuffer::new(3, 2).expect("valid dimensions");
        fb.clear(Rgba::WHITE);

        let text = PpmEncoder::to_string(&fb);
        assert!(text.starts_with("P3\n3 2\n255\n"));
        // 6 white pixels, one row per line.
        assert_eq!(text.lines().count(), 3 + 2);
        assert!(text.contains("255 255 255 "));
    }

    #[test]
    fn test_ppm_pixel_values() {
        let mut fb = Framebuffer::new(2, 1).expect("valid dimensions");
        fb.set_pixel(0, 0, Rgba::rgb(1, 2, 3));
        fb.set_pixel(1, 0, Rgba::rgb(4, 5, 6));

        let text = PpmEncoder::to_string(&fb);
        assert!(text.ends_with("1 2 3 4 5 6 \n"));
    }

    #[test]
    fn test_ppm_write_to_file() {
        let mut fb = Framebuffer::new(4, 4).expect("valid dimensions");
        fb.clear(Rgba::CURVE);

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("chart.ppm");
        PpmEncoder::write_to_file(&fb, &path).expect("write");

        let written = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(written, PpmEncoder::to_string(&fb));
    }

    #[test]
    fn test_find_on_path_missing_program() {
        assert!(!find_on_path("definitely-not-a-real-converter-binary"));
    }

    #[test]
    fn test_converter_programs() {
        assert_eq!(PpmConverter::Magick.program(), "magick");
        assert_eq!(PpmConverter::Convert.program(), "convert");
        assert_eq!(PpmConverter::Sips.program(), "sips");
    }
}
