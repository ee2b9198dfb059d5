//! Curve dataset loading and summary statistics.
//!
//! The curve itself is precomputed elsewhere; this module only reads the
//! `eth_amount` / `love_multiplier` columns in file order and derives the
//! simple aggregates the reports print (min/max and first threshold
//! crossings).

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Multiplier thresholds reported by every pipeline.
pub const REPORT_THRESHOLDS: [f32; 2] = [5.0, 1.0];

/// One row of the input file.
#[derive(Debug, Deserialize)]
struct CurveRecord {
    eth_amount: f32,
    love_multiplier: f32,
}

/// An ordered sequence of (energy, multiplier) samples.
///
/// Row order is significant: it defines the polyline every backend draws.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveData {
    energy: Vec<f32>,
    multiplier: Vec<f32>,
}

impl CurveData {
    /// Build a dataset from parallel columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the columns differ in length or are empty.
    pub fn new(energy: Vec<f32>, multiplier: Vec<f32>) -> Result<Self> {
        if energy.len() != multiplier.len() {
            return Err(Error::DataLengthMismatch {
                x_len: energy.len(),
                y_len: multiplier.len(),
            });
        }
        if energy.is_empty() {
            return Err(Error::EmptyData);
        }
        Ok(Self { energy, multiplier })
    }

    /// Load a dataset from a delimited text file with an
    /// `eth_amount,love_multiplier` header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable, a field fails
    /// to parse as a number, or the file holds no data rows.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;

        let mut energy = Vec::new();
        let mut multiplier = Vec::new();
        for record in reader.deserialize() {
            let record: CurveRecord = record?;
            energy.push(record.eth_amount);
            multiplier.push(record.love_multiplier);
        }

        Self::new(energy, multiplier)
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.energy.len()
    }

    /// Whether the dataset is empty. Construction rejects empty datasets,
    /// so this is always false for a loaded dataset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }

    /// Energy values in file order.
    #[must_use]
    pub fn energy(&self) -> &[f32] {
        &self.energy
    }

    /// Multiplier values in file order.
    #[must_use]
    pub fn multiplier(&self) -> &[f32] {
        &self.multiplier
    }

    /// Index of the sample whose energy is closest to `target`.
    ///
    /// Ties keep the first-encountered minimum, so resolution is
    /// deterministic for a given file.
    #[must_use]
    pub fn nearest_index(&self, target: f32) -> usize {
        let mut best = 0;
        let mut best_diff = f32::INFINITY;
        for (i, &e) in self.energy.iter().enumerate() {
            let diff = (e - target).abs();
            if diff < best_diff {
                best_diff = diff;
                best = i;
            }
        }
        best
    }

    /// Index of the sample closest to `target` in log space.
    ///
    /// Used by the character-grid backend, where columns are spaced by
    /// decades. Same first-wins tie-break as [`Self::nearest_index`].
    #[must_use]
    pub fn nearest_index_log(&self, target: f32) -> usize {
        let target_ln = target.max(f32::MIN_POSITIVE).ln();
        let mut best = 0;
        let mut best_diff = f32::INFINITY;
        for (i, &e) in self.energy.iter().enumerate() {
            let diff = (e.max(f32::MIN_POSITIVE).ln() - target_ln).abs();
            if diff < best_diff {
                best_diff = diff;
                best = i;
            }
        }
        best
    }

    /// First sample whose multiplier is strictly below `threshold`, scanning
    /// in file order.
    #[must_use]
    pub fn first_below(&self, threshold: f32) -> Option<(usize, f32)> {
        self.multiplier
            .iter()
            .position(|&m| m < threshold)
            .map(|i| (i, self.energy[i]))
    }

    /// Compute the summary statistics printed after every run.
    #[must_use]
    pub fn summary(&self) -> CurveSummary {
        let fold_min = |acc: f32, &v: &f32| acc.min(v);
        let fold_max = |acc: f32, &v: &f32| acc.max(v);

        CurveSummary {
            min_energy: self.energy.iter().fold(f32::INFINITY, fold_min),
            max_energy: self.energy.iter().fold(f32::NEG_INFINITY, fold_max),
            min_multiplier: self.multiplier.iter().fold(f32::INFINITY, fold_min),
            max_multiplier: self.multiplier.iter().fold(f32::NEG_INFINITY, fold_max),
            below_5: self.first_below(REPORT_THRESHOLDS[0]).map(|(_, e)| e),
            below_1: self.first_below(REPORT_THRESHOLDS[1]).map(|(_, e)| e),
        }
    }
}

/// Aggregate statistics over a loaded dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSummary {
    /// Smallest energy value.
    pub min_energy: f32,
    /// Largest energy value.
    pub max_energy: f32,
    /// Smallest multiplier value.
    pub min_multiplier: f32,
    /// Largest multiplier value.
    pub max_multiplier: f32,
    /// Energy at the first sample with multiplier below 5, if any.
    pub below_5: Option<f32>,
    /// Energy at the first sample with multiplier below 1, if any.
    pub below_1: Option<f32>,
}

impl fmt::Display for CurveSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "VRGDA Curve Summary:")?;
        writeln!(f, "Minimum ETH: {:.4}", self.min_energy)?;
        writeln!(f, "Maximum ETH: {:.0}", self.max_energy)?;
        writeln!(f, "Maximum multiplier: {:.1}x", self.max_multiplier)?;
        writeln!(f, "Minimum multiplier: {:.1}x", self.min_multiplier)?;
        if let Some(e) = self.below_5 {
            writeln!(f, "Multiplier drops below 5x at: {e:.1} ETH")?;
        }
        if let Some(e) = self.below_1 {
            writeln!(f, "Multiplier drops below 1x at: {e:.1} ETH")?;
        }
        Ok(())
    }
}
