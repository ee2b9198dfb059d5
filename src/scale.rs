//! Scale functions for data-to-pixel mappings.
//!
//! Every output backend maps energy values through the same [`LogScale`] and
//! multiplier values through the same [`LinearScale`], so the coordinate
//! transform is defined exactly once.

use crate::error::{Error, Result};

/// Trait for scale functions that map domain values to range values.
pub trait Scale<D, R> {
    /// Transform a domain value to a range value.
    fn scale(&self, value: D) -> R;

    /// Get the domain extent.
    fn domain(&self) -> (D, D);

    /// Get the range extent.
    fn range(&self) -> (R, R);
}

/// Linear scale for continuous-to-continuous mapping.
///
/// The range may be descending, which is how multiplier values map to rows
/// (higher multipliers land nearer the top of the chart).
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if domain min equals domain max.
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Result<Self> {
        if (domain.0 - domain.1).abs() < f32::EPSILON {
            return Err(Error::ScaleDomain("Domain min and max cannot be equal".to_string()));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }
}

impl Scale<f32, f32> for LinearScale {
    fn scale(&self, value: f32) -> f32 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

/// Base-10 logarithmic scale for continuous-to-continuous mapping.
#[derive(Debug, Clone, Copy)]
pub struct LogScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LogScale {
    /// Create a new logarithmic scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain contains non-positive values.
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Result<Self> {
        if domain.0 <= 0.0 || domain.1 <= 0.0 {
            return Err(Error::ScaleDomain("Log scale domain must be positive".to_string()));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }
}

impl Scale<f32, f32> for LogScale {
    fn scale(&self, value: f32) -> f32 {
        let log_min = self.domain_min.log10();
        let log_max = self.domain_max.log10();
        // Inputs are clamped away from zero; the domain itself is validated
        // at construction.
        let log_val = value.max(f32::MIN_POSITIVE).log10();

        let t = (log_val - log_min) / (log_max - log_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0)).expect("valid scale");
        assert!((scale.scale(0.0) - 0.0).abs() < 0.001);
        assert!((scale.scale(50.0) - 0.5).abs() < 0.001);
        assert!((scale.scale(100.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_linear_scale_descending_range() {
        // Multiplier-to-row mapping: y_max maps to the top of the chart.
        let scale = LinearScale::new((0.0, 10.0), (540.0, 60.0)).expect("valid scale");
        assert!((scale.scale(10.0) - 60.0).abs() < 0.001);
        assert!((scale.scale(0.0) - 540.0).abs() < 0.001);
        assert!((scale.scale(5.5) - (60.0 + 480.0 * 0.45)).abs() < 0.01);
    }

    #[test]
    fn test_linear_scale_equal_domain_error() {
        assert!(LinearScale::new((5.0, 5.0), (0.0, 1.0)).is_err());
    }

    #[test]
    fn test_log_scale() {
        let scale = LogScale::new((1.0, 1000.0), (0.0, 3.0)).expect("valid scale");
        assert!((scale.scale(1.0) - 0.0).abs() < 0.001);
        assert!((scale.scale(10.0) - 1.0).abs() < 0.001);
        assert!((scale.scale(100.0) - 2.0).abs() < 0.001);
        assert!((scale.scale(1000.0) - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_log_scale_energy_domain() {
        // The chart's x mapping: 0.0001..200 onto margin..margin+chart_width.
        let scale = LogScale::new((0.0001, 200.0), (60.0, 740.0)).expect("valid scale");
        assert!((scale.scale(0.0001) - 60.0).abs() < 0.01);
        assert!((scale.scale(200.0) - 740.0).abs() < 0.01);

        // Monotonic over decades.
        let decades = [0.0001, 0.001, 0.01, 0.1, 1.0, 10.0, 100.0];
        for pair in decades.windows(2) {
            assert!(scale.scale(pair[0]) < scale.scale(pair[1]));
        }
    }

    #[test]
    fn test_log_scale_invalid_domain() {
        assert!(LogScale::new((-1.0, 100.0), (0.0, 1.0)).is_err());
        assert!(LogScale::new((0.0, 100.0), (0.0, 1.0)).is_err());
    }

    #[test]
    fn test_log_scale_deterministic() {
        let scale = LogScale::new((0.0001, 200.0), (60.0, 740.0)).expect("valid scale");
        assert_eq!(scale.scale(0.7).to_bits(), scale.scale(0.7).to_bits());
    }

    #[test]
    fn test_scale_domain_range_accessors() {
        let scale = LogScale::new((1.0, 1000.0), (0.0, 3.0)).expect("valid scale");
        assert_eq!(scale.domain(), (1.0, 1000.0));
        assert_eq!(scale.range(), (0.0, 3.0));
    }
}
