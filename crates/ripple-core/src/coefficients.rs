//! Normalized rational transfer function coefficients.
//!
//! A filter is described by its numerator `b` and denominator `a`:
//!
//! ```text
//!          b[0] + b[1] z^-1 + ... + b[p] z^-p
//! H(z) = ------------------------------------
//!          a[0] + a[1] z^-1 + ... + a[q] z^-q
//! ```
//!
//! Both arrays are stored divided by the original `a[0]`, so the stored
//! denominator always starts with `1.0`.

use crate::error::{FilterError, Result};

/// Normalized numerator/denominator coefficients. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCoefficients {
    b: Vec<f64>,
    a: Vec<f64>,
}

impl FilterCoefficients {
    /// Validates and normalizes coefficients by `a[0]`.
    ///
    /// Fails with [`FilterError::InvalidCoefficients`] when either array is
    /// empty, the numerator has fewer than two taps, `a[0]` is zero, or
    /// normalization produces a non-finite value.
    pub fn new(numerator: &[f64], denominator: &[f64]) -> Result<Self> {
        if numerator.is_empty() || denominator.is_empty() {
            return Err(FilterError::invalid_coefficients(
                "filter coefficients cannot be empty",
            ));
        }
        if numerator.len() < 2 {
            return Err(FilterError::invalid_coefficients(
                "numerator must have length 2 or higher",
            ));
        }
        let a0 = denominator[0];
        if a0 == 0.0 {
            return Err(FilterError::invalid_coefficients(
                "leading denominator coefficient must not be zero",
            ));
        }

        let b: Vec<f64> = numerator.iter().map(|bi| bi / a0).collect();
        let a: Vec<f64> = denominator.iter().map(|ai| ai / a0).collect();
        if b.iter().chain(a.iter()).any(|c| !c.is_finite()) {
            return Err(FilterError::invalid_coefficients(
                "coefficients are not finite after normalization",
            ));
        }

        Ok(Self { b, a })
    }

    /// Pure FIR coefficients: equivalent to `new(numerator, &[1.0])`.
    pub fn fir(numerator: &[f64]) -> Result<Self> {
        Self::new(numerator, &[1.0])
    }

    /// Normalized numerator `b`.
    #[inline]
    pub fn numerator(&self) -> &[f64] {
        &self.b
    }

    /// Normalized denominator `a`; `a[0] == 1.0`.
    #[inline]
    pub fn denominator(&self) -> &[f64] {
        &self.a
    }

    /// Number of past input samples the filter remembers (`len(b) - 1`).
    #[inline]
    pub fn input_order(&self) -> usize {
        self.b.len() - 1
    }

    /// Number of past output samples the filter remembers (`len(a) - 1`).
    #[inline]
    pub fn output_order(&self) -> usize {
        self.a.len() - 1
    }

    /// True when the output depends only on inputs (denominator is `[1]`).
    pub fn is_fir(&self) -> bool {
        self.a[1..].iter().all(|&ai| ai == 0.0)
    }

    /// Gain at DC, `Σb / Σa`, or `None` when `Σa` is zero.
    pub fn dc_gain(&self) -> Option<f64> {
        let den: f64 = self.a.iter().sum();
        if den == 0.0 {
            return None;
        }
        let gain = self.b.iter().sum::<f64>() / den;
        gain.is_finite().then_some(gain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_by_leading_denominator() {
        let c = FilterCoefficients::new(&[2.5, 3.0], &[2.0, 3.0]).unwrap();
        assert_eq!(c.numerator(), &[1.25, 1.5]);
        assert_eq!(c.denominator(), &[1.0, 1.5]);
    }

    #[test]
    fn orders_follow_lengths() {
        let c = FilterCoefficients::new(&[1.0, 2.0, 3.0], &[1.0, 0.5]).unwrap();
        assert_eq!(c.input_order(), 2);
        assert_eq!(c.output_order(), 1);
    }

    #[test]
    fn rejects_empty_numerator() {
        let err = FilterCoefficients::new(&[], &[1.0]).unwrap_err();
        assert!(matches!(err, FilterError::InvalidCoefficients(_)));
    }

    #[test]
    fn rejects_single_tap_numerator() {
        let err = FilterCoefficients::new(&[1.0], &[1.0]).unwrap_err();
        assert!(matches!(err, FilterError::InvalidCoefficients(_)));
    }

    #[test]
    fn rejects_empty_denominator() {
        let err = FilterCoefficients::new(&[1.0, 1.0], &[]).unwrap_err();
        assert!(matches!(err, FilterError::InvalidCoefficients(_)));
    }

    #[test]
    fn rejects_zero_leading_denominator() {
        let err = FilterCoefficients::new(&[1.0, 1.0], &[0.0, 1.0]).unwrap_err();
        assert!(matches!(err, FilterError::InvalidCoefficients(_)));
    }

    #[test]
    fn rejects_non_finite_coefficients() {
        let err = FilterCoefficients::new(&[f64::NAN, 1.0], &[1.0]).unwrap_err();
        assert!(matches!(err, FilterError::InvalidCoefficients(_)));
    }

    #[test]
    fn fir_has_unit_denominator() {
        let c = FilterCoefficients::fir(&[0.5, 0.5]).unwrap();
        assert_eq!(c.denominator(), &[1.0]);
        assert!(c.is_fir());
        assert_eq!(c.output_order(), 0);
    }

    #[test]
    fn zero_padded_denominator_is_still_fir() {
        let c = FilterCoefficients::new(&[0.5, 0.5], &[1.0, 0.0, 0.0]).unwrap();
        assert!(c.is_fir());
        assert_eq!(c.output_order(), 2);
    }

    #[test]
    fn dc_gain_of_moving_average_is_one() {
        let c = FilterCoefficients::fir(&[0.25, 0.25, 0.25, 0.25]).unwrap();
        assert_eq!(c.dc_gain(), Some(1.0));
    }

    #[test]
    fn dc_gain_undefined_for_pole_at_dc() {
        // y[n] = x[n] + y[n-1]: integrator
        let c = FilterCoefficients::new(&[1.0, 0.0], &[1.0, -1.0]).unwrap();
        assert_eq!(c.dc_gain(), None);
    }
}
