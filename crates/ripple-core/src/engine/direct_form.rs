//! Per-sample Direct Form I engine.

use super::FilterEngine;
use crate::coefficients::FilterCoefficients;
use crate::error::Result;
use crate::history::FilterHistory;
use crate::sample::Sample;

/// Direct Form I evaluated one sample at a time against the filter's own
/// history buffers:
///
/// ```text
/// y[n] = b0*x[n] + b1*x[n-1] + ... + bp*x[n-p]
///                - a1*y[n-1] - ... - aq*y[n-q]
/// ```
///
/// After each sample the buffers shift left by one and the newest values are
/// written at the end. No history-extended arrays are built, so the only
/// allocation per call is the output chunk. Accumulation order matches
/// [`ManagedEngine`](super::ManagedEngine), so both engines agree bit for bit.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectFormEngine;

impl DirectFormEngine {
    /// Creates the direct form engine.
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn step(b: &[f64], feedback: &[f64], history: &mut FilterHistory, x: f64) -> f64 {
        let past_x = history.past_x();
        let past_y = history.past_y();
        let p = past_x.len();
        let q = past_y.len();

        let mut forward = 0.0;
        forward += b[0] * x;
        for i in 1..=p {
            forward += b[i] * past_x[p - i];
        }

        let mut backward = 0.0;
        for i in 1..=q {
            backward += feedback[i - 1] * past_y[q - i];
        }

        let y = forward - backward;
        shift_in(history.past_x_mut(), x);
        shift_in(history.past_y_mut(), y);
        y
    }
}

/// Drops the oldest sample and appends `value`.
#[inline]
fn shift_in(buf: &mut [f64], value: f64) {
    if let Some(last) = buf.len().checked_sub(1) {
        buf.copy_within(1.., 0);
        buf[last] = value;
    }
}

impl FilterEngine for DirectFormEngine {
    fn name(&self) -> &'static str {
        "direct-form"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn initialize_verify(&self) -> Result<()> {
        Ok(())
    }

    fn free_resources(&self) {}

    fn apply_f64(
        &self,
        coefficients: &FilterCoefficients,
        history: &mut FilterHistory,
        input: &[f64],
    ) -> Result<Vec<f64>> {
        let b = coefficients.numerator();
        let feedback = &coefficients.denominator()[1..];
        debug_assert_eq!(history.past_x().len(), b.len() - 1);
        debug_assert_eq!(history.past_y().len(), feedback.len());

        Ok(input
            .iter()
            .map(|&x| Self::step(b, feedback, history, x))
            .collect())
    }

    fn apply_f32(
        &self,
        coefficients: &FilterCoefficients,
        history: &mut FilterHistory,
        input: &[f32],
    ) -> Result<Vec<f32>> {
        let b = coefficients.numerator();
        let feedback = &coefficients.denominator()[1..];

        Ok(input
            .iter()
            .map(|&x| f32::from_f64(Self::step(b, feedback, history, x.to_f64())))
            .collect())
    }
}
