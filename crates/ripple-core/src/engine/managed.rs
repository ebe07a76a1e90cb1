//! Reference engine: the difference equation over history-extended arrays.

use super::{FilterEngine, reverse_dot};
use crate::coefficients::FilterCoefficients;
use crate::error::Result;
use crate::history::FilterHistory;

/// Reference implementation of
///
/// ```text
/// y[n] = Σ_{i=0..p} b[i]·x[n-i] − Σ_{i=1..q} a[i]·y[n-i]
/// ```
///
/// Each call lays out `warmup = max(p, q)` virtual samples in front of the
/// chunk:
///
/// ```text
/// x: [0 .. (warmup - p)] [past_x (p)] [chunk .........]
/// y: [0 .. (warmup - q)] [past_y (q)] [filled by recursion]
///                                     ^ index `warmup`
/// ```
///
/// The recursion starts at `warmup`, so the alignment zeros are never read as
/// signal. Always available; owns no resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManagedEngine;

impl ManagedEngine {
    /// Creates the reference engine.
    pub fn new() -> Self {
        Self
    }
}

impl FilterEngine for ManagedEngine {
    fn name(&self) -> &'static str {
        "managed"
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
        let p = history.past_x().len();
        let q = history.past_y().len();
        debug_assert_eq!(p, b.len() - 1);
        debug_assert_eq!(q, feedback.len());

        let warmup = p.max(q);
        let total = warmup + input.len();

        let mut xs = Vec::with_capacity(total);
        xs.resize(warmup - p, 0.0);
        xs.extend_from_slice(history.past_x());
        xs.extend_from_slice(input);

        let mut ys = Vec::with_capacity(total);
        ys.resize(warmup - q, 0.0);
        ys.extend_from_slice(history.past_y());
        ys.resize(total, 0.0);

        // warmup >= 1 because the numerator has at least two taps
        for n in warmup..total {
            ys[n] = reverse_dot(b, &xs, n) - reverse_dot(feedback, &ys, n - 1);
        }

        history.past_x_mut().copy_from_slice(&xs[total - p..]);
        history.past_y_mut().copy_from_slice(&ys[total - q..]);

        Ok(ys.split_off(warmup))
    }
}
