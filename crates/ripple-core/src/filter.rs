//! Streaming IIR/FIR filter.

use std::sync::Arc;

use crate::coefficients::FilterCoefficients;
use crate::engine::FilterEngine;
use crate::error::{FilterError, Result};
use crate::history::FilterHistory;
use crate::registry::EngineRegistry;
use crate::sample::Sample;

/// A rational transfer function filter that can be fed a signal in chunks.
///
/// The filter owns its [`FilterHistory`], so feeding a signal through
/// [`apply_to_stream`](Self::apply_to_stream) in any partition gives the same
/// output as one call with the whole signal.
///
/// Streaming takes `&mut self`: one filter cannot be advanced from two threads
/// at once. For parallel streams, give each thread its own filter via
/// [`clone_fresh`](Self::clone_fresh); clones share only the immutable
/// coefficients.
///
/// # Example
///
/// ```rust
/// use ripple_core::Filter;
///
/// let mut filter = Filter::new(&[0.569, 1.1381, 0.569], &[1.0, 0.9428, 0.3333], true)?;
/// let first = filter.apply_to_stream(&[-1.3499_f32, 3.0349])?;
/// let rest = filter.apply_to_stream(&[0.7254_f32, -0.0631])?;
/// assert_eq!(first.len() + rest.len(), 4);
/// # Ok::<(), ripple_core::FilterError>(())
/// ```
#[derive(Debug)]
pub struct Filter {
    coefficients: Arc<FilterCoefficients>,
    history: FilterHistory,
    is_low_pass: bool,
}

impl Filter {
    /// Builds a filter from numerator `b` and denominator `a`.
    ///
    /// Both are normalized by `a[0]`. `is_low_pass` is caller metadata and
    /// does not affect filtering.
    pub fn new(numerator: &[f64], denominator: &[f64], is_low_pass: bool) -> Result<Self> {
        let coefficients = FilterCoefficients::new(numerator, denominator)?;
        Ok(Self::from_coefficients(coefficients, is_low_pass))
    }

    /// Builds a pure FIR filter; same as `new(numerator, &[1.0], is_low_pass)`.
    pub fn fir(numerator: &[f64], is_low_pass: bool) -> Result<Self> {
        Self::new(numerator, &[1.0], is_low_pass)
    }

    /// Wraps already validated coefficients with zeroed history.
    pub fn from_coefficients(coefficients: FilterCoefficients, is_low_pass: bool) -> Self {
        Self::with_shared(Arc::new(coefficients), is_low_pass)
    }

    fn with_shared(coefficients: Arc<FilterCoefficients>, is_low_pass: bool) -> Self {
        let history = FilterHistory::zeroed(coefficients.input_order(), coefficients.output_order());
        #[cfg(feature = "tracing")]
        tracing::debug!(
            input_order = coefficients.input_order(),
            output_order = coefficients.output_order(),
            "filter built"
        );
        Self {
            coefficients,
            history,
            is_low_pass,
        }
    }

    /// Normalized numerator.
    pub fn numerator(&self) -> &[f64] {
        self.coefficients.numerator()
    }

    /// Normalized denominator; starts with `1.0`.
    pub fn denominator(&self) -> &[f64] {
        self.coefficients.denominator()
    }

    /// The normalized coefficients.
    pub fn coefficients(&self) -> &FilterCoefficients {
        &self.coefficients
    }

    /// Current history. Mutated only by engines during streaming.
    pub fn history(&self) -> &FilterHistory {
        &self.history
    }

    /// Caller-supplied low-pass flag.
    pub fn is_low_pass(&self) -> bool {
        self.is_low_pass
    }

    /// True when the filter has no feedback terms.
    pub fn is_fir(&self) -> bool {
        self.coefficients.is_fir()
    }

    /// Filters the next chunk of the stream with the process-wide engine.
    ///
    /// Chunks may have any length, including zero. Output has the input's
    /// length and element type.
    pub fn apply_to_stream<T: Sample>(&mut self, input: &[T]) -> Result<Vec<T>> {
        EngineRegistry::global().apply(self, input)
    }

    /// Filters the next chunk with a specific engine.
    pub fn apply_with<T: Sample>(
        &mut self,
        engine: &dyn FilterEngine,
        input: &[T],
    ) -> Result<Vec<T>> {
        T::apply(engine, &self.coefficients, &mut self.history, input)
    }

    /// Zeroes the history in place. Coefficients are untouched.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    /// Primes the history as if `value` had been applied forever.
    ///
    /// Past inputs become `value` and past outputs become `value` times the
    /// DC gain `Σb / Σa`: a unity-gain low-pass gets `value`, a high-pass gets
    /// zero. Fails with [`FilterError::NoSteadyState`] when `Σa` is zero,
    /// leaving the history unchanged.
    pub fn reset_steady_state(&mut self, value: f64) -> Result<()> {
        let gain = self.coefficients.dc_gain().ok_or(FilterError::NoSteadyState)?;
        self.history.fill(value, value * gain);
        Ok(())
    }

    /// A new filter with the same coefficients and its own zeroed history.
    pub fn clone_fresh(&self) -> Self {
        Self::with_shared(Arc::clone(&self.coefficients), self.is_low_pass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{DirectFormEngine, ManagedEngine};

    fn iir() -> Filter {
        Filter::new(&[0.569, 1.1381, 0.569], &[1.0, 0.9428, 0.3333], true).unwrap()
    }

    #[test]
    fn normalization_is_visible() {
        let f = Filter::new(&[2.5, 3.0], &[2.0, 3.0], true).unwrap();
        assert_eq!(f.numerator(), &[1.25, 1.5]);
        assert_eq!(f.denominator(), &[1.0, 1.5]);
    }

    #[test]
    fn history_sized_from_coefficients() {
        let f = Filter::new(&[1.0, 2.0, 3.0, 4.0], &[1.0, 0.5], false).unwrap();
        assert_eq!(f.history().past_x().len(), 3);
        assert_eq!(f.history().past_y().len(), 1);
        assert!(f.history().is_clear());
    }

    #[test]
    fn fir_constructor_uses_unit_denominator() {
        let f = Filter::fir(&[0.569, 1.1381, 0.569], true).unwrap();
        assert_eq!(f.denominator(), &[1.0]);
        assert!(f.is_fir());
        assert!(f.is_low_pass());
    }

    #[test]
    fn construction_rejects_bad_coefficients() {
        assert!(Filter::new(&[], &[1.0], true).is_err());
        assert!(Filter::new(&[1.0], &[1.0], true).is_err());
        assert!(Filter::new(&[1.0, 1.0], &[], true).is_err());
        assert!(Filter::fir(&[1.0], false).is_err());
    }

    #[test]
    fn streaming_updates_history() {
        let mut f = iir();
        let engine = ManagedEngine::new();
        f.apply_with(&engine, &[1.0_f64, 2.0, 3.0]).unwrap();
        assert_eq!(f.history().past_x(), &[2.0, 3.0]);
        assert!(!f.history().is_clear());
    }

    #[test]
    fn reset_zeroes_history_and_is_idempotent() {
        let mut f = iir();
        let engine = ManagedEngine::new();
        f.apply_with(&engine, &[1.0_f64, -1.0, 0.5]).unwrap();

        f.reset();
        assert!(f.history().is_clear());
        f.reset();
        assert!(f.history().is_clear());
        assert_eq!(f.history().past_x().len(), 2);
    }

    #[test]
    fn clone_fresh_has_independent_zeroed_history() {
        let mut f = iir();
        let engine = DirectFormEngine::new();
        f.apply_with(&engine, &[1.0_f64, 2.0]).unwrap();

        let mut g = f.clone_fresh();
        assert!(g.history().is_clear());
        assert_eq!(g.numerator(), f.numerator());
        assert_eq!(g.denominator(), f.denominator());
        assert_eq!(g.is_low_pass(), f.is_low_pass());

        let before = f.history().clone();
        g.apply_with(&engine, &[5.0_f64, 6.0, 7.0]).unwrap();
        assert_eq!(f.history(), &before);
    }

    #[test]
    fn steady_state_of_unity_gain_lowpass() {
        // moving average: DC gain 1
        let mut f = Filter::fir(&[0.5, 0.5], true).unwrap();
        f.reset_steady_state(5.0).unwrap();
        assert_eq!(f.history().past_x(), &[5.0]);

        let y = f.apply_with(&ManagedEngine::new(), &[5.0_f64; 4]).unwrap();
        assert_eq!(y, vec![5.0; 4]);
    }

    #[test]
    fn steady_state_of_highpass_has_zero_outputs() {
        // first difference with a pole: DC gain 0
        let mut f = Filter::new(&[1.0, -1.0], &[1.0, -0.9], false).unwrap();
        f.reset_steady_state(5.0).unwrap();
        assert_eq!(f.history().past_x(), &[5.0]);
        assert_eq!(f.history().past_y(), &[0.0]);

        let y = f.apply_with(&ManagedEngine::new(), &[5.0_f64; 3]).unwrap();
        assert_eq!(y, vec![0.0; 3]);
    }

    #[test]
    fn steady_state_undefined_for_integrator() {
        let mut f = Filter::new(&[1.0, 0.0], &[1.0, -1.0], false).unwrap();
        assert_eq!(f.reset_steady_state(1.0), Err(FilterError::NoSteadyState));
        assert!(f.history().is_clear());
    }

    #[test]
    fn empty_chunk_returns_empty_output() {
        let mut f = iir();
        let y: Vec<f32> = f.apply_with(&ManagedEngine::new(), &[]).unwrap();
        assert!(y.is_empty());
        assert!(f.history().is_clear());
    }
}
