//! Sample element types accepted by the streaming API.
//!
//! Engines always compute in `f64`. `f32` chunks are widened on the way in and
//! narrowed (IEEE round-to-nearest) on the way out.

use crate::coefficients::FilterCoefficients;
use crate::engine::FilterEngine;
use crate::error::Result;
use crate::history::FilterHistory;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A sample type a [`Filter`](crate::Filter) can stream: `f32` or `f64`.
///
/// Output chunks have the same element type as the input chunk. This trait is
/// sealed.
pub trait Sample: Copy + PartialEq + core::fmt::Debug + Send + Sync + sealed::Sealed + 'static {
    /// Widens to the computation type.
    fn to_f64(self) -> f64;

    /// Narrows from the computation type.
    fn from_f64(value: f64) -> Self;

    /// Dispatches to the engine entry point for this width.
    fn apply(
        engine: &dyn FilterEngine,
        coefficients: &FilterCoefficients,
        history: &mut FilterHistory,
        input: &[Self],
    ) -> Result<Vec<Self>>;
}

impl Sample for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    fn apply(
        engine: &dyn FilterEngine,
        coefficients: &FilterCoefficients,
        history: &mut FilterHistory,
        input: &[Self],
    ) -> Result<Vec<Self>> {
        engine.apply_f64(coefficients, history, input)
    }
}

impl Sample for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn apply(
        engine: &dyn FilterEngine,
        coefficients: &FilterCoefficients,
        history: &mut FilterHistory,
        input: &[Self],
    ) -> Result<Vec<Self>> {
        engine.apply_f32(coefficients, history, input)
    }
}
