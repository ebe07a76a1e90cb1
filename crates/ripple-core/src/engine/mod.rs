//! Pluggable filter computation engines.
//!
//! This module defines the [`FilterEngine`] trait, which decouples [`Filter`](crate::Filter)
//! from the code that evaluates its difference equation. Two engines ship with
//! the crate:
//!
//! - [`ManagedEngine`]: the reference algorithm over history-extended arrays;
//!   always available.
//! - [`DirectFormEngine`]: per-sample Direct Form I that shifts the history
//!   buffers in place; preferred when selecting the best available engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────┐
//! │           Client code            │
//! │   Filter::apply_to_stream(chunk) │
//! └──────────────┬───────────────────┘
//!                │ resolves via EngineRegistry
//!                ▼
//! ┌──────────────────────────────────┐
//! │        FilterEngine trait        │
//! │ apply_f64 / apply_f32 / verify   │
//! └──────────────┬───────────────────┘
//!                │ implemented by
//!        ┌───────┴────────┐
//!        ▼                ▼
//! ┌─────────────┐  ┌──────────────────┐
//! │ManagedEngine│  │ DirectFormEngine │
//! │ (reference) │  │   (preferred)    │
//! └─────────────┘  └──────────────────┘
//! ```
//!
//! Engines receive the coefficients by shared reference and the history by
//! exclusive reference, so a single filter can never be advanced from two
//! threads at once. Engines themselves are shared (`Send + Sync`) and hold no
//! per-filter state.

mod direct_form;
mod managed;

pub use direct_form::DirectFormEngine;
pub use managed::ManagedEngine;

use core::fmt;
use core::str::FromStr;
use std::sync::Arc;

use crate::coefficients::FilterCoefficients;
use crate::error::{FilterError, Result};
use crate::history::FilterHistory;
use crate::sample::Sample;

/// A backend that evaluates a filter over a chunk of samples.
///
/// Implementations must produce an output of the same length as the input and
/// leave `history` holding the most recent `len(b) - 1` inputs and
/// `len(a) - 1` outputs, so the next call continues seamlessly. An engine that
/// cannot handle a filter must return an error rather than partial output.
pub trait FilterEngine: fmt::Debug + Send + Sync {
    /// Short engine name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Non-failing probe: can this backend run in the current environment?
    fn is_available(&self) -> bool;

    /// Stricter check run once when the engine is adopted.
    ///
    /// Fails with [`FilterError::EngineUnsupported`] when the backend is
    /// present but unusable.
    fn initialize_verify(&self) -> Result<()>;

    /// Releases backend-owned buffers or handles. Safe to call repeatedly;
    /// the engine stays usable.
    fn free_resources(&self);

    /// Filters `input` in double precision, updating `history`.
    fn apply_f64(
        &self,
        coefficients: &FilterCoefficients,
        history: &mut FilterHistory,
        input: &[f64],
    ) -> Result<Vec<f64>>;

    /// Filters single precision samples.
    ///
    /// The default widens to `f64`, runs [`apply_f64`](Self::apply_f64) and
    /// narrows the result.
    fn apply_f32(
        &self,
        coefficients: &FilterCoefficients,
        history: &mut FilterHistory,
        input: &[f32],
    ) -> Result<Vec<f32>> {
        let wide: Vec<f64> = input.iter().map(|&x| x.to_f64()).collect();
        let output = self.apply_f64(coefficients, history, &wide)?;
        Ok(output.into_iter().map(f32::from_f64).collect())
    }
}

/// Engine families the registry knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// [`ManagedEngine`], the reference implementation.
    Managed,
    /// [`DirectFormEngine`].
    DirectForm,
}

impl EngineKind {
    /// Families tried by "best available" selection, most preferred first.
    /// The last entry is always available.
    pub const PREFERENCE: [EngineKind; 2] = [EngineKind::DirectForm, EngineKind::Managed];

    /// Canonical lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            EngineKind::Managed => "managed",
            EngineKind::DirectForm => "direct-form",
        }
    }

    /// Builds a fresh engine of this family.
    pub fn create(self) -> Arc<dyn FilterEngine> {
        match self {
            EngineKind::Managed => Arc::new(ManagedEngine::new()),
            EngineKind::DirectForm => Arc::new(DirectFormEngine::new()),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EngineKind {
    type Err = FilterError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "managed" | "reference" => Ok(EngineKind::Managed),
            "direct" | "direct-form" | "direct_form" | "directform" => Ok(EngineKind::DirectForm),
            _ => Err(FilterError::UnknownEngine(s.trim().to_string())),
        }
    }
}

/// `Σ coeffs[i] * signal[n - i]`, accumulated from `i = 0` upward.
///
/// Engines share this accumulation order so their outputs agree bit for bit.
#[inline]
pub(crate) fn reverse_dot(coeffs: &[f64], signal: &[f64], n: usize) -> f64 {
    let mut acc = 0.0;
    for (i, &c) in coeffs.iter().enumerate() {
        acc += c * signal[n - i];
    }
    acc
}
