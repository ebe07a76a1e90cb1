//! Error types for filter construction and engine selection.

use thiserror::Error;

/// Errors raised while building filters or selecting a computation engine.
///
/// An unavailable backend is not an error here: availability probes report
/// it as `false` (see [`FilterEngine::is_available`](crate::FilterEngine::is_available)
/// and [`EngineRegistry::try_use`](crate::EngineRegistry::try_use)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    /// Coefficients rejected at construction time.
    #[error("invalid filter coefficients: {0}")]
    InvalidCoefficients(String),

    /// An explicitly requested engine failed its availability or verification check.
    #[error("filter engine '{engine}' is not supported: {reason}")]
    EngineUnsupported {
        /// Name of the rejected engine.
        engine: String,
        /// Why the engine was rejected.
        reason: String,
    },

    /// An engine family name that matches no known engine.
    #[error("unknown filter engine: {0}")]
    UnknownEngine(String),

    /// The filter has no finite DC response, so no steady state exists.
    #[error("filter has no steady state: denominator coefficients sum to zero")]
    NoSteadyState,
}

impl FilterError {
    /// Create an invalid coefficients error.
    pub fn invalid_coefficients(reason: impl Into<String>) -> Self {
        FilterError::InvalidCoefficients(reason.into())
    }

    /// Create an engine unsupported error.
    pub fn engine_unsupported(engine: impl Into<String>, reason: impl Into<String>) -> Self {
        FilterError::EngineUnsupported {
            engine: engine.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience result type for filter operations.
pub type Result<T> = core::result::Result<T, FilterError>;
