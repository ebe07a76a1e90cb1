//! Ripple Core - streaming digital filter application
//!
//! This crate applies rational transfer function (IIR/FIR) filters to signals
//! delivered in chunks of any size, producing exactly the output a single call
//! over the whole signal would.
//!
//! # Core Abstractions
//!
//! ## Filters
//!
//! - [`FilterCoefficients`] - Numerator/denominator normalized by `a[0]`
//! - [`FilterHistory`] - Past inputs and outputs carried between chunks
//! - [`Filter`] - Coefficients plus history; stream, reset, clone
//!
//! ## Engines
//!
//! - [`FilterEngine`] - Object-safe trait every computation backend implements
//! - [`ManagedEngine`] - Reference algorithm, always available
//! - [`DirectFormEngine`] - In-place per-sample Direct Form I
//! - [`EngineRegistry`] - Lazily resolved active engine, with explicit override
//!   and the [`ENGINE_ENV_VAR`] environment variable
//!
//! # Example
//!
//! ```rust
//! use ripple_core::{EngineKind, EngineRegistry, EngineSelection, Filter};
//!
//! let registry = EngineRegistry::with_selection(EngineSelection::Kind(EngineKind::Managed));
//! let mut filter = Filter::new(&[0.569, 1.1381, 0.569], &[1.0, 0.9428, 0.3333], true)?;
//!
//! // Feed the signal in whatever chunks it arrives in
//! let mut output = registry.apply(&mut filter, &[-1.3499_f64, 3.0349])?;
//! output.extend(registry.apply(&mut filter, &[0.7254_f64])?);
//!
//! // Start over without touching the coefficients
//! filter.reset();
//! # Ok::<(), ripple_core::FilterError>(())
//! ```
//!
//! # Features
//!
//! - `tracing` - emit `tracing` events for engine resolution and filter construction

pub mod coefficients;
pub mod engine;
pub mod error;
pub mod filter;
pub mod history;
pub mod registry;
pub mod sample;

// Re-export main types at crate root
pub use coefficients::FilterCoefficients;
pub use engine::{DirectFormEngine, EngineKind, FilterEngine, ManagedEngine};
pub use error::{FilterError, Result};
pub use filter::Filter;
pub use history::FilterHistory;
pub use registry::{ENGINE_ENV_VAR, EngineFactory, EngineRegistry, EngineSelection, select_engine};
pub use sample::Sample;
