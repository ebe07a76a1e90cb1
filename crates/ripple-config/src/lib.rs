//! Filter bank configuration for ripple streaming filters.
//!
//! A filter bank is a TOML file naming a set of filters by their coefficients,
//! plus an optional engine family for the registry that runs them.
//!
//! # Features
//!
//! - **Filter banks**: Load and save named coefficient sets from TOML files
//! - **Validation**: Unique names, buildable coefficients, known engine names
//! - **Engine choice**: Build an [`EngineRegistry`] from the configured family
//!
//! # Example
//!
//! ```rust,no_run
//! use ripple_config::{FilterBank, FilterDefinition};
//!
//! let bank = FilterBank::load("filters.toml").unwrap();
//! bank.validate().unwrap();
//!
//! let registry = bank.registry().unwrap();
//! let mut smooth = bank.build("smooth").unwrap();
//! let output = registry.apply(&mut smooth, &[0.1_f32, 0.2, 0.3]).unwrap();
//!
//! // Create a bank programmatically
//! let bank = FilterBank::new("Edges")
//!     .with_engine("direct-form")
//!     .with_filter(FilterDefinition::new("laplacian", vec![-1.0, 2.0, -1.0]));
//! bank.save("edges.toml").unwrap();
//! ```

mod bank;
mod definition;
mod error;

pub use bank::FilterBank;
pub use definition::FilterDefinition;
pub use error::ConfigError;

/// Re-export commonly used types from ripple-core
pub use ripple_core::{EngineKind, EngineRegistry, EngineSelection, Filter, FilterError};
