//! Engine selection.
//!
//! An [`EngineRegistry`] holds one active [`FilterEngine`] slot. The slot is
//! resolved lazily on first use:
//!
//! 1. an engine assigned with [`EngineRegistry::set_engine`] (or `select*`) wins;
//! 2. otherwise the registry's [`EngineSelection`] decides. The process-wide
//!    registry reads the [`ENGINE_ENV_VAR`] environment variable; a named
//!    family that is unknown or unavailable is an error, never a silent fallback;
//! 3. with no preference, the best available engine is adopted, trying
//!    [`EngineKind::PREFERENCE`] in order. The managed engine is always
//!    available, so this step cannot fail.
//!
//! Registries are ordinary values, so tests and applications can build their
//! own and pass them around. The factory that turns an [`EngineKind`] into an
//! engine is injectable as well ([`EngineRegistry::with_factory`]); the
//! default is [`EngineKind::create`]. [`EngineRegistry::global`] is the process-wide
//! instance used by [`Filter::apply_to_stream`](crate::Filter::apply_to_stream).

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::engine::{EngineKind, FilterEngine, ManagedEngine};
use crate::error::{FilterError, Result};
use crate::filter::Filter;
use crate::sample::Sample;

/// Environment variable naming the preferred engine family.
pub const ENGINE_ENV_VAR: &str = "RIPPLE_FILTER_ENGINE";

/// Where a registry takes its default engine from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineSelection {
    /// Read [`ENGINE_ENV_VAR`] at first use; unset or empty means [`Best`](Self::Best).
    #[default]
    FromEnvironment,
    /// Best available engine.
    Best,
    /// A specific family; fails if it is unavailable.
    Kind(EngineKind),
}

impl EngineSelection {
    /// Interprets an environment variable value.
    ///
    /// `None` or a blank string selects [`Best`](Self::Best); anything else must
    /// name a known family.
    pub fn from_env_value(value: Option<&str>) -> Result<Self> {
        match value.map(str::trim) {
            None | Some("") => Ok(EngineSelection::Best),
            Some(name) => Ok(EngineSelection::Kind(name.parse()?)),
        }
    }

    fn from_environment() -> Result<Self> {
        let value = std::env::var_os(ENGINE_ENV_VAR);
        let value = value.as_ref().map(|v| v.to_string_lossy());
        Self::from_env_value(value.as_deref())
    }
}

/// Builds an engine for a family.
pub type EngineFactory = fn(EngineKind) -> Arc<dyn FilterEngine>;

/// Holder of the active filter engine.
///
/// Lazy resolution runs under the write lock with a second check, so
/// concurrent first use adopts exactly one engine. Afterwards the slot is
/// read-mostly.
#[derive(Debug)]
pub struct EngineRegistry {
    selection: EngineSelection,
    factory: EngineFactory,
    active: RwLock<Option<Arc<dyn FilterEngine>>>,
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineRegistry {
    /// Registry that consults [`ENGINE_ENV_VAR`] at first use.
    pub fn new() -> Self {
        Self::with_selection(EngineSelection::FromEnvironment)
    }

    /// Registry with an explicit default selection.
    pub fn with_selection(selection: EngineSelection) -> Self {
        Self::with_factory(selection, EngineKind::create)
    }

    /// Registry that builds engine families with `factory` instead of
    /// [`EngineKind::create`].
    pub fn with_factory(selection: EngineSelection, factory: EngineFactory) -> Self {
        Self {
            selection,
            factory,
            active: RwLock::new(None),
        }
    }

    /// The process-wide registry.
    pub fn global() -> &'static EngineRegistry {
        static GLOBAL: OnceLock<EngineRegistry> = OnceLock::new();
        GLOBAL.get_or_init(EngineRegistry::new)
    }

    /// The selection used when no engine has been assigned.
    pub fn selection(&self) -> EngineSelection {
        self.selection
    }

    /// True once an engine occupies the slot.
    pub fn is_resolved(&self) -> bool {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The active engine, resolving the default on first use.
    pub fn active(&self) -> Result<Arc<dyn FilterEngine>> {
        if let Some(engine) = self
            .active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(Arc::clone(engine));
        }

        let mut slot = self.active.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(engine) = slot.as_ref() {
            return Ok(Arc::clone(engine));
        }
        let engine = self.resolve()?;
        #[cfg(feature = "tracing")]
        tracing::info!(engine = engine.name(), "filter engine resolved");
        *slot = Some(Arc::clone(&engine));
        Ok(engine)
    }

    /// Verifies `engine` and makes it active.
    ///
    /// On failure the previously active engine, if any, stays in place.
    pub fn set_engine(&self, engine: Arc<dyn FilterEngine>) -> Result<()> {
        if let Err(err) = engine.initialize_verify() {
            #[cfg(feature = "tracing")]
            tracing::warn!(engine = engine.name(), error = %err, "filter engine rejected");
            return Err(err);
        }
        self.store(engine);
        Ok(())
    }

    /// Selects an engine family by name, e.g. `"managed"` or `"direct-form"`.
    pub fn select(&self, name: &str) -> Result<()> {
        self.select_kind(name.parse()?)
    }

    /// Selects an engine family. Fails if the family is unavailable or does
    /// not verify.
    pub fn select_kind(&self, kind: EngineKind) -> Result<()> {
        self.set_engine(self.available(kind)?)
    }

    /// Adopts the reference engine.
    pub fn use_managed(&self) {
        // The reference engine always verifies.
        self.store(Arc::new(ManagedEngine::new()));
    }

    /// Adopts the best available engine.
    pub fn use_best(&self) {
        self.store(self.best_available());
    }

    /// Re-runs default resolution and adopts the result.
    pub fn use_default(&self) -> Result<()> {
        let engine = self.resolve()?;
        self.store(engine);
        Ok(())
    }

    /// Adopts `engine` if it is available and verifies; reports the outcome
    /// as a boolean instead of an error.
    pub fn try_use(&self, engine: Arc<dyn FilterEngine>) -> bool {
        if !engine.is_available() {
            #[cfg(feature = "tracing")]
            tracing::debug!(engine = engine.name(), "filter engine unavailable");
            return false;
        }
        self.set_engine(engine).is_ok()
    }

    /// Releases resources held by the active engine. Does nothing before
    /// first resolution.
    pub fn free_resources(&self) {
        let slot = self.active.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(engine) = slot.as_ref() {
            #[cfg(feature = "tracing")]
            tracing::debug!(engine = engine.name(), "freeing filter engine resources");
            engine.free_resources();
        }
    }

    /// Filters `input` with the active engine, advancing `filter`'s history.
    pub fn apply<T: Sample>(&self, filter: &mut Filter, input: &[T]) -> Result<Vec<T>> {
        let engine = self.active()?;
        filter.apply_with(engine.as_ref(), input)
    }

    fn store(&self, engine: Arc<dyn FilterEngine>) {
        #[cfg(feature = "tracing")]
        tracing::info!(engine = engine.name(), "filter engine adopted");
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = Some(engine);
    }

    fn resolve(&self) -> Result<Arc<dyn FilterEngine>> {
        let selection = match self.selection {
            EngineSelection::FromEnvironment => EngineSelection::from_environment()?,
            other => other,
        };
        match selection {
            EngineSelection::Kind(kind) => {
                let engine = self.available(kind)?;
                engine.initialize_verify()?;
                Ok(engine)
            }
            EngineSelection::Best | EngineSelection::FromEnvironment => {
                Ok(self.best_available())
            }
        }
    }

    fn available(&self, kind: EngineKind) -> Result<Arc<dyn FilterEngine>> {
        let engine = (self.factory)(kind);
        if engine.is_available() {
            Ok(engine)
        } else {
            Err(FilterError::engine_unsupported(
                kind.name(),
                "backend is not available in this environment",
            ))
        }
    }

    fn best_available(&self) -> Arc<dyn FilterEngine> {
        for kind in EngineKind::PREFERENCE {
            let engine = (self.factory)(kind);
            if engine.is_available() && engine.initialize_verify().is_ok() {
                return engine;
            }
            #[cfg(feature = "tracing")]
            tracing::debug!(engine = kind.name(), "skipping filter engine");
        }
        Arc::new(ManagedEngine::new())
    }
}

/// Selects an engine family by name on the process-wide registry.
pub fn select_engine(name: &str) -> Result<()> {
    EngineRegistry::global().select(name)
}
