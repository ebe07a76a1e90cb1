//! Filter bank file format and operations.

use std::collections::HashSet;
use std::path::Path;

use ripple_core::{EngineKind, EngineRegistry, EngineSelection, Filter};
use serde::{Deserialize, Serialize};

use crate::definition::FilterDefinition;
use crate::error::ConfigError;

/// A named collection of filter definitions plus an optional engine choice.
///
/// # TOML Format
///
/// ```toml
/// name = "EEG front end"
/// engine = "direct-form"
///
/// [[filters]]
/// name = "smooth"
/// numerator = [0.569, 1.1381, 0.569]
/// denominator = [1.0, 0.9428, 0.3333]
/// low_pass = true
///
/// [[filters]]
/// name = "edge"
/// numerator = [-1.0, 2.0, -1.0]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterBank {
    /// Name of the bank.
    pub name: String,

    /// Engine family name; best available when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// Filter definitions, in file order.
    #[serde(default)]
    pub filters: Vec<FilterDefinition>,
}

impl FilterBank {
    /// Create an empty bank.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            engine: None,
            filters: Vec::new(),
        }
    }

    /// Set the engine family name.
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    /// Add a filter definition.
    pub fn with_filter(mut self, filter: FilterDefinition) -> Self {
        self.filters.push(filter);
        self
    }

    /// Load a bank from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a bank from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the bank to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the bank to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// True when the bank has no definitions.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Look up a definition by name.
    pub fn get(&self, name: &str) -> Option<&FilterDefinition> {
        self.filters.iter().find(|f| f.name == name)
    }

    /// Definition names in file order.
    pub fn names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name.as_str()).collect()
    }

    /// Parsed engine family, if one is configured.
    pub fn engine_kind(&self) -> Result<Option<EngineKind>, ConfigError> {
        match self.engine.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(name) => Ok(Some(name.parse()?)),
        }
    }

    /// Checks names are unique, every definition builds, and the engine
    /// name is known.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for def in &self.filters {
            if !seen.insert(def.name.as_str()) {
                return Err(ConfigError::DuplicateFilter(def.name.clone()));
            }
            def.build()?;
        }
        self.engine_kind()?;
        Ok(())
    }

    /// Build the named filter with zeroed history.
    pub fn build(&self, name: &str) -> Result<Filter, ConfigError> {
        self.get(name)
            .ok_or_else(|| ConfigError::FilterNotFound(name.to_string()))?
            .build()
    }

    /// Build every filter, in file order.
    pub fn build_all(&self) -> Result<Vec<(String, Filter)>, ConfigError> {
        self.filters
            .iter()
            .map(|def| def.build().map(|filter| (def.name.clone(), filter)))
            .collect()
    }

    /// A registry honoring the configured engine, or best available when
    /// none is set. The engine is resolved and verified on first use.
    pub fn registry(&self) -> Result<EngineRegistry, ConfigError> {
        let selection = match self.engine_kind()? {
            Some(kind) => EngineSelection::Kind(kind),
            None => EngineSelection::Best,
        };
        Ok(EngineRegistry::with_selection(selection))
    }
}

impl Default for FilterBank {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
