//! Rule set loading functionality.
//!
//! This module provides the [`RulesLoader`] type for loading a rule set
//! from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{RuleSet, RuleSetMetadata};

/// Loads and provides access to a validated rule set.
///
/// # File Format
///
/// ```text
/// metadata:        # name, version, source_url
/// salary:          # thresholds and band years
/// benefits:        # base years and extra years per bucket
/// fixed_routes:    # base years per unconditional route
/// english:         # C1 reduction and minimum years
/// ```
///
/// # Example
///
/// ```no_run
/// use ilr_engine::config::RulesLoader;
///
/// let loader = RulesLoader::load("./config/rules.yaml").unwrap();
/// println!("Rule set version: {}", loader.metadata().version);
/// ```
#[derive(Debug, Clone)]
pub struct RulesLoader {
    rules: RuleSet,
}

impl RulesLoader {
    /// Loads and validates a rule set from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `RulesLoader` instance on success, or an error if:
    /// - The file is missing (`RulesNotFound`)
    /// - The file contains invalid YAML or is missing a field (`RulesParseError`)
    /// - The values are inconsistent (`InvalidRuleSet`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let rules = Self::load_yaml::<RuleSet>(path)?;
        rules.validate()?;

        info!(
            path = %path.display(),
            version = %rules.metadata.version,
            "Loaded rule set"
        );

        Ok(Self { rules })
    }

    /// Wraps the built-in canonical rule set.
    pub fn canonical() -> Self {
        Self {
            rules: RuleSet::canonical(),
        }
    }

    /// Wraps an already-built rule set after validating it.
    pub fn from_rules(rules: RuleSet) -> EngineResult<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::RulesNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::RulesParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the rule set metadata.
    pub fn metadata(&self) -> &RuleSetMetadata {
        &self.rules.metadata
    }
}

impl Default for RulesLoader {
    fn default() -> Self {
        Self::canonical()
    }
}
