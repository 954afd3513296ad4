//! Application state for the ILR Qualifying Period Engine API.

use std::sync::Arc;

use crate::config::RulesLoader;

/// Shared application state.
///
/// Holds the rule set every handler evaluates against.
#[derive(Clone)]
pub struct AppState {
    rules: Arc<RulesLoader>,
}

impl AppState {
    /// Creates a new application state with the given rule set.
    pub fn new(rules: RulesLoader) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// Returns a reference to the rule set loader.
    pub fn rules(&self) -> &RulesLoader {
        &self.rules
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RulesLoader::canonical())
    }
}
