//! Rule set loading and management for the ILR Qualifying Period Engine.
//!
//! This module provides the rule set consulted by the evaluator: salary
//! thresholds, route base years and the English adjustment. A canonical
//! rule set is built in; alternatives can be loaded from YAML.
//!
//! # Example
//!
//! ```no_run
//! use ilr_engine::config::RulesLoader;
//!
//! let loader = RulesLoader::load("./config/rules.yaml").unwrap();
//! println!("Loaded rule set: {}", loader.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::RulesLoader;
pub use types::{
    BenefitsRules, EnglishRules, FixedRouteYears, RuleSet, RuleSetMetadata, SalaryRules,
};
