//! Assessment result models.
//!
//! This module contains the [`AssessmentResult`] type returned by the
//! evaluator and the [`AuditStep`] records that explain how the year count
//! was reached.

use serde::{Deserialize, Serialize};

use super::route::Route;

/// A single step in the audit trail recording a rule decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the published table behind this rule.
    pub source_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The estimated qualifying period for a completed assessment.
///
/// # Example
///
/// ```
/// use ilr_engine::models::{QualifyingPeriod, Route};
///
/// let period = QualifyingPeriod {
///     route: Route::PublicService,
///     base_years: 5,
///     years: 4,
///     c1_reduction_applied: true,
///     audit_steps: vec![],
/// };
/// assert_eq!(period.reduction(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifyingPeriod {
    /// The route the base years were determined from.
    pub route: Route,
    /// Years determined by the route alone, before adjustment.
    pub base_years: u32,
    /// Years after the C1 English adjustment. Always at least 1.
    pub years: u32,
    /// Whether the C1 English deduction changed the result.
    pub c1_reduction_applied: bool,
    /// Every rule decision taken, in order.
    pub audit_steps: Vec<AuditStep>,
}

impl QualifyingPeriod {
    /// Returns the number of years removed by adjustment.
    pub fn reduction(&self) -> u32 {
        self.base_years.saturating_sub(self.years)
    }
}

/// The outcome of evaluating an [`AssessmentInput`](super::AssessmentInput).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssessmentResult {
    /// A year count was computed.
    Complete(QualifyingPeriod),
    /// No route was selected, so no base value exists.
    Incomplete,
}

impl AssessmentResult {
    /// Returns the adjusted year count, or `None` when incomplete.
    pub fn years(&self) -> Option<u32> {
        match self {
            AssessmentResult::Complete(period) => Some(period.years),
            AssessmentResult::Incomplete => None,
        }
    }

    /// Returns true if a year count was computed.
    pub fn is_complete(&self) -> bool {
        matches!(self, AssessmentResult::Complete(_))
    }

    /// Returns the qualifying period, if complete.
    pub fn period(&self) -> Option<&QualifyingPeriod> {
        match self {
            AssessmentResult::Complete(period) => Some(period),
            AssessmentResult::Incomplete => None,
        }
    }
}
