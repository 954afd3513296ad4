//! Qualifying period evaluation.
//!
//! This module ties the base years determination and the C1 English
//! adjustment together into a single pure evaluation.

use std::sync::LazyLock;

use tracing::debug;

use crate::config::RuleSet;
use crate::models::{AssessmentInput, AssessmentResult, QualifyingPeriod};

use super::base_years::determine_base_years;
use super::english_adjustment::apply_c1_adjustment;

static CANONICAL_RULES: LazyLock<RuleSet> = LazyLock::new(RuleSet::canonical);

/// Evaluates an assessment against the canonical rule set.
///
/// # Examples
///
/// ```
/// use ilr_engine::calculation::evaluate;
/// use ilr_engine::models::{AssessmentInput, FixedRoute, RouteAnswers};
///
/// let input = AssessmentInput::new(RouteAnswers::Fixed(FixedRoute::PublicService), true);
/// assert_eq!(evaluate(&input).years(), Some(4));
///
/// let input = AssessmentInput::unanswered(true);
/// assert_eq!(evaluate(&input).years(), None);
/// ```
pub fn evaluate(input: &AssessmentInput) -> AssessmentResult {
    evaluate_with_rules(input, &CANONICAL_RULES)
}

/// Evaluates an assessment against the given rule set.
///
/// The evaluation is total and has no side effects beyond a debug event:
/// identical inputs always produce identical results. An input with no
/// route selected yields [`AssessmentResult::Incomplete`].
pub fn evaluate_with_rules(input: &AssessmentInput, rules: &RuleSet) -> AssessmentResult {
    let Some(answers) = input.answers.as_ref() else {
        debug!(has_c1_english = input.has_c1_english, "Assessment incomplete: no route selected");
        return AssessmentResult::Incomplete;
    };

    let mut step_number: u32 = 1;

    let base = determine_base_years(answers, rules, step_number);
    step_number += 1;

    let adjustment = apply_c1_adjustment(
        base.base_years,
        input.has_c1_english,
        &rules.english,
        step_number,
    );

    debug!(
        route = %base.route,
        base_years = base.base_years,
        years = adjustment.years,
        c1_reduction_applied = adjustment.reduction_applied,
        "Assessment evaluated"
    );

    AssessmentResult::Complete(QualifyingPeriod {
        route: base.route,
        base_years: base.base_years,
        years: adjustment.years,
        c1_reduction_applied: adjustment.reduction_applied,
        audit_steps: vec![base.audit_step, adjustment.audit_step],
    })
}
