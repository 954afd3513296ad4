//! C1 English adjustment.
//!
//! Holding C1 English or higher reduces the qualifying period by a flat
//! number of years, never below the configured minimum.

use crate::config::EnglishRules;
use crate::models::AuditStep;

/// The result of the C1 English adjustment, including the audit step.
#[derive(Debug, Clone)]
pub struct C1AdjustmentResult {
    /// Years after adjustment.
    pub years: u32,
    /// Whether the deduction changed the year count.
    pub reduction_applied: bool,
    /// The audit step recording this adjustment.
    pub audit_step: AuditStep,
}

/// Applies the C1 English deduction to a base year count.
///
/// When `has_c1_english` is set the result is
/// `max(minimum_years, base_years - c1_reduction_years)`; otherwise the base
/// is returned unchanged. This is applied exactly once per assessment.
///
/// # Examples
///
/// ```
/// use ilr_engine::calculation::apply_c1_adjustment;
/// use ilr_engine::config::RuleSet;
///
/// let rules = RuleSet::canonical();
/// assert_eq!(apply_c1_adjustment(5, true, &rules.english, 2).years, 4);
/// assert_eq!(apply_c1_adjustment(1, true, &rules.english, 2).years, 1);
/// assert_eq!(apply_c1_adjustment(5, false, &rules.english, 2).years, 5);
/// ```
pub fn apply_c1_adjustment(
    base_years: u32,
    has_c1_english: bool,
    rules: &EnglishRules,
    step_number: u32,
) -> C1AdjustmentResult {
    let years = if has_c1_english {
        base_years
            .saturating_sub(rules.c1_reduction_years)
            .max(rules.minimum_years)
    } else {
        base_years
    };
    let reduction_applied = years != base_years;

    let reasoning = if !has_c1_english {
        "No C1 English: no reduction applied".to_string()
    } else if reduction_applied {
        format!(
            "C1 English: {} years - {} = {} years",
            base_years,
            base_years.saturating_sub(years),
            years
        )
    } else {
        format!(
            "C1 English: {} years already at the {}-year minimum",
            base_years, rules.minimum_years
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "c1_english_adjustment".to_string(),
        rule_name: "C1 English Adjustment".to_string(),
        source_ref: "CP 1448 Table 2".to_string(),
        input: serde_json::json!({
            "base_years": base_years,
            "has_c1_english": has_c1_english
        }),
        output: serde_json::json!({
            "years": years,
            "reduction_applied": reduction_applied
        }),
        reasoning,
    };

    C1AdjustmentResult {
        years,
        reduction_applied,
        audit_step,
    }
}
