//! Salary route calculation functionality.
//!
//! This module determines the base years for the high earner route from the
//! salary and the three-year confirmation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SalaryRules;
use crate::models::{AuditStep, Route};

/// The salary band a high earner falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryBand {
    /// Below the lower threshold.
    Baseline,
    /// At or above the lower threshold, or above the upper one without three years held.
    Lower,
    /// At or above the upper threshold, held for the last three years.
    Upper,
}

impl SalaryBand {
    /// Returns the snake_case identifier used in audit output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SalaryBand::Baseline => "baseline",
            SalaryBand::Lower => "lower",
            SalaryBand::Upper => "upper",
        }
    }
}

/// The result of the salary route calculation.
#[derive(Debug, Clone)]
pub struct SalaryRouteResult {
    /// The band the salary was classified into.
    pub band: SalaryBand,
    /// The base years for that band.
    pub base_years: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Classifies a salary into a band.
///
/// The three-year confirmation only matters for the upper band: a salary at
/// or above the upper threshold that has not been held for three years falls
/// back to the lower band. Thresholds are inclusive.
///
/// # Examples
///
/// ```
/// use ilr_engine::calculation::{SalaryBand, classify_salary};
/// use ilr_engine::config::RuleSet;
/// use rust_decimal::Decimal;
///
/// let rules = RuleSet::canonical();
/// let band = classify_salary(Decimal::new(125_140, 0), true, &rules.salary);
/// assert_eq!(band, SalaryBand::Upper);
///
/// let band = classify_salary(Decimal::new(125_140, 0), false, &rules.salary);
/// assert_eq!(band, SalaryBand::Lower);
/// ```
pub fn classify_salary(salary: Decimal, held_three_years: bool, rules: &SalaryRules) -> SalaryBand {
    if salary >= rules.upper_threshold && held_three_years {
        SalaryBand::Upper
    } else if salary >= rules.lower_threshold {
        SalaryBand::Lower
    } else {
        SalaryBand::Baseline
    }
}

/// Calculates the base years for the high earner route.
///
/// Unlike the benefits and fixed routes this returns its own result type so
/// callers can see which [`SalaryBand`] applied; it converts into a
/// `BaseYearsResult` for the evaluator.
///
/// # Arguments
///
/// * `salary` - Annual salary before tax; the caller guarantees it is not negative
/// * `held_three_years` - Whether the salary level was held for the last 3 years
/// * `rules` - The salary route rules
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_salary_route(
    salary: Decimal,
    held_three_years: bool,
    rules: &SalaryRules,
    step_number: u32,
) -> SalaryRouteResult {
    let band = classify_salary(salary, held_three_years, rules);

    let base_years = match band {
        SalaryBand::Baseline => rules.baseline_years,
        SalaryBand::Lower => rules.lower_years,
        SalaryBand::Upper => rules.upper_years,
    };

    let reasoning = match band {
        SalaryBand::Baseline => format!(
            "Salary £{} is below £{}: baseline {} years",
            salary.normalize(),
            rules.lower_threshold,
            base_years
        ),
        SalaryBand::Lower if salary >= rules.upper_threshold => format!(
            "Salary £{} is at least £{} but not held for 3 years: {} years",
            salary.normalize(),
            rules.upper_threshold,
            base_years
        ),
        SalaryBand::Lower => format!(
            "Salary £{} is at least £{}: {} years",
            salary.normalize(),
            rules.lower_threshold,
            base_years
        ),
        SalaryBand::Upper => format!(
            "Salary £{} is at least £{} and held for 3 years: {} years",
            salary.normalize(),
            rules.upper_threshold,
            base_years
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "salary_route".to_string(),
        rule_name: "Salary Route Base".to_string(),
        source_ref: Route::HighEarner.source_ref().to_string(),
        input: serde_json::json!({
            "salary": salary.normalize().to_string(),
            "held_three_years": held_three_years,
            "lower_threshold": rules.lower_threshold.to_string(),
            "upper_threshold": rules.upper_threshold.to_string()
        }),
        output: serde_json::json!({
            "band": band.as_str(),
            "base_years": base_years
        }),
        reasoning,
    };

    SalaryRouteResult {
        band,
        base_years,
        audit_step,
    }
}
