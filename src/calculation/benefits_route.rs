//! Benefits route calculation functionality.
//!
//! The benefits route adds a public funds penalty to a 10-year base,
//! depending on how long benefits were relied on.

use crate::config::BenefitsRules;
use crate::models::{AuditStep, BenefitsDuration, Route};

use super::base_years::BaseYearsResult;

/// Calculates the base years for the benefits route.
///
/// The total saturates at `u32::MAX`; a validated rule set never reaches it.
///
/// # Examples
///
/// ```
/// use ilr_engine::calculation::calculate_benefits_route;
/// use ilr_engine::config::RuleSet;
/// use ilr_engine::models::BenefitsDuration;
///
/// let rules = RuleSet::canonical();
/// let result = calculate_benefits_route(BenefitsDuration::UnderTwelveMonths, &rules.benefits, 1);
/// assert_eq!(result.base_years, 15);
/// ```
pub fn calculate_benefits_route(
    duration: BenefitsDuration,
    rules: &BenefitsRules,
    step_number: u32,
) -> BaseYearsResult {
    let extra_years = rules.extra_years(duration);
    let base_years = rules.base_years.saturating_add(extra_years);

    let duration_text = match duration {
        BenefitsDuration::UnderTwelveMonths => "under 12 months",
        BenefitsDuration::TwelveMonthsOrMore => "12 months or more",
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "benefits_route".to_string(),
        rule_name: "Benefits Route Base".to_string(),
        source_ref: Route::Benefits.source_ref().to_string(),
        input: serde_json::json!({
            "benefits_duration": duration.as_str()
        }),
        output: serde_json::json!({
            "extra_years": extra_years,
            "base_years": base_years
        }),
        reasoning: format!(
            "{} years + {} years for {} on benefits = {} years",
            rules.base_years, extra_years, duration_text, base_years
        ),
    };

    BaseYearsResult {
        route: Route::Benefits,
        base_years,
        audit_step,
    }
}
