//! Fixed route calculation functionality.

use crate::config::FixedRouteYears;
use crate::models::{AuditStep, FixedRoute, Route};

use super::base_years::BaseYearsResult;

/// Looks up the base years of a route that has no sub-answers.
pub fn calculate_fixed_route(
    fixed: FixedRoute,
    rules: &FixedRouteYears,
    step_number: u32,
) -> BaseYearsResult {
    let route = Route::from(fixed);
    let base_years = rules.years_for(fixed);

    let audit_step = AuditStep {
        step_number,
        rule_id: "fixed_route".to_string(),
        rule_name: "Fixed Route Base".to_string(),
        source_ref: route.source_ref().to_string(),
        input: serde_json::json!({
            "route": route.as_str()
        }),
        output: serde_json::json!({
            "base_years": base_years
        }),
        reasoning: format!("{}: fixed base of {} years", route.label(), base_years),
    };

    BaseYearsResult {
        route,
        base_years,
        audit_step,
    }
}
