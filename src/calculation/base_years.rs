//! Base years determination.
//!
//! This module dispatches on the route answers to the calculation for each
//! kind of route and returns the base years before any adjustment.

use crate::config::RuleSet;
use crate::models::{AuditStep, Route, RouteAnswers};

use super::benefits_route::calculate_benefits_route;
use super::fixed_route::calculate_fixed_route;
use super::salary_route::{SalaryRouteResult, calculate_salary_route};

/// The base years for a route, including the audit step.
#[derive(Debug, Clone)]
pub struct BaseYearsResult {
    /// The route the base was determined for.
    pub route: Route,
    /// The base years before adjustment.
    pub base_years: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

impl From<SalaryRouteResult> for BaseYearsResult {
    fn from(result: SalaryRouteResult) -> Self {
        Self {
            route: Route::HighEarner,
            base_years: result.base_years,
            audit_step: result.audit_step,
        }
    }
}

/// Determines the base years for the given route answers.
///
/// # Examples
///
/// ```
/// use ilr_engine::calculation::determine_base_years;
/// use ilr_engine::config::RuleSet;
/// use ilr_engine::models::{FixedRoute, RouteAnswers};
///
/// let rules = RuleSet::canonical();
/// let result = determine_base_years(&RouteAnswers::Fixed(FixedRoute::LowerPaid), &rules, 1);
/// assert_eq!(result.base_years, 15);
/// ```
pub fn determine_base_years(
    answers: &RouteAnswers,
    rules: &RuleSet,
    step_number: u32,
) -> BaseYearsResult {
    match *answers {
        RouteAnswers::HighEarner {
            salary,
            held_three_years,
        } => calculate_salary_route(salary, held_three_years, &rules.salary, step_number).into(),
        RouteAnswers::Benefits { duration } => {
            calculate_benefits_route(duration, &rules.benefits, step_number)
        }
        RouteAnswers::Fixed(route) => {
            calculate_fixed_route(route, &rules.fixed_routes, step_number)
        }
    }
}
