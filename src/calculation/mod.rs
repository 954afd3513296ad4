//! Calculation logic for the ILR Qualifying Period Engine.
//!
//! This module contains the qualifying-period rule evaluator: the base years
//! for the salary, benefits and fixed routes, the C1 English adjustment, and
//! the [`evaluate`] entry point that combines them.

mod base_years;
mod benefits_route;
mod english_adjustment;
mod evaluator;
mod fixed_route;
mod salary_route;

pub use base_years::{BaseYearsResult, determine_base_years};
pub use benefits_route::calculate_benefits_route;
pub use english_adjustment::{C1AdjustmentResult, apply_c1_adjustment};
pub use evaluator::{evaluate, evaluate_with_rules};
pub use fixed_route::calculate_fixed_route;
pub use salary_route::{SalaryBand, SalaryRouteResult, calculate_salary_route, classify_salary};
