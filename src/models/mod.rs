//! Core data models for the ILR Qualifying Period Engine.
//!
//! This module contains the route categories, the assessment input value and
//! the assessment result returned by the evaluator.

mod assessment;
mod assessment_result;
mod route;

pub use assessment::{AssessmentInput, RouteAnswers};
pub use assessment_result::{AssessmentResult, AuditStep, QualifyingPeriod};
pub use route::{BenefitsDuration, FixedRoute, Route};
