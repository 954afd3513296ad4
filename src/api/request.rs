//! Request types for the ILR Qualifying Period Engine API.
//!
//! This module defines the JSON request structure for the `/assess` endpoint
//! and its conversion into an [`AssessmentInput`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AssessmentInput, BenefitsDuration, Route, RouteAnswers};

/// Request body for the `/assess` endpoint.
///
/// Mirrors the answers collected by the form: every field except the C1 flag
/// may be absent. Sub-answers that do not belong to the selected route are
/// ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentRequest {
    /// The selected route, or absent when none was chosen.
    #[serde(default)]
    pub route: Option<Route>,
    /// Annual salary in pounds, used on the high earner route.
    #[serde(default)]
    pub salary: Option<Decimal>,
    /// Whether the salary has been held for the last 3 years.
    #[serde(default)]
    pub held_three_years: Option<bool>,
    /// Time spent relying on benefits, used on the benefits route.
    #[serde(default)]
    pub benefits_duration: Option<BenefitsDuration>,
    /// Whether the person holds C1 English or higher.
    #[serde(default)]
    pub has_c1_english: bool,
}

impl TryFrom<AssessmentRequest> for AssessmentInput {
    type Error = EngineError;

    /// Converts the request, enforcing the input preconditions.
    ///
    /// A negative salary is rejected on any route. An absent salary defaults
    /// to zero and an absent benefits duration to under 12 months, matching
    /// the form's initial values.
    fn try_from(req: AssessmentRequest) -> EngineResult<Self> {
        if let Some(salary) = req.salary.filter(|salary| *salary < Decimal::ZERO) {
            return Err(EngineError::InvalidInput {
                field: "salary".to_string(),
                message: format!("must not be negative (got {})", salary),
            });
        }

        let answers = match req.route {
            None => None,
            Some(Route::HighEarner) => Some(RouteAnswers::high_earner(
                req.salary.unwrap_or(Decimal::ZERO),
                req.held_three_years.unwrap_or(false),
            )?),
            Some(Route::Benefits) => Some(RouteAnswers::Benefits {
                duration: req.benefits_duration.unwrap_or_default(),
            }),
            Some(route) => route.as_fixed().map(RouteAnswers::Fixed),
        };

        Ok(AssessmentInput {
            answers,
            has_c1_english: req.has_c1_english,
        })
    }
}
