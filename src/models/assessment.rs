//! Assessment input model.
//!
//! An [`AssessmentInput`] is built once per evaluation from the answers a
//! person gave. The route-specific sub-answers live inside [`RouteAnswers`],
//! so a salary can only be supplied on the salary route and a benefits bucket
//! only on the benefits route.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::route::{BenefitsDuration, FixedRoute, Route};

/// The route selection together with the sub-answers it makes relevant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteAnswers {
    /// Salary-based route.
    HighEarner {
        /// Annual salary in pounds, before tax. Never negative.
        salary: Decimal,
        /// Whether the salary level has been held for the last 3 continuous years.
        held_three_years: bool,
    },
    /// Benefits-reliant route.
    Benefits {
        /// Total time spent relying on public funds.
        duration: BenefitsDuration,
    },
    /// A route with an unconditional base.
    Fixed(FixedRoute),
}

impl RouteAnswers {
    /// Builds salary-route answers, rejecting a negative salary.
    ///
    /// # Examples
    ///
    /// ```
    /// use ilr_engine::models::RouteAnswers;
    /// use rust_decimal::Decimal;
    ///
    /// assert!(RouteAnswers::high_earner(Decimal::new(50_270, 0), false).is_ok());
    /// assert!(RouteAnswers::high_earner(Decimal::new(-1, 0), false).is_err());
    /// ```
    pub fn high_earner(salary: Decimal, held_three_years: bool) -> EngineResult<Self> {
        if salary < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "salary".to_string(),
                message: format!("must not be negative (got {})", salary),
            });
        }

        Ok(RouteAnswers::HighEarner {
            salary,
            held_three_years,
        })
    }

    /// Returns the route these answers belong to.
    pub fn route(&self) -> Route {
        match self {
            RouteAnswers::HighEarner { .. } => Route::HighEarner,
            RouteAnswers::Benefits { .. } => Route::Benefits,
            RouteAnswers::Fixed(fixed) => (*fixed).into(),
        }
    }
}

/// Everything the evaluator needs for one assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentInput {
    /// The route answers, or `None` while no route has been chosen.
    pub answers: Option<RouteAnswers>,
    /// Whether the person's English level is C1 or higher.
    pub has_c1_english: bool,
}

impl AssessmentInput {
    /// Creates an input for an answered route.
    pub fn new(answers: RouteAnswers, has_c1_english: bool) -> Self {
        Self {
            answers: Some(answers),
            has_c1_english,
        }
    }

    /// Creates an input where no route has been chosen yet.
    pub fn unanswered(has_c1_english: bool) -> Self {
        Self {
            answers: None,
            has_c1_english,
        }
    }

    /// Returns the selected route, if any.
    pub fn route(&self) -> Option<Route> {
        self.answers.as_ref().map(RouteAnswers::route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_high_earner_accepts_zero_salary() {
        let answers = RouteAnswers::high_earner(dec("0"), false).unwrap();
        assert_eq!(answers.route(), Route::HighEarner);
    }

    #[test]
    fn test_high_earner_accepts_negative_zero() {
        assert!(RouteAnswers::high_earner(dec("-0.00"), false).is_ok());
    }

    #[test]
    fn test_high_earner_rejects_negative_salary() {
        let result = RouteAnswers::high_earner(dec("-0.01"), true);
        match result {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "salary");
                assert!(message.contains("-0.01"));
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_fixed_answers_map_to_route() {
        let answers = RouteAnswers::Fixed(FixedRoute::LowerPaid);
        assert_eq!(answers.route(), Route::LowerPaid);
    }

    #[test]
    fn test_benefits_answers_map_to_route() {
        let answers = RouteAnswers::Benefits {
            duration: BenefitsDuration::TwelveMonthsOrMore,
        };
        assert_eq!(answers.route(), Route::Benefits);
    }

    #[test]
    fn test_unanswered_input_has_no_route() {
        let input = AssessmentInput::unanswered(true);
        assert_eq!(input.route(), None);
        assert!(input.has_c1_english);
    }

    #[test]
    fn test_input_serialization() {
        let input = AssessmentInput::new(
            RouteAnswers::HighEarner {
                salary: dec("125140"),
                held_three_years: true,
            },
            false,
        );

        let json = serde_json::to_value(input).unwrap();
        assert_eq!(json["answers"]["high_earner"]["salary"], "125140");
        assert_eq!(json["answers"]["high_earner"]["held_three_years"], true);
        assert_eq!(json["has_c1_english"], false);
    }

    #[test]
    fn test_fixed_input_deserialization() {
        let json = r#"{ "answers": { "fixed": "public_service" }, "has_c1_english": true }"#;
        let input: AssessmentInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.route(), Some(Route::PublicService));
    }
}
