//! Response types for the ILR Qualifying Period Engine API.
//!
//! This module defines the success bodies, the error response structures,
//! and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::RuleSet;
use crate::error::EngineError;
use crate::models::{QualifyingPeriod, Route};

/// Notice attached to every estimate.
pub const PRACTICE_DISCLAIMER: &str = "This tool is for practice and code learning only. \
    It is based on the November 2025 Command Paper (CP 1448), which contains proposals only; \
    real ILR rules may change after consultation. Always check GOV.UK or consult an \
    immigration adviser.";

/// Response body for a completed assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResponse {
    /// Unique identifier for this assessment.
    pub assessment_id: Uuid,
    /// When the assessment was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the assessment.
    pub engine_version: String,
    /// The version of the rule set used.
    pub rule_set_version: String,
    /// The estimated qualifying period.
    pub result: QualifyingPeriod,
    /// Practice-only notice.
    pub disclaimer: String,
    /// The evaluation duration in microseconds.
    pub duration_us: u64,
}

/// One entry of the route catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteInfo {
    /// The route identifier.
    pub route: Route,
    /// The option text.
    pub label: String,
    /// Informational note about the route's rule.
    pub guidance: String,
    /// Reference to the published table.
    pub source_ref: String,
    /// Base years when they do not depend on sub-answers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_base_years: Option<u32>,
}

/// The list of selectable routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteCatalog {
    /// The version of the rule set the base years come from.
    pub rule_set_version: String,
    /// Routes in form order.
    pub routes: Vec<RouteInfo>,
}

impl RouteCatalog {
    /// Builds the catalog for a rule set.
    pub fn from_rules(rules: &RuleSet) -> Self {
        let routes = Route::ALL
            .iter()
            .map(|route| RouteInfo {
                route: *route,
                label: route.label().to_string(),
                guidance: route.guidance().to_string(),
                source_ref: route.source_ref().to_string(),
                fixed_base_years: rules.fixed_years(*route),
            })
            .collect();

        Self {
            rule_set_version: rules.metadata.version.clone(),
            routes,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the error returned when no route was selected.
    pub fn incomplete_input() -> Self {
        Self::with_details(
            "INCOMPLETE_INPUT",
            "Please complete the inputs above.",
            "Select the route that best describes your situation",
        )
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates the response for an assessment without a route.
    pub fn incomplete() -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            error: ApiError::incomplete_input(),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::RulesNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "RULES_ERROR",
                    "Rule set error",
                    format!("Rule set file not found: {}", path),
                ),
            },
            EngineError::RulesParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "RULES_ERROR",
                    "Rule set parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidRuleSet { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("RULES_ERROR", "Invalid rule set", message),
            },
            EngineError::InvalidInput { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "VALIDATION_ERROR",
                    format!("Invalid input field '{}': {}", field, message),
                    "The request contains an invalid answer",
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_error_response_into_response_keeps_status() {
        let response = ApiErrorResponse::incomplete().into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_incomplete_response_is_unprocessable() {
        let response = ApiErrorResponse::incomplete();
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.error.code, "INCOMPLETE_INPUT");
        assert_eq!(response.error.message, "Please complete the inputs above.");
    }

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let engine_error = EngineError::InvalidInput {
            field: "salary".to_string(),
            message: "must not be negative".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "VALIDATION_ERROR");
        assert!(api_error.error.message.contains("salary"));
    }

    #[test]
    fn test_rules_errors_map_to_internal_server_error() {
        let api_error: ApiErrorResponse = EngineError::InvalidRuleSet {
            message: "bad".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "RULES_ERROR");
    }

    #[test]
    fn test_route_catalog_lists_all_routes_in_order() {
        let catalog = RouteCatalog::from_rules(&RuleSet::canonical());

        assert_eq!(catalog.rule_set_version, "2025-11");
        assert_eq!(catalog.routes.len(), 8);
        assert_eq!(catalog.routes[0].route, Route::HighEarner);
        assert_eq!(catalog.routes[7].route, Route::IllegalEntry);
    }

    #[test]
    fn test_route_catalog_fixed_years() {
        let catalog = RouteCatalog::from_rules(&RuleSet::canonical());

        assert_eq!(catalog.routes[0].fixed_base_years, None);
        assert_eq!(catalog.routes[1].fixed_base_years, Some(3));
        assert_eq!(catalog.routes[6].fixed_base_years, None);
        assert_eq!(catalog.routes[7].fixed_base_years, Some(30));

        let json = serde_json::to_value(&catalog.routes[0]).unwrap();
        assert!(json.get("fixed_base_years").is_none());
    }
}
