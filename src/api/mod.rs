//! HTTP API module for the ILR Qualifying Period Engine.
//!
//! This module provides the REST endpoints that stand in for the interactive
//! form: submitting answers for an estimate and listing the routes.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AssessmentRequest;
pub use response::{
    ApiError, ApiErrorResponse, AssessmentResponse, PRACTICE_DISCLAIMER, RouteCatalog, RouteInfo,
};
pub use state::AppState;
