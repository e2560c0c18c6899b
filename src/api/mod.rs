//! HTTP API module for the timecard engine.
//!
//! This module provides the REST API endpoints for classifying a day of
//! clock entries and for reading the configured catalogs.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{build_result, create_router};
pub use request::CalculationRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
