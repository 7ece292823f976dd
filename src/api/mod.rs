//! HTTP API module for the take-home pay engine.
//!
//! This module provides the REST endpoint that turns engagement figures into
//! a monthly pay breakdown.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{MAX_AMOUNT, PayslipRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
