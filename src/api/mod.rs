//! HTTP API module for the payroll engine.
//!
//! This module provides the REST endpoints for period calculation,
//! aguinaldo accrual and vacation accrual.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{calculate_request, create_router};
pub use request::{
    AguinaldoRequest, CalculationRequest, EmployeeRequest, VacationRequest, WorkDayRequest,
};
pub use response::{ApiError, ApiErrorResponse, VacationResponse};
pub use state::AppState;
