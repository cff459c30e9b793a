//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    PeriodInput, accrued_vacation_days, aggregate_period, aguinaldo_from_history,
    as_of_or_today, months_between, validate_employee, validate_extras, validate_work_days,
};
use crate::config::PayrollRules;
use crate::error::EngineResult;
use crate::models::{
    AuditTrace, DisabilityOverride, Employee, ExtraEntry, ExtrasSummary, HolidaySet,
    PayrollCalculation, WorkDay,
};

use super::request::{AguinaldoRequest, CalculationRequest, VacationRequest};
use super::response::{ApiError, ApiErrorResponse, VacationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/aguinaldo", post(aguinaldo_handler))
        .route("/vacation", post(vacation_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Validates the request, aggregates the period and returns the result with
/// its audit trace.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let employee_id = request.employee.id.clone();
    let shift_type = request.employee.shift_type;
    let as_of = as_of_or_today(request.as_of);

    let start_time = Instant::now();
    match calculate_request(request, as_of, state.rules()) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                shift_type = %shift_type,
                days_count = result.days.len(),
                gross = %result.totals.gross,
                net = %result.totals.net,
                duration_us = duration.as_micros(),
                "Calculation completed successfully"
            );
            ok_json(result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                error = %err,
                "Calculation request rejected"
            );
            engine_error(err.into())
        }
    }
}

/// Handler for POST /aguinaldo endpoint.
///
/// Accrues the aguinaldo from the employee's rows of the submitted history.
async fn aguinaldo_handler(
    State(state): State<AppState>,
    payload: Result<Json<AguinaldoRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing aguinaldo request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let as_of = as_of_or_today(request.as_of);
    let records = request
        .history
        .iter()
        .filter(|record| record.employee_id == request.employee_id);
    let accrual = aguinaldo_from_history(records, as_of, state.rules());

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        records_counted = accrual.records_counted,
        aguinaldo = %accrual.aguinaldo_acumulado,
        "Aguinaldo accrued"
    );
    ok_json(accrual)
}

/// Handler for POST /vacation endpoint.
async fn vacation_handler(payload: Result<Json<VacationRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing vacation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_error(correlation_id, rejection)),
    };

    let as_of = as_of_or_today(request.as_of);
    let months_of_service = request
        .hire_date
        .map_or(0, |hire| months_between(hire, as_of));
    let vacation_days = accrued_vacation_days(request.hire_date, as_of);

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        months_of_service,
        vacation_days,
        "Vacation accrued"
    );
    ok_json(VacationResponse {
        employee_id: request.employee_id,
        months_of_service,
        vacation_days,
        as_of,
    })
}

/// Performs the period calculation for a validated request.
fn perform_calculation(
    employee: &Employee,
    days: &[WorkDay],
    disabilities: &[DisabilityOverride],
    holidays: &HolidaySet,
    extras: &[ExtraEntry],
    as_of: NaiveDate,
    rules: &PayrollRules,
) -> PayrollCalculation {
    let start_time = Instant::now();
    let summary = ExtrasSummary::from_entries(extras);

    let aggregation = aggregate_period(
        &PeriodInput {
            employee,
            days,
            disabilities,
            holidays,
            extras_total: summary.additions,
            deductions_total: summary.deductions,
        },
        rules,
    );

    PayrollCalculation {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee.id.clone(),
        days: aggregation.days,
        totals: aggregation.totals,
        vacation_days: accrued_vacation_days(employee.hire_date, as_of),
        audit_trace: AuditTrace {
            steps: aggregation.audit_steps,
            warnings: aggregation.warnings,
            duration_us: start_time.elapsed().as_micros() as u64,
        },
    }
}

/// Maps a JSON extraction failure to an API error, logging it.
fn rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn ok_json<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn bad_request(error: ApiError) -> Response {
    engine_error(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    })
}

fn engine_error(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Validates and calculates a request without going through HTTP.
///
/// Uses `as_of` for vacation accrual.
pub fn calculate_request(
    request: CalculationRequest,
    as_of: NaiveDate,
    rules: &PayrollRules,
) -> EngineResult<PayrollCalculation> {
    let holidays = request.holiday_set();
    let employee: Employee = request.employee.into();
    let days: Vec<WorkDay> = request.days.into_iter().map(Into::into).collect();

    validate_employee(&employee)?;
    validate_work_days(&days)?;
    validate_extras(&request.extras)?;

    Ok(perform_calculation(
        &employee,
        &days,
        &request.disabilities,
        &holidays,
        &request.extras,
        as_of,
        rules,
    ))
}
